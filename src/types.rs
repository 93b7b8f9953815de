//! This module defines types used by various traits.
//! These types are meant to be agnostic of the trait implementation.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

use crate::radio::ConfigError;

/// Power Amplifier level. The units dBm (decibel-milliwatts or dB<sub>mW</sub>)
/// represents a logarithmic signal loss.
///
/// Command layers usually carry this as an index in range [0, 3];
/// use [`PaLevel::try_from()`] to validate such an index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaLevel {
    /// -18 dBm
    Min,
    /// -12 dBm
    Low,
    /// -6 dBm
    High,
    /// 0 dBm
    Max,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for PaLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PaLevel::Min => defmt::write!(fmt, "Min"),
            PaLevel::Low => defmt::write!(fmt, "Low"),
            PaLevel::High => defmt::write!(fmt, "High"),
            PaLevel::Max => defmt::write!(fmt, "Max"),
        }
    }
}

impl PaLevel {
    /// The two RF_SETUP bits that hold the PA level.
    pub(crate) const MASK: u8 = 6;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            PaLevel::Min => 0,
            PaLevel::Low => 2,
            PaLevel::High => 4,
            PaLevel::Max => 6,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0 => PaLevel::Min,
            2 => PaLevel::Low,
            4 => PaLevel::High,
            _ => PaLevel::Max,
        }
    }

    /// The index of this level in range [0, 3].
    pub const fn index(self) -> u8 {
        self.into_bits() >> 1
    }
}

impl TryFrom<u8> for PaLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(PaLevel::Min),
            1 => Ok(PaLevel::Low),
            2 => Ok(PaLevel::High),
            3 => Ok(PaLevel::Max),
            _ => Err(ConfigError::InvalidPaLevel(value)),
        }
    }
}

impl Display for PaLevel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PaLevel::Min => write!(f, "Min"),
            PaLevel::Low => write!(f, "Low"),
            PaLevel::High => write!(f, "High"),
            PaLevel::Max => write!(f, "Max"),
        }
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataRate {
    /// represents 1 Mbps
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
    /// represents 250 Kbps
    Kbps250,
}

impl DataRate {
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x8,
            DataRate::Kbps250 => 0x20,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0x8 => DataRate::Mbps2,
            0x20 => DataRate::Kbps250,
            _ => DataRate::Mbps1,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
            DataRate::Kbps250 => write!(f, "250 Kbps"),
        }
    }
}

/// The lifecycle stage of the radio as tracked by the driver.
///
/// | State | PWR_UP | PRIM_RX | CE |
/// |-------|:------:|:-------:|:--:|
/// | [`RadioState::Uninitialized`] | unknown | unknown | unknown |
/// | [`RadioState::PoweredDown`] | 0 | - | 0 |
/// | [`RadioState::Standby`] | - | - | 0 |
/// | [`RadioState::Transmitting`] | 1 | 0 | pulsed |
/// | [`RadioState::Listening`] | 1 | 1 | 1 |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RadioState {
    /// No initialization sequence has completed yet.
    #[default]
    Uninitialized,
    /// Registers are retained but the radio cannot transmit or receive.
    ///
    /// Not reported by [`Nrf24Driver`](crate::driver::Nrf24Driver), which has no
    /// power-down operation. Initialization moves straight to [`RadioState::Standby`].
    PoweredDown,
    /// Configured and idle.
    Standby,
    /// Primary TX mode.
    Transmitting,
    /// Primary RX mode with CE asserted.
    Listening,
}

impl RadioState {
    /// Has an initialization sequence completed?
    pub const fn is_initialized(self) -> bool {
        !matches!(self, RadioState::Uninitialized)
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for RadioState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            RadioState::Uninitialized => defmt::write!(fmt, "Uninitialized"),
            RadioState::PoweredDown => defmt::write!(fmt, "PoweredDown"),
            RadioState::Standby => defmt::write!(fmt, "Standby"),
            RadioState::Transmitting => defmt::write!(fmt, "Transmitting"),
            RadioState::Listening => defmt::write!(fmt, "Listening"),
        }
    }
}

impl Display for RadioState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            RadioState::Uninitialized => write!(f, "Uninitialized"),
            RadioState::PoweredDown => write!(f, "PoweredDown"),
            RadioState::Standby => write!(f, "Standby"),
            RadioState::Transmitting => write!(f, "Transmitting"),
            RadioState::Listening => write!(f, "Listening"),
        }
    }
}

/// A snapshot of the radio's interrupt events, as sampled from the STATUS register.
///
/// To instantiate an object with flags that have different values:
/// ```
/// use nrf24::StatusFlags;
/// let flags = StatusFlags::default() // all flags are false
///     .with_rx_dr(true); // assert only `rx_dr` flags
/// assert!(flags.rx_dr());
/// ```
/// Use [`StatusFlags::default`] to instantiate all flags set to false.
/// Use [`StatusFlags::new`] to instantiate all flags set to true.
#[bitfield(u8, new = false, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _reserved: u8,

    /// A flag to describe if RX Data Ready to read.
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent.
    pub tx_ds: bool,

    /// A flag to describe if TX Data Failed (maximum retries exceeded).
    pub tx_df: bool,

    #[bits(4)]
    _pipe_and_fifo: u8,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, tx_df: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df()
        )
    }
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags.
    pub(crate) const IRQ_MASK: u8 = 0x70;

    /// A convenience constructor similar to [`StatusFlags::default`] except
    /// all fields are set to `true`.
    pub fn new() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }

    /// Only the IRQ flags of this snapshot.
    pub(crate) const fn irq_bits(&self) -> u8 {
        self.into_bits() & Self::IRQ_MASK
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, tx_df: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df()
        )
    }
}
