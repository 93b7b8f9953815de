use core::fmt::{Display, Formatter, Result};

use crate::{DataRate, PaLevel};

/// The highest channel the nRF24L01+ can tune to.
pub const MAX_CHANNEL: u8 = 125;

/// The fixed address width (in bytes) used for the TX address and RX pipe 0.
pub const ADDRESS_WIDTH: usize = 5;

/// Reasons a requested configuration is rejected before any hardware access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The channel exceeds [`MAX_CHANNEL`].
    InvalidChannel(u8),
    /// The PA level index exceeds 3.
    InvalidPaLevel(u8),
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ConfigError::InvalidChannel(c) => defmt::write!(fmt, "invalid channel {=u8}", c),
            ConfigError::InvalidPaLevel(p) => defmt::write!(fmt, "invalid PA level {=u8}", p),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ConfigError::InvalidChannel(c) => {
                write!(f, "channel {c} is outside range [0, {MAX_CHANNEL}]")
            }
            ConfigError::InvalidPaLevel(p) => write!(f, "PA level {p} is outside range [0, 3]"),
        }
    }
}

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use nrf24::{radio::RadioConfig, PaLevel};
/// let config = RadioConfig::default()
///     .with_channel(42)
///     .with_pa_level(PaLevel::Low);
/// assert_eq!(config.channel(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadioConfig {
    channel: u8,
    pa_level: PaLevel,
    data_rate: DataRate,
    address: [u8; ADDRESS_WIDTH],
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `76` |
    /// | [`RadioConfig::pa_level()`] | [`PaLevel::Max`] |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps1`] |
    /// | [`RadioConfig::address()`] | `[0xE7; 5]` |
    fn default() -> Self {
        Self {
            channel: 76,
            pa_level: PaLevel::Max,
            data_rate: DataRate::Mbps1,
            address: [0xE7; ADDRESS_WIDTH],
        }
    }
}

impl RadioConfig {
    /// Check a channel and PA level index as received from a command layer.
    ///
    /// This never touches hardware. On success, the validated [`PaLevel`] is returned.
    pub fn validate(channel: u8, power: u8) -> core::result::Result<PaLevel, ConfigError> {
        if channel > MAX_CHANNEL {
            return Err(ConfigError::InvalidChannel(channel));
        }
        PaLevel::try_from(power)
    }

    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the channel (over the air frequency).
    ///
    /// This value is clamped to range [0, 125]; use [`RadioConfig::validate()`]
    /// to reject out-of-range input instead.
    /// The radio's frequency can be determined by the following equation:
    /// ```text
    /// frequency (in MHz) = channel + 2400
    /// ```
    pub fn with_channel(self, value: u8) -> Self {
        Self {
            channel: value.min(MAX_CHANNEL),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_pa_level()`].
    pub const fn pa_level(&self) -> PaLevel {
        self.pa_level
    }

    /// The Power Amplitude (PA) level.
    pub fn with_pa_level(self, level: PaLevel) -> Self {
        Self {
            pa_level: level,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_data_rate()`].
    pub const fn data_rate(&self) -> DataRate {
        self.data_rate
    }

    /// The Data Rate (over the air).
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self { data_rate, ..self }
    }

    /// Returns the value set by [`RadioConfig::with_address()`].
    pub const fn address(&self) -> [u8; ADDRESS_WIDTH] {
        self.address
    }

    /// The address used for both the TX address and the RX address of pipe 0.
    ///
    /// Both must match for the auto-acknowledgement feature to work.
    /// Only the first 5 bytes of `address` are used; shorter addresses
    /// only replace the leading bytes of the current address.
    pub fn with_address(self, address: &[u8]) -> Self {
        let mut new_address = self.address;
        let len = address.len().min(ADDRESS_WIDTH);
        new_address[..len].copy_from_slice(&address[..len]);
        Self {
            address: new_address,
            ..self
        }
    }

    /// The RF_SETUP register value described by this config.
    pub(crate) const fn rf_setup(&self) -> u8 {
        self.data_rate.into_bits() | self.pa_level.into_bits()
    }
}
