use bitfield_struct::bitfield;

use super::mnemonics;

/// A mirror of the radio's CONFIG register.
///
/// The IRQ mask bits are never set by this driver, so they are kept as padding.
#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(4)]
    _irq_masks: u8,

    pub crc_enabled: bool,

    #[bits(1)]
    _crc_encoding: u8,

    pub power: bool,

    pub is_rx: bool,
}

impl Config {
    /// CRC enabled, powered down, primary TX.
    pub const fn powered_down() -> Self {
        Self::from_bits(mnemonics::EN_CRC)
    }

    pub fn as_rx(self) -> Self {
        self.with_power(true).with_is_rx(true)
    }

    pub fn as_tx(self) -> Self {
        self.with_power(true).with_is_rx(false)
    }
}
