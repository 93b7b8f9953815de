use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};
pub(crate) mod bit_fields;
mod channel;
mod init;
use bit_fields::Config;
mod constants;
mod details;
mod fifo;
mod mode;
mod pa_level;
mod radio;
pub use constants::{commands, mnemonics, registers, timing};
mod status;
use super::ConfigError;
use crate::StatusFlags;

/// The fixed (static) payload length used on the wire.
pub const PAYLOAD_SIZE: usize = 32;

/// A collection of error types to describe hardware malfunctions
/// and rejected requests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error (either the CE or CSN pin).
    Gpo(DO),
    /// Represents a corruption of binary data (as it was transferred over the SPI bus' MISO)
    ///
    /// This is also how an absent or unpowered radio manifests.
    BinaryCorruption,
    /// A multi-byte register write exceeded the radio's 32 byte limit.
    BufferOverflow,
    /// The radio exhausted its automatic retries without receiving an ACK.
    MaxRetries,
    /// The radio never reported a transmission outcome within the poll limit.
    Timeout,
    /// A requested configuration was rejected before touching hardware.
    Config(ConfigError),
    /// The radio has not completed its initialization sequence.
    NotReady,
}

impl<SPI, DO> From<ConfigError> for Nrf24Error<SPI, DO> {
    fn from(value: ConfigError) -> Self {
        Nrf24Error::Config(value)
    }
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01+ transceiver.
///
/// Unlike an [`SpiDevice`](trait@embedded_hal::spi::SpiDevice) based driver,
/// this struct drives the radio's CSN pin itself. Every SPI transaction is
/// bracketed by CSN going LOW, exactly one full-duplex transfer, and CSN going HIGH.
pub struct Nrf24<SPI, CE, CSN, DELAY> {
    _spi: SPI,
    _ce_pin: CE,
    _csn_pin: CSN,
    _delay_impl: DELAY,
    _buf: [u8; PAYLOAD_SIZE + 1],
    _status: StatusFlags,
    _config_reg: Config,
}

impl<SPI, CE, CSN, DELAY> Nrf24<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    /// Instantiate a [`Nrf24`] object for use on the specified
    /// `spi` bus with the given `ce_pin` and `csn_pin`.
    ///
    /// No pin or bus activity happens until the radio is initialized.
    pub fn new(
        ce_pin: CE,
        csn_pin: CSN,
        spi: SPI,
        delay_impl: DELAY,
    ) -> Nrf24<SPI, CE, CSN, DELAY> {
        Nrf24 {
            _spi: spi,
            _ce_pin: ce_pin,
            _csn_pin: csn_pin,
            _delay_impl: delay_impl,
            _buf: [0u8; PAYLOAD_SIZE + 1],
            _status: StatusFlags::from_bits(0),
            _config_reg: Config::powered_down(),
        }
    }

    /// Give back the bus, pins, and delay implementation.
    pub fn release(self) -> (SPI, CE, CSN, DELAY) {
        (self._spi, self._ce_pin, self._csn_pin, self._delay_impl)
    }

    /// If both the bus and the release of CSN fail, the bus error is returned.
    /// A CSN pin that failed to go HIGH is driven LOW again by the next transaction.
    fn spi_transfer(&mut self, len: u8) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self._csn_pin.set_low().map_err(Nrf24Error::Gpo)?;
        let mut result = self._spi.transfer_in_place(&mut self._buf[..len as usize]);
        if result.is_ok() {
            result = self._spi.flush();
        }
        // CSN must be released even if the bus faulted
        let released = self._csn_pin.set_high();
        result.map_err(Nrf24Error::Spi)?;
        released.map_err(Nrf24Error::Gpo)?;
        self._status = StatusFlags::from_bits(self._buf[0]);
        Ok(())
    }

    /// This is also used to write SPI commands that consist of 1 byte:
    /// ```ignore
    /// self.spi_read(0, commands::NOP)?;
    /// // STATUS register is now stored in self._status
    /// ```
    fn spi_read(&mut self, len: u8, command: u8) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self._buf[0] = command;
        self._buf[1..(len as usize + 1)].fill(commands::NOP);
        self.spi_transfer(len + 1)
    }

    fn spi_write_byte(
        &mut self,
        register: u8,
        byte: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self._buf[0] = commands::W_REGISTER | (register & registers::MASK);
        self._buf[1] = byte;
        self.spi_transfer(2)
    }

    fn spi_write_buf(
        &mut self,
        register: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self._buf[0] = commands::W_REGISTER | (register & registers::MASK);
        let buf_len = buf.len();
        self._buf[1..(buf_len + 1)].copy_from_slice(buf);
        self.spi_transfer(buf_len as u8 + 1)
    }

    /// Read a single byte register.
    pub fn read_register(&mut self, register: u8) -> Result<u8, Nrf24Error<SPI::Error, CE::Error>> {
        self.spi_read(1, commands::R_REGISTER | (register & registers::MASK))?;
        Ok(self._buf[1])
    }

    /// Write a single byte register.
    pub fn write_register(
        &mut self,
        register: u8,
        value: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self.spi_write_byte(register, value)
    }

    /// Read a multi-byte register (like an address) into `buf`.
    ///
    /// At most 32 bytes are read, regardless of `buf`'s length.
    /// Returns the number of bytes stored in `buf`.
    pub fn read_register_multi(
        &mut self,
        register: u8,
        buf: &mut [u8],
    ) -> Result<u8, Nrf24Error<SPI::Error, CE::Error>> {
        let len = buf.len().min(PAYLOAD_SIZE);
        self.spi_read(
            len as u8,
            commands::R_REGISTER | (register & registers::MASK),
        )?;
        buf[..len].copy_from_slice(&self._buf[1..(len + 1)]);
        Ok(len as u8)
    }

    /// Write a multi-byte register (like an address).
    ///
    /// Buffers longer than 32 bytes are rejected with
    /// [`Nrf24Error::BufferOverflow`] before any SPI transaction.
    pub fn write_register_multi(
        &mut self,
        register: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        if buf.len() > PAYLOAD_SIZE {
            return Err(Nrf24Error::BufferOverflow);
        }
        self.spi_write_buf(register, buf)
    }
}
