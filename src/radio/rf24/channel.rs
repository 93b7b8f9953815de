use super::registers;
use crate::radio::{prelude::EsbChannel, Nrf24, Nrf24Error};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

impl<SPI, CE, CSN, DELAY> EsbChannel for Nrf24<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type ChannelErrorType = Nrf24Error<SPI::Error, CE::Error>;

    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        self.spi_write_byte(registers::RF_CH, channel)
    }

    /// See also [`Nrf24::set_channel()`].
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        self.read_register(registers::RF_CH)
    }
}
