use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::radio::{prelude::EsbFifo, Nrf24, Nrf24Error};

use super::commands;

impl<SPI, CE, CSN, DELAY> EsbFifo for Nrf24<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type FifoErrorType = Nrf24Error<SPI::Error, CE::Error>;

    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_read(0, commands::FLUSH_RX)
    }

    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_read(0, commands::FLUSH_TX)
    }
}
