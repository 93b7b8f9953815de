use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::{
    radio::{prelude::EsbStatus, Nrf24, Nrf24Error},
    StatusFlags,
};

use super::{commands, registers};

impl<SPI, CE, CSN, DELAY> EsbStatus for Nrf24<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type StatusErrorType = Nrf24Error<SPI::Error, CE::Error>;

    fn get_status_flags(&self, flags: &mut StatusFlags) {
        *flags = self._status;
    }

    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        self.spi_write_byte(registers::STATUS, flags.irq_bits())
    }

    fn update(&mut self) -> Result<(), Self::StatusErrorType> {
        self.spi_read(0, commands::NOP)
    }
}
