use super::{registers, timing, Nrf24, Nrf24Error};
use crate::{radio::prelude::EsbMode, RadioState};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

impl<SPI, CE, CSN, DELAY> EsbMode for Nrf24<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type ModeErrorType = Nrf24Error<SPI::Error, CE::Error>;

    fn as_tx(&mut self, state: &mut RadioState) -> Result<(), Self::ModeErrorType> {
        self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self._config_reg = self._config_reg.as_tx();
        self.spi_write_byte(registers::CONFIG, self._config_reg.into_bits())?;
        // allow the crystal oscillator to settle (Tpd2stby)
        self._delay_impl.delay_ms(timing::MODE_SETTLE_MS);
        *state = RadioState::Transmitting;
        Ok(())
    }

    fn as_rx(&mut self, state: &mut RadioState) -> Result<(), Self::ModeErrorType> {
        self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self._config_reg = self._config_reg.as_rx();
        self.spi_write_byte(registers::CONFIG, self._config_reg.into_bits())?;
        self._delay_impl.delay_ms(timing::MODE_SETTLE_MS);
        self._ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        *state = RadioState::Listening;
        Ok(())
    }

    fn is_rx(&self) -> bool {
        self._config_reg.is_rx()
    }
}
