use super::{mnemonics, registers, timing, Config, Nrf24, Nrf24Error, PAYLOAD_SIZE};
use crate::{
    radio::{
        prelude::{EsbChannel, EsbFifo, EsbInit, EsbStatus},
        RadioConfig,
    },
    RadioState, StatusFlags,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

impl<SPI, CE, CSN, DELAY> EsbInit for Nrf24<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, CE::Error>;

    /// Initialize the radio's hardware using the [`SpiBus`] and [`OutputPin`]s given
    /// to [`Nrf24::new()`].
    fn init(
        &mut self,
        config: &RadioConfig,
        state: &mut RadioState,
    ) -> Result<(), Self::ConfigErrorType> {
        // any failure below leaves the radio partially configured and powered down
        *state = RadioState::Uninitialized;
        self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self._csn_pin.set_high().map_err(Nrf24Error::Gpo)?;

        // The radio ignores SPI traffic until its power-on reset has finished.
        self._delay_impl.delay_ms(timing::STARTUP_DELAY_MS);

        self._config_reg = Config::powered_down();
        self.spi_write_byte(registers::CONFIG, self._config_reg.into_bits())?;
        // an absent radio reads back as all 0s or all 1s
        if self.read_register(registers::CONFIG)? != self._config_reg.into_bits() {
            #[cfg(feature = "defmt")]
            #[cfg(target_os = "none")]
            defmt::warn!("CONFIG register read back does not match; is the radio connected?");
            return Err(Nrf24Error::BinaryCorruption);
        }

        self.spi_write_byte(registers::SETUP_AW, mnemonics::AW_5_BYTES)?;
        self.set_channel(config.channel())?;
        self.spi_write_byte(registers::RF_SETUP, config.rf_setup())?;

        // TX address and pipe 0 RX address must match for auto-ack
        let address = config.address();
        self.spi_write_buf(registers::TX_ADDR, &address)?;
        self.spi_write_buf(registers::RX_ADDR_P0, &address)?;
        self.spi_write_byte(registers::EN_AA, mnemonics::PIPE_0)?;
        self.spi_write_byte(registers::EN_RXADDR, mnemonics::PIPE_0)?;
        self.spi_write_byte(registers::RX_PW_P0, PAYLOAD_SIZE as u8)?;

        self.clear_status_flags(StatusFlags::new())?;
        self.flush_tx()?;
        self.flush_rx()?;

        *state = RadioState::Standby;
        #[cfg(feature = "defmt")]
        #[cfg(target_os = "none")]
        defmt::debug!("radio initialized on channel {=u8}", config.channel());
        Ok(())
    }
}
