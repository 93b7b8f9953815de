use super::{commands, mnemonics, timing, Nrf24, Nrf24Error, PAYLOAD_SIZE};
use crate::{
    radio::prelude::{EsbFifo, EsbRadio, EsbStatus},
    StatusFlags,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

/// The STATUS flags that end a transmission.
const TX_OUTCOME: u8 = mnemonics::MASK_TX_DS | mnemonics::MASK_MAX_RT;

impl<SPI, CE, CSN, DELAY> EsbRadio for Nrf24<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type RadioErrorType = Nrf24Error<SPI::Error, CE::Error>;

    /// See [`EsbRadio::transmit()`] for implementation-agnostic detail.
    ///
    /// This function calls [`Nrf24::flush_tx()`] upon entry, then pulses the CE pin
    /// for 1 millisecond to start the transmission.
    /// The STATUS register is polled at most 1000 times, 1 millisecond apart.
    fn transmit(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType> {
        let buf_len = buf.len().min(PAYLOAD_SIZE);
        // this function only handles 1 payload at a time
        self.flush_tx()?;

        // to avoid resizing the given buf, we'll have to use self._buf directly
        self._buf[0] = commands::W_TX_PAYLOAD;
        self._buf[1..(buf_len + 1)].copy_from_slice(&buf[..buf_len]);
        // pad to the static payload length
        self._buf[(buf_len + 1)..].fill(0);
        self.spi_transfer(PAYLOAD_SIZE as u8 + 1)?;

        self._ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self._delay_impl.delay_ms(timing::CE_PULSE_MS);
        self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?;

        for _poll in 0..timing::TX_POLL_LIMIT {
            self.spi_read(0, commands::NOP)?;
            let events = self._status.into_bits() & TX_OUTCOME;
            if events > 0 {
                self.clear_status_flags(StatusFlags::from_bits(events))?;
                if events & mnemonics::MASK_TX_DS > 0 {
                    #[cfg(feature = "defmt")]
                    #[cfg(target_os = "none")]
                    defmt::trace!("payload sent after {=u16} polls", _poll + 1);
                    return Ok(());
                }
                #[cfg(feature = "defmt")]
                #[cfg(target_os = "none")]
                defmt::trace!("payload not acknowledged");
                return Err(Nrf24Error::MaxRetries);
            }
            self._delay_impl.delay_ms(timing::TX_POLL_INTERVAL_MS);
        }
        #[cfg(feature = "defmt")]
        #[cfg(target_os = "none")]
        defmt::warn!(
            "no TX outcome reported after {=u16} polls",
            timing::TX_POLL_LIMIT
        );
        Err(Nrf24Error::Timeout)
    }

    fn receive(&mut self) -> Result<Option<[u8; PAYLOAD_SIZE]>, Self::RadioErrorType> {
        self.spi_read(0, commands::NOP)?;
        if !self._status.rx_dr() {
            return Ok(None);
        }
        self.clear_status_flags(StatusFlags::default().with_rx_dr(true))?;
        self.spi_read(PAYLOAD_SIZE as u8, commands::R_RX_PAYLOAD)?;
        let mut payload = [0u8; PAYLOAD_SIZE];
        payload.copy_from_slice(&self._buf[1..]);
        #[cfg(feature = "defmt")]
        #[cfg(target_os = "none")]
        defmt::trace!("received payload {=[u8]:02X}", &payload[..]);
        Ok(Some(payload))
    }
}
