use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::radio::{prelude::EsbPaLevel, Nrf24, Nrf24Error};
use crate::PaLevel;

use super::registers;

impl<SPI, CE, CSN, DELAY> EsbPaLevel for Nrf24<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type PaLevelErrorType = Nrf24Error<SPI::Error, CE::Error>;

    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType> {
        let rf_setup = self.read_register(registers::RF_SETUP)?;
        Ok(PaLevel::from_bits(rf_setup))
    }

    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType> {
        let rf_setup = self.read_register(registers::RF_SETUP)? & !PaLevel::MASK;
        self.spi_write_byte(registers::RF_SETUP, rf_setup | pa_level.into_bits())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, EsbPaLevel, PaLevel};
    use crate::radio::commands;
    use crate::{spi_test_expects, test::mk_radio};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    fn get_pa_level(pa_bits: u8, expected: PaLevel) {
        let spi_expectations = spi_test_expects![
            // get the RF_SETUP register value; data rate bits are ignored
            (
                vec![registers::RF_SETUP, 0xFFu8],
                vec![0xEu8, pa_bits | 0x28],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin, mut csn_pin) = (mocks.0, mocks.1, mocks.2, mocks.3);
        assert_eq!(radio.get_pa_level(), Ok(expected));
        spi.done();
        ce_pin.done();
        csn_pin.done();
    }

    #[test]
    fn get_pa_level_min() {
        get_pa_level(0u8, PaLevel::Min);
    }

    #[test]
    fn get_pa_level_low() {
        get_pa_level(2u8, PaLevel::Low);
    }

    #[test]
    fn get_pa_level_high() {
        get_pa_level(4u8, PaLevel::High);
    }

    #[test]
    fn get_pa_level_max() {
        get_pa_level(6u8, PaLevel::Max);
    }

    #[test]
    fn set_pa_level_keeps_other_bits() {
        let spi_expectations = spi_test_expects![
            // read RF_SETUP with 250 Kbps and max PA level
            (vec![registers::RF_SETUP, 0xFFu8], vec![0xEu8, 0x27u8]),
            // write back only the PA bits changed
            (
                vec![registers::RF_SETUP | commands::W_REGISTER, 0x23u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin, mut csn_pin) = (mocks.0, mocks.1, mocks.2, mocks.3);
        radio.set_pa_level(PaLevel::Low).unwrap();
        spi.done();
        ce_pin.done();
        csn_pin.done();
    }
}
