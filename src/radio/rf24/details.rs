use super::{Nrf24, Nrf24Error};
use crate::radio::prelude::EsbDetails;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

#[cfg(any(
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
use super::{registers, Config};
#[cfg(any(
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
use crate::{
    radio::prelude::{EsbChannel, EsbPaLevel, EsbStatus},
    DataRate,
};

#[cfg(feature = "std")]
extern crate std;

impl<SPI, CE, CSN, DELAY> EsbDetails for Nrf24<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type DetailsErrorType = Nrf24Error<SPI::Error, CE::Error>;

    #[cfg(feature = "defmt")]
    #[cfg(target_os = "none")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.get_channel()?;
        defmt::println!(
            "Channel___________________{=u8} ~ {=u16} MHz",
            channel,
            channel as u16 + 2400u16
        );

        let rf_setup = self.read_register(registers::RF_SETUP)?;
        defmt::println!(
            "RF Data Rate______________{}",
            DataRate::from_bits(rf_setup)
        );
        defmt::println!("RF Power Amplifier________{}", self.get_pa_level()?);

        let address_width = self.read_register(registers::SETUP_AW)? + 2;
        defmt::println!("Address length____________{=u8} bytes", address_width);
        defmt::println!(
            "Payload length____________{=u8} bytes",
            self.read_register(registers::RX_PW_P0)?
        );
        defmt::println!(
            "Auto Acknowledgment_______0b{=0..8}",
            self.read_register(registers::EN_AA)?
        );

        self._config_reg = Config::from_bits(self.read_register(registers::CONFIG)?);
        defmt::println!(
            "CRC enabled_______________{=bool}",
            self._config_reg.crc_enabled()
        );
        let rx = defmt::intern!("R");
        let tx = defmt::intern!("T");
        defmt::println!(
            "Primary Mode______________{=istr}X",
            if self._config_reg.is_rx() { rx } else { tx }
        );
        defmt::println!(
            "Powered Up________________{=bool}",
            self._config_reg.power()
        );

        self.update()?;
        defmt::println!("{}", self._status);

        let mut address = [0u8; 5];
        self.read_register_multi(registers::TX_ADDR, &mut address)?;
        defmt::println!("TX address_______________{=[u8]:02X}", &address[..]);
        self.read_register_multi(registers::RX_ADDR_P0, &mut address)?;
        defmt::println!("Pipe 0 address___________{=[u8]:02X}", &address[..]);
        Ok(())
    }

    #[cfg(not(any(
        all(feature = "defmt", target_os = "none"),
        all(feature = "std", not(target_os = "none"))
    )))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }

    #[cfg(not(target_os = "none"))]
    #[cfg(feature = "std")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.get_channel()?;
        std::println!(
            "Channel___________________{channel} ~ {} MHz",
            channel as u16 + 2400u16
        );

        let rf_setup = self.read_register(registers::RF_SETUP)?;
        std::println!(
            "RF Data Rate______________{}",
            DataRate::from_bits(rf_setup)
        );
        std::println!("RF Power Amplifier________{}", self.get_pa_level()?);

        let address_width = self.read_register(registers::SETUP_AW)? + 2;
        std::println!("Address length____________{address_width} bytes");
        std::println!(
            "Payload length____________{} bytes",
            self.read_register(registers::RX_PW_P0)?
        );
        std::println!(
            "Auto Acknowledgment_______{:#010b}",
            self.read_register(registers::EN_AA)?
        );

        self._config_reg = Config::from_bits(self.read_register(registers::CONFIG)?);
        std::println!(
            "CRC enabled_______________{}",
            self._config_reg.crc_enabled()
        );
        std::println!(
            "Primary Mode______________{}X",
            if self._config_reg.is_rx() { "R" } else { "T" }
        );
        std::println!("Powered Up________________{}", self._config_reg.power());

        self.update()?;
        std::println!("{}", self._status);

        let mut address = [0u8; 5];
        self.read_register_multi(registers::TX_ADDR, &mut address)?;
        std::println!("TX address_______________{:02X?}", address);
        self.read_register_multi(registers::RX_ADDR_P0, &mut address)?;
        std::println!("Pipe 0 address___________{:02X?}", address);
        Ok(())
    }
}
