//! Helpers shared by this crate's unit tests.
extern crate std;
use crate::{
    driver::Nrf24Driver,
    radio::{commands, registers, Nrf24, RadioConfig, PAYLOAD_SIZE},
};
use core::{cell::RefCell, convert::Infallible};
use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType as PinErrorType, OutputPin},
    spi::{ErrorKind, ErrorType as SpiErrorType, SpiBus},
};
use embedded_hal_mock::eh1::{
    delay::NoopDelay,
    digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction},
    spi::{Mock as SpiMock, Transaction as SpiTransaction},
};
use std::{collections::VecDeque, rc::Rc, vec::Vec};

/// Takes an indefinite repetition of a tuple of 2 vectors: `(expected_data, response_data)`
/// and generates an array of `SpiTransaction`s.
///
/// Each tuple becomes one full-duplex transfer followed by a flush.
///
/// NOTE: This macro is only used to generate code in unit tests (for this crate only).
#[macro_export]
macro_rules! spi_test_expects {
    ($( ($expected:expr , $response:expr $(,)? ) , ) + ) => {
        [
            $(
                SpiTransaction::transfer_in_place($expected, $response),
                SpiTransaction::flush(),
            )*
        ]
    }
}

/// The CSN pin toggles that bracket `transactions` SPI transactions.
pub fn csn_expects(transactions: usize) -> Vec<PinTransaction> {
    let mut out = Vec::with_capacity(transactions * 2);
    for _ in 0..transactions {
        out.push(PinTransaction::set(PinState::Low));
        out.push(PinTransaction::set(PinState::High));
    }
    out
}

/// A tuple struct to encapsulate objects used to mock [`Nrf24`],
pub struct MockRadio(
    pub Nrf24<SpiMock<u8>, PinMock, PinMock, NoopDelay>,
    pub SpiMock<u8>,
    pub PinMock,
    pub PinMock,
);

/// Create a mock objects using the given expectations.
///
/// The CSN pin expectations are derived from the number of SPI transactions
/// in `spi_expectations` (as generated by [`spi_test_expects!`]).
pub fn mk_radio(
    ce_expectations: &[PinTransaction],
    spi_expectations: &[SpiTransaction<u8>],
) -> MockRadio {
    mk_radio_with_csn(
        ce_expectations,
        &csn_expects(spi_expectations.len() / 2),
        spi_expectations,
    )
}

pub fn mk_radio_with_csn(
    ce_expectations: &[PinTransaction],
    csn_expectations: &[PinTransaction],
    spi_expectations: &[SpiTransaction<u8>],
) -> MockRadio {
    let spi = SpiMock::new(spi_expectations);
    let ce_pin = PinMock::new(ce_expectations);
    let csn_pin = PinMock::new(csn_expectations);
    let radio = Nrf24::new(ce_pin.clone(), csn_pin.clone(), spi.clone(), NoopDelay);
    MockRadio(radio, spi, ce_pin, csn_pin)
}

/// A tuple struct to encapsulate objects used to mock [`Nrf24Driver`],
pub struct MockDriver(
    pub Nrf24Driver<SpiMock<u8>, PinMock, PinMock, NoopDelay>,
    pub SpiMock<u8>,
    pub PinMock,
    pub PinMock,
);

pub fn mk_driver(
    ce_expectations: &[PinTransaction],
    csn_expectations: &[PinTransaction],
    spi_expectations: &[SpiTransaction<u8>],
) -> MockDriver {
    let spi = SpiMock::new(spi_expectations);
    let ce_pin = PinMock::new(ce_expectations);
    let csn_pin = PinMock::new(csn_expectations);
    let driver = Nrf24Driver::new(ce_pin.clone(), csn_pin.clone(), spi.clone(), NoopDelay);
    MockDriver(driver, spi, ce_pin, csn_pin)
}

/// Something observed by a [`FakeChip`], in program order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Ce(bool),
    Csn(bool),
    /// The MOSI bytes of one transfer.
    Spi(Vec<u8>),
    /// A delay in nanoseconds.
    Delay(u32),
}

/// A simulated nRF24L01+ register file.
///
/// Unlike the scripted mocks, this answers whatever the driver asks,
/// so tests can check outcomes instead of exact byte sequences.
pub struct FakeChip {
    registers: [[u8; 5]; 0x20],
    pub events: Vec<Event>,
    /// Payloads written with `W_TX_PAYLOAD`.
    pub tx_payloads: Vec<Vec<u8>>,
    /// The payload returned by `R_RX_PAYLOAD`.
    pub rx_payload: [u8; PAYLOAD_SIZE],
    /// STATUS values latched by successive NOP commands.
    pub status_script: VecDeque<u8>,
    /// The index of a transfer that should report a bus error.
    pub fail_at: Option<usize>,
    /// Emulate a radio that is not connected (MISO floats high).
    pub detached: bool,
    pub transfers: usize,
    pub csn_low: bool,
    pub ce_high: bool,
    elapsed_ns: u64,
}

impl Default for FakeChip {
    fn default() -> Self {
        // power-on reset values
        let mut file = [[0u8; 5]; 0x20];
        file[registers::CONFIG as usize][0] = 0x08;
        file[registers::RF_CH as usize][0] = 2;
        file[registers::RF_SETUP as usize][0] = 0x0F;
        file[registers::STATUS as usize][0] = 0x0E;
        file[registers::TX_ADDR as usize] = [0xE7; 5];
        file[registers::RX_ADDR_P0 as usize] = [0xE7; 5];
        Self {
            registers: file,
            events: Vec::new(),
            tx_payloads: Vec::new(),
            rx_payload: [0u8; PAYLOAD_SIZE],
            status_script: VecDeque::new(),
            fail_at: None,
            detached: false,
            transfers: 0,
            csn_low: false,
            ce_high: false,
            elapsed_ns: 0,
        }
    }
}

impl FakeChip {
    pub fn register(&self, register: u8) -> u8 {
        self.registers[register as usize][0]
    }

    pub fn address(&self, register: u8) -> [u8; 5] {
        self.registers[register as usize]
    }

    /// Total time spent in delays.
    pub fn elapsed_ns(&self) -> u64 {
        self.elapsed_ns
    }

    /// The MOSI bytes of every transfer so far.
    pub fn spi_frames(&self) -> Vec<Vec<u8>> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Spi(frame) => Some(frame.clone()),
                _ => None,
            })
            .collect()
    }

    fn transfer(&mut self, words: &mut [u8]) -> Result<(), ErrorKind> {
        assert!(self.csn_low, "SPI transfer while CSN is inactive");
        let index = self.transfers;
        self.transfers += 1;
        self.events.push(Event::Spi(words.to_vec()));
        if self.fail_at == Some(index) {
            return Err(ErrorKind::Other);
        }
        if self.detached {
            words.fill(0xFF);
            return Ok(());
        }

        let command = words[0];
        if command == commands::NOP {
            if let Some(status) = self.status_script.pop_front() {
                self.registers[registers::STATUS as usize][0] = status;
            }
        }
        let status = self.register(registers::STATUS);
        let data = &mut words[1..];
        match command {
            commands::NOP | commands::FLUSH_TX | commands::FLUSH_RX => (),
            commands::W_TX_PAYLOAD => self.tx_payloads.push(data.to_vec()),
            commands::R_RX_PAYLOAD => {
                let len = data.len().min(PAYLOAD_SIZE);
                data[..len].copy_from_slice(&self.rx_payload[..len]);
            }
            c if c & 0xE0 == commands::W_REGISTER => {
                let register = c & registers::MASK;
                if register == registers::STATUS {
                    // IRQ flags are cleared by writing 1 to them
                    self.registers[register as usize][0] &= !(data[0] & 0x70);
                } else {
                    let len = data.len().min(5);
                    self.registers[register as usize][..len].copy_from_slice(&data[..len]);
                }
            }
            c if c & 0xE0 == commands::R_REGISTER => {
                let value = self.registers[(c & registers::MASK) as usize];
                for (i, byte) in data.iter_mut().enumerate() {
                    *byte = value.get(i).copied().unwrap_or(0);
                }
            }
            _ => panic!("unsupported command {command:#04X}"),
        }
        words[0] = status;
        Ok(())
    }
}

pub type SharedChip = Rc<RefCell<FakeChip>>;

pub struct FakeSpi(SharedChip);

impl SpiErrorType for FakeSpi {
    type Error = ErrorKind;
}

impl SpiBus for FakeSpi {
    fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        unimplemented!("the radio only uses in-place transfers")
    }

    fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> {
        unimplemented!("the radio only uses in-place transfers")
    }

    fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
        unimplemented!("the radio only uses in-place transfers")
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        self.0.borrow_mut().transfer(words)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Either the CE or CSN line of a [`FakeChip`].
pub struct FakePin {
    chip: SharedChip,
    is_csn: bool,
}

impl FakePin {
    fn set(&mut self, high: bool) {
        let mut chip = self.chip.borrow_mut();
        if self.is_csn {
            chip.csn_low = !high;
            chip.events.push(Event::Csn(high));
        } else {
            chip.ce_high = high;
            chip.events.push(Event::Ce(high));
        }
    }
}

impl PinErrorType for FakePin {
    type Error = Infallible;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }
}

/// A [`DelayNs`] that only tallies elapsed time.
pub struct TallyDelay(SharedChip);

impl DelayNs for TallyDelay {
    fn delay_ns(&mut self, ns: u32) {
        let mut chip = self.0.borrow_mut();
        chip.elapsed_ns += ns as u64;
        chip.events.push(Event::Delay(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.delay_ns(us * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay_ns(ms * 1_000_000);
    }
}

pub type FakeRadio = Nrf24<FakeSpi, FakePin, FakePin, TallyDelay>;
pub type FakeDriver = Nrf24Driver<FakeSpi, FakePin, FakePin, TallyDelay>;

fn fake_parts() -> (FakeSpi, FakePin, FakePin, TallyDelay, SharedChip) {
    let chip = Rc::new(RefCell::new(FakeChip::default()));
    let ce_pin = FakePin {
        chip: chip.clone(),
        is_csn: false,
    };
    let csn_pin = FakePin {
        chip: chip.clone(),
        is_csn: true,
    };
    (
        FakeSpi(chip.clone()),
        ce_pin,
        csn_pin,
        TallyDelay(chip.clone()),
        chip,
    )
}

/// An [`Nrf24`] wired to a fresh [`FakeChip`].
pub fn fake_radio() -> (FakeRadio, SharedChip) {
    let (spi, ce_pin, csn_pin, delay_impl, chip) = fake_parts();
    (Nrf24::new(ce_pin, csn_pin, spi, delay_impl), chip)
}

/// An [`Nrf24Driver`] wired to a fresh [`FakeChip`].
pub fn fake_driver(config: RadioConfig) -> (FakeDriver, SharedChip) {
    let (spi, ce_pin, csn_pin, delay_impl, chip) = fake_parts();
    (
        Nrf24Driver::with_config(ce_pin, csn_pin, spi, delay_impl, config),
        chip,
    )
}

/// A bus to a fresh [`FakeChip`] for use with scripted CE and CSN pins.
pub fn fake_bus() -> (FakeSpi, SharedChip) {
    let chip = Rc::new(RefCell::new(FakeChip::default()));
    // CSN is not wired to the chip
    chip.borrow_mut().csn_low = true;
    (FakeSpi(chip.clone()), chip)
}
