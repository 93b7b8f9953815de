//! The high-level facade that owns the radio's lifecycle.
//!
//! [`Nrf24Driver`] exposes the four operations a command layer needs
//! (initialize, configure, send, and start receiving) and translates their
//! outcomes into a [`Response`].
use core::fmt::{Display, Formatter, Result as FmtResult};

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::{
    radio::{
        prelude::{EsbChannel, EsbDetails, EsbInit, EsbMode, EsbPaLevel, EsbRadio},
        Nrf24, Nrf24Error, RadioConfig, PAYLOAD_SIZE,
    },
    RadioState,
};

/// The tagged outcome of an operation, as reported to a command layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    /// The operation completed.
    Ok,
    /// An input was out of range. No hardware was touched.
    ValidationError,
    /// The radio has not been initialized. No hardware was touched.
    NotReady,
    /// The hardware did not behave as expected.
    Failure,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for Response {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Response::Ok => defmt::write!(fmt, "Ok"),
            Response::ValidationError => defmt::write!(fmt, "ValidationError"),
            Response::NotReady => defmt::write!(fmt, "NotReady"),
            Response::Failure => defmt::write!(fmt, "Failure"),
        }
    }
}

impl Display for Response {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Response::Ok => write!(f, "Ok"),
            Response::ValidationError => write!(f, "ValidationError"),
            Response::NotReady => write!(f, "NotReady"),
            Response::Failure => write!(f, "Failure"),
        }
    }
}

impl<SPI, DO> Nrf24Error<SPI, DO> {
    /// Classify this error for a command layer.
    pub fn response(&self) -> Response {
        match self {
            Nrf24Error::Config(_) => Response::ValidationError,
            Nrf24Error::NotReady => Response::NotReady,
            _ => Response::Failure,
        }
    }
}

impl<T, SPI, DO> From<&Result<T, Nrf24Error<SPI, DO>>> for Response {
    fn from(value: &Result<T, Nrf24Error<SPI, DO>>) -> Self {
        match value {
            Ok(_) => Response::Ok,
            Err(e) => e.response(),
        }
    }
}

/// A request from a command layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// See [`Nrf24Driver::init()`].
    Init,
    /// See [`Nrf24Driver::configure()`].
    Configure { channel: u8, power: u8 },
    /// See [`Nrf24Driver::send()`].
    Send(&'a [u8]),
    /// See [`Nrf24Driver::start_receive()`].
    StartReceive,
}

/// The facade that owns an [`Nrf24`], its [`RadioState`], and the cached [`RadioConfig`].
///
/// ```ignore
/// let mut driver = Nrf24Driver::new(ce_pin, csn_pin, spi, delay);
/// driver.init()?;
/// driver.configure(76, 3)?;
/// driver.send(b"Hello")?;
/// ```
pub struct Nrf24Driver<SPI, CE, CSN, DELAY> {
    radio: Nrf24<SPI, CE, CSN, DELAY>,
    state: RadioState,
    config: RadioConfig,
}

impl<SPI, CE, CSN, DELAY> Nrf24Driver<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    /// Create a driver using [`RadioConfig::default()`].
    ///
    /// The radio stays [`RadioState::Uninitialized`] until [`Nrf24Driver::init()`] succeeds.
    pub fn new(ce_pin: CE, csn_pin: CSN, spi: SPI, delay_impl: DELAY) -> Self {
        Self::with_config(ce_pin, csn_pin, spi, delay_impl, RadioConfig::default())
    }

    /// Create a driver that applies `config` during [`Nrf24Driver::init()`].
    pub fn with_config(
        ce_pin: CE,
        csn_pin: CSN,
        spi: SPI,
        delay_impl: DELAY,
        config: RadioConfig,
    ) -> Self {
        Self {
            radio: Nrf24::new(ce_pin, csn_pin, spi, delay_impl),
            state: RadioState::Uninitialized,
            config,
        }
    }

    /// The current lifecycle state.
    pub fn state(&self) -> RadioState {
        self.state
    }

    /// The configuration applied by the next [`Nrf24Driver::init()`].
    pub fn config(&self) -> &RadioConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_initialized()
    }

    /// Consume the driver and give back the bus, pins, and delay implementation.
    pub fn release(self) -> (SPI, CE, CSN, DELAY) {
        self.radio.release()
    }

    fn ensure_ready(&self) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        if self.state.is_initialized() {
            Ok(())
        } else {
            Err(Nrf24Error::NotReady)
        }
    }

    /// Run the full initialization sequence with the cached [`RadioConfig`].
    ///
    /// May be called again to re-initialize the radio. On failure, the driver
    /// reports [`RadioState::Uninitialized`] until a later call succeeds.
    pub fn init(&mut self) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self.radio.init(&self.config, &mut self.state)
    }

    /// Validate and apply a channel and PA level index.
    ///
    /// `channel` must be in range [0, 125] and `power` in range [0, 3]; otherwise
    /// [`Nrf24Error::Config`] is returned without touching hardware.
    ///
    /// Before initialization, the values are only cached for the next
    /// [`Nrf24Driver::init()`]. After initialization, they are written to the radio
    /// and only cached once every write succeeded.
    pub fn configure(
        &mut self,
        channel: u8,
        power: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        let pa_level = RadioConfig::validate(channel, power)?;
        if self.state.is_initialized() {
            self.radio.set_channel(channel)?;
            self.radio.set_pa_level(pa_level)?;
        }
        self.config = self.config.with_channel(channel).with_pa_level(pa_level);
        Ok(())
    }

    /// Transmit a payload (truncated to 32 bytes) and wait for the outcome.
    ///
    /// The radio is left in [`RadioState::Transmitting`].
    pub fn send(&mut self, payload: &[u8]) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self.ensure_ready()?;
        self.radio.as_tx(&mut self.state)?;
        self.radio.transmit(payload)
    }

    /// Start listening on pipe 0.
    pub fn start_receive(&mut self) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self.ensure_ready()?;
        self.radio.as_rx(&mut self.state)
    }

    /// Fetch a received payload, if the radio flagged one as ready.
    ///
    /// This is meant to be polled while [`RadioState::Listening`].
    pub fn receive(
        &mut self,
    ) -> Result<Option<[u8; PAYLOAD_SIZE]>, Nrf24Error<SPI::Error, CE::Error>> {
        self.ensure_ready()?;
        self.radio.receive()
    }

    /// See [`EsbDetails::print_details()`].
    pub fn print_details(&mut self) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self.ensure_ready()?;
        self.radio.print_details()
    }

    /// Run a [`Command`] and report its outcome as a [`Response`].
    pub fn dispatch(&mut self, command: Command<'_>) -> Response {
        let response = match command {
            Command::Init => Response::from(&self.init()),
            Command::Configure { channel, power } => {
                Response::from(&self.configure(channel, power))
            }
            Command::Send(payload) => Response::from(&self.send(payload)),
            Command::StartReceive => Response::from(&self.start_receive()),
        };
        #[cfg(feature = "defmt")]
        #[cfg(target_os = "none")]
        defmt::debug!("command finished with {} in state {}", response, self.state);
        response
    }
}
