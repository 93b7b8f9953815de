//! This module defines the generic traits that may
//! need to be imported to use radio implementations.
//!
//! Since rustc only allows using trait methods when the trait is in scope,
//! it is convenient to import these traits with the `*` syntax.
//! ```
//! use nrf24::radio::prelude::*;
//! ```
use crate::{radio::RadioConfig, PaLevel, RadioState, StatusFlags};

/// A trait to represent manipulation of a channel (aka frequency)
/// for the radio's transmissions.
pub trait EsbChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected channel.
    ///
    /// The channel is written as is; callers are expected to validate it
    /// with [`RadioConfig::validate()`] first.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the radio's currently selected channel.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// A trait to represent manipulation of the power amplitude level
pub trait EsbPaLevel {
    type PaLevelErrorType;

    /// Get the radio's current PA level.
    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType>;

    /// Set the radio's PA level, leaving the other RF_SETUP bits untouched.
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType>;
}

/// A trait to represent manipulation of [`StatusFlags`]
pub trait EsbStatus {
    type StatusErrorType;

    /// Get the [`StatusFlags`] sampled by the most recent SPI transaction.
    fn get_status_flags(&self, flags: &mut StatusFlags);

    /// Clear the radio's IRQ status flags.
    ///
    /// Set any flag in `flags` to `true` to clear the corresponding event.
    /// Flags that are `false` are left untouched.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;

    /// Refresh the cached [`StatusFlags`] with a no-op SPI transaction.
    fn update(&mut self) -> Result<(), Self::StatusErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs
pub trait EsbFifo {
    type FifoErrorType;

    /// Discard all 3 layers in the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Discard all 3 layers in the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;
}

/// A trait to represent debug output
pub trait EsbDetails {
    type DetailsErrorType;

    /// Print details about radio's current configuration.
    ///
    /// This does nothing unless the `defmt` or `std` feature is enabled.
    /// It should only be used for debugging development.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}

/// A trait to represent the radio's power-on configuration sequence.
pub trait EsbInit {
    type ConfigErrorType;

    /// Initialize the radio's hardware with the given `config`.
    ///
    /// This function
    ///
    /// - waits for the radio to finish its power-on reset
    /// - powers the radio down (with CRC enabled) and checks that it responds
    /// - writes the address width, channel, data rate, PA level, and pipe 0 setup
    /// - clears all status flags and flushes both FIFOs
    ///
    /// The first failing step aborts the sequence; registers written before it are
    /// not rolled back. `state` is set to [`RadioState::Uninitialized`] before the
    /// first step and only becomes [`RadioState::Standby`] when every step succeeded.
    fn init(
        &mut self,
        config: &RadioConfig,
        state: &mut RadioState,
    ) -> Result<(), Self::ConfigErrorType>;
}

/// A trait to represent the radio's primary modes.
pub trait EsbMode {
    type ModeErrorType;

    /// Power up the radio as a primary transmitter.
    ///
    /// CE is left inactive; a transmission is started by [`EsbRadio::transmit()`].
    /// On success, `state` becomes [`RadioState::Transmitting`].
    fn as_tx(&mut self, state: &mut RadioState) -> Result<(), Self::ModeErrorType>;

    /// Power up the radio as a primary receiver and start listening.
    ///
    /// On success, `state` becomes [`RadioState::Listening`].
    fn as_rx(&mut self, state: &mut RadioState) -> Result<(), Self::ModeErrorType>;

    /// Is the radio configured as a primary receiver?
    fn is_rx(&self) -> bool;
}

/// A trait to represent payload transmission and reception.
pub trait EsbRadio {
    type RadioErrorType;

    /// Blocking function to transmit a given payload.
    ///
    /// Payloads longer than 32 bytes are silently truncated. Shorter payloads are
    /// padded with zeros, so exactly 32 bytes are always sent over the air.
    ///
    /// This function blocks until the radio reports the transmission succeeded
    /// or failed, or until the poll limit is reached.
    fn transmit(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// Fetch one payload from the RX FIFO if the radio has flagged one as ready.
    ///
    /// Returns [`None`] when no payload is available; this is not an error.
    fn receive(&mut self) -> Result<Option<[u8; 32]>, Self::RadioErrorType>;
}
