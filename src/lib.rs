#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`Nrf24Driver::new()`](fn@crate::driver::Nrf24Driver::new)
//! - [`Nrf24Driver::with_config()`](fn@crate::driver::Nrf24Driver::with_config)
//! - [`Nrf24Driver::init()`](fn@crate::driver::Nrf24Driver::init)
//! - [`Nrf24Driver::configure()`](fn@crate::driver::Nrf24Driver::configure)
//! - [`Nrf24Driver::send()`](fn@crate::driver::Nrf24Driver::send)
//! - [`Nrf24Driver::start_receive()`](fn@crate::driver::Nrf24Driver::start_receive)
//! - [`Nrf24Driver::receive()`](fn@crate::driver::Nrf24Driver::receive)
//! - [`Nrf24Driver::dispatch()`](fn@crate::driver::Nrf24Driver::dispatch)
//!
//! ## Advanced API
//!
//! These operate on the [`Nrf24`](struct@crate::radio::Nrf24) hardware layer directly
//! and require the traits in [`radio::prelude`] to be in scope.
//!
//! - [`Nrf24::read_register()`](fn@crate::radio::Nrf24::read_register)
//! - [`Nrf24::write_register()`](fn@crate::radio::Nrf24::write_register)
//! - [`Nrf24::read_register_multi()`](fn@crate::radio::Nrf24::read_register_multi)
//! - [`Nrf24::write_register_multi()`](fn@crate::radio::Nrf24::write_register_multi)
//! - [`Nrf24::as_tx()`](radio/struct.Nrf24.html#method.as_tx)
//! - [`Nrf24::as_rx()`](radio/struct.Nrf24.html#method.as_rx)
//! - [`Nrf24::transmit()`](radio/struct.Nrf24.html#method.transmit)
//! - [`Nrf24::receive()`](radio/struct.Nrf24.html#method.receive)
//! - [`Nrf24::update()`](radio/struct.Nrf24.html#method.update)
//! - [`Nrf24::get_status_flags()`](radio/struct.Nrf24.html#method.get_status_flags)
//! - [`Nrf24::clear_status_flags()`](radio/struct.Nrf24.html#method.clear_status_flags)
//! - [`Nrf24::flush_rx()`](radio/struct.Nrf24.html#method.flush_rx)
//! - [`Nrf24::flush_tx()`](radio/struct.Nrf24.html#method.flush_tx)
//! - [`Nrf24::print_details()`](radio/struct.Nrf24.html#method.print_details)
//!
#![no_std]

mod types;
pub use types::{DataRate, PaLevel, RadioState, StatusFlags};
pub mod driver;
pub mod radio;

#[doc(inline)]
pub use driver::{Command, Nrf24Driver, Response};

#[cfg(test)]
mod test;
