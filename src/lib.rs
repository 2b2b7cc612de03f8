//! Drive WS2812 ("NeoPixel") LED chains from a Raspberry Pi Pico PIO block.
//!
//! The [`PixelController`] owns one packed 24-bit color word per LED and an
//! exclusively owned [`PixelChannel`](channel::PixelChannel) that serializes
//! those words onto the one-wire bus. Every mutating operation updates the
//! word buffer and then retransmits the whole frame, so the buffer is always
//! the source of truth for what the chain was last told to show.
//!
//! On hardware, [`channel::pio::PioPixelChannel`] runs the fixed WS2812
//! timing program on a PIO state machine. With the `host` feature the same
//! controller drives the in-memory channels in [`host_channel`] instead,
//! which is how this crate is tested:
//!
//! ```
//! use embassy_futures::block_on;
//! use pico_neopixel::host_channel::RecordingChannel;
//! use pico_neopixel::{Color, PixelController, Result, Selector};
//!
//! fn main() -> Result<()> {
//!     let mut pixels = PixelController::<_, 8>::new(RecordingChannel::new())?;
//!     block_on(async {
//!         pixels.set(Selector::All, Color::BLUE, 0.5).await?;
//!         pixels.set(0..=3_usize, Color::rgb(255, 128, 0), 1.0).await?;
//!         pixels.reset(Selector::All).await
//!     })
//! }
//! ```
//!
//! Run the host tests with `cargo test --no-default-features --features host`.
//!
//! A controller mutates through `&mut self`, so the compiler already enforces
//! the one-writer-per-chain rule. If several tasks must share one chain, wrap
//! the controller in your executor's mutex; this crate does not.
#![cfg_attr(not(feature = "host"), no_std)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

pub mod channel;
pub mod color;
mod error;
// In-memory channels for testing on the host without embassy_rp
#[cfg(feature = "host")]
pub mod host_channel;
#[cfg(not(feature = "host"))]
#[doc(hidden)]
pub mod pio_irqs;
pub mod pixel_controller;

pub use crate::color::{Color, Rgb};
pub use crate::error::{Error, Result};
pub use crate::pixel_controller::{PixelController, Selector};
