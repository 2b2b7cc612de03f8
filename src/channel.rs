//! The seam between the [`PixelController`](crate::PixelController) and the
//! hardware that serializes packed words onto the one-wire bus.
//!
//! A channel is configured and activated when it is constructed, and is owned
//! exclusively by one controller for its whole life. The hard-real-time part
//! of the WS2812 protocol (the 1.25 us bit timing and the inter-frame reset
//! gap) lives entirely behind this trait; the controller only decides *what*
//! the frame contains.

use crate::Result;

#[cfg(not(feature = "host"))]
pub mod pio;

/// Significant bits in each packed pixel word.
pub const BITS_PER_PIXEL: u8 = 24;

/// Transmitter for a chain of `N` pixels.
///
/// One `transmit` call clocks out all `N` words, most significant color bit
/// first, then holds the data line low long enough for the chain to latch the
/// frame. Words carry their 24 color bits in the low bits of a `u32`, already
/// in the chain's output byte order (green, red, blue).
pub trait PixelChannel<const N: usize> {
    /// Serialize one full frame to the LED chain.
    ///
    /// Completes only once the frame has been handed to the hardware (or the
    /// peripheral's own buffering has absorbed it). Fails with
    /// [`Error::Hardware`](crate::Error::Hardware) if the transfer cannot be
    /// performed; the caller's buffer is unaffected either way.
    async fn transmit(&mut self, words: &[u32; N]) -> Result<()>;
}
