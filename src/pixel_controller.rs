//! The pixel word buffer, selector addressing, and brightness arithmetic.
//!
//! See [`PixelController`] for the operations and the crate root for a usage
//! example.

use core::ops::RangeInclusive;

use embassy_time::{Duration, Timer};

use crate::channel::PixelChannel;
use crate::color::{Color, clamp_brightness};
use crate::error::{Error, Result};

/// How long the diagnostic walk holds each palette entry.
pub const TEST_DWELL: Duration = Duration::from_millis(500);

/// Addressing mode for a controller operation: one LED, an inclusive range,
/// or the whole chain.
///
/// `usize` and `RangeInclusive<usize>` convert into selectors, so call sites
/// can pass a bare index or `2..=5` directly.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub enum Selector {
    /// Every LED in the chain.
    All,
    /// One LED by zero-based index.
    Single(usize),
    /// An inclusive index range.
    Range {
        /// First LED of the range.
        first: usize,
        /// Last LED of the range, inclusive.
        last: usize,
    },
}

impl Selector {
    /// Validate against a chain of `len` LEDs, returning inclusive bounds.
    fn resolve(self, len: usize) -> Result<(usize, usize)> {
        match self {
            // len >= 1 is checked at controller construction
            Self::All => Ok((0, len - 1)),
            Self::Single(index) if index < len => Ok((index, index)),
            Self::Range { first, last } if first <= last && last < len => Ok((first, last)),
            Self::Single(_) | Self::Range { .. } => Err(Error::IndexOutOfRange),
        }
    }
}

impl From<usize> for Selector {
    fn from(index: usize) -> Self {
        Self::Single(index)
    }
}

impl From<RangeInclusive<usize>> for Selector {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::Range {
            first: *range.start(),
            last: *range.end(),
        }
    }
}

/// Driver for a chain of `N` WS2812-style LEDs behind one
/// [`PixelChannel`].
///
/// The controller keeps one packed output word per LED. Every mutating
/// operation validates its selector first (a failed call leaves the buffer
/// untouched), rewrites the selected words, and then retransmits the whole
/// frame - transmit cost is O(`N`) per call, which is fine for the short
/// chains this targets. If a transmit fails the buffer keeps its new
/// contents; the physical chain may show a stale frame until the next call.
pub struct PixelController<C, const N: usize> {
    channel: C,
    words: [u32; N],
    last_brightness: f32,
}

impl<C: PixelChannel<N>, const N: usize> PixelController<C, N> {
    /// Number of LEDs in the chain.
    pub const LEN: usize = N;

    /// Create a controller around an already configured channel.
    ///
    /// Fails with [`Error::Configuration`] when `N` is zero. The word buffer
    /// starts all dark, but no frame is pushed to the hardware here; call
    /// [`reset`](Self::reset) with [`Selector::All`] after construction if
    /// the chain's power-on state matters.
    pub fn new(channel: C) -> Result<Self> {
        if N == 0 {
            return Err(Error::Configuration);
        }
        Ok(Self {
            channel,
            words: [0; N],
            last_brightness: 1.0,
        })
    }

    /// Set the selected LEDs to `color`, attenuated by `brightness`.
    ///
    /// Each 8-bit channel is scaled independently to
    /// `floor(channel * brightness)` *before* the word is packed, so the same
    /// call always produces the same buffer contents regardless of what was
    /// displayed before. `brightness` outside `[0.0, 1.0]` is clamped (NaN
    /// counts as 0.0) and the clamped value is recorded as
    /// [`last_brightness`](Self::last_brightness).
    pub async fn set(
        &mut self,
        selector: impl Into<Selector>,
        color: impl Into<Color>,
        brightness: f32,
    ) -> Result<()> {
        let (first, last) = selector.into().resolve(N)?;
        let brightness = clamp_brightness(brightness);
        let word = color.into().scaled(brightness).grb_word();
        for slot in self.words.iter_mut().take(last + 1).skip(first) {
            *slot = word;
        }
        self.last_brightness = brightness;
        self.channel.transmit(&self.words).await
    }

    /// Turn the selected LEDs off.
    pub async fn reset(&mut self, selector: impl Into<Selector>) -> Result<()> {
        let (first, last) = selector.into().resolve(N)?;
        for slot in self.words.iter_mut().take(last + 1).skip(first) {
            *slot = 0;
        }
        self.channel.transmit(&self.words).await
    }

    /// Attenuate the selected LEDs' *already packed* words.
    ///
    /// Unlike [`set`](Self::set), this multiplies each whole 24-bit word by
    /// `brightness` and truncates, so the fractional carry of one channel
    /// bleeds into the next and repeated calls compound: two calls with 0.5
    /// leave roughly a quarter of the original value, not half. Use `set`
    /// when you need exact per-channel levels.
    pub async fn set_brightness(
        &mut self,
        selector: impl Into<Selector>,
        brightness: f32,
    ) -> Result<()> {
        let (first, last) = selector.into().resolve(N)?;
        let brightness = clamp_brightness(brightness);
        for slot in self.words.iter_mut().take(last + 1).skip(first) {
            *slot = scale_word(*slot, brightness);
        }
        self.last_brightness = brightness;
        self.channel.transmit(&self.words).await
    }

    /// Walk every LED through the full palette, for chasing wiring faults.
    ///
    /// Visits each index in order, cycling through the eight
    /// [`Color::PALETTE`] entries at full brightness with a
    /// [`TEST_DWELL`] hold each, then resets that LED before advancing.
    /// Blocking and sequential; a 2-LED chain takes 8 seconds.
    pub async fn test(&mut self) -> Result<()> {
        self.test_with_dwell(TEST_DWELL).await
    }

    /// [`test`](Self::test) with a caller-chosen hold time per color.
    pub async fn test_with_dwell(&mut self, dwell: Duration) -> Result<()> {
        for index in 0..N {
            for color in Color::PALETTE {
                self.set(index, color, 1.0).await?;
                Timer::after(dwell).await;
            }
            self.reset(index).await?;
        }
        Ok(())
    }

    /// The brightness factor most recently applied by [`set`](Self::set) or
    /// [`set_brightness`](Self::set_brightness), after clamping.
    ///
    /// Purely informational: no operation reads it back, so past brightness
    /// never leaks into future calls. Starts at 1.0.
    #[must_use]
    pub const fn last_brightness(&self) -> f32 {
        self.last_brightness
    }

    /// Number of LEDs in the chain.
    #[must_use]
    pub const fn led_count(&self) -> usize {
        N
    }

    /// The packed output words, one per LED, in output byte order.
    #[must_use]
    pub const fn words(&self) -> &[u32; N] {
        &self.words
    }

    /// The owned transmit channel.
    #[must_use]
    pub const fn channel(&self) -> &C {
        &self.channel
    }

    /// Tear the controller apart, handing the channel back for deactivation.
    #[must_use]
    pub fn into_channel(self) -> C {
        self.channel
    }
}

/// Whole-word attenuation in `f64`, truncated toward zero.
fn scale_word(word: u32, brightness: f32) -> u32 {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "brightness is clamped to [0, 1], so the product stays within 24 bits"
    )]
    let scaled = (f64::from(word) * f64::from(brightness)) as u32;
    scaled
}
