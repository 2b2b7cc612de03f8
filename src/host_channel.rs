//! In-memory pixel channels for exercising the driver without hardware.
//!
//! Only built with the `host` feature; the integration tests under `tests/`
//! run the full controller against these doubles.

use crate::channel::PixelChannel;
use crate::error::{Error, Result};

/// Records every transmitted frame for later assertions.
#[derive(Debug, Default)]
pub struct RecordingChannel<const N: usize> {
    frames: Vec<[u32; N]>,
}

impl<const N: usize> RecordingChannel<N> {
    /// Create a channel with no recorded frames.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Every frame transmitted so far, oldest first.
    #[must_use]
    pub fn frames(&self) -> &[[u32; N]] {
        &self.frames
    }

    /// The most recently transmitted frame, if any.
    #[must_use]
    pub fn last_frame(&self) -> Option<&[u32; N]> {
        self.frames.last()
    }
}

impl<const N: usize> PixelChannel<N> for RecordingChannel<N> {
    async fn transmit(&mut self, words: &[u32; N]) -> Result<()> {
        self.frames.push(*words);
        Ok(())
    }
}

/// Fails every transmit with [`Error::Hardware`].
#[derive(Debug, Default)]
pub struct FailingChannel;

impl<const N: usize> PixelChannel<N> for FailingChannel {
    async fn transmit(&mut self, _words: &[u32; N]) -> Result<()> {
        Err(Error::Hardware)
    }
}
