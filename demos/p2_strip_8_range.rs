//! Range selectors and a continuous palette sweep on an eight-LED strip.
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::convert::Infallible;

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::Timer;
use pico_neopixel::channel::pio::PioPixelChannel;
use pico_neopixel::{Color, PixelController, Result, Selector};
use {defmt_rtt as _, panic_probe as _};

const LEN: usize = 8;

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    core::panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let channel = PioPixelChannel::new_pio0(p.PIO0, p.PIN_2)?;
    let mut pixels = PixelController::<_, LEN>::new(channel)?;
    pixels.reset(Selector::All).await?;

    info!("lower half cyan, upper half magenta");
    pixels.set(0..=3_usize, Color::CYAN, 0.4).await?;
    pixels.set(4..=7_usize, Color::MAGENTA, 0.4).await?;
    Timer::after_secs(2).await;

    info!("sweeping the palette");
    loop {
        for color in Color::PALETTE {
            pixels.set(Selector::All, color, 0.3).await?;
            Timer::after_millis(400).await;
        }
        // Fade the last palette entry out in place.
        pixels.set_brightness(Selector::All, 0.5).await?;
        Timer::after_millis(400).await;
    }
}
