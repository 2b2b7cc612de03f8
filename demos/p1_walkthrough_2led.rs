//! Walkthrough on a two-LED chain at GPIO 22: diagnostic walk, single-LED
//! color, whole-chain color, and compounding brightness.
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

// Two "mains" so the demo body can use Results.
#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    core::panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    // The chain's DIN pin is wired to GPIO 22.
    let channel = PioPixelChannel::new_pio0(p.PIO0, p.PIN_22)?;
    let mut pixels = PixelController::<_, 2>::new(channel)?;
    pixels.reset(Selector::All).await?;

    info!("diagnostic walk over both LEDs");
    pixels.test().await?;
    Timer::after_secs(2).await;

    info!("LED 0 green at half brightness");
    pixels.set(Selector::Single(0), Color::GREEN, 0.5).await?;
    Timer::after_secs(2).await;

    pixels.reset(Selector::Single(0)).await?;
    Timer::after_secs(2).await;

    info!("whole chain white");
    pixels.set(Selector::All, Color::WHITE, 1.0).await?;
    Timer::after_secs(2).await;

    pixels.reset(Selector::All).await?;
    Timer::after_secs(2).await;

    info!("compounding attenuation on LED 0");
    pixels.set(Selector::Single(0), Color::WHITE, 1.0).await?;
    pixels.set_brightness(Selector::Single(0), 0.5).await?;
    Timer::after_secs(2).await;
    // A second 0.5 leaves roughly a quarter of the original level.
    pixels.set_brightness(Selector::Single(0), 0.5).await?;
    info!("last applied brightness: {}", pixels.last_brightness());

    core::future::pending().await // run forever
}
