#![allow(missing_docs)]

use embassy_futures::block_on;
use embassy_time::Duration;
use pico_neopixel::host_channel::RecordingChannel;
use pico_neopixel::{Color, PixelController};

fn grb(color: Color) -> u32 {
    u32::from(color.green()) << 16 | u32::from(color.red()) << 8 | u32::from(color.blue())
}

#[test]
fn walk_visits_each_led_through_the_palette_then_resets_it() {
    let mut pixels = PixelController::<_, 2>::new(RecordingChannel::new()).unwrap();
    block_on(pixels.test_with_dwell(Duration::from_micros(1))).unwrap();

    // Per LED: one frame per palette entry plus the reset frame.
    let frames = pixels.channel().frames();
    assert_eq!(frames.len(), 2 * (Color::PALETTE.len() + 1));

    for (led, chunk) in frames.chunks(Color::PALETTE.len() + 1).enumerate() {
        let other = 1 - led;
        for (frame, color) in chunk.iter().zip(Color::PALETTE) {
            assert_eq!(frame[led], grb(color));
            assert_eq!(frame[other], 0);
        }
        assert_eq!(chunk[Color::PALETTE.len()], [0, 0]);
    }

    // The chain ends dark.
    assert_eq!(pixels.channel().last_frame(), Some(&[0, 0]));
    assert_eq!(pixels.words(), &[0, 0]);
}

#[test]
fn walk_runs_at_full_brightness() {
    let mut pixels = PixelController::<_, 1>::new(RecordingChannel::new()).unwrap();
    block_on(pixels.set(0_usize, Color::BLUE, 0.25)).unwrap();
    block_on(pixels.test_with_dwell(Duration::from_micros(1))).unwrap();
    assert_eq!(pixels.last_brightness(), 1.0);
}
