#![allow(missing_docs)]

use std::collections::HashSet;

use pico_neopixel::{Color, Rgb};

#[test]
fn named_constants_match_documented_values() {
    assert_eq!(Color::BLACK.packed(), 0x000000);
    assert_eq!(Color::WHITE.packed(), 0xFFFFFF);
    assert_eq!(Color::RED.packed(), 0xFF0000);
    assert_eq!(Color::GREEN.packed(), 0x00FF00);
    assert_eq!(Color::BLUE.packed(), 0x0000FF);
    assert_eq!(Color::YELLOW.packed(), 0xFFFF00);
    assert_eq!(Color::MAGENTA.packed(), 0xFF00FF);
    assert_eq!(Color::CYAN.packed(), 0x00FFFF);
}

#[test]
fn packing_is_injective_over_a_channel_grid() {
    let samples = [0u8, 1, 127, 254, 255];
    let mut seen = HashSet::new();
    for red in samples {
        for green in samples {
            for blue in samples {
                assert!(seen.insert(Color::rgb(red, green, blue).packed()));
            }
        }
    }
    assert_eq!(seen.len(), samples.len().pow(3));
}

#[test]
fn components_round_trip() {
    let color = Color::rgb(16, 32, 48);
    assert_eq!(color.red(), 16);
    assert_eq!(color.green(), 32);
    assert_eq!(color.blue(), 48);
}

#[test]
fn separate_components_convert_like_the_packing_function() {
    let from_rgb = Color::from(Rgb::new(16, 32, 48));
    assert_eq!(from_rgb, Color::rgb(16, 32, 48));
}

#[test]
fn packed_input_is_masked_to_24_bits() {
    assert_eq!(Color::from(0xFF00_0000_u32).packed(), 0x000000);
    assert_eq!(Color::from(0x01FF_8040_u32), Color::rgb(0xFF, 0x80, 0x40));
}

#[test]
fn scaling_floors_each_channel_independently() {
    assert_eq!(Color::WHITE.scaled(0.5), Color::rgb(127, 127, 127));
    assert_eq!(Color::rgb(10, 20, 30).scaled(0.25), Color::rgb(2, 5, 7));
    assert_eq!(Color::MAGENTA.scaled(1.0), Color::MAGENTA);
    assert_eq!(Color::WHITE.scaled(0.0), Color::BLACK);
}

#[test]
fn scaling_clamps_out_of_range_factors() {
    assert_eq!(Color::WHITE.scaled(2.0), Color::WHITE);
    assert_eq!(Color::WHITE.scaled(-1.0), Color::BLACK);
    assert_eq!(Color::WHITE.scaled(f32::NAN), Color::BLACK);
}

#[test]
fn palette_is_the_eight_colors_in_cycle_order() {
    assert_eq!(
        Color::PALETTE,
        [
            Color::BLACK,
            Color::RED,
            Color::GREEN,
            Color::BLUE,
            Color::CYAN,
            Color::MAGENTA,
            Color::YELLOW,
            Color::WHITE,
        ]
    );
}
