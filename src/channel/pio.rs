//! WS2812 output channel on a PIO state machine.
//!
//! The timing program is the usual 10-cycles-per-bit WS2812 sequence (T1=2,
//! T2=5, T3=3), clocked at a fixed 8 MHz so one bit takes 1.25 us with
//! T0H around 400 ns and T1H around 800 ns. Loading the program, setting the
//! clock divider, and enabling the state machine all happen in the
//! constructor; after that the channel only ever feeds words into the TX
//! FIFO.

use embassy_rp::Peri;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::interrupt::typelevel::Binding;
use embassy_rp::peripherals::{PIO0, PIO1};
#[cfg(feature = "pico2")]
use embassy_rp::peripherals::PIO2;
use embassy_rp::pio::program::{Assembler, JmpCondition, OutDestination, SetDestination, SideSet};
use embassy_rp::pio::{
    Common, Config, FifoJoin, Instance, InterruptHandler, LoadedProgram, Pio, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_time::{Duration, Timer};
use fixed::types::U24F8;

use crate::channel::{BITS_PER_PIXEL, PixelChannel};
use crate::error::Result;
#[cfg(feature = "pico2")]
use crate::pio_irqs::Pio2Irqs;
use crate::pio_irqs::{Pio0Irqs, Pio1Irqs};

const T1: u8 = 2;
const T2: u8 = 5;
const T3: u8 = 3;
const RESET_DELAY_US: u64 = 55;

// The OSR shifts left, so the 24 color bits must sit at the top of the word.
const WORD_ALIGN_SHIFT: u32 = 8;

fn load_pixel_program<'d, PIO: Instance>(common: &mut Common<'d, PIO>) -> LoadedProgram<'d, PIO> {
    let side_set = SideSet::new(false, 1, false);
    let mut assembler: Assembler<32> = Assembler::new_with_side_set(side_set);

    let mut wrap_target = assembler.label();
    let mut wrap_source = assembler.label();
    let mut do_zero = assembler.label();
    assembler.set_with_side_set(SetDestination::PINDIRS, 1, 0);
    assembler.bind(&mut wrap_target);
    assembler.out_with_delay_and_side_set(OutDestination::X, 1, T3 - 1, 0);
    assembler.jmp_with_delay_and_side_set(JmpCondition::XIsZero, &mut do_zero, T1 - 1, 1);
    assembler.jmp_with_delay_and_side_set(JmpCondition::Always, &mut wrap_target, T2 - 1, 1);
    assembler.bind(&mut do_zero);
    assembler.nop_with_delay_and_side_set(T2 - 1, 0);
    assembler.bind(&mut wrap_source);

    let program = assembler.assemble_with_wrap(wrap_source, wrap_target);
    common.load_program(&program)
}

/// CPU-fed WS2812 channel on state machine 0 of one PIO block.
///
/// Construction maps the data pin, loads the timing program, divides the
/// system clock down to the program's fixed 8 MHz, and enables the state
/// machine. One channel takes the whole PIO peripheral, so a chain never
/// shares its handle with anything else.
pub struct PioPixelChannel<'d, PIO: Instance, const N: usize> {
    // Owns the PIO instruction memory the loaded program lives in.
    _common: Common<'d, PIO>,
    sm: StateMachine<'d, PIO, 0>,
}

impl<'d, PIO: Instance, const N: usize> PioPixelChannel<'d, PIO, N> {
    /// Clock the timing program runs at, in hertz.
    pub const FREQUENCY_HZ: u32 = 8_000_000;

    /// Build a channel from a PIO peripheral, its interrupt binding, and the
    /// GPIO pin wired to the chain's DIN.
    ///
    /// Prefer [`new_pio0`](Self::new_pio0) and friends unless you bind the
    /// PIO interrupts yourself.
    pub fn new(
        pio: Peri<'d, PIO>,
        irqs: impl Binding<PIO::Interrupt, InterruptHandler<PIO>>,
        pin: Peri<'d, impl PioPin>,
    ) -> Result<Self> {
        let Pio {
            mut common,
            mut sm0,
            ..
        } = Pio::new(pio, irqs);
        let program = load_pixel_program(&mut common);

        let mut cfg = Config::default();
        let out_pin = common.make_pio_pin(pin);
        cfg.set_out_pins(&[&out_pin]);
        cfg.set_set_pins(&[&out_pin]);
        cfg.use_program(&program, &[&out_pin]);

        let clock_freq = U24F8::from_num(clk_sys_freq() / 1000);
        let program_freq = U24F8::from_num(Self::FREQUENCY_HZ / 1000);
        cfg.clock_divider = clock_freq / program_freq;

        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: BITS_PER_PIXEL,
            direction: ShiftDirection::Left,
        };

        sm0.set_config(&cfg);
        sm0.set_enable(true);

        Ok(Self {
            _common: common,
            sm: sm0,
        })
    }
}

impl<'d, const N: usize> PioPixelChannel<'d, PIO0, N> {
    /// Build a channel on PIO0 with the crate's interrupt binding.
    pub fn new_pio0(pio: Peri<'d, PIO0>, pin: Peri<'d, impl PioPin>) -> Result<Self> {
        Self::new(pio, Pio0Irqs, pin)
    }
}

impl<'d, const N: usize> PioPixelChannel<'d, PIO1, N> {
    /// Build a channel on PIO1 with the crate's interrupt binding.
    pub fn new_pio1(pio: Peri<'d, PIO1>, pin: Peri<'d, impl PioPin>) -> Result<Self> {
        Self::new(pio, Pio1Irqs, pin)
    }
}

#[cfg(feature = "pico2")]
impl<'d, const N: usize> PioPixelChannel<'d, PIO2, N> {
    /// Build a channel on PIO2 with the crate's interrupt binding.
    pub fn new_pio2(pio: Peri<'d, PIO2>, pin: Peri<'d, impl PioPin>) -> Result<Self> {
        Self::new(pio, Pio2Irqs, pin)
    }
}

impl<'d, PIO: Instance, const N: usize> PixelChannel<N> for PioPixelChannel<'d, PIO, N> {
    async fn transmit(&mut self, words: &[u32; N]) -> Result<()> {
        let tx = self.sm.tx();
        for word in words {
            tx.wait_push(*word << WORD_ALIGN_SHIFT).await;
        }

        // Hold the line low so the chain latches the frame (>= 50 us).
        Timer::after(Duration::from_micros(RESET_DELAY_US)).await;
        Ok(())
    }
}
