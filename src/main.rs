//! Blink controller firmware entry point
//!
//! Initializes system and spawns control tasks.

#![no_std]
#![no_main]

use crate::task::{button_watch::button_watch, dispatch::dispatch, led_blink::led_blink};
use button_blinker::system::event::{ButtonId, PressQueue, PressSender, ToggleSignal};
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use task::resources::{AssignedResources, ButtonResources, LedResources};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Task implementations
mod task;

/// Queue of accepted button presses, filled by the button watchers and
/// drained by the dispatcher
static PRESS_QUEUE: PressQueue = PressQueue::new();

/// Toggle tokens, one per indicator, given by the dispatcher and taken
/// by the owning blink controller
static TOGGLE_A: ToggleSignal = ToggleSignal::new();
static TOGGLE_B: ToggleSignal = ToggleSignal::new();

/// Executor for the press hand-off path. It runs from a software
/// interrupt, so the watchers and the dispatcher preempt the blink
/// controllers on the thread executor.
static HANDOFF_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    HANDOFF_EXECUTOR.on_interrupt()
}

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // Split the resources into separate groups for each task, for all the resources that we do not share between tasks.
    let r = split_resources!(p);

    // Buttons are wired to ground, so a press is a falling edge.
    let btn_a = Input::new(r.buttons.btn_a, Pull::Up);
    let btn_b = Input::new(r.buttons.btn_b, Pull::Up);

    // Indicators start dark; each controller resets its own LED to low
    // whenever it is idle.
    let led_a = Output::new(r.leds.led_a, Level::Low);
    let led_b = Output::new(r.leds.led_b, Level::Low);

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let handoff = HANDOFF_EXECUTOR.start(interrupt::SWI_IRQ_1);

    // The watchers get a send-only handle to the press queue; only the
    // dispatcher holds the receiving side.
    handoff
        .spawn(button_watch(
            btn_a,
            ButtonId::A,
            PressSender::new(PRESS_QUEUE.sender()),
        ))
        .unwrap();
    handoff
        .spawn(button_watch(
            btn_b,
            ButtonId::B,
            PressSender::new(PRESS_QUEUE.sender()),
        ))
        .unwrap();
    handoff
        .spawn(dispatch(PRESS_QUEUE.receiver(), [&TOGGLE_A, &TOGGLE_B]))
        .unwrap();

    // Finally spawn the blink controllers on the thread executor
    spawner
        .spawn(led_blink(led_a, ButtonId::A, &TOGGLE_A))
        .unwrap();
    spawner
        .spawn(led_blink(led_b, ButtonId::B, &TOGGLE_B))
        .unwrap();
}
