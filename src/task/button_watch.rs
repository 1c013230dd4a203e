//! Button edge watching
//!
//! One watcher per button line, woken by the falling edge of a press
//! and handing the event off to the dispatcher through the press queue.

use button_blinker::system::event::{ButtonId, Events, PressSender};
use defmt::info;
use embassy_rp::gpio::Input;

/// Watches one button line and queues a press event per falling edge.
///
/// The hand-off must not stall the watcher, so the enqueue is the
/// non-blocking kind: when the queue is full the press is dropped and
/// the user has to press again. Rising edges never wake this task.
#[embassy_executor::task(pool_size = 2)]
pub async fn button_watch(mut button: Input<'static>, id: ButtonId, events: PressSender<'static>) {
    info!("Button {} watcher started", id);
    loop {
        button.wait_for_falling_edge().await;
        events.try_send(Events::ButtonPressed(id));
    }
}
