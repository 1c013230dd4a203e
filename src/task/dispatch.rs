//! Press Event Dispatch
//!
//! This module contains the dispatcher task that drains the press queue
//! and fans each accepted press out to the matching blink controller.

use button_blinker::system::event::{Events, PressReceiver, ToggleSignal};
use defmt::info;

/// Dispatcher task
///
/// Blocks on the press queue and, per event, gives the toggle token of
/// the indicator belonging to the pressed button. Giving a token that
/// is already pending is a no-op; the controller observes at most one
/// outstanding toggle request. The dispatcher never reads or writes
/// blink state itself.
#[embassy_executor::task]
pub async fn dispatch(events: PressReceiver<'static>, toggles: [&'static ToggleSignal; 2]) {
    info!("Dispatcher started");
    loop {
        match events.receive().await {
            Events::ButtonPressed(id) => {
                info!("Button {} pressed", id);
                toggles[id.index()].signal(());
            }
        }
    }
}
