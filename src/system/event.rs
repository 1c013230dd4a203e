//! System Events
//!
//! Defines press events and the channel plumbing between the button
//! watchers, the dispatcher and the blink controllers.

use defmt::Format;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::signal::Signal;

/// Capacity of the press event queue. Presses arriving while eight are
/// already queued are dropped.
pub const PRESS_QUEUE_DEPTH: usize = 8;

/// Multi-producer, single-consumer queue of accepted button presses
pub type PressQueue = Channel<CriticalSectionRawMutex, Events, PRESS_QUEUE_DEPTH>;

/// Consumer side of the press queue, owned by the dispatcher
pub type PressReceiver<'a> = Receiver<'a, CriticalSectionRawMutex, Events, PRESS_QUEUE_DEPTH>;

/// Binary toggle token, one per indicator.
///
/// Repeated gives coalesce until the owning blink controller takes the
/// token, so a burst of presses counts as one toggle request.
pub type ToggleSignal = Signal<CriticalSectionRawMutex, ()>;

/// System-wide events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum Events {
    /// Button pressed (falling edge on the button line)
    ButtonPressed(ButtonId),
}

/// Button identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum ButtonId {
    A,
    B,
}

impl ButtonId {
    /// Index of the toggle token belonging to this button's indicator
    pub fn index(self) -> usize {
        match self {
            ButtonId::A => 0,
            ButtonId::B => 1,
        }
    }
}

/// Send-only handle to the press queue for the button watchers.
///
/// Exposes nothing but the non-blocking enqueue, so a watcher can never
/// park itself on a full queue.
pub struct PressSender<'a>(Sender<'a, CriticalSectionRawMutex, Events, PRESS_QUEUE_DEPTH>);

impl<'a> PressSender<'a> {
    pub fn new(sender: Sender<'a, CriticalSectionRawMutex, Events, PRESS_QUEUE_DEPTH>) -> Self {
        Self(sender)
    }

    /// Queues a press event without waiting.
    ///
    /// Returns `false` when the queue was full and the event was
    /// dropped; the next press simply retries.
    pub fn try_send(&self, event: Events) -> bool {
        self.0.try_send(event).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use critical_section as _; // host critical-section implementation

    #[test]
    fn press_sender_drops_when_queue_full() {
        let queue: PressQueue = Channel::new();
        let sender = PressSender::new(queue.sender());

        for _ in 0..PRESS_QUEUE_DEPTH {
            assert!(sender.try_send(Events::ButtonPressed(ButtonId::A)));
        }

        // The ninth press has nowhere to go and is dropped.
        assert!(!sender.try_send(Events::ButtonPressed(ButtonId::B)));

        // The queued presses are intact, in order, and nothing else
        // made it in.
        for _ in 0..PRESS_QUEUE_DEPTH {
            assert_eq!(
                queue.try_receive().unwrap(),
                Events::ButtonPressed(ButtonId::A)
            );
        }
        assert!(queue.try_receive().is_err());
    }

    #[test]
    fn presses_drain_in_arrival_order() {
        let queue: PressQueue = Channel::new();
        let sender = PressSender::new(queue.sender());

        sender.try_send(Events::ButtonPressed(ButtonId::A));
        sender.try_send(Events::ButtonPressed(ButtonId::B));
        sender.try_send(Events::ButtonPressed(ButtonId::A));

        assert_eq!(
            queue.try_receive().unwrap(),
            Events::ButtonPressed(ButtonId::A)
        );
        assert_eq!(
            queue.try_receive().unwrap(),
            Events::ButtonPressed(ButtonId::B)
        );
        assert_eq!(
            queue.try_receive().unwrap(),
            Events::ButtonPressed(ButtonId::A)
        );
    }

    #[test]
    fn toggle_signal_coalesces_rapid_gives() {
        let toggle = ToggleSignal::new();

        toggle.signal(());
        toggle.signal(());

        // Two gives before the controller resumes collapse into one
        // pending token.
        assert!(toggle.try_take().is_some());
        assert!(toggle.try_take().is_none());
    }

    #[test]
    fn dispatch_index_reaches_only_the_matching_indicator() {
        let toggles = [ToggleSignal::new(), ToggleSignal::new()];

        toggles[ButtonId::B.index()].signal(());

        assert!(toggles[ButtonId::A.index()].try_take().is_none());
        assert!(toggles[ButtonId::B.index()].try_take().is_some());
    }

    #[test]
    fn button_index_is_stable() {
        assert_eq!(ButtonId::A.index(), 0);
        assert_eq!(ButtonId::B.index(), 1);
    }
}
