//! Indicator Blink Control
//!
//! One blink controller per indicator LED, instantiated from a single
//! task body with the indicator's own pin and toggle token. The two
//! controllers share no state and never wait on each other.

use button_blinker::system::blink::BlinkState;
use button_blinker::system::event::{ButtonId, ToggleSignal};
use defmt::info;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Timer};

/// Half-period of the blink cycle: 100 ms on, 100 ms off
const BLINK_PHASE: Duration = Duration::from_millis(100);

/// Blink controller task
///
/// Idle holds the LED low and blocks on the toggle token. Blinking
/// drives one on phase and one off phase per loop, re-checking the
/// token after each phase so a stop request takes effect within one
/// full period and always leaves the LED off.
#[embassy_executor::task(pool_size = 2)]
pub async fn led_blink(mut led: Output<'static>, id: ButtonId, toggle: &'static ToggleSignal) {
    let mut state = BlinkState::Idle;
    loop {
        match state {
            BlinkState::Idle => {
                led.set_low();
                toggle.wait().await;
                state = state.observe(true);
                info!("Indicator {}: blinking", id);
            }
            BlinkState::Blinking => {
                led.set_high();
                Timer::after(BLINK_PHASE).await;
                state = state.observe(toggle.try_take().is_some());
                if state == BlinkState::Idle {
                    info!("Indicator {}: off", id);
                    continue;
                }

                led.set_low();
                Timer::after(BLINK_PHASE).await;
                state = state.observe(toggle.try_take().is_some());
                if state == BlinkState::Idle {
                    info!("Indicator {}: off", id);
                }
            }
        }
    }
}
