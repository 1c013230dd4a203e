//! Hardware Resource Assignment
//!
//! Allocates the button and indicator pins to their owning tasks. Each
//! group is handed to exactly one task, so no pin is ever shared.

use assign_resources::assign_resources;
use embassy_rp::peripherals;

assign_resources! {
    /// Push-button inputs, active low with pull-ups
    buttons: ButtonResources {
        btn_a: PIN_28,
        btn_b: PIN_21,
    },
    /// Indicator LED outputs, driven high for on
    leds: LedResources {
        led_a: PIN_5,
        led_b: PIN_10,
    },
}
