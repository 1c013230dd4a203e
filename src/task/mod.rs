pub mod button_watch;
pub mod dispatch;
pub mod led_blink;
pub mod resources;
