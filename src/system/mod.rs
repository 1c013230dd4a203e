//! Core system components for the blink controller
pub mod blink;
pub mod event;
