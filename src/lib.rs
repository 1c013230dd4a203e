//! Core logic for the dual push-button blink controller.
//!
//! Everything here is hardware-free so the event plumbing and the
//! toggle state machine can be exercised on the host; the firmware
//! binary in `main.rs` wires it to pins and tasks.

#![cfg_attr(not(test), no_std)]

/// System core modules
pub mod system;
