//! Device sources for `padmap`.
//!
//! This crate deliberately ships no hardware transports: opening HID handles,
//! XInput slots, or evdev nodes is the host application's business. What lives
//! here is the one [`Device`](crate::device::Device) implementation the
//! translation layer itself needs — an in-memory device for tests, demos, and
//! headless rehearsal.

pub mod virtual_input;
