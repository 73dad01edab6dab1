//! Device trait and identity types.
//!
//! A [`Device`] is anything the access layer can present as a fixed, ordered
//! list of raw channels: a HID joystick, an XInput pad, or a test fixture such
//! as [`VirtualDevice`](crate::backends::virtual_input::VirtualDevice). This
//! crate never opens hardware itself; host applications implement the trait
//! over their transport of choice and hand devices to the translation layer.
//!
//! # Channel ordering
//! [`Device::channels`] must return the same channels, in the same order, for
//! the lifetime of the device. Translations walk the slice once at
//! construction and capture handles by position; a device that reshuffles or
//! grows its channel list after that point breaks every profile built on it.
//!
//! # Identity
//! [`Device::id`] is a stable string identifier, unique within a session.
//! Conventionally it is the [`DeviceFingerprint`] rendered with `to_string()`,
//! which survives reconnects as long as the fingerprint fields do. Persisted
//! rule files should match on metadata ([`DeviceMeta`]) rather than the id
//! string, since `path`-based fingerprints can drift across ports.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::channel::ChannelHandle;
use crate::metadata::DeviceMeta;

/// A source of raw input channels.
pub trait Device {
    /// Stable identifier, unique within a session.
    fn id(&self) -> &str;

    /// User-facing label (product string or synthesized name).
    fn name(&self) -> &str;

    /// Metadata snapshot used for rule matching, logging, and diagnostics.
    fn metadata(&self) -> DeviceMeta;

    /// Raw channels in the device's fixed discovery order.
    ///
    /// The slice must not change length or order once the device is handed
    /// out; translations index into it by position.
    fn channels(&self) -> &[ChannelHandle];
}

/// Stable identity data for a device, used for persistence and logging.
///
/// `vendor_id`/`product_id` come from the transport; `serial_number` is
/// preferred as the distinguishing tail when the firmware provides one, with
/// `path` as the fallback for serial-less hardware.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceFingerprint {
    /// USB Vendor ID (0 when not applicable, e.g. virtual devices).
    pub vendor_id: u16,
    /// USB Product ID (0 when not applicable).
    pub product_id: u16,
    /// Firmware serial number, if present.
    pub serial_number: Option<String>,
    /// OS/topological path, if known. Less stable than a serial.
    pub path: Option<String>,
}

impl fmt::Display for DeviceFingerprint {
    /// Renders `vvvv:pppp:tail` where the tail is the serial number when
    /// present, else the path, else `anon`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:04x}:", self.vendor_id, self.product_id)?;
        match (&self.serial_number, &self.path) {
            (Some(serial), _) => f.write_str(serial),
            (None, Some(path)) => f.write_str(path),
            (None, None) => f.write_str("anon"),
        }
    }
}
