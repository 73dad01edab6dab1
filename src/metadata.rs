//! Device metadata snapshot.
//!
//! [`DeviceMeta`] is a lightweight, cloneable description of a device that the
//! access layer fills in from whatever its transport knows. Inside this crate
//! it feeds two consumers:
//! - the [rules](crate::rules) table, which matches on `vid`/`pid`,
//!   `product_string`, and `serial_number` to pick a translation per device;
//! - logging and diagnostics output.
//!
//! All fields are optional; unknown stays `None` rather than being guessed.
//!
//! ## Persistence notes
//! `vid`/`pid` plus `serial_number` (when present) are generally stable across
//! reconnects and are what rule files should key on. `path` is an OS/topology
//! string that can change across ports and drivers; treat it as diagnostic
//! first, identity second.

use serde::{Deserialize, Serialize};

/// Snapshot of metadata describing a single device.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeviceMeta {
    /// High-level bus classification (e.g. `"usb"`, `"bluetooth"`, `"virtual"`).
    pub bus: Option<String>,

    /// USB Vendor ID, if known.
    pub vid: Option<u16>,

    /// USB Product ID, if known.
    pub pid: Option<u16>,

    /// Human-readable product name from the driver/firmware.
    pub product_string: Option<String>,

    /// Serial number supplied by firmware/OS, if present.
    pub serial_number: Option<String>,

    /// OS/topological path to the device. Opaque, diagnostic-first.
    pub path: Option<String>,
}

impl DeviceMeta {
    /// Best label for log lines: the product string, or `"unknown device"`.
    pub fn label(&self) -> &str {
        self.product_string.as_deref().unwrap_or("unknown device")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefers_product_string() {
        let mut meta = DeviceMeta::default();
        assert_eq!(meta.label(), "unknown device");
        meta.product_string = Some("Dual Action".into());
        assert_eq!(meta.label(), "Dual Action");
    }

    #[test]
    fn meta_round_trips_through_json() {
        let meta = DeviceMeta {
            bus: Some("usb".into()),
            vid: Some(0x046d),
            pid: Some(0xc216),
            product_string: Some("Dual Action".into()),
            serial_number: None,
            path: Some("/dev/input/js0".into()),
        };
        let json = serde_json::to_string(&meta).unwrap();
        let back: DeviceMeta = serde_json::from_str(&json).unwrap();
        assert_eq!(back.vid, Some(0x046d));
        assert_eq!(back.product_string.as_deref(), Some("Dual Action"));
        assert_eq!(back.serial_number, None);
    }
}
