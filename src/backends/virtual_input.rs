//! In-memory device for tests, demos, and headless rehearsal.
//!
//! [`VirtualDevice`] implements [`Device`](crate::device::Device) over plain
//! memory: you declare a channel layout up front, then drive values through
//! setter methods as if reports were arriving from hardware. Translation
//! profiles built on it behave exactly as they would on a real device, which
//! makes it the fixture of choice for exercising profile and rules code
//! without plugging anything in.
//!
//! # Lifecycle
//! Declare the full layout with [`add_axis`](VirtualDevice::add_axis) /
//! [`add_button`](VirtualDevice::add_button) **before** building profiles on
//! the device; profiles capture the channel list at construction and will not
//! see later additions. After that, drive values freely — the setters take
//! `&self`, so a test can keep injecting while profiles hold their handles.

use std::sync::Arc;

use crate::channel::{ChannelHandle, ChannelKind, RawChannel};
use crate::device::{Device, DeviceFingerprint};
use crate::metadata::DeviceMeta;

/// Memory-backed [`Device`] with a caller-defined channel layout.
pub struct VirtualDevice {
    id: String,
    name: String,
    meta: DeviceMeta,
    channels: Vec<ChannelHandle>,
}

impl VirtualDevice {
    /// Creates an empty device in virtual slot `slot`.
    ///
    /// The slot number only disambiguates identity: the fingerprint (and thus
    /// [`Device::id`]) is synthesized as `0000:0000:virtual:{slot}`.
    pub fn new(slot: u32, name: &str) -> Self {
        let tag = format!("virtual:{slot}");
        let fingerprint = DeviceFingerprint {
            vendor_id: 0,
            product_id: 0,
            serial_number: Some(tag.clone()),
            path: Some(tag.clone()),
        };

        Self {
            id: fingerprint.to_string(),
            name: name.to_owned(),
            meta: DeviceMeta {
                bus: Some("virtual".into()),
                product_string: Some(name.to_owned()),
                serial_number: Some(tag.clone()),
                path: Some(tag),
                ..DeviceMeta::default()
            },
            channels: Vec::new(),
        }
    }

    /// Replaces the metadata snapshot, e.g. to mimic a specific vendor for
    /// rules-matching tests.
    pub fn with_meta(mut self, meta: DeviceMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Appends an axis channel, optionally named. Starts at `0.0`.
    pub fn add_axis(&mut self, name: Option<&str>) {
        self.channels
            .push(Arc::new(RawChannel::new(ChannelKind::Axis, name)));
    }

    /// Appends a button channel, optionally named. Starts released.
    pub fn add_button(&mut self, name: Option<&str>) {
        self.channels
            .push(Arc::new(RawChannel::new(ChannelKind::Button, name)));
    }

    /// Writes `value` to the `index`-th **axis** channel (kind-local index,
    /// in declaration order).
    ///
    /// # Panics
    /// Panics if the device has fewer than `index + 1` axis channels. A test
    /// injecting into a channel it never declared is a bug worth failing
    /// loudly on.
    pub fn set_axis(&self, index: usize, value: f32) {
        self.kind_channel(ChannelKind::Axis, index).store(value);
    }

    /// Writes a raw level to the `index`-th **button** channel (kind-local
    /// index, in declaration order).
    ///
    /// Levels between `0.0` and `1.0` let tests probe threshold behavior;
    /// use [`press`](Self::press) / [`release`](Self::release) for the
    /// common digital case.
    ///
    /// # Panics
    /// Panics if the device has fewer than `index + 1` button channels.
    pub fn set_button(&self, index: usize, raw: f32) {
        self.kind_channel(ChannelKind::Button, index).store(raw);
    }

    /// Drives button `index` fully on (`1.0`).
    ///
    /// # Panics
    /// Panics if the device has fewer than `index + 1` button channels.
    pub fn press(&self, index: usize) {
        self.set_button(index, 1.0);
    }

    /// Drives button `index` fully off (`0.0`).
    ///
    /// # Panics
    /// Panics if the device has fewer than `index + 1` button channels.
    pub fn release(&self, index: usize) {
        self.set_button(index, 0.0);
    }

    fn kind_channel(&self, kind: ChannelKind, index: usize) -> &ChannelHandle {
        match self.channels.iter().filter(|ch| ch.kind() == kind).nth(index) {
            Some(ch) => ch,
            None => panic!(
                "virtual device {:?} has no {:?} channel {}",
                self.name, kind, index
            ),
        }
    }
}

impl Device for VirtualDevice {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> DeviceMeta {
        self.meta.clone()
    }

    fn channels(&self) -> &[ChannelHandle] {
        &self.channels
    }
}
