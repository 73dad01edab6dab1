//! Order-preserving default translation.

use log::debug;

use crate::channel::{ChannelHandle, ChannelKind};
use crate::device::Device;
use crate::translation::{button_pressed, TranslationProfile};

/// Default translation: device order in, device order out.
///
/// Construction walks the device's channels once, in their fixed discovery
/// order, and partitions them by kind: axis channels become logical axes
/// `0, 1, 2, ...`, every other channel becomes a logical button. Relative
/// order within each group is the device's own, so logical axis 1 is always
/// the *second axis channel the device reported*, regardless of how many
/// buttons sit between the two on the wire.
///
/// Works on any device, including one with no channels at all (both counts
/// are then zero and every read is neutral). Construction cannot fail.
#[derive(Clone)]
pub struct BasicTranslation {
    axes: Vec<ChannelHandle>,
    buttons: Vec<ChannelHandle>,
}

impl BasicTranslation {
    /// Builds the partition for `device`.
    ///
    /// Captures a handle per channel; the device itself is not retained.
    pub fn new(device: &dyn Device) -> Self {
        let mut axes = Vec::new();
        let mut buttons = Vec::new();

        for channel in device.channels() {
            match channel.kind() {
                ChannelKind::Axis => axes.push(ChannelHandle::clone(channel)),
                ChannelKind::Button => buttons.push(ChannelHandle::clone(channel)),
            }
        }

        debug!(
            "basic translation for {:?}: {} axes, {} buttons",
            device.name(),
            axes.len(),
            buttons.len()
        );

        Self { axes, buttons }
    }
}

impl TranslationProfile for BasicTranslation {
    fn name(&self) -> &str {
        "basic"
    }

    #[inline]
    fn axis(&self, index: usize) -> f32 {
        self.axes.get(index).map_or(0.0, |ch| ch.value())
    }

    #[inline]
    fn button(&self, index: usize) -> bool {
        self.buttons
            .get(index)
            .map_or(false, |ch| button_pressed(ch.value()))
    }

    #[inline]
    fn axis_count(&self) -> usize {
        self.axes.len()
    }

    #[inline]
    fn button_count(&self) -> usize {
        self.buttons.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::virtual_input::VirtualDevice;

    /// Axis, button, axis, button — the interleaving must collapse into two
    /// densely indexed groups that keep the wire order within each group.
    fn interleaved_device() -> VirtualDevice {
        let mut dev = VirtualDevice::new(0, "interleaved");
        dev.add_axis(Some("X"));
        dev.add_button(Some("Trigger"));
        dev.add_axis(Some("Y"));
        dev.add_button(Some("Thumb"));
        dev
    }

    #[test]
    fn partitions_interleaved_channels_by_kind() {
        let dev = interleaved_device();
        dev.set_axis(0, 0.7);
        dev.set_axis(1, -0.3);
        dev.set_button(0, 1.0);
        dev.set_button(1, 0.2);

        let profile = BasicTranslation::new(&dev);
        assert_eq!(profile.axis_count(), 2);
        assert_eq!(profile.button_count(), 2);

        assert_eq!(profile.axis(0), 0.7);
        assert_eq!(profile.axis(1), -0.3);
        assert!(profile.button(0));
        assert!(!profile.button(1)); // 0.2 is below threshold
    }

    #[test]
    fn out_of_range_reads_are_neutral() {
        let dev = interleaved_device();
        let profile = BasicTranslation::new(&dev);

        assert_eq!(profile.axis(2), 0.0);
        assert_eq!(profile.axis(usize::MAX), 0.0);
        assert!(!profile.button(2));
        assert!(!profile.button(usize::MAX));
    }

    #[test]
    fn empty_device_is_fine() {
        let dev = VirtualDevice::new(0, "bare");
        let profile = BasicTranslation::new(&dev);

        assert_eq!(profile.axis_count(), 0);
        assert_eq!(profile.button_count(), 0);
        assert_eq!(profile.axis(0), 0.0);
        assert!(!profile.button(0));
    }

    #[test]
    fn reads_are_fresh_not_latched() {
        let dev = interleaved_device();
        let profile = BasicTranslation::new(&dev);

        assert_eq!(profile.axis(0), 0.0);
        dev.set_axis(0, 0.42);
        assert_eq!(profile.axis(0), 0.42);
        dev.set_axis(0, -1.0);
        assert_eq!(profile.axis(0), -1.0);

        assert!(!profile.button(0));
        dev.press(0);
        assert!(profile.button(0));
        dev.release(0);
        assert!(!profile.button(0));
    }

    #[test]
    fn button_needs_strictly_more_than_half() {
        let dev = interleaved_device();
        let profile = BasicTranslation::new(&dev);

        dev.set_button(0, 0.5);
        assert!(!profile.button(0));
        dev.set_button(0, 0.51);
        assert!(profile.button(0));
    }

    #[test]
    fn layout_is_identical_across_rebuilds() {
        let dev = interleaved_device();
        dev.set_axis(1, 0.9);

        let first = BasicTranslation::new(&dev);
        let second = BasicTranslation::new(&dev);

        assert_eq!(first.axis_count(), second.axis_count());
        assert_eq!(first.button_count(), second.button_count());
        assert_eq!(first.axis(1), second.axis(1));
    }
}
