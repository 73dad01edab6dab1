//! Fixed-slot gamepad translation.
//!
//! [`GamepadTranslation`] pins well-known pad controls to fixed logical
//! indices by **channel name**, so application code written against "axis 0 is
//! the left stick X" keeps working across vendors that enumerate their
//! channels in different wire orders.
//!
//! # Slot layout
//! The indices are stable and intended for bindings/UI:
//!
//! ## Axes (6)
//! - `0`: Left stick X (`LX`)
//! - `1`: Left stick Y (`LY`)
//! - `2`: Left trigger (`LT`)
//! - `3`: Right trigger (`RT`)
//! - `4`: Right stick X (`RX`)
//! - `5`: Right stick Y (`RY`)
//!
//! ## Buttons (10)
//! - `0`: `A`, `1`: `B`, `2`: `X`, `3`: `Y`
//! - `4`: `LB`, `5`: `RB`
//! - `6`: `Back`, `7`: `Start`
//! - `8`: `LThumb`, `9`: `RThumb`
//!
//! # Matching
//! Each slot takes the first device channel of the right kind whose name
//! equals the slot label, compared ASCII case-insensitively. Channels without
//! names never match. Slots left unmatched simply read neutral; the counts
//! stay at the full table sizes either way, so index meaning never shifts
//! with hardware coverage.

use log::debug;

use crate::channel::{ChannelHandle, ChannelKind};
use crate::device::Device;
use crate::translation::{button_pressed, TranslationProfile};

/// Axis slot labels, in index order.
const AXIS_SLOTS: [&str; 6] = ["LX", "LY", "LT", "RT", "RX", "RY"];

/// Button slot labels, in index order.
const BUTTON_SLOTS: [&str; 10] = [
    "A", "B", "X", "Y", "LB", "RB", "Back", "Start", "LThumb", "RThumb",
];

/// Translation with the fixed Xbox-style slot layout documented at module
/// level. Unmatched slots read neutral.
#[derive(Clone)]
pub struct GamepadTranslation {
    axes: Vec<Option<ChannelHandle>>,
    buttons: Vec<Option<ChannelHandle>>,
}

impl GamepadTranslation {
    /// Resolves the slot tables against `device`'s channels.
    ///
    /// Never fails; a device with no recognizable names yields a profile
    /// where everything reads neutral.
    pub fn new(device: &dyn Device) -> Self {
        let axes: Vec<_> = AXIS_SLOTS
            .iter()
            .map(|slot| find_named(device, ChannelKind::Axis, slot))
            .collect();
        let buttons: Vec<_> = BUTTON_SLOTS
            .iter()
            .map(|slot| find_named(device, ChannelKind::Button, slot))
            .collect();

        debug!(
            "gamepad translation for {:?}: matched {}/{} axis slots, {}/{} button slots",
            device.name(),
            axes.iter().filter(|slot| slot.is_some()).count(),
            AXIS_SLOTS.len(),
            buttons.iter().filter(|slot| slot.is_some()).count(),
            BUTTON_SLOTS.len()
        );

        Self { axes, buttons }
    }
}

/// First channel of `kind` named `name` (ASCII case-insensitive), if any.
fn find_named(device: &dyn Device, kind: ChannelKind, name: &str) -> Option<ChannelHandle> {
    device
        .channels()
        .iter()
        .find(|ch| {
            ch.kind() == kind && ch.name().map_or(false, |n| n.eq_ignore_ascii_case(name))
        })
        .map(ChannelHandle::clone)
}

impl TranslationProfile for GamepadTranslation {
    fn name(&self) -> &str {
        "gamepad"
    }

    #[inline]
    fn axis(&self, index: usize) -> f32 {
        self.axes
            .get(index)
            .and_then(Option::as_ref)
            .map_or(0.0, |ch| ch.value())
    }

    #[inline]
    fn button(&self, index: usize) -> bool {
        self.buttons
            .get(index)
            .and_then(Option::as_ref)
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
