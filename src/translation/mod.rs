//! Translation profiles: stable logical indices over raw channels.
//!
//! A [`TranslationProfile`] is the surface the rest of a host application
//! programs against. It answers "what is logical axis `i` right now?" without
//! the caller knowing which physical channel backs it, or whether anything
//! backs it at all.
//!
//! # Semantics
//! Every implementation in this crate (and any external one worth using)
//! follows the same contract:
//! - **Total accessors.** Any `usize` is a valid argument. Out-of-range or
//!   unbacked indices read as neutral (`0.0` / `false`), never a panic or an
//!   error. Control loops probe speculatively and must not be able to crash
//!   the host by asking for button 200.
//! - **Fresh reads.** `axis`/`button` go to the channel cell on every call;
//!   nothing is cached or latched in the profile. Two calls in the same
//!   iteration may disagree if the access layer wrote in between.
//! - **Fixed layout.** The index → channel assignment is decided once, at
//!   construction, and never changes for the lifetime of the profile. Counts
//!   are constants per instance.
//!
//! # Choosing a variant
//! [`BasicTranslation`] preserves the device's own channel order and works on
//! anything. [`GamepadTranslation`] pins well-known pad controls to fixed
//! indices by channel name. The [registry](crate::registry) picks between
//! them (and host-registered variants) per device, driven by a
//! [rules](crate::rules) table.

mod basic;
mod gamepad;

pub use basic::BasicTranslation;
pub use gamepad::GamepadTranslation;

/// Raw level a button channel must exceed (strictly) to count as pressed.
///
/// Half scale splits clean digital reports (`0.0` / `1.0`) with maximum margin
/// on both sides, and keeps a resting analog channel bound as a button from
/// registering ghost presses. Exactly `0.5` reads as released.
pub const BUTTON_PRESS_THRESHOLD: f32 = 0.5;

/// Applies [`BUTTON_PRESS_THRESHOLD`] to a raw channel level.
#[inline]
pub fn button_pressed(raw: f32) -> bool {
    raw > BUTTON_PRESS_THRESHOLD
}

/// Read-only view of a device's controls under some fixed index layout.
///
/// Implementations hold [`ChannelHandle`](crate::channel::ChannelHandle)s
/// captured at construction, so a profile stays readable (and keeps seeing
/// live values) independent of where the [`Device`](crate::device::Device)
/// itself lives. Profiles are `Send + Sync`; it is fine to read one from a
/// control loop thread while the access layer writes channels elsewhere.
pub trait TranslationProfile: Send + Sync {
    /// Short variant name (e.g. `"basic"`), matching its registry key.
    fn name(&self) -> &str;

    /// Current value of logical axis `index`, or `0.0` if out of range.
    fn axis(&self, index: usize) -> f32;

    /// Whether logical button `index` is pressed; `false` if out of range.
    fn button(&self, index: usize) -> bool;

    /// Number of logical axes. Fixed for the lifetime of the instance.
    fn axis_count(&self) -> usize;

    /// Number of logical buttons. Fixed for the lifetime of the instance.
    fn button_count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strictly_greater() {
        assert!(!button_pressed(0.5));
        assert!(button_pressed(0.500001));
        assert!(button_pressed(1.0));
        assert!(!button_pressed(0.0));
        assert!(!button_pressed(-1.0));
    }
}
