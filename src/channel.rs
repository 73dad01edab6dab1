//! Raw device channels and their live values.
//!
//! A [`RawChannel`] is one hardware-reported control: its classification
//! ([`ChannelKind`]), an optional descriptor name, and a [`ValueCell`] holding
//! the most recent raw reading. The device-access layer creates the channels
//! for a device once, in the order the hardware reports them, and stores a
//! fresh value into each cell every poll cycle. Everyone else — translation
//! profiles, UIs, diagnostics — only reads.
//!
//! ## Value conventions
//! - **Axes:** normalized to `[-1.0, 1.0]`.
//! - **Buttons:** `[0.0, 1.0]`; plain switches report `0.0`/`1.0`, pressure
//!   pads may report anything in between.
//! - **Hats (POV/D-pad):** presented by the access layer as whichever of the
//!   two kinds its transport exposes (an angle-like axis or a set of
//!   direction buttons); there is no third kind at this boundary.
//!
//! ## Sharing semantics
//! Channels are handed around as [`ChannelHandle`]s (`Arc<RawChannel>`).
//! A holder of a handle sees every store immediately — values are never
//! copied into consumers. The cell is a single relaxed atomic, so the access
//! layer's refresh loop and any number of reader threads can run against it
//! freely; readers observe whole values (no tearing) but no ordering is
//! promised relative to other channels.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Category of a raw channel on a device.
///
/// The device-access layer reports this per channel; translation profiles
/// treat it as the only discriminator (no semantic interpretation of *which*
/// axis or button a channel is happens at this level).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    Axis,
    Button,
}

/// Lock-free `f32` cell holding a channel's most recent raw value.
///
/// The value is bit-cast through an `AtomicU32` with `Ordering::Relaxed`:
/// a store publishes a whole `f32` and a load returns a whole `f32`, which
/// is all the freshness contract needs. Reads and writes are single atomic
/// instructions — safe to call from a poll loop and any reader thread
/// without further synchronization.
pub struct ValueCell(AtomicU32);

impl ValueCell {
    /// Create a cell holding `value`.
    pub fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    /// Load the current value.
    #[inline]
    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    /// Store a new value. Called by the device-access layer on every poll.
    #[inline]
    pub fn set(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl Default for ValueCell {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Debug for ValueCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueCell").field(&self.get()).finish()
    }
}

/// One hardware-reported control: classification, descriptor name, live value.
///
/// The kind and name are fixed at creation; only the value changes afterwards.
/// `name` is the transport's label for the control (e.g. `"X"`, `"LT"`,
/// `"Trigger"`) when one is available — remapping translations and UIs key off
/// it, and `None` simply means the transport had nothing better than the
/// channel's position.
#[derive(Debug)]
pub struct RawChannel {
    kind: ChannelKind,
    name: Option<String>,
    value: ValueCell,
}

/// Shared handle to a [`RawChannel`].
///
/// The device-access layer keeps one set of handles per device (fixed order
/// for the life of the connection); translation profiles clone the handles
/// they care about at construction time.
pub type ChannelHandle = Arc<RawChannel>;

impl RawChannel {
    /// Create a channel with a neutral (`0.0`) starting value.
    pub fn new(kind: ChannelKind, name: Option<&str>) -> Self {
        Self {
            kind,
            name: name.map(str::to_owned),
            value: ValueCell::default(),
        }
    }

    /// Classification reported by the transport.
    #[inline]
    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    /// Descriptor name, when the transport provided one.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Current raw value, as last stored by the device-access layer.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value.get()
    }

    /// Store a fresh raw value. This is the access layer's write path;
    /// nothing else should call it.
    #[inline]
    pub fn store(&self, value: f32) {
        self.value.set(value);
    }
}
