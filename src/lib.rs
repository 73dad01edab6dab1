//! Controller translation layer: stable logical axis/button indices over raw
//! device channels.
//!
//! A host application (driver station, sim bridge, test rig) owns the
//! transport that actually reads hardware and publishes each device as a list
//! of raw [channels](crate::channel). `padmap` sits on top and gives control
//! code a steady surface: a [`TranslationProfile`] with total, never-failing
//! `axis(i)` / `button(i)` accessors whose index layout is fixed the moment
//! the profile is built.
//!
//! Which layout a device gets is configuration, not code: a
//! [`TranslationRegistry`] holds the variants (built-in `"basic"` and
//! `"gamepad"`, plus anything the host registers) and a
//! [`TranslationRules`] table maps device metadata to variant names.
//!
//! ```
//! use padmap::backends::virtual_input::VirtualDevice;
//! use padmap::{BasicTranslation, TranslationProfile};
//!
//! let mut pad = VirtualDevice::new(0, "demo pad");
//! pad.add_axis(Some("X"));
//! pad.add_button(Some("Trigger"));
//!
//! let profile = BasicTranslation::new(&pad);
//!
//! pad.set_axis(0, 0.42);
//! assert_eq!(profile.axis(0), 0.42);
//! assert!(!profile.button(0));
//!
//! pad.press(0);
//! assert!(profile.button(0));
//! ```

pub mod backends;
pub mod channel;
pub mod device;
pub mod metadata;
pub mod registry;
pub mod rules;
pub mod translation;

pub use channel::*;
pub use device::*;
pub use metadata::*;
pub use registry::*;
pub use rules::*;
pub use translation::*;
