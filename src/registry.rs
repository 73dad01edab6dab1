//! Registry of translation variants.
//!
//! The registry maps variant names to constructors, so the choice of
//! translation can live in configuration instead of code. `"basic"` and
//! `"gamepad"` are preregistered; hosts add their own variants with
//! [`register`](TranslationRegistry::register) and then let
//! [`profile_for`](TranslationRegistry::profile_for) resolve each device
//! through a [rules](crate::rules) table.
//!
//! Misconfiguration is survivable on purpose: asking for a name nobody
//! registered is an error only on the explicit [`build`](TranslationRegistry::build)
//! path. The rule-driven path logs and falls back to `"basic"`, because a bad
//! rules file should cost a warning, not the whole driver station.

use std::collections::HashMap;

use log::{debug, warn};

use crate::device::Device;
use crate::rules::TranslationRules;
use crate::translation::{BasicTranslation, GamepadTranslation, TranslationProfile};

/// Constructor for one translation variant.
pub type ProfileFactory = Box<dyn Fn(&dyn Device) -> Box<dyn TranslationProfile> + Send + Sync>;

/// A translation name that no registered factory answers to.
#[derive(Debug, thiserror::Error)]
#[error("unknown translation `{name}`")]
pub struct UnknownTranslation {
    /// The name that failed to resolve.
    pub name: String,
}

/// Name → factory table for translation variants.
pub struct TranslationRegistry {
    factories: HashMap<String, ProfileFactory>,
}

impl TranslationRegistry {
    /// Creates a registry with the built-in variants `"basic"` and
    /// `"gamepad"` already registered.
    pub fn new() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };
        registry.register("basic", |dev| Box::new(BasicTranslation::new(dev)));
        registry.register("gamepad", |dev| Box::new(GamepadTranslation::new(dev)));
        registry
    }

    /// Registers (or replaces) the factory for `name`.
    pub fn register(
        &mut self,
        name: &str,
        factory: impl Fn(&dyn Device) -> Box<dyn TranslationProfile> + Send + Sync + 'static,
    ) {
        if self
            .factories
            .insert(name.to_owned(), Box::new(factory))
            .is_some()
        {
            debug!("translation variant {name:?} replaced");
        }
    }

    /// Builds the named variant for `device`.
    ///
    /// This is the strict path: an unregistered name is an error, not a
    /// fallback. Use it when the caller chose the name explicitly.
    pub fn build(
        &self,
        name: &str,
        device: &dyn Device,
    ) -> Result<Box<dyn TranslationProfile>, UnknownTranslation> {
        match self.factories.get(name) {
            Some(factory) => Ok(factory(device)),
            None => Err(UnknownTranslation {
                name: name.to_owned(),
            }),
        }
    }

    /// Resolves the right profile for `device` through `rules`.
    ///
    /// The first matching rule names the variant. No match, or a match naming
    /// an unregistered variant (logged as a warning), yields `"basic"` — the
    /// one translation that works on any device.
    pub fn profile_for(
        &self,
        device: &dyn Device,
        rules: &TranslationRules,
    ) -> Box<dyn TranslationProfile> {
        let meta = device.metadata();

        if let Some(name) = rules.translation_for(&meta) {
            match self.build(name, device) {
                Ok(profile) => {
                    debug!("device {:?} uses translation {name:?}", meta.label());
                    return profile;
                }
                Err(err) => {
                    warn!("{err} for device {:?}; using basic", meta.label());
                }
            }
        }

        Box::new(BasicTranslation::new(device))
    }

    /// Whether a factory is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered variant names, sorted for stable diagnostics output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for TranslationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::virtual_input::VirtualDevice;

    fn named_pad() -> VirtualDevice {
        let mut dev = VirtualDevice::new(0, "pad");
        dev.add_axis(Some("LX"));
        dev.add_button(Some("A"));
        dev
    }

    #[test]
    fn builtins_are_preregistered() {
        let registry = TranslationRegistry::new();
        assert!(registry.contains("basic"));
        assert!(registry.contains("gamepad"));
        assert_eq!(registry.names(), ["basic", "gamepad"]);
    }

    #[test]
    fn build_rejects_unknown_names() {
        let registry = TranslationRegistry::new();
        let dev = named_pad();

        match registry.build("weird", &dev) {
            Err(err) => {
                assert_eq!(err.name, "weird");
                assert_eq!(err.to_string(), "unknown translation `weird`");
            }
            Ok(_) => panic!("expected an unknown-translation error"),
        }
    }

    #[test]
    fn build_constructs_the_named_variant() {
        let registry = TranslationRegistry::new();
        let dev = named_pad();

        let profile = registry.build("gamepad", &dev).unwrap();
        assert_eq!(profile.name(), "gamepad");
        assert_eq!(profile.axis_count(), 6);

        let profile = registry.build("basic", &dev).unwrap();
        assert_eq!(profile.axis_count(), 1);
    }

    #[test]
    fn register_replaces_by_name() {
        let mut registry = TranslationRegistry::new();
        registry.register("basic", |dev| Box::new(GamepadTranslation::new(dev)));

        let dev = named_pad();
        let profile = registry.build("basic", &dev).unwrap();
        // The replacement factory builds the fixed-slot layout.
        assert_eq!(profile.axis_count(), 6);
    }

    #[test]
    fn profile_for_falls_back_to_basic() {
        let registry = TranslationRegistry::new();
        let dev = named_pad();

        // Empty rules: nothing matches, basic wins.
        let rules = TranslationRules::default();
        let profile = registry.profile_for(&dev, &rules);
        assert_eq!(profile.name(), "basic");

        // A rule naming an unregistered variant also lands on basic.
        let rules = TranslationRules::from_toml_str(
            "[[rule]]\ntranslation = \"does-not-exist\"\n",
        )
        .unwrap();
        let profile = registry.profile_for(&dev, &rules);
        assert_eq!(profile.name(), "basic");
    }

    #[test]
    fn profile_for_honors_matching_rules() {
        let registry = TranslationRegistry::new();
        let dev = named_pad();

        let rules =
            TranslationRules::from_toml_str("[[rule]]\ntranslation = \"gamepad\"\n").unwrap();
        let profile = registry.profile_for(&dev, &rules);
        assert_eq!(profile.name(), "gamepad");
    }
}
