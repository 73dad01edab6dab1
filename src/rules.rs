//! Per-device translation selection rules.
//!
//! A rules table decides which translation variant each device gets, keyed on
//! the device's [`DeviceMeta`]. Hosts ship it as a TOML or JSON file next to
//! their other configuration:
//!
//! ```toml
//! # First match wins, top to bottom.
//! [[rule]]
//! vendor_id = 0x046d
//! product_id = 0xc216
//! translation = "gamepad"
//!
//! [[rule]]
//! product = "Virtual Pad"
//! translation = "basic"
//! ```
//!
//! # Matching
//! Every field a rule specifies must match the device's metadata; fields left
//! out are wildcards. A rule with only `translation` set is a catch-all.
//! Matching against a device whose metadata lacks the field (`None`) fails —
//! a rule asking for `vendor_id = 0x046d` does not match a device with an
//! unknown VID. `product` compares ASCII case-insensitively; `serial` is
//! exact, serials being case-sensitive identifiers.
//!
//! Rules are evaluated top to bottom and the first match wins, so put
//! specific rules above broad ones.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::metadata::DeviceMeta;
use crate::registry::{TranslationRegistry, UnknownTranslation};

/// Failure while loading or validating a rules table.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// The rules file could not be read.
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    /// The file was not valid TOML in the expected shape.
    #[error("invalid TOML rules: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file was not valid JSON in the expected shape.
    #[error("invalid JSON rules: {0}")]
    Json(#[from] serde_json::Error),

    /// A rule names a translation the registry does not know.
    #[error(transparent)]
    Unknown(#[from] UnknownTranslation),
}

/// One match clause: metadata conditions plus the variant they select.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslationRule {
    /// Match on USB Vendor ID. Omit to match any.
    #[serde(default)]
    pub vendor_id: Option<u16>,

    /// Match on USB Product ID. Omit to match any.
    #[serde(default)]
    pub product_id: Option<u16>,

    /// Match on the product string, ASCII case-insensitive. Omit to match any.
    #[serde(default)]
    pub product: Option<String>,

    /// Match on the serial number, exact. Omit to match any.
    #[serde(default)]
    pub serial: Option<String>,

    /// Registry name of the translation to use when this rule matches.
    pub translation: String,
}

impl TranslationRule {
    /// Whether this rule's specified fields all hold for `meta`.
    pub fn matches(&self, meta: &DeviceMeta) -> bool {
        if let Some(vid) = self.vendor_id {
            if meta.vid != Some(vid) {
                return false;
            }
        }
        if let Some(pid) = self.product_id {
            if meta.pid != Some(pid) {
                return false;
            }
        }
        if let Some(product) = &self.product {
            match &meta.product_string {
                Some(s) if s.eq_ignore_ascii_case(product) => {}
                _ => return false,
            }
        }
        if let Some(serial) = &self.serial {
            if meta.serial_number.as_deref() != Some(serial.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Ordered list of [`TranslationRule`]s. First match wins.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TranslationRules {
    #[serde(default, rename = "rule")]
    rules: Vec<TranslationRule>,
}

impl TranslationRules {
    /// Parses a TOML rules table (the `[[rule]]` format shown at module level).
    pub fn from_toml_str(text: &str) -> Result<Self, RulesError> {
        Ok(toml::from_str(text)?)
    }

    /// Parses the JSON equivalent: `{"rule": [{...}, ...]}`.
    pub fn from_json_str(text: &str) -> Result<Self, RulesError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads rules from a file, picking the format by extension:
    /// `.json` parses as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }

    /// Appends a rule at the lowest priority (evaluated last).
    pub fn push(&mut self, rule: TranslationRule) {
        self.rules.push(rule);
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[TranslationRule] {
        &self.rules
    }

    /// Name of the translation chosen for `meta`: the first matching rule's,
    /// or `None` when nothing matches.
    pub fn translation_for(&self, meta: &DeviceMeta) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(meta))
            .map(|rule| rule.translation.as_str())
    }

    /// Checks that every translation named by a rule exists in `registry`.
    ///
    /// Run this right after loading a rules file to surface typos at startup
    /// instead of as per-device fallbacks later.
    pub fn validate(&self, registry: &TranslationRegistry) -> Result<(), RulesError> {
        for rule in &self.rules {
            if !registry.contains(&rule.translation) {
                return Err(UnknownTranslation {
                    name: rule.translation.clone(),
                }
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dual_action_meta() -> DeviceMeta {
        DeviceMeta {
            bus: Some("usb".into()),
            vid: Some(0x046d),
            pid: Some(0xc216),
            product_string: Some("Dual Action".into()),
            serial_number: Some("SN-12".into()),
            path: None,
        }
    }

    #[test]
    fn parses_toml_with_hex_ids() {
        let rules = TranslationRules::from_toml_str(
            r#"
            [[rule]]
            vendor_id = 0x046d
            product_id = 0xc216
            translation = "gamepad"

            [[rule]]
            translation = "basic"
            "#,
        )
        .unwrap();

        assert_eq!(rules.rules().len(), 2);
        assert_eq!(rules.rules()[0].vendor_id, Some(0x046d));
        assert_eq!(rules.translation_for(&dual_action_meta()), Some("gamepad"));
    }

    #[test]
    fn parses_the_json_equivalent() {
        let rules = TranslationRules::from_json_str(
            r#"{"rule": [{"vendor_id": 1133, "translation": "gamepad"}]}"#,
        )
        .unwrap();

        // 1133 == 0x046d
        assert_eq!(rules.translation_for(&dual_action_meta()), Some("gamepad"));
    }

    #[test]
    fn first_match_wins() {
        let rules = TranslationRules::from_toml_str(
            r#"
            [[rule]]
            product = "dual action"
            translation = "gamepad"

            [[rule]]
            vendor_id = 0x046d
            translation = "basic"
            "#,
        )
        .unwrap();

        // Both rules match; the earlier one decides.
        assert_eq!(rules.translation_for(&dual_action_meta()), Some("gamepad"));
    }

    #[test]
    fn all_specified_fields_must_hold() {
        let rule = TranslationRule {
            vendor_id: Some(0x046d),
            product_id: Some(0xffff),
            product: None,
            serial: None,
            translation: "gamepad".into(),
        };
        // VID matches, PID does not.
        assert!(!rule.matches(&dual_action_meta()));
    }

    #[test]
    fn unknown_metadata_defeats_the_condition() {
        let rule = TranslationRule {
            vendor_id: Some(0x046d),
            product_id: None,
            product: None,
            serial: None,
            translation: "gamepad".into(),
        };
        let mut meta = dual_action_meta();
        meta.vid = None;
        assert!(!rule.matches(&meta));
    }

    #[test]
    fn product_is_case_insensitive_serial_is_not() {
        let mut rule = TranslationRule {
            vendor_id: None,
            product_id: None,
            product: Some("DUAL ACTION".into()),
            serial: None,
            translation: "gamepad".into(),
        };
        assert!(rule.matches(&dual_action_meta()));

        rule.product = None;
        rule.serial = Some("sn-12".into());
        assert!(!rule.matches(&dual_action_meta()));
        rule.serial = Some("SN-12".into());
        assert!(rule.matches(&dual_action_meta()));
    }

    #[test]
    fn bare_rule_is_a_catch_all() {
        let rules =
            TranslationRules::from_toml_str("[[rule]]\ntranslation = \"basic\"\n").unwrap();
        assert_eq!(rules.translation_for(&DeviceMeta::default()), Some("basic"));
    }

    #[test]
    fn no_match_yields_none() {
        let rules = TranslationRules::from_toml_str(
            "[[rule]]\nvendor_id = 0x1234\ntranslation = \"gamepad\"\n",
        )
        .unwrap();
        assert_eq!(rules.translation_for(&dual_action_meta()), None);
        assert_eq!(TranslationRules::default().translation_for(&dual_action_meta()), None);
    }

    #[test]
    fn misspelled_fields_are_rejected() {
        let err = TranslationRules::from_toml_str(
            "[[rule]]\ntranslation_name = \"basic\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, RulesError::Toml(_)));
    }

    #[test]
    fn validate_surfaces_unknown_variants() {
        let registry = crate::registry::TranslationRegistry::new();

        let good =
            TranslationRules::from_toml_str("[[rule]]\ntranslation = \"gamepad\"\n").unwrap();
        assert!(good.validate(&registry).is_ok());

        let bad =
            TranslationRules::from_toml_str("[[rule]]\ntranslation = \"sixaxis\"\n").unwrap();
        match bad.validate(&registry).unwrap_err() {
            RulesError::Unknown(err) => assert_eq!(err.name, "sixaxis"),
            other => panic!("expected Unknown, got {other:?}"),
        }
    }
}
