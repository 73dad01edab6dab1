use padmap::backends::virtual_input::VirtualDevice;
use padmap::{Device, DeviceMeta, TranslationRegistry, TranslationRules};

const RULES: &str = r#"
[[rule]]
vendor_id = 0x046d
translation = "gamepad"

[[rule]]
product = "Button Board"
translation = "basic"
"#;

fn main() {
    let registry = TranslationRegistry::new();
    let rules = TranslationRules::from_toml_str(RULES).expect("parse rules");
    rules.validate(&registry).expect("rules name known translations");

    let mut pad = VirtualDevice::new(0, "Dual Action").with_meta(DeviceMeta {
        bus: Some("usb".into()),
        vid: Some(0x046d),
        pid: Some(0xc216),
        product_string: Some("Dual Action".into()),
        ..DeviceMeta::default()
    });
    pad.add_axis(Some("LX"));
    pad.add_button(Some("A"));

    let mut board = VirtualDevice::new(1, "Button Board").with_meta(DeviceMeta {
        product_string: Some("Button Board".into()),
        ..DeviceMeta::default()
    });
    board.add_button(None);

    // No metadata, no matching rule: falls back to basic.
    let mystery = VirtualDevice::new(2, "Mystery Stick");

    for dev in [&pad as &dyn Device, &board, &mystery] {
        let profile = registry.profile_for(dev, &rules);
        println!(
            "{:16} -> {:8} ({} axes / {} buttons)",
            dev.name(),
            profile.name(),
            profile.axis_count(),
            profile.button_count()
        );
    }
}
