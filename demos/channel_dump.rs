use padmap::backends::virtual_input::VirtualDevice;
use padmap::{BasicTranslation, Device, DeviceMeta, TranslationProfile};

fn main() {
    let mut stick = VirtualDevice::new(0, "Flight Stick").with_meta(DeviceMeta {
        bus: Some("usb".into()),
        vid: Some(0x231d),
        pid: Some(0x0126),
        product_string: Some("Flight Stick".into()),
        serial_number: Some("FS-0042".into()),
        path: None,
    });
    stick.add_axis(Some("X"));
    stick.add_axis(Some("Y"));
    stick.add_axis(Some("Throttle"));
    stick.add_button(Some("Trigger"));
    stick.add_button(None);

    println!("== {} ({}) ==", stick.name(), stick.id());
    let meta = serde_json::to_string_pretty(&stick.metadata()).expect("meta is serializable");
    println!("{meta}");
    for (i, ch) in stick.channels().iter().enumerate() {
        println!("  #{i:02} {:?} name={:?}", ch.kind(), ch.name());
    }

    // Scripted sweep: write raw values, read them back through a profile.
    let profile = BasicTranslation::new(&stick);
    for step in 0..=4 {
        let t = step as f32 / 4.0;
        stick.set_axis(0, t * 2.0 - 1.0);
        stick.set_axis(2, t);
        stick.set_button(0, t);

        let axes: Vec<String> = (0..profile.axis_count())
            .map(|i| format!("{:+.2}", profile.axis(i)))
            .collect();
        let buttons: Vec<&str> = (0..profile.button_count())
            .map(|i| if profile.button(i) { "#" } else { "." })
            .collect();
        println!("t={t:.2} axes=[{}] buttons=[{}]", axes.join(" "), buttons.join(""));
    }
}
