use padmap::backends::virtual_input::VirtualDevice;
use padmap::{BasicTranslation, GamepadTranslation, TranslationProfile};

fn main() {
    // A pad with named channels, declared out of slot order on purpose.
    let mut pad = VirtualDevice::new(0, "Demo Pad");
    pad.add_axis(Some("RY"));
    pad.add_axis(Some("LX"));
    pad.add_button(Some("Start"));
    pad.add_button(Some("A"));

    let basic = BasicTranslation::new(&pad);
    let gamepad = GamepadTranslation::new(&pad);

    pad.set_axis(1, 0.75); // the LX channel
    pad.press(1); // the A channel

    println!(
        "basic:   {} axes, {} buttons",
        basic.axis_count(),
        basic.button_count()
    );
    println!(
        "gamepad: {} axes, {} buttons",
        gamepad.axis_count(),
        gamepad.button_count()
    );

    // Same wire values, two index layouts.
    println!("basic   axis 1   = {:+.2} (second axis on the wire)", basic.axis(1));
    println!("gamepad axis 0   = {:+.2} (LX slot)", gamepad.axis(0));
    println!("basic   button 1 = {}", basic.button(1));
    println!("gamepad button 0 = {} (A slot)", gamepad.button(0));
}
