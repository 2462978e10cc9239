use device_io::{run_adapter_demo, run_bridge_demo};

fn capture(demo: fn(&mut dyn std::io::Write) -> std::io::Result<()>) -> String {
    let mut out = Vec::new();
    demo(&mut out).expect("demo should write to a Vec");
    String::from_utf8(out).expect("demo output is utf-8")
}

#[test]
fn adapter_demo_trace() {
    let expected = "\
init lcd
init oled
display lcd: Text 1
display oled: Text 2
";
    assert_eq!(capture(run_adapter_demo), expected);
}

#[test]
fn bridge_demo_trace() {
    let expected = "\
init CAN motor
init UART motor
init PWM motor
set speed CAN motor: 20
set speed UART motor: 70
set speed PWM motor: 100
stop CAN motor
stop UART motor
stop PWM motor
";
    assert_eq!(capture(run_bridge_demo), expected);
}
