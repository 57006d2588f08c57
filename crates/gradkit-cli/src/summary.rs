use console::Style;
use gradkit_core::config::EdgeConfig;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

pub fn print_run_summary(config: &EdgeConfig, device_name: &str, images: usize) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("gradkit"));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Operator"),
        s.method.apply_to(config.operator)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Images"),
        s.value.apply_to(images)
    );
    println!(
        "  {:<14}{} ({})",
        s.label.apply_to("Device"),
        s.method.apply_to(device_name),
        config.device
    );
    if config.hw_accel {
        println!("  {:<14}{}", s.label.apply_to("HW accel"), s.value.apply_to("on"));
    } else {
        println!("  {:<14}{}", s.label.apply_to("HW accel"), s.disabled.apply_to("off"));
    }
    println!();
}
