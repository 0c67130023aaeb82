use crate::args::AppConfig;
use engage_runtime::colors;

/// Prints which settings are present. Values are never printed.
pub fn info(config: &AppConfig) {
    println!("engage {}", crate::version::engage());
    println!();
    for line in report(config) {
        println!("{line}");
    }
}

fn report(config: &AppConfig) -> Vec<String> {
    let mut lines: Vec<String> = config
        .presence()
        .into_iter()
        .map(|(name, present)| {
            let status = if present {
                colors::green("set").to_string()
            } else {
                colors::yellow("missing").to_string()
            };
            format!("{name:<26}{status}")
        })
        .collect();

    lines.push(format!("{:<26}{}", "port", config.port));
    lines.push(format!(
        "{:<26}{}",
        "token injection",
        if config.debug { "enabled" } else { "disabled" }
    ));
    lines
}
