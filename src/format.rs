use colored::Colorize;

/// Width of the label column in key/value output.
const LABEL_WIDTH: usize = 16;

/// Format a labelled value for terminal display.
pub fn format_field(label: &str, value: &str) -> String {
    let label = format!("{:<width$}", format!("{label}:"), width = LABEL_WIDTH);
    format!("{} {}", label.bold(), value)
}

/// Format a section heading.
pub fn format_heading(title: &str) -> String {
    format!("{}", title.bold().cyan())
}

pub fn format_enabled(enabled: bool) -> String {
    if enabled {
        "enabled".green().to_string()
    } else {
        "disabled".dimmed().to_string()
    }
}

/// Format an optional string setting, where empty means "not set".
pub fn format_optional(value: &str) -> String {
    if value.is_empty() {
        "(not set)".dimmed().to_string()
    } else {
        value.to_string()
    }
}

/// Hide all but the last four characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count == 0 {
        return format_optional(secret);
    }
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}
