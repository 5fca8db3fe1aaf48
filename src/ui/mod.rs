use colored::Colorize;

/// Decide once whether output is coloured.
///
/// Colour is off when `NO_COLOR` is set or stdout is not a terminal.
pub fn init_colors() {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if no_color || !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }
}

pub fn header(title: &str) {
    println!("{}", title.bold());
}

pub fn success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue().bold(), msg);
}

pub fn skip(msg: &str) {
    println!("{} {}", "-".bright_black(), msg.dimmed());
}

/// Non-fatal problem; goes to stdout with the rest of the progress lines
pub fn warning(msg: &str) {
    println!("{} {}", "Warning:".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

pub fn keyval(key: &str, val: &str) {
    println!("  {}: {}", key.bold(), val);
}
