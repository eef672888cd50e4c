//! Terminal summary styling.
//!
//! Plain ANSI, no styling framework: the tool prints a dozen lines at most.
//! Colors are suppressed when stdout is not a terminal or when `NO_COLOR`
//! is set.

/// True when ANSI escapes should be emitted on stdout.
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn paint(code: &str, text: &str, color: bool) -> String {
    if color {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Bold cyan, used for the closing "Saved code from ..." line.
pub fn cyan(text: &str, color: bool) -> String {
    paint("1;36", text, color)
}

/// Bold green, used for the "Files saved:" heading.
pub fn green(text: &str, color: bool) -> String {
    paint("1;32", text, color)
}

/// Bold blue, used for the per-file bullet lines.
pub fn blue(text: &str, color: bool) -> String {
    paint("1;34", text, color)
}

/// Bold red, used for the error summary heading.
pub fn red(text: &str, color: bool) -> String {
    paint("1;31", text, color)
}
