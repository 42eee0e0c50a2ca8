use console::style;

/// Print an error message to stderr in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print an `anyhow` error with its full cause chain.
pub fn display_error_chain(err: &anyhow::Error) {
    display_error(&format!("{:#}", err));
}
