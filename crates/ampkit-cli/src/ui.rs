//! Banner, note, and spinner output around the prompts.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Print the opening banner.
pub fn intro(title: &str) {
    println!();
    println!("{}", style(format!(" {title} ")).black().on_cyan().bold());
    println!();
}

/// Print the cancellation notice.
pub fn cancel(message: &str) {
    println!("{}", style(message).red());
}

/// Print a titled block of lines.
pub fn note(title: &str, lines: &[String]) {
    println!();
    println!("{} {}", style("┌").dim(), style(title).bold());
    for line in lines {
        println!("{} {line}", style("│").dim());
    }
    println!("{}", style("└").dim());
}

/// Print the closing line.
pub fn outro(message: &str) {
    println!();
    println!("{}", style(message).green().bold());
}

/// Start a spinner on stderr. It stays hidden when stderr is not a terminal.
#[must_use]
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .map(|s| s.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏✔"))
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(spinner_style);
    pb.set_message(message.to_owned());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Stop the spinner with a success message.
pub fn spinner_done(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(message.to_owned());
    if pb.is_hidden() {
        println!("{}", style(message).green());
    }
}

/// Stop the spinner after a failure, leaving `message` on screen.
pub fn spinner_failed(pb: &ProgressBar, message: &str) {
    pb.abandon_with_message(message.to_owned());
    if pb.is_hidden() {
        eprintln!("{}", style(message).red());
    }
}
