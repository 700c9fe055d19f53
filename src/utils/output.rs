// Colored terminal output helpers
use colored::Colorize;

pub fn print_success(msg: &str) {
    println!("{} {}", "✔".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✖".red(), msg);
}

pub fn print_info(msg: &str) {
    println!("{} {}", "ℹ".blue(), msg);
}

pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow(), msg);
}

/// Section heading for a pipeline phase
pub fn print_step(msg: &str) {
    println!();
    println!("{} {}", "▸".cyan(), msg.bold());
}

/// Relay captured command output, indented under the current step
pub fn print_captured(stdout: &str, stderr: &str) {
    for line in stdout.lines() {
        println!("  {}", line.dimmed());
    }
    for line in stderr.lines() {
        eprintln!("  {}", line.yellow());
    }
}
