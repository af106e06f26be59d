//! Terminal styling utilities for a modern, visually appealing CLI

use console::style;

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
    ██████╗  █████╗ ████████╗██╗  ██╗
    ██╔══██╗██╔══██╗╚══██╔══╝██║  ██║
    ██████╔╝███████║   ██║   ███████║
    ██╔═══╝ ██╔══██║   ██║   ██╔══██║
    ██║     ██║  ██║   ██║   ██║  ██║
    ╚═╝     ╚═╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("\u{279c}").magenta().bold(),
        style("Find your route through European education").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("\u{2500}".repeat(50)).dim());
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("\u{2713}").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", style("\u{2139}").cyan(), message);
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        style("\u{27a4}").cyan().bold(),
        style("Good luck on your pathway!").green().bold()
    );
    println!();
}
