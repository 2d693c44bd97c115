use colored::Colorize;

/// Print a header/title
pub fn header(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "─".repeat(title.chars().count()).dimmed());
}

/// Print a section header
pub fn section(title: &str) {
    println!();
    println!("{}", title.cyan().bold());
}

/// Print a subcommand line, noting the emitted name when it differs
pub fn subcommand(key: &str, emitted: Option<&str>) {
    match emitted {
        Some(name) => println!("  {} {}", key.bold(), format!("(runs {name})").dimmed()),
        None => println!("  {}", key.bold()),
    }
}

/// Print an option line
pub fn option(name: &str, accepts_value: bool) {
    if accepts_value {
        println!("    --{}={}", name, "<value>".dimmed());
    } else {
        println!("    --{name}");
    }
}

/// Print a changed-detection rule
pub fn rule(needle: &str, changed: bool) {
    let outcome = if changed {
        "changed".yellow()
    } else {
        "unchanged".green()
    };
    println!("  {:<40} {}", format!("\"{needle}\""), outcome);
}

/// Print a dim/muted message
pub fn dim(msg: &str) {
    println!("    {}", msg.dimmed());
}
