use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Status tags of the console protocol
const TAG_INFO: &str = "[INFO]";
const TAG_OK: &str = "[OK]";
const TAG_WARN: &str = "[WARNUNG]";
const TAG_ERR: &str = "[FEHLER]";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{}{} {}", FG_BLUE, BOLD, TAG_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{}{} {}", FG_GREEN, BOLD, TAG_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{}{} {}", FG_YELLOW, BOLD, TAG_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{}{} {}", FG_RED, BOLD, TAG_ERR, RESET, msg);
}
