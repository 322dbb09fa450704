use std::{fmt::Display, str::FromStr};

use backtrace::Backtrace;
use tracing::{debug, error, info, level_filters::LevelFilter, trace, warn};

pub fn init(display_level: &bool, level_filter: &str) {
    let level_filter = match LevelFilter::from_str(level_filter) {
        Ok(level_filter) => level_filter,
        Err(_) => panic!("'{level_filter}' is not a log level filter"),
    };

    tracing_subscriber::fmt()
        .with_level(*display_level)
        .with_max_level(level_filter)
        .init();
}

pub fn trace<T: Display>(prefix: Option<&str>, msg: T) {
    trace!("{} {msg}", prefix.unwrap_or("🔍"));
}

pub fn debug<T: Display>(prefix: Option<&str>, msg: T) {
    debug!("{} {msg}", prefix.unwrap_or("🔧"));
}

pub fn info<T: Display>(prefix: Option<&str>, msg: T) {
    info!("{} {msg}", prefix.unwrap_or("📣"));
}

pub fn warn<T: Display>(prefix: Option<&str>, msg: T) {
    warn!("{} {msg}", prefix.unwrap_or("⚠️"));
}

pub fn error<T: Display>(prefix: Option<&str>, msg: T) {
    let prefix = prefix.unwrap_or("🚨");
    if backtrace_enabled() {
        error!("{prefix} {msg}\n{:?}", Backtrace::new());
    } else {
        error!("{prefix} {msg}");
    }
}

pub fn panic<T: Display>(prefix: Option<&str>, msg: T) {
    panic!("{} {msg}", prefix.unwrap_or("💀"));
}

fn backtrace_enabled() -> bool {
    std::env::var("RUST_BACKTRACE").is_ok_and(|var| var == "1" || var == "full")
}

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic(expected = "'loud' is not a log level filter")]
    fn init_names_the_unknown_level_filter() {
        super::init(&true, "loud");
    }
}
