//! Command: print version information.
use std::io::Write as _;

/// Version baked in by `build.rs`, or the crate version for plain builds.
#[must_use]
pub fn string() -> &'static str {
    option_env!("WORKSTATION_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the workstation version to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run() -> std::io::Result<()> {
    writeln!(std::io::stdout(), "workstation {}", string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!string().trim().is_empty());
    }
}
