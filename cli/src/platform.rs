//! Host platform detection.
use std::fmt;
use std::path::PathBuf;

/// Detected operating system platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    /// macOS (Darwin).
    MacOs,
    /// Linux, or any other Unix-like system.
    Linux,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MacOs => write!(f, "macos"),
            Self::Linux => write!(f, "linux"),
        }
    }
}

/// Platform information for the current system.
#[derive(Debug, Clone)]
pub struct Platform {
    /// Operating system family.
    pub os: Os,
    /// Whether the host CPU is Apple Silicon / aarch64.
    pub is_arm: bool,
}

impl Platform {
    /// Detect the current platform.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            os: if cfg!(target_os = "macos") {
                Os::MacOs
            } else {
                Os::Linux
            },
            is_arm: cfg!(target_arch = "aarch64"),
        }
    }

    /// Create a platform with explicit values.
    #[must_use]
    pub const fn new(os: Os, is_arm: bool) -> Self {
        Self { os, is_arm }
    }

    /// Returns `true` on macOS.
    #[must_use]
    pub fn is_macos(&self) -> bool {
        self.os == Os::MacOs
    }

    /// Returns `true` on Linux.
    #[must_use]
    pub fn is_linux(&self) -> bool {
        self.os == Os::Linux
    }

    /// Casks are a macOS-only Homebrew feature.
    #[must_use]
    pub fn supports_casks(&self) -> bool {
        self.is_macos()
    }

    /// Directory Homebrew installs its `bin/` into on this platform.
    #[must_use]
    pub fn homebrew_prefix(&self) -> PathBuf {
        match (self.os, self.is_arm) {
            (Os::MacOs, true) => PathBuf::from("/opt/homebrew"),
            (Os::MacOs, false) => PathBuf::from("/usr/local"),
            (Os::Linux, _) => PathBuf::from("/home/linuxbrew/.linuxbrew"),
        }
    }

    /// Check whether a category tag is incompatible with this platform.
    #[must_use]
    pub fn excludes_category(&self, category: &str) -> bool {
        match category {
            "macos" => self.os != Os::MacOs,
            "linux" => self.os != Os::Linux,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_detect_returns_valid() {
        let p = Platform::detect();
        assert!(p.is_linux() || p.is_macos());
    }

    #[test]
    fn casks_only_on_macos() {
        assert!(Platform::new(Os::MacOs, true).supports_casks());
        assert!(!Platform::new(Os::Linux, false).supports_casks());
    }

    #[test]
    fn homebrew_prefix_per_arch() {
        assert_eq!(
            Platform::new(Os::MacOs, true).homebrew_prefix(),
            PathBuf::from("/opt/homebrew")
        );
        assert_eq!(
            Platform::new(Os::MacOs, false).homebrew_prefix(),
            PathBuf::from("/usr/local")
        );
        assert_eq!(
            Platform::new(Os::Linux, true).homebrew_prefix(),
            PathBuf::from("/home/linuxbrew/.linuxbrew")
        );
    }

    #[test]
    fn excludes_linux_on_macos() {
        let p = Platform::new(Os::MacOs, true);
        assert!(p.excludes_category("linux"));
        assert!(!p.excludes_category("macos"));
        assert!(!p.excludes_category("aws"));
    }

    #[test]
    fn excludes_macos_on_linux() {
        let p = Platform::new(Os::Linux, false);
        assert!(p.excludes_category("macos"));
        assert!(!p.excludes_category("linux"));
    }

    #[test]
    fn os_display() {
        assert_eq!(Os::MacOs.to_string(), "macos");
        assert_eq!(Os::Linux.to_string(), "linux");
    }
}
