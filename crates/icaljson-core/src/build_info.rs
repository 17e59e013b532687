//! Build information reported by the `version` command.
//!
//! Values are fixed at compile time; `ICALJSON_GIT_REF` and
//! `ICALJSON_BUILD_TIME` may be exported by the build environment.

use std::fmt;

use crate::constants::APP_NAME;

/// Immutable description of the running binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub git_ref: &'static str,
    pub build_time: &'static str,
    pub target_os: &'static str,
    pub target_arch: &'static str,
    pub profile: &'static str,
}

const UNKNOWN: &str = "unknown";

impl BuildInfo {
    /// ## Summary
    /// Returns the build information of the current binary.
    #[must_use]
    pub const fn current() -> Self {
        Self {
            name: APP_NAME,
            version: env!("CARGO_PKG_VERSION"),
            git_ref: match option_env!("ICALJSON_GIT_REF") {
                Some(git_ref) => git_ref,
                None => UNKNOWN,
            },
            build_time: match option_env!("ICALJSON_BUILD_TIME") {
                Some(build_time) => build_time,
                None => UNKNOWN,
            },
            target_os: std::env::consts::OS,
            target_arch: std::env::consts::ARCH,
            profile: if cfg!(debug_assertions) {
                "debug"
            } else {
                "release"
            },
        }
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} version {}", self.name, self.version)?;
        writeln!(f, "  Built in {} mode on {}", self.profile, self.build_time)?;
        writeln!(f, "  Git ref: {}", self.git_ref)?;
        write!(f, "  Target OS {}, arch {}", self.target_os, self.target_arch)
    }
}
