//! Build invocation context shared by every pipeline stage.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;

/// Project mode: development or production.
///
/// Selects `dependency: mode` table entries and drives the
/// `development` / `production` flags of the project namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub fn from_dev_flag(dev: bool) -> Self {
        if dev {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build type: debug or release.
///
/// Selects `dependency: type` table entries and drives the
/// `debug` / `release` flags of the project namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    Debug,
    Release,
}

impl BuildType {
    pub fn from_debug_flag(debug: bool) -> Self {
        if debug {
            BuildType::Debug
        } else {
            BuildType::Release
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Debug => "debug",
            BuildType::Release => "release",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested C++ standard. Only affects emission: string constants use
/// `std::string_view` from C++17 up, `const char*` below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CxxStandard {
    Cxx11,
    Cxx14,
    Cxx17,
    Cxx20,
    Cxx23,
}

impl CxxStandard {
    pub fn supports_string_view(&self) -> bool {
        matches!(self, CxxStandard::Cxx17 | CxxStandard::Cxx20 | CxxStandard::Cxx23)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CxxStandard::Cxx11 => "c++11",
            CxxStandard::Cxx14 => "c++14",
            CxxStandard::Cxx17 => "c++17",
            CxxStandard::Cxx20 => "c++20",
            CxxStandard::Cxx23 => "c++23",
        }
    }
}

impl FromStr for CxxStandard {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "c++11" | "std11" | "11" => Ok(CxxStandard::Cxx11),
            "c++14" | "std14" | "14" => Ok(CxxStandard::Cxx14),
            "c++17" | "std17" | "17" => Ok(CxxStandard::Cxx17),
            "c++20" | "std20" | "20" => Ok(CxxStandard::Cxx20),
            "c++23" | "std23" | "23" => Ok(CxxStandard::Cxx23),
            _ => Err(Error::InvalidStandard {
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CxxStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Externally supplied, immutable values describing one build invocation.
///
/// Assembled by the caller (CLI flags merged with document defaults)
/// before the pipeline runs; no stage mutates it.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Build-system target being compiled (`none` when standalone).
    pub target: String,
    /// Target operating system name.
    pub system: String,
    /// Target architecture name.
    pub arch: String,
    pub mode: BuildMode,
    pub build_type: BuildType,
    /// Short HEAD commit hash, when a repository was found.
    pub commit_hash: Option<String>,
    pub std: CxxStandard,
    /// Name of the root namespace in the emitted header.
    pub root_namespace: String,
    /// Where the emitted header goes; also names the include guard.
    pub output_path: PathBuf,
}
