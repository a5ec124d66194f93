//! Ordered verbosity levels for log filtering.
//!
//! `Verbosity` is vocabulary only — consumers compare it against their
//! configured threshold and decide what to emit; this crate never logs.
//! Uses lowercase serde values for TOML compatibility.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use static_assertions::const_assert;
use tracing::level_filters::LevelFilter;

/// Verbosity level, least to most verbose.
///
/// The derived ordering follows declaration order, so threshold checks are
/// plain comparisons: `if level <= config.verbosity { ... }`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Verbosity {
    /// Errors only.
    Error = 0,
    /// General progress information.
    #[default]
    Info = 1,
    /// More detail than most users want.
    Talkative = 2,
    /// Per-operation chatter.
    Chatty = 3,
    /// Debug output for development.
    Debug = 4,
    /// Everything, including large payload dumps.
    Vomit = 5,
}

const_assert!((Verbosity::Error as u8) < (Verbosity::Info as u8));
const_assert!((Verbosity::Info as u8) < (Verbosity::Talkative as u8));
const_assert!((Verbosity::Talkative as u8) < (Verbosity::Chatty as u8));
const_assert!((Verbosity::Chatty as u8) < (Verbosity::Debug as u8));
const_assert!((Verbosity::Debug as u8) < (Verbosity::Vomit as u8));

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Info => write!(f, "info"),
            Self::Talkative => write!(f, "talkative"),
            Self::Chatty => write!(f, "chatty"),
            Self::Debug => write!(f, "debug"),
            Self::Vomit => write!(f, "vomit"),
        }
    }
}

impl FromStr for Verbosity {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            "talkative" => Ok(Self::Talkative),
            "chatty" => Ok(Self::Chatty),
            "debug" => Ok(Self::Debug),
            "vomit" => Ok(Self::Vomit),
            _ => Err(format!("unknown Verbosity: {s:?}")),
        }
    }
}

/// Map onto `tracing` filter levels for consumers that install a
/// subscriber. The mapping is lossy (six levels into four) but monotone.
impl From<Verbosity> for LevelFilter {
    fn from(v: Verbosity) -> Self {
        match v {
            Verbosity::Error => LevelFilter::ERROR,
            Verbosity::Info => LevelFilter::INFO,
            Verbosity::Talkative | Verbosity::Chatty => LevelFilter::DEBUG,
            Verbosity::Debug | Verbosity::Vomit => LevelFilter::TRACE,
        }
    }
}
