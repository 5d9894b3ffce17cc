use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The three ordered SCAT sections.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Immediate causes.
    #[default]
    Ci,
    /// Basic (underlying) causes.
    Cb,
    /// Control-action needs. Causes here also need P/E/C evaluations.
    Nac,
}

impl SectionId {
    /// All sections in wizard order.
    pub const ALL: [SectionId; 3] = [SectionId::Ci, SectionId::Cb, SectionId::Nac];

    /// Position of this section in wizard order.
    pub fn index(self) -> usize {
        match self {
            Self::Ci => 0,
            Self::Cb => 1,
            Self::Nac => 2,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Self::Ci => Some(Self::Cb),
            Self::Cb => Some(Self::Nac),
            Self::Nac => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Ci => None,
            Self::Cb => Some(Self::Ci),
            Self::Nac => Some(Self::Cb),
        }
    }

    /// Whether causes in this section require the P/E/C evaluations.
    pub fn requires_nac_evaluation(self) -> bool {
        self == Self::Nac
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ci => "ci",
            Self::Cb => "cb",
            Self::Nac => "nac",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ci" => Ok(Self::Ci),
            "cb" => Ok(Self::Cb),
            "nac" => Ok(Self::Nac),
            other => Err(format!("unknown section: {other}")),
        }
    }
}
