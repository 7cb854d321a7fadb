//! Remote-work policies — how much on-site area a partially absent
//! workforce still needs.
//!
//! Each policy maps to a multiplicative factor applied to usable area.
//! The set is fixed; keys outside it are a caller error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SpaceError;

/// Remote-work policy, in increasing order of time spent off-site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum RemoteWorkPolicy {
    /// Everyone on-site every day.
    #[default]
    FullOnsite = 0,
    /// One remote day per week.
    HybridLight = 1,
    /// Two remote days per week.
    HybridModerate = 2,
    /// Three remote days per week.
    HybridHeavy = 3,
    /// Four remote days per week.
    RemoteFirst = 4,
    /// Fully remote, hoteling only.
    FullyRemote = 5,
}

/// Policy metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyInfo {
    pub key: &'static str,
    /// Share of usable area still required, in (0, 1].
    pub factor: f64,
    pub description: &'static str,
}

impl RemoteWorkPolicy {
    /// All policies in declaration order.
    pub fn all() -> &'static [RemoteWorkPolicy] {
        &[
            Self::FullOnsite,
            Self::HybridLight,
            Self::HybridModerate,
            Self::HybridHeavy,
            Self::RemoteFirst,
            Self::FullyRemote,
        ]
    }

    pub fn info(&self) -> PolicyInfo {
        match self {
            Self::FullOnsite => PolicyInfo {
                key: "full_onsite",
                factor: 1.0,
                description: "100% on-site, no reduction",
            },
            Self::HybridLight => PolicyInfo {
                key: "hybrid_light",
                factor: 0.85,
                description: "1 day remote/week (~15% reduction)",
            },
            Self::HybridModerate => PolicyInfo {
                key: "hybrid_moderate",
                factor: 0.70,
                description: "2 days remote/week (~30% reduction)",
            },
            Self::HybridHeavy => PolicyInfo {
                key: "hybrid_heavy",
                factor: 0.55,
                description: "3 days remote/week (~45% reduction)",
            },
            Self::RemoteFirst => PolicyInfo {
                key: "remote_first",
                factor: 0.40,
                description: "4 days remote/week (~60% reduction)",
            },
            Self::FullyRemote => PolicyInfo {
                key: "fully_remote",
                factor: 0.15,
                description: "Fully remote, hoteling only (~85% reduction)",
            },
        }
    }

    pub fn key(&self) -> &'static str {
        self.info().key
    }

    pub fn factor(&self) -> f64 {
        self.info().factor
    }

    pub fn description(&self) -> &'static str {
        self.info().description
    }

    /// Resolve a policy key, failing on anything outside the fixed set.
    pub fn from_key(key: &str) -> Result<Self, SpaceError> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.key() == key)
            .ok_or_else(|| SpaceError::InvalidPolicyKey(key.to_string()))
    }

    pub fn from_u8(val: u8) -> Option<Self> {
        Self::all().get(val as usize).copied()
    }

    /// Human-readable label, e.g. "Hybrid Moderate".
    pub fn label(&self) -> String {
        self.key()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for RemoteWorkPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RemoteWorkPolicy {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl Serialize for RemoteWorkPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for RemoteWorkPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Self::from_key(&key).map_err(serde::de::Error::custom)
    }
}
