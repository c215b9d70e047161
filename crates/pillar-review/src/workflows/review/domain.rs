use super::analysis::NarrativePolicy;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategic objective a batch of projects is reviewed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    Governance,
    HumanCentric,
    Infrastructure,
    Economy,
}

impl Pillar {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Governance,
            Self::HumanCentric,
            Self::Infrastructure,
            Self::Economy,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Governance => "Effective Governance",
            Self::HumanCentric => "Human Centric City",
            Self::Infrastructure => "Modern Infrastructure",
            Self::Economy => "Thriving Economy",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Governance => "governance",
            Self::HumanCentric => "human_centric",
            Self::Infrastructure => "infrastructure",
            Self::Economy => "economy",
        }
    }

    /// Artifact file stem: the label with spaces replaced by underscores.
    pub fn file_stem(self) -> String {
        self.label().replace(' ', "_")
    }

    /// Accepts the key, the label, or the label in snake case, ignoring case.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw
            .trim()
            .to_ascii_lowercase()
            .replace(|c: char| c == ' ' || c == '-', "_");

        Self::ordered().into_iter().find(|pillar| {
            pillar.key() == normalized || pillar.file_stem().to_ascii_lowercase() == normalized
        })
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Pillar {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InputError::UnknownPillar(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown pillar '{0}' (expected Effective Governance, Human Centric City, Modern Infrastructure or Thriving Economy)")]
    UnknownPillar(String),
}

/// Raw operator input as a form or JSON payload delivers it.
///
/// Counters are signed so out-of-range entries can be clamped rather than
/// rejected at deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewForm {
    pub pillar: String,
    #[serde(default, deserialize_with = "deserialize_counter")]
    pub total: i64,
    #[serde(default, deserialize_with = "deserialize_counter")]
    pub not_started: i64,
    #[serde(default, deserialize_with = "deserialize_counter")]
    pub in_progress: i64,
    #[serde(default, deserialize_with = "deserialize_counter")]
    pub completed: i64,
    #[serde(default, deserialize_with = "deserialize_counter")]
    pub green: i64,
    #[serde(default, deserialize_with = "deserialize_counter")]
    pub amber: i64,
    #[serde(default, deserialize_with = "deserialize_counter")]
    pub red: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<NarrativePolicy>,
}

impl ReviewForm {
    /// Builds the validated input, clamping every counter the way a bounded
    /// number widget would.
    ///
    /// `total` is floored at zero and each category is held to `[0, total]`.
    /// The status categories are not checked against each other.
    pub fn collect(&self) -> Result<ReviewInput, InputError> {
        let pillar: Pillar = self.pillar.parse()?;
        let total = clamp_count(self.total, u32::MAX);
        let within_total = |value: i64| clamp_count(value, total);

        Ok(ReviewInput {
            pillar,
            total,
            not_started: within_total(self.not_started),
            in_progress: within_total(self.in_progress),
            completed: within_total(self.completed),
            green: within_total(self.green),
            amber: within_total(self.amber),
            red: within_total(self.red),
        })
    }
}

/// Accepts a number or numeric text. A blank entry, as a cleared form field
/// submits it, reads as zero.
fn deserialize_counter<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct CounterVisitor;

    impl<'de> Visitor<'de> for CounterVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a whole number or a blank field")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
            Ok(i64::try_from(value).unwrap_or(i64::MAX))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<i64, E> {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed.parse().map_err(E::custom)
        }

        fn visit_unit<E: de::Error>(self) -> Result<i64, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<i64, E> {
            Ok(0)
        }
    }

    deserializer.deserialize_any(CounterVisitor)
}

fn clamp_count(value: i64, max: u32) -> u32 {
    value.clamp(0, i64::from(max)) as u32
}

/// Counters for one pillar, fixed for the lifetime of a single action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReviewInput {
    pub pillar: Pillar,
    pub total: u32,
    pub not_started: u32,
    pub in_progress: u32,
    pub completed: u32,
    pub green: u32,
    pub amber: u32,
    pub red: u32,
}

impl ReviewInput {
    pub fn status_sum(&self) -> u64 {
        u64::from(self.green) + u64::from(self.amber) + u64::from(self.red)
    }
}
