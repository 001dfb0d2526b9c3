//! Tier label vocabulary.
//!
//! Labels are the only names shared between classification and the group
//! catalog. Every label has a stable string key:
//!
//! ```text
//! volume.<tier>        volume.lessThan5k, volume.moreThan45k
//! skill.<tier>         skill.red .. skill.purple
//! trend.<tier>.<dir>   trend.green.up, trend.green.down
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the three independent classification dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    Volume,
    Skill,
    Trend,
}

impl Axis {
    /// Key prefix used by labels on this axis.
    pub const fn prefix(self) -> &'static str {
        match self {
            Axis::Volume => "volume",
            Axis::Skill => "skill",
            Axis::Trend => "trend",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Battle volume tiers, fewest battles first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VolumeTier {
    LessThan5k,
    MoreThan5k,
    MoreThan15k,
    MoreThan30k,
    MoreThan45k,
}

impl VolumeTier {
    /// Volume tiers, fewest battles first.
    pub const ALL: [VolumeTier; 5] = [
        VolumeTier::LessThan5k,
        VolumeTier::MoreThan5k,
        VolumeTier::MoreThan15k,
        VolumeTier::MoreThan30k,
        VolumeTier::MoreThan45k,
    ];

    /// Key segment used in label strings, e.g. `lessThan5k`.
    pub const fn key(self) -> &'static str {
        match self {
            VolumeTier::LessThan5k => "lessThan5k",
            VolumeTier::MoreThan5k => "moreThan5k",
            VolumeTier::MoreThan15k => "moreThan15k",
            VolumeTier::MoreThan30k => "moreThan30k",
            VolumeTier::MoreThan45k => "moreThan45k",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// Skill tiers, lowest rating first. Shared by the overall and trend axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkillTier {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl SkillTier {
    /// Skill tiers, lowest rating first.
    pub const ALL: [SkillTier; 6] = [
        SkillTier::Red,
        SkillTier::Orange,
        SkillTier::Yellow,
        SkillTier::Green,
        SkillTier::Blue,
        SkillTier::Purple,
    ];

    /// Key segment used in label strings, e.g. `green`.
    pub const fn key(self) -> &'static str {
        match self {
            SkillTier::Red => "red",
            SkillTier::Orange => "orange",
            SkillTier::Yellow => "yellow",
            SkillTier::Green => "green",
            SkillTier::Blue => "blue",
            SkillTier::Purple => "purple",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// Whether the recent score beats the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Improving,
    Declining,
}

impl Direction {
    /// Both directions, improving first.
    pub const ALL: [Direction; 2] = [Direction::Improving, Direction::Declining];

    /// Strictly greater is improving; a tie counts as declining.
    pub fn between(recent: f64, overall: f64) -> Self {
        if recent > overall {
            Direction::Improving
        } else {
            Direction::Declining
        }
    }

    /// Suffix used in trend label strings: `up` or `down`.
    pub const fn key(self) -> &'static str {
        match self {
            Direction::Improving => "up",
            Direction::Declining => "down",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

/// A symbolic rank label on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TierLabel {
    Volume(VolumeTier),
    Skill(SkillTier),
    Trend(SkillTier, Direction),
}

impl TierLabel {
    /// Number of distinct labels across all axes.
    pub const COUNT: usize = 5 + 6 + 6 * 2;

    /// Axis this label belongs to.
    pub const fn axis(self) -> Axis {
        match self {
            TierLabel::Volume(_) => Axis::Volume,
            TierLabel::Skill(_) => Axis::Skill,
            TierLabel::Trend(..) => Axis::Trend,
        }
    }

    /// Every label the classifiers can produce, axis by axis.
    pub fn all() -> impl Iterator<Item = TierLabel> {
        let volume = VolumeTier::ALL.into_iter().map(TierLabel::Volume);
        let skill = SkillTier::ALL.into_iter().map(TierLabel::Skill);
        let trend = SkillTier::ALL.into_iter().flat_map(|tier| {
            Direction::ALL
                .into_iter()
                .map(move |direction| TierLabel::Trend(tier, direction))
        });
        volume.chain(skill).chain(trend)
    }
}

impl fmt::Display for TierLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierLabel::Volume(tier) => write!(f, "volume.{}", tier.key()),
            TierLabel::Skill(tier) => write!(f, "skill.{}", tier.key()),
            TierLabel::Trend(tier, direction) => {
                write!(f, "trend.{}.{}", tier.key(), direction.key())
            }
        }
    }
}

/// A string that is not a valid label key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tier label: {0:?}")]
pub struct ParseLabelError(pub String);

impl FromStr for TierLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let label = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some("volume"), Some(tier), None, None) => {
                VolumeTier::from_key(tier).map(TierLabel::Volume)
            }
            (Some("skill"), Some(tier), None, None) => {
                SkillTier::from_key(tier).map(TierLabel::Skill)
            }
            (Some("trend"), Some(tier), Some(direction), None) => {
                SkillTier::from_key(tier)
                    .zip(Direction::from_key(direction))
                    .map(|(tier, direction)| TierLabel::Trend(tier, direction))
            }
            _ => None,
        };
        label.ok_or_else(|| ParseLabelError(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TierLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TierLabel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_labels_are_distinct() {
        let labels: Vec<_> = TierLabel::all().collect();
        assert_eq!(labels.len(), TierLabel::COUNT);

        let unique: HashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), TierLabel::COUNT);
    }

    #[test]
    fn keys_parse_back() {
        for label in TierLabel::all() {
            let key = label.to_string();
            assert_eq!(key.parse::<TierLabel>(), Ok(label), "key {key}");
        }
    }

    #[test]
    fn key_format() {
        assert_eq!(TierLabel::Skill(SkillTier::Green).to_string(), "skill.green");
        assert_eq!(
            TierLabel::Volume(VolumeTier::MoreThan30k).to_string(),
            "volume.moreThan30k"
        );
        assert_eq!(
            TierLabel::Trend(SkillTier::Yellow, Direction::Improving).to_string(),
            "trend.yellow.up"
        );
    }

    #[test]
    fn rejects_malformed_keys() {
        for key in ["", "skill", "skill.teal", "trend.green", "trend.green.sideways", "skill.green.up", "volume.lessThan5k.x"] {
            assert!(key.parse::<TierLabel>().is_err(), "{key:?} should not parse");
        }
    }

    #[test]
    fn tie_counts_as_declining() {
        assert_eq!(Direction::between(2000.0, 2000.0), Direction::Declining);
        assert_eq!(Direction::between(2000.5, 2000.0), Direction::Improving);
        assert_eq!(Direction::between(1999.5, 2000.0), Direction::Declining);
    }

    #[test]
    fn axis_of_each_label() {
        assert_eq!(TierLabel::all().filter(|l| l.axis() == Axis::Volume).count(), 5);
        assert_eq!(TierLabel::all().filter(|l| l.axis() == Axis::Skill).count(), 6);
        assert_eq!(TierLabel::all().filter(|l| l.axis() == Axis::Trend).count(), 12);
    }
}
