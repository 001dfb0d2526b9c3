//! Display names of the rank groups on the voice server.
//!
//! The voice server only reports groups by id and name, so the catalog can
//! be rebuilt at startup by matching these names. Names must match the
//! server byte for byte, spacing included.

use std::collections::BTreeMap;

use statrank_tiers::{Direction, SkillTier, TierLabel, VolumeTier};

/// Label to display-name table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNames {
    names: BTreeMap<TierLabel, String>,
}

impl Default for GroupNames {
    fn default() -> Self {
        let names = TierLabel::all()
            .map(|label| (label, default_name(label).to_string()))
            .collect();
        Self { names }
    }
}

impl GroupNames {
    /// A table with no names at all.
    pub fn empty() -> Self {
        Self {
            names: BTreeMap::new(),
        }
    }

    /// Replace (or set) the name for one label.
    pub fn with_name(mut self, label: TierLabel, name: impl Into<String>) -> Self {
        self.names.insert(label, name.into());
        self
    }

    /// Display name of the group for `label`.
    pub fn name(&self, label: TierLabel) -> Option<&str> {
        self.names.get(&label).map(String::as_str)
    }

    /// Names in label order.
    pub fn iter(&self) -> impl Iterator<Item = (TierLabel, &str)> {
        self.names.iter().map(|(label, name)| (*label, name.as_str()))
    }
}

fn default_name(label: TierLabel) -> &'static str {
    use Direction::{Declining as Fall, Improving as Grow};
    use SkillTier::*;

    match label {
        TierLabel::Volume(VolumeTier::LessThan5k) => "╠• Менее 5к боев",
        TierLabel::Volume(VolumeTier::MoreThan5k) => "╠• Более 5к боев",
        TierLabel::Volume(VolumeTier::MoreThan15k) => "╠• Более 15к боев",
        TierLabel::Volume(VolumeTier::MoreThan30k) => "╠• Более 30к боев",
        TierLabel::Volume(VolumeTier::MoreThan45k) => "╠• Более 45к боев",

        TierLabel::Skill(Purple) => "╠• Уникальный Игрок",
        TierLabel::Skill(Blue) => "╠• Отличный Игрок",
        TierLabel::Skill(Green) => "╠• Хороший Игрок",
        TierLabel::Skill(Yellow) => "╠• Нормальный Игрок",
        TierLabel::Skill(Orange) => "╠• Игрок Ниже Среднего",
        TierLabel::Skill(Red) => "╠• Твинк либо Плохой Игрок",

        TierLabel::Trend(Purple, Grow) => "╠• Фиолет, растет",
        TierLabel::Trend(Purple, Fall) => "╠• Фиолет, сливает",
        TierLabel::Trend(Blue, Grow) => "╠• Бирюза, растет",
        TierLabel::Trend(Blue, Fall) => "╠• Бирюза, сливает",
        TierLabel::Trend(Green, Grow) => "╠• Зеленый, растет",
        TierLabel::Trend(Green, Fall) => "╠• Зеленый, сливает",
        TierLabel::Trend(Yellow, Grow) => "╠• Желтый, растет",
        TierLabel::Trend(Yellow, Fall) => "╠• Желтый, сливает",
        TierLabel::Trend(Orange, Grow) => "╠• Рыжий, растет",
        // Two spaces, as created on the server.
        TierLabel::Trend(Orange, Fall) => "╠• Рыжий,  сливает",
        TierLabel::Trend(Red, Grow) => "╠• Красный, растет",
        TierLabel::Trend(Red, Fall) => "╠• Красный, сливает",
    }
}
