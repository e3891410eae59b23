//! Movement skill catalog - the 18 fixed test items and their categories.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Category a movement skill belongs to.
///
/// Declaration order is the catalog order in which categories first appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Running,
    LocomotorControl,
    ObjectControlUpper,
    ObjectControlLower,
    BalanceStability,
}

impl SkillCategory {
    /// Returns all categories in catalog order.
    pub fn all() -> &'static [SkillCategory] {
        &[
            SkillCategory::Running,
            SkillCategory::LocomotorControl,
            SkillCategory::ObjectControlUpper,
            SkillCategory::ObjectControlLower,
            SkillCategory::BalanceStability,
        ]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SkillCategory::Running => "Running",
            SkillCategory::LocomotorControl => "Locomotor Control",
            SkillCategory::ObjectControlUpper => "Object Control - Upper",
            SkillCategory::ObjectControlLower => "Object Control - Lower",
            SkillCategory::BalanceStability => "Balance & Stability",
        }
    }

    /// Returns the icon identifier used by the mobile client.
    pub fn icon(&self) -> &'static str {
        match self {
            SkillCategory::Running => "walk",
            SkillCategory::LocomotorControl => "footsteps",
            SkillCategory::ObjectControlUpper => "hand-left",
            SkillCategory::ObjectControlLower => "football",
            SkillCategory::BalanceStability => "body",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Catalog identifier of a movement skill (1..=18).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillId(u8);

impl SkillId {
    /// Wraps a raw id. Membership in the catalog is checked by [`SkillCatalog::find`].
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw id.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single physical-competency test item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovementSkill {
    pub id: SkillId,
    pub name: &'static str,
    pub category: SkillCategory,
}

const fn skill(id: u8, name: &'static str, category: SkillCategory) -> MovementSkill {
    MovementSkill {
        id: SkillId::new(id),
        name,
        category,
    }
}

/// Number of skills graded in every assessment.
pub const SKILL_COUNT: usize = 18;

/// The fixed movement skill catalog, in grading order.
pub const MOVEMENT_SKILLS: [MovementSkill; SKILL_COUNT] = [
    skill(1, "Run a square", SkillCategory::Running),
    skill(2, "Run there and back", SkillCategory::Running),
    skill(3, "Run, jump, land on two feet", SkillCategory::Running),
    skill(4, "Crossovers", SkillCategory::LocomotorControl),
    skill(5, "Skip", SkillCategory::LocomotorControl),
    skill(6, "Gallop", SkillCategory::LocomotorControl),
    skill(7, "Hop", SkillCategory::LocomotorControl),
    skill(8, "Jump", SkillCategory::LocomotorControl),
    skill(9, "Overhead throw", SkillCategory::ObjectControlUpper),
    skill(10, "Strike with stick", SkillCategory::ObjectControlUpper),
    skill(11, "One-handed catch", SkillCategory::ObjectControlUpper),
    skill(12, "Hand dribble", SkillCategory::ObjectControlUpper),
    skill(13, "Kick ball", SkillCategory::ObjectControlLower),
    skill(14, "Foot dribble", SkillCategory::ObjectControlLower),
    skill(15, "Balance walk forward", SkillCategory::BalanceStability),
    skill(16, "Balance walk backward", SkillCategory::BalanceStability),
    skill(17, "Drop and get up", SkillCategory::BalanceStability),
    skill(18, "Lift and lower", SkillCategory::BalanceStability),
];

static SKILLS_BY_ID: Lazy<HashMap<SkillId, &'static MovementSkill>> =
    Lazy::new(|| MOVEMENT_SKILLS.iter().map(|s| (s.id, s)).collect());

/// Read-only access to the movement skill catalog.
pub struct SkillCatalog;

impl SkillCatalog {
    /// Returns all skills in grading order.
    pub fn all() -> &'static [MovementSkill; SKILL_COUNT] {
        &MOVEMENT_SKILLS
    }

    /// Returns the skill at a 0-based grading position.
    pub fn at(index: usize) -> Option<&'static MovementSkill> {
        MOVEMENT_SKILLS.get(index)
    }

    /// Looks up a skill by id.
    pub fn find(id: SkillId) -> Option<&'static MovementSkill> {
        SKILLS_BY_ID.get(&id).copied()
    }

    /// Returns the number of skills in the catalog.
    pub fn len() -> usize {
        SKILL_COUNT
    }

    /// Returns the skills belonging to a category, in grading order.
    pub fn in_category(category: SkillCategory) -> impl Iterator<Item = &'static MovementSkill> {
        MOVEMENT_SKILLS.iter().filter(move |s| s.category == category)
    }
}
