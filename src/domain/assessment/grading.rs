//! Skill Grading Store - per-session grades and the single-skill review cursor.

use serde::{Deserialize, Serialize};

use super::catalog::{MovementSkill, SkillCatalog, SkillId, SKILL_COUNT};
use super::grade::Grade;

/// Grade recorded for one skill during one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGrade {
    pub skill_id: SkillId,
    pub grade: Grade,
    #[serde(default)]
    pub notes: String,
}

impl SkillGrade {
    /// Creates a grade with empty notes.
    pub fn new(skill_id: SkillId, grade: Grade) -> Self {
        Self {
            skill_id,
            grade,
            notes: String::new(),
        }
    }
}

/// Number of skills recorded at each grade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GradeCounts {
    pub initial: usize,
    pub emerging: usize,
    pub developing: usize,
    pub proficient: usize,
}

impl GradeCounts {
    /// Returns the tally for a grade.
    pub fn get(&self, grade: Grade) -> usize {
        match grade {
            Grade::Initial => self.initial,
            Grade::Emerging => self.emerging,
            Grade::Developing => self.developing,
            Grade::Proficient => self.proficient,
        }
    }

    fn increment(&mut self, grade: Grade) {
        match grade {
            Grade::Initial => self.initial += 1,
            Grade::Emerging => self.emerging += 1,
            Grade::Developing => self.developing += 1,
            Grade::Proficient => self.proficient += 1,
        }
    }
}

/// Holds at most one grade per skill plus a cursor over the catalog.
///
/// # Invariants
///
/// - No two entries share a `skill_id` (upsert keyed by skill)
/// - Entries keep the order in which skills were first graded
/// - `cursor` is always within `0..SKILL_COUNT`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillGradingStore {
    grades: Vec<SkillGrade>,
    cursor: usize,
}

impl SkillGradingStore {
    /// Creates an empty store with the cursor on the first skill.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a grade for a skill, replacing any previous grade in place.
    ///
    /// Notes on an existing entry are left untouched.
    pub fn set_grade(&mut self, skill_id: SkillId, grade: Grade) {
        match self.grades.iter_mut().find(|g| g.skill_id == skill_id) {
            Some(existing) => existing.grade = grade,
            None => self.grades.push(SkillGrade::new(skill_id, grade)),
        }
    }

    /// Grades the skill under the cursor.
    pub fn grade_current(&mut self, grade: Grade) {
        let skill_id = self.current_skill().id;
        self.set_grade(skill_id, grade);
    }

    /// Attaches notes to an already graded skill.
    ///
    /// Returns false when the skill has not been graded yet.
    pub fn set_notes(&mut self, skill_id: SkillId, notes: impl Into<String>) -> bool {
        match self.grades.iter_mut().find(|g| g.skill_id == skill_id) {
            Some(existing) => {
                existing.notes = notes.into();
                true
            }
            None => false,
        }
    }

    /// Moves the cursor forward. No-op on the last skill.
    pub fn move_next(&mut self) -> bool {
        if self.cursor + 1 < SKILL_COUNT {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Moves the cursor back. No-op on the first skill.
    pub fn move_previous(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Returns the 0-based cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the skill under the cursor.
    pub fn current_skill(&self) -> &'static MovementSkill {
        &SkillCatalog::all()[self.cursor]
    }

    /// Returns the grade for the skill under the cursor, if any.
    pub fn grade_for_current(&self) -> Option<Grade> {
        self.grade_for(self.current_skill().id)
    }

    /// Returns the grade recorded for a skill, if any.
    pub fn grade_for(&self, skill_id: SkillId) -> Option<Grade> {
        self.grades
            .iter()
            .find(|g| g.skill_id == skill_id)
            .map(|g| g.grade)
    }

    /// Returns the number of distinct skills graded.
    pub fn graded_count(&self) -> usize {
        self.grades.len()
    }

    /// Returns true when every catalog skill has exactly one grade.
    pub fn is_complete(&self) -> bool {
        self.grades.len() == SKILL_COUNT
            && SkillCatalog::all()
                .iter()
                .all(|skill| self.grade_for(skill.id).is_some())
    }

    /// Returns all grades in the order skills were first graded.
    pub fn grades(&self) -> &[SkillGrade] {
        &self.grades
    }

    /// Tallies grades by level.
    pub fn grade_counts(&self) -> GradeCounts {
        let mut counts = GradeCounts::default();
        for g in &self.grades {
            counts.increment(g.grade);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graded_all(grade: Grade) -> SkillGradingStore {
        let mut store = SkillGradingStore::new();
        for skill in SkillCatalog::all() {
            store.set_grade(skill.id, grade);
        }
        store
    }

    #[test]
    fn set_grade_inserts_new_entry_with_empty_notes() {
        let mut store = SkillGradingStore::new();
        store.set_grade(SkillId::new(5), Grade::Emerging);

        assert_eq!(store.graded_count(), 1);
        assert_eq!(store.grades()[0].notes, "");
        assert_eq!(store.grade_for(SkillId::new(5)), Some(Grade::Emerging));
    }

    #[test]
    fn set_grade_replaces_in_place_and_keeps_notes() {
        let mut store = SkillGradingStore::new();
        store.set_grade(SkillId::new(1), Grade::Initial);
        store.set_grade(SkillId::new(2), Grade::Initial);
        assert!(store.set_notes(SkillId::new(1), "hesitant on corners"));

        store.set_grade(SkillId::new(1), Grade::Developing);

        assert_eq!(store.graded_count(), 2);
        assert_eq!(store.grades()[0].skill_id, SkillId::new(1));
        assert_eq!(store.grades()[0].grade, Grade::Developing);
        assert_eq!(store.grades()[0].notes, "hesitant on corners");
    }

    #[test]
    fn setting_same_grade_twice_is_idempotent() {
        let mut once = SkillGradingStore::new();
        once.grade_current(Grade::Proficient);

        let mut twice = SkillGradingStore::new();
        twice.grade_current(Grade::Proficient);
        twice.grade_current(Grade::Proficient);

        assert_eq!(once, twice);
        assert_eq!(twice.graded_count(), 1);
        assert_eq!(twice.grade_for_current(), Some(Grade::Proficient));
    }

    #[test]
    fn set_notes_on_ungraded_skill_is_rejected() {
        let mut store = SkillGradingStore::new();
        assert!(!store.set_notes(SkillId::new(3), "n/a"));
        assert_eq!(store.graded_count(), 0);
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut store = SkillGradingStore::new();
        assert!(!store.move_previous());
        assert_eq!(store.cursor(), 0);

        for _ in 0..40 {
            store.move_next();
        }
        assert_eq!(store.cursor(), 17);
        assert!(!store.move_next());
        assert_eq!(store.cursor(), 17);
        assert_eq!(store.current_skill().name, "Lift and lower");
    }

    #[test]
    fn grade_for_current_follows_cursor() {
        let mut store = SkillGradingStore::new();
        store.grade_current(Grade::Emerging);
        store.move_next();

        assert_eq!(store.grade_for_current(), None);
        store.move_previous();
        assert_eq!(store.grade_for_current(), Some(Grade::Emerging));
    }

    #[test]
    fn complete_only_with_all_18_skills() {
        let mut store = graded_all(Grade::Developing);
        assert!(store.is_complete());

        let mut partial = SkillGradingStore::new();
        for skill in SkillCatalog::all().iter().take(17) {
            partial.set_grade(skill.id, Grade::Developing);
        }
        assert!(!partial.is_complete());

        // Re-grading does not change coverage.
        store.set_grade(SkillId::new(4), Grade::Initial);
        assert!(store.is_complete());
    }

    #[test]
    fn stale_ids_never_complete_the_store() {
        let mut store = SkillGradingStore::new();
        for skill in SkillCatalog::all().iter().take(17) {
            store.set_grade(skill.id, Grade::Developing);
        }
        store.set_grade(SkillId::new(99), Grade::Developing);

        assert_eq!(store.graded_count(), 18);
        assert!(!store.is_complete());
    }

    #[test]
    fn grade_counts_tally_each_level() {
        let mut store = SkillGradingStore::new();
        store.set_grade(SkillId::new(1), Grade::Proficient);
        store.set_grade(SkillId::new(2), Grade::Proficient);
        store.set_grade(SkillId::new(3), Grade::Developing);
        store.set_grade(SkillId::new(4), Grade::Initial);

        let counts = store.grade_counts();
        assert_eq!(counts.proficient, 2);
        assert_eq!(counts.developing, 1);
        assert_eq!(counts.emerging, 0);
        assert_eq!(counts.get(Grade::Initial), 1);
    }
}
