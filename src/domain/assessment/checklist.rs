//! Pre-test checklist that gates the start of an assessment.

use serde::{Deserialize, Serialize};

/// One requirement on the pre-test checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistItem {
    /// Physical Activity Readiness Questionnaire completed.
    ParQ,
    /// Consent to collect and process data.
    DataProtection,
    /// Guardian signature for athletes under 18.
    GuardianSignature,
}

impl ChecklistItem {
    /// Returns all items in display order.
    pub fn all() -> &'static [ChecklistItem] {
        &[
            ChecklistItem::ParQ,
            ChecklistItem::DataProtection,
            ChecklistItem::GuardianSignature,
        ]
    }

    /// Returns the display title.
    pub fn title(&self) -> &'static str {
        match self {
            ChecklistItem::ParQ => "PAR-Q Completion",
            ChecklistItem::DataProtection => "Data Protection Agreement",
            ChecklistItem::GuardianSignature => "Guardian Signature",
        }
    }

    /// Returns the one-line explanation shown under the title.
    pub fn description(&self) -> &'static str {
        match self {
            ChecklistItem::ParQ => "Physical Activity Readiness Questionnaire",
            ChecklistItem::DataProtection => "Consent to collect and process data",
            ChecklistItem::GuardianSignature => "Required for athletes under 18",
        }
    }
}

/// State of the three pre-test flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreTestChecklist {
    pub parq_completed: bool,
    pub data_protection: bool,
    pub guardian_signed: bool,
}

impl PreTestChecklist {
    /// Returns whether an item is checked.
    pub fn is_checked(&self, item: ChecklistItem) -> bool {
        match item {
            ChecklistItem::ParQ => self.parq_completed,
            ChecklistItem::DataProtection => self.data_protection,
            ChecklistItem::GuardianSignature => self.guardian_signed,
        }
    }

    /// Sets an item explicitly.
    pub fn set(&mut self, item: ChecklistItem, checked: bool) {
        match item {
            ChecklistItem::ParQ => self.parq_completed = checked,
            ChecklistItem::DataProtection => self.data_protection = checked,
            ChecklistItem::GuardianSignature => self.guardian_signed = checked,
        }
    }

    /// Flips an item and returns its new state.
    pub fn toggle(&mut self, item: ChecklistItem) -> bool {
        let checked = !self.is_checked(item);
        self.set(item, checked);
        checked
    }

    /// True when all three items are checked.
    pub fn is_complete(&self) -> bool {
        self.parq_completed && self.data_protection && self.guardian_signed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_until_all_three_checked() {
        let mut checklist = PreTestChecklist::default();
        checklist.toggle(ChecklistItem::ParQ);
        checklist.toggle(ChecklistItem::DataProtection);
        assert!(!checklist.is_complete());

        checklist.toggle(ChecklistItem::GuardianSignature);
        assert!(checklist.is_complete());
    }

    #[test]
    fn toggle_flips_and_reports_state() {
        let mut checklist = PreTestChecklist::default();
        assert!(checklist.toggle(ChecklistItem::DataProtection));
        assert!(!checklist.toggle(ChecklistItem::DataProtection));
        assert!(!checklist.data_protection);
    }

    #[test]
    fn set_is_explicit() {
        let mut checklist = PreTestChecklist::default();
        checklist.set(ChecklistItem::GuardianSignature, true);
        checklist.set(ChecklistItem::GuardianSignature, true);
        assert!(checklist.is_checked(ChecklistItem::GuardianSignature));
    }
}
