use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The fixed set of manual test items guarding the ship action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestItem {
    PreferencesPersist,
    MatchScoreCorrect,
    ShowMatchesToggle,
    SaveJobPersists,
    ApplyOpensNewTab,
    StatusPersists,
    StatusFilterWorks,
    DigestTopTen,
    DigestPersistsForDay,
    NoConsoleErrors,
}

impl TestItem {
    pub const ALL: [TestItem; 10] = [
        TestItem::PreferencesPersist,
        TestItem::MatchScoreCorrect,
        TestItem::ShowMatchesToggle,
        TestItem::SaveJobPersists,
        TestItem::ApplyOpensNewTab,
        TestItem::StatusPersists,
        TestItem::StatusFilterWorks,
        TestItem::DigestTopTen,
        TestItem::DigestPersistsForDay,
        TestItem::NoConsoleErrors,
    ];

    /// Stable identifier used as the persisted key.
    pub fn id(self) -> &'static str {
        match self {
            TestItem::PreferencesPersist => "preferences-persist",
            TestItem::MatchScoreCorrect => "match-score",
            TestItem::ShowMatchesToggle => "show-matches-toggle",
            TestItem::SaveJobPersists => "save-job-persist",
            TestItem::ApplyOpensNewTab => "apply-new-tab",
            TestItem::StatusPersists => "status-persist",
            TestItem::StatusFilterWorks => "status-filter",
            TestItem::DigestTopTen => "digest-top-ten",
            TestItem::DigestPersistsForDay => "digest-persist-day",
            TestItem::NoConsoleErrors => "no-console-errors",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TestItem::PreferencesPersist => "Preferences persist after refresh",
            TestItem::MatchScoreCorrect => "Match score calculates correctly",
            TestItem::ShowMatchesToggle => "\"Show only matches\" toggle works",
            TestItem::SaveJobPersists => "Save job persists after refresh",
            TestItem::ApplyOpensNewTab => "Apply opens in a new tab",
            TestItem::StatusPersists => "Status update persists after refresh",
            TestItem::StatusFilterWorks => "Status filter works correctly",
            TestItem::DigestTopTen => "Digest generates top 10 by score",
            TestItem::DigestPersistsForDay => "Digest persists for the day",
            TestItem::NoConsoleErrors => "No errors in console on main pages",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.id() == id)
    }
}

/// Pass/fail marks for the fixed test items. Absent means not passed.
///
/// Persisted as `{ "<item id>": bool }`. Keys outside [`TestItem::ALL`] are
/// dropped on load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, bool>", into = "BTreeMap<String, bool>")]
pub struct ChecklistState {
    marks: BTreeMap<TestItem, bool>,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_passed(&self, item: TestItem) -> bool {
        self.marks.get(&item).copied().unwrap_or(false)
    }

    /// Flips one item and returns its new value.
    pub fn toggle(&mut self, item: TestItem) -> bool {
        let passed = !self.is_passed(item);
        self.marks.insert(item, passed);
        passed
    }

    pub fn reset(&mut self) {
        self.marks.clear();
    }

    pub fn pass_count(&self) -> usize {
        self.marks.values().filter(|passed| **passed).count()
    }

    pub fn total(&self) -> usize {
        TestItem::ALL.len()
    }

    pub fn is_unlocked(&self) -> bool {
        self.pass_count() == TestItem::ALL.len()
    }
}

impl From<BTreeMap<String, bool>> for ChecklistState {
    fn from(raw: BTreeMap<String, bool>) -> Self {
        let marks = raw
            .into_iter()
            .filter_map(|(id, passed)| TestItem::from_id(&id).map(|item| (item, passed)))
            .collect();
        Self { marks }
    }
}

impl From<ChecklistState> for BTreeMap<String, bool> {
    fn from(state: ChecklistState) -> Self {
        state
            .marks
            .into_iter()
            .map(|(item, passed)| (item.id().to_string(), passed))
            .collect()
    }
}
