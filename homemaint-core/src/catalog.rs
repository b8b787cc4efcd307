//! The fixed task catalog: the four maintenance kinds, their service
//! intervals, and their prompt text.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Furnace,
    Fridge,
    Detector,
    Dryer,
}

impl TaskKind {
    /// Canonical catalog order. The store file writes one row per kind in
    /// exactly this order.
    pub const ALL: [TaskKind; 4] = [
        TaskKind::Furnace,
        TaskKind::Fridge,
        TaskKind::Detector,
        TaskKind::Dryer,
    ];

    /// Lowercase keyword, used both as the menu command and as the `type`
    /// column in the store file.
    pub fn name(self) -> &'static str {
        match self {
            TaskKind::Furnace => "furnace",
            TaskKind::Fridge => "fridge",
            TaskKind::Detector => "detector",
            TaskKind::Dryer => "dryer",
        }
    }

    /// Resolve an already-normalized (trimmed, lowercased) keyword.
    /// No abbreviations or aliases.
    pub fn from_keyword(s: &str) -> Option<TaskKind> {
        Self::ALL.into_iter().find(|k| k.name() == s)
    }
}

/// One catalog row: interval plus the exact wording used when asking for
/// and reporting a service date.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub kind: TaskKind,
    pub interval_months: u32,
    pub completion_prompt: &'static str,
    pub due_notice: &'static str,
}

/// The whole catalog as data, so the session loop never branches per kind.
pub const CATALOG: [CatalogEntry; 4] = [
    CatalogEntry {
        kind: TaskKind::Furnace,
        interval_months: 3,
        completion_prompt: "When did you last change your furnace filter?",
        due_notice: "The furnace filter is due to be changed on: ",
    },
    CatalogEntry {
        kind: TaskKind::Fridge,
        interval_months: 12,
        completion_prompt: "When did you last vacuum behind the fridge?",
        due_notice: "The fridge is due to be vacuumed on: ",
    },
    CatalogEntry {
        kind: TaskKind::Detector,
        interval_months: 12,
        completion_prompt: "When did you change the batteries in the smoke and CO detectors?",
        due_notice: "The smoke and CO detector batteries are due to be changed on: ",
    },
    CatalogEntry {
        kind: TaskKind::Dryer,
        interval_months: 12,
        completion_prompt: "When did you clean out the dryer vent?",
        due_notice: "The dryer vent is due to be cleaned on: ",
    },
];

pub fn catalog_entry(kind: TaskKind) -> &'static CatalogEntry {
    // CATALOG rows are in discriminant order.
    &CATALOG[kind as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_round_trip() {
        for kind in TaskKind::ALL {
            assert_eq!(TaskKind::from_keyword(kind.name()), Some(kind));
        }
        assert_eq!(TaskKind::from_keyword("oven"), None);
        assert_eq!(TaskKind::from_keyword("Furnace"), None); // caller normalizes
    }

    #[test]
    fn catalog_matches_kind_order() {
        for (entry, kind) in CATALOG.iter().zip(TaskKind::ALL) {
            assert_eq!(entry.kind, kind);
        }
        assert_eq!(catalog_entry(TaskKind::Furnace).interval_months, 3);
        assert_eq!(catalog_entry(TaskKind::Dryer).interval_months, 12);
    }
}
