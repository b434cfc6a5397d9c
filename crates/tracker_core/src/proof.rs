use serde::{Deserialize, Serialize};
use url::Url;

use crate::ChecklistState;

/// The three artifact links required before shipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProofSlot {
    /// Hosted project link.
    Lovable,
    /// Source repository link.
    Github,
    /// Live deployment link.
    Deploy,
}

impl ProofSlot {
    pub const ALL: [ProofSlot; 3] = [ProofSlot::Lovable, ProofSlot::Github, ProofSlot::Deploy];

    pub fn label(self) -> &'static str {
        match self {
            ProofSlot::Lovable => "Lovable Project Link",
            ProofSlot::Github => "GitHub Repository Link",
            ProofSlot::Deploy => "Deployed URL",
        }
    }
}

/// Raw text of each proof slot. Invalid text is kept as entered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProofRecord {
    lovable_slot: String,
    github_slot: String,
    deploy_slot: String,
}

impl ProofRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: ProofSlot) -> &str {
        match slot {
            ProofSlot::Lovable => &self.lovable_slot,
            ProofSlot::Github => &self.github_slot,
            ProofSlot::Deploy => &self.deploy_slot,
        }
    }

    /// Stores `text` unconditionally. Returns false when it was already there.
    pub fn set(&mut self, slot: ProofSlot, text: impl Into<String>) -> bool {
        let text = text.into();
        let target = match slot {
            ProofSlot::Lovable => &mut self.lovable_slot,
            ProofSlot::Github => &mut self.github_slot,
            ProofSlot::Deploy => &mut self.deploy_slot,
        };
        if *target == text {
            return false;
        }
        *target = text;
        true
    }

    pub fn is_slot_valid(&self, slot: ProofSlot) -> bool {
        is_valid_url(self.get(slot))
    }

    pub fn all_valid(&self) -> bool {
        ProofSlot::ALL.into_iter().all(|slot| self.is_slot_valid(slot))
    }

    pub fn all_empty(&self) -> bool {
        ProofSlot::ALL
            .into_iter()
            .all(|slot| self.get(slot).trim().is_empty())
    }
}

/// True iff `text` is an absolute URL with scheme `http` or `https`.
pub fn is_valid_url(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    match Url::parse(text) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShipQualification {
    #[default]
    NotStarted,
    InProgress,
    Shipped,
}

impl ShipQualification {
    pub fn label(self) -> &'static str {
        match self {
            ShipQualification::NotStarted => "Not Started",
            ShipQualification::InProgress => "In Progress",
            ShipQualification::Shipped => "Shipped",
        }
    }
}

/// Derives the ship status from both gates. Never persisted.
pub fn qualification(proofs: &ProofRecord, checklist: &ChecklistState) -> ShipQualification {
    if checklist.is_unlocked() && proofs.all_valid() {
        ShipQualification::Shipped
    } else if proofs.all_empty() {
        ShipQualification::NotStarted
    } else {
        ShipQualification::InProgress
    }
}
