use crate::{ApplicationStatus, Catalog, JobPosting, StatusLedger};

/// Status criterion: either every job, or only jobs holding one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ApplicationStatus),
}

impl StatusFilter {
    pub fn matches(self, status: ApplicationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

/// Active filter settings. `Default` keeps every job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub status: StatusFilter,
    /// Case-insensitive substring of the location; empty disables it.
    pub location: String,
    pub remote_only: bool,
    /// Inclusive lower bound on the match score.
    pub min_score: u8,
}

impl FilterCriteria {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, job: &JobPosting, status: ApplicationStatus) -> bool {
        self.status.matches(status)
            && location_matches(&job.location, &self.location)
            && (!self.remote_only || job.remote)
            && job.match_score >= self.min_score
    }
}

/// A catalog job paired with its current status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRow {
    pub job: JobPosting,
    pub status: ApplicationStatus,
}

/// Jobs satisfying every criterion, in catalog order.
pub fn filter_jobs(
    catalog: &Catalog,
    ledger: &StatusLedger,
    criteria: &FilterCriteria,
) -> Vec<JobRow> {
    catalog
        .jobs()
        .iter()
        .map(|job| (job, ledger.get_status(&job.id)))
        .filter(|(job, status)| criteria.matches(job, *status))
        .map(|(job, status)| JobRow {
            job: job.clone(),
            status,
        })
        .collect()
}

fn location_matches(location: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || location.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_match_ignores_case_and_padding() {
        assert!(location_matches("New York, NY", "  new york "));
        assert!(location_matches("New York, NY", ""));
        assert!(!location_matches("Remote", "york"));
    }
}
