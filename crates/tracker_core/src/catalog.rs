use serde::{Deserialize, Serialize};

pub type JobId = String;

/// A job posting from the static catalog. Never mutated during a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    /// 0..=100.
    pub match_score: u8,
    pub remote: bool,
}

impl JobPosting {
    pub fn new(
        id: impl Into<JobId>,
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        match_score: u8,
        remote: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            company: company.into(),
            location: location.into(),
            match_score: match_score.min(100),
            remote,
        }
    }
}

/// Fixed, ordered list of postings available for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    jobs: Vec<JobPosting>,
}

impl Catalog {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self { jobs }
    }

    /// The built-in seed list.
    pub fn seed() -> Self {
        Self::new(seed_jobs())
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn find(&self, job_id: &str) -> Option<&JobPosting> {
        self.jobs.iter().find(|job| job.id == job_id)
    }

    pub fn contains(&self, job_id: &str) -> bool {
        self.find(job_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

pub fn seed_jobs() -> Vec<JobPosting> {
    vec![
        JobPosting::new("1", "Senior AI Engineer", "Google DeepMind", "London, UK", 95, false),
        JobPosting::new("2", "UI Researcher", "Linear", "Remote", 88, true),
        JobPosting::new("3", "Product Designer", "Airbnb", "New York, NY", 82, false),
        JobPosting::new("4", "Frontend Architect", "Vercel", "San Francisco, CA", 91, true),
        JobPosting::new("5", "Cloud Infrastructure Lead", "Tailscale", "Toronto, ON", 75, true),
        JobPosting::new("6", "Platform Engineer", "Stripe", "Dublin, Ireland", 86, false),
        JobPosting::new("7", "Design Systems Engineer", "Figma", "New York, NY", 79, true),
        JobPosting::new("8", "Machine Learning Researcher", "Anyscale", "Berkeley, CA", 68, false),
        JobPosting::new("9", "Developer Advocate", "Supabase", "Remote", 73, true),
        JobPosting::new("10", "Staff Backend Engineer", "Shopify", "Ottawa, ON", 84, true),
    ]
}
