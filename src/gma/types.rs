use serde::Deserialize;

/// One candidate row in a contest tally.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub vote_count: i64,
    pub party: String,
}

/// Per-contest candidate tallies.
#[derive(Debug, Clone, Deserialize)]
pub struct Contest {
    pub contest: String,
    pub candidates: Vec<Candidate>,
}

/// Top-level shape of the GMA results feed.
///
/// The feed also carries dynamically-typed location fields; those are unused
/// by the margin computation and dropped from the model.
#[derive(Debug, Clone, Deserialize)]
pub struct TallyResponse {
    pub location_code: String,
    pub result: Vec<Contest>,
    /// Returns processed over total, formatted `"N/M"`.
    pub election_returns_processed: String,
    pub total_voters_processed: String,
    pub server_location: String,
    pub result_as_of: String,
}

impl TallyResponse {
    /// Flatten every contest into `(name, vote_count)` pairs for the
    /// margin scan.
    pub fn tallies(&self) -> impl Iterator<Item = (&str, i64)> {
        self.result
            .iter()
            .flat_map(|c| c.candidates.iter())
            .map(|c| (c.name.as_str(), c.vote_count))
    }
}
