use serde::Serialize;

/// One static catalog record describing a candidate occupation.
///
/// `match_score` holds the base percentage in the catalog; ranking returns
/// copies carrying the profile-adjusted value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerEntry {
    pub id: String,
    pub title: String,
    #[serde(rename = "match")]
    pub match_score: u8,
    pub description: String,
    pub salary: String,
    pub growth: String,
    pub required_skills: Vec<String>,
    pub education: String,
    pub companies: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub daily_tasks: Vec<String>,
}
