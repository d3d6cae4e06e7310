//! Recommendation scoring: adjusts each catalog entry's match percentage
//! for a profile and ranks the catalog.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`; `RuleBasedScorer` is the
//! only backend.

use crate::models::career::CareerEntry;
use crate::models::profile::Profile;

/// Upper bound on any adjusted match percentage.
pub const MAX_MATCH: u8 = 98;

const TECH_BOOST_SOFTWARE: u32 = 3;
const TECH_BOOST_DATA: u32 = 2;
const DESIGN_BOOST_UX: u32 = 3;
const PER_MATCHING_SKILL: u32 = 2;

pub trait MatchScorer: Send + Sync {
    /// Returns adjusted copies of `catalog`, sorted by match descending.
    /// Ties keep catalog order.
    fn score_and_rank(&self, catalog: &[CareerEntry], profile: &Profile) -> Vec<CareerEntry>;

    /// Label surfaced to clients for transparency.
    fn backend(&self) -> &'static str;
}

/// Interest and skill boosts on top of the base percentage:
/// - interest mentioning technology/programming: +3 Software titles, +2 Data titles
/// - interest mentioning design/creativity: +3 UX/UI titles
/// - +2 per required skill contained (case-insensitive) in any profile skill
/// - capped at `MAX_MATCH`
pub struct RuleBasedScorer;

impl MatchScorer for RuleBasedScorer {
    fn score_and_rank(&self, catalog: &[CareerEntry], profile: &Profile) -> Vec<CareerEntry> {
        score_and_rank(catalog, profile)
    }

    fn backend(&self) -> &'static str {
        "rule_based"
    }
}

pub fn score_and_rank(catalog: &[CareerEntry], profile: &Profile) -> Vec<CareerEntry> {
    let signals = InterestSignals::from_profile(profile);
    let skills_lower: Vec<String> = profile.skills.iter().map(|s| s.to_lowercase()).collect();

    let mut ranked: Vec<CareerEntry> = catalog
        .iter()
        .map(|entry| {
            let mut adjusted = entry.clone();
            adjusted.match_score = adjusted_match(entry, &signals, &skills_lower);
            adjusted
        })
        .collect();

    // Vec::sort_by is stable, so equal scores keep catalog order.
    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}

struct InterestSignals {
    technology: bool,
    design: bool,
}

impl InterestSignals {
    fn from_profile(profile: &Profile) -> Self {
        let any_interest = |needles: &[&str]| {
            profile.interests.iter().any(|interest| {
                let lower = interest.to_lowercase();
                needles.iter().any(|n| lower.contains(n))
            })
        };
        InterestSignals {
            technology: any_interest(&["technology", "programming"]),
            design: any_interest(&["design", "creativity"]),
        }
    }
}

fn adjusted_match(entry: &CareerEntry, signals: &InterestSignals, skills_lower: &[String]) -> u8 {
    let mut score = u32::from(entry.match_score);

    if signals.technology {
        if entry.title.contains("Software") {
            score += TECH_BOOST_SOFTWARE;
        }
        if entry.title.contains("Data") {
            score += TECH_BOOST_DATA;
        }
    }
    if signals.design && entry.title.contains("UX/UI") {
        score += DESIGN_BOOST_UX;
    }

    let matching_skills = entry
        .required_skills
        .iter()
        .filter(|required| {
            let required = required.to_lowercase();
            skills_lower.iter().any(|skill| skill.contains(&required))
        })
        .count() as u32;
    score += matching_skills * PER_MATCHING_SKILL;

    // min() keeps the value within u8 range.
    score.min(u32::from(MAX_MATCH)) as u8
}
