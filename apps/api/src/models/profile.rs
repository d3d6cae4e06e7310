use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The user's self-reported assessment data.
///
/// Serialized with camelCase keys; this is the exact shape persisted under
/// `careerBuddyUser`. Every field defaults, so blobs written by older
/// versions still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub education: String,
    pub experience: String,
    /// Selection order is preserved.
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    /// Personality question id -> rating 1..=5.
    #[serde(deserialize_with = "lenient_ratings")]
    pub personality: BTreeMap<String, u8>,
    pub assessment_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_recommendations: Option<Vec<CareerRecommendation>>,
}

/// Snapshot of a ranked career as kept on the stored profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
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
}

/// Partial update merged field-by-field into the stored profile.
/// `None` leaves the stored value untouched. Ratings are wide integers here
/// so out-of-range values reach validation instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality: Option<BTreeMap<String, i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_recommendations: Option<Vec<CareerRecommendation>>,
}

impl Profile {
    /// Shallow merge: each present field replaces the stored one wholesale.
    /// Expects a validated patch; ratings outside `u8` are skipped.
    pub fn merge(&mut self, patch: ProfilePatch) {
        let ProfilePatch {
            name,
            email,
            education,
            experience,
            interests,
            skills,
            personality,
            assessment_completed,
            career_recommendations,
        } = patch;

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = education {
            self.education = v;
        }
        if let Some(v) = experience {
            self.experience = v;
        }
        if let Some(v) = interests {
            self.interests = v;
        }
        if let Some(v) = skills {
            self.skills = v;
        }
        if let Some(v) = personality {
            self.personality = v
                .into_iter()
                .filter_map(|(id, rating)| u8::try_from(rating).ok().map(|r| (id, r)))
                .collect();
        }
        if let Some(v) = assessment_completed {
            self.assessment_completed = v;
        }
        if let Some(v) = career_recommendations {
            self.career_recommendations = Some(v);
        }
    }

    pub fn has_skill(&self, label: &str) -> bool {
        self.skills.iter().any(|s| s == label)
    }

    /// Rebuilds a profile from a stored JSON object one field at a time.
    ///
    /// A field whose value has the wrong type keeps its default and is
    /// named in the returned list. Unknown keys are ignored.
    pub fn from_stored_fields(fields: Map<String, Value>) -> (Profile, Vec<String>) {
        let mut profile = Profile::default();
        let mut dropped = Vec::new();

        for (key, value) in fields {
            let kept = match key.as_str() {
                "name" => take(value, &mut profile.name),
                "email" => take(value, &mut profile.email),
                "education" => take(value, &mut profile.education),
                "experience" => take(value, &mut profile.experience),
                "interests" => take(value, &mut profile.interests),
                "skills" => take(value, &mut profile.skills),
                "personality" => match ratings_from_value(value) {
                    Some(ratings) => {
                        profile.personality = ratings;
                        true
                    }
                    None => false,
                },
                "assessmentCompleted" => take(value, &mut profile.assessment_completed),
                "careerRecommendations" => take(value, &mut profile.career_recommendations),
                _ => continue,
            };
            if !kept {
                dropped.push(format!("field '{key}'"));
            }
        }

        (profile, dropped)
    }
}

fn take<T: DeserializeOwned>(value: Value, slot: &mut T) -> bool {
    match serde_json::from_value(value) {
        Ok(parsed) => {
            *slot = parsed;
            true
        }
        Err(_) => false,
    }
}

/// Integer ratings survive; other entries are dropped. `None` when the value
/// is neither an object nor null.
fn ratings_from_value(value: Value) -> Option<BTreeMap<String, u8>> {
    match value {
        Value::Null => Some(BTreeMap::new()),
        Value::Object(entries) => Some(
            entries
                .into_iter()
                .filter_map(|(id, rating)| {
                    rating
                        .as_u64()
                        .and_then(|n| u8::try_from(n).ok())
                        .map(|n| (id, n))
                })
                .collect(),
        ),
        _ => None,
    }
}

/// Keeps integer ratings and drops anything else (fractions, strings, nulls)
/// instead of failing the whole profile. Range checks happen in sanitizing.
fn lenient_ratings<'de, D>(deserializer: D) -> Result<BTreeMap<String, u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Map<String, Value>> = Option::deserialize(deserializer)?;
    Ok(ratings_from_value(raw.map(Value::Object).unwrap_or(Value::Null)).unwrap_or_default())
}
