//! Invariant checks for profile data.
//!
//! Writes are strict: a patch with any unknown label or bad rating is
//! rejected whole. Loads are lenient: offending values in a stored blob are
//! dropped and reported so the caller can log them.

use crate::errors::AppError;
use crate::models::profile::{Profile, ProfilePatch};
use crate::profile::options::{
    is_interest, is_personality_question, is_skill, is_valid_rating, EDUCATION_LEVELS,
    EXPERIENCE_LEVELS, MAX_RATING, MIN_RATING,
};

/// Rejects a patch that would break a profile invariant.
/// All problems are reported together.
pub fn validate_patch(patch: &ProfilePatch) -> Result<(), AppError> {
    let mut problems = Vec::new();

    if let Some(education) = patch.education.as_deref() {
        if !education.is_empty() && !EDUCATION_LEVELS.contains(&education) {
            problems.push(format!("unknown education level '{education}'"));
        }
    }
    if let Some(experience) = patch.experience.as_deref() {
        if !experience.is_empty() && !EXPERIENCE_LEVELS.contains(&experience) {
            problems.push(format!("unknown experience bracket '{experience}'"));
        }
    }
    for interest in patch.interests.iter().flatten() {
        if !is_interest(interest) {
            problems.push(format!("unknown interest '{interest}'"));
        }
    }
    for skill in patch.skills.iter().flatten() {
        if !is_skill(skill) {
            problems.push(format!("unknown skill '{skill}'"));
        }
    }
    for (id, rating) in patch.personality.iter().flatten() {
        if !is_personality_question(id) {
            problems.push(format!("unknown personality question '{id}'"));
        } else if !is_valid_rating(*rating) {
            problems.push(format!(
                "rating for '{id}' must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
            ));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(problems.join("; ")))
    }
}

/// Drops values that violate an invariant. Returns a description of each drop.
pub fn sanitize(profile: &mut Profile) -> Vec<String> {
    let mut dropped = Vec::new();

    profile.interests.retain(|interest| {
        let keep = is_interest(interest);
        if !keep {
            dropped.push(format!("interest '{interest}'"));
        }
        keep
    });
    profile.skills.retain(|skill| {
        let keep = is_skill(skill);
        if !keep {
            dropped.push(format!("skill '{skill}'"));
        }
        keep
    });
    profile.personality.retain(|id, rating| {
        let keep = is_personality_question(id) && is_valid_rating(i64::from(*rating));
        if !keep {
            dropped.push(format!("personality rating '{id}'={rating}"));
        }
        keep
    });

    dropped
}

/// Removes repeated labels, keeping the first occurrence.
pub fn dedup_preserving_order(labels: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    labels
        .into_iter()
        .filter(|label| seen.insert(label.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_valid_patch_passes() {
        let patch = ProfilePatch {
            education: Some("Master's Degree".to_string()),
            experience: Some(String::new()),
            interests: Some(vec!["Engineering".to_string()]),
            skills: Some(vec!["Leadership".to_string(), "Leadership".to_string()]),
            personality: Some(BTreeMap::from([("leadership".to_string(), 5)])),
            ..ProfilePatch::default()
        };
        assert!(validate_patch(&patch).is_ok());
    }

    #[test]
    fn test_unknown_labels_all_reported() {
        let patch = ProfilePatch {
            interests: Some(vec!["Basket Weaving".to_string()]),
            skills: Some(vec!["Juggling".to_string()]),
            ..ProfilePatch::default()
        };
        match validate_patch(&patch) {
            Err(AppError::Validation(msg)) => {
                assert!(msg.contains("Basket Weaving"));
                assert!(msg.contains("Juggling"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let patch = ProfilePatch {
            personality: Some(BTreeMap::from([("analytical".to_string(), 6)])),
            ..ProfilePatch::default()
        };
        assert!(matches!(validate_patch(&patch), Err(AppError::Validation(_))));

        let patch = ProfilePatch {
            personality: Some(BTreeMap::from([("analytical".to_string(), 0)])),
            ..ProfilePatch::default()
        };
        assert!(validate_patch(&patch).is_err());
    }

    #[test]
    fn test_ratings_outside_byte_range_rejected() {
        for rating in [300, -1] {
            let patch = ProfilePatch {
                personality: Some(BTreeMap::from([("analytical".to_string(), rating)])),
                ..ProfilePatch::default()
            };
            match validate_patch(&patch) {
                Err(AppError::Validation(msg)) => {
                    assert!(msg.contains(&format!("got {rating}")), "message: {msg}")
                }
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_education_rejected() {
        let patch = ProfilePatch {
            education: Some("Clown College".to_string()),
            ..ProfilePatch::default()
        };
        assert!(validate_patch(&patch).is_err());
    }

    #[test]
    fn test_sanitize_drops_offenders_and_keeps_order() {
        let mut profile = Profile {
            interests: vec![
                "Real Estate".to_string(),
                "Origami".to_string(),
                "Engineering".to_string(),
            ],
            skills: vec!["Consulting".to_string(), "Time Travel".to_string()],
            personality: BTreeMap::from([
                ("analytical".to_string(), 3),
                ("leadership".to_string(), 9),
                ("humor".to_string(), 2),
            ]),
            ..Profile::default()
        };

        let dropped = sanitize(&mut profile);
        assert_eq!(dropped.len(), 4);
        assert_eq!(
            profile.interests,
            vec!["Real Estate".to_string(), "Engineering".to_string()]
        );
        assert_eq!(profile.skills, vec!["Consulting".to_string()]);
        assert_eq!(
            profile.personality,
            BTreeMap::from([("analytical".to_string(), 3)])
        );
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let labels = vec![
            "Leadership".to_string(),
            "Consulting".to_string(),
            "Leadership".to_string(),
        ];
        assert_eq!(
            dedup_preserving_order(labels),
            vec!["Leadership".to_string(), "Consulting".to_string()]
        );
    }
}
