//! The assessment wizard: step definitions and the mapping from completed
//! answers to a profile update.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::profile::ProfilePatch;
use crate::profile::options::{
    PersonalityQuestion, EDUCATION_LEVELS, EXPERIENCE_LEVELS, INTEREST_OPTIONS,
    PERSONALITY_QUESTIONS, SCALE_LABELS, SKILL_OPTIONS,
};
use crate::profile::validation::{dedup_preserving_order, validate_patch};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    Personal,
    Education,
    Interests,
    Skills,
    Personality,
}

/// One wizard page and the options it presents.
#[derive(Debug, Serialize)]
pub struct StepDefinition {
    pub id: StepId,
    pub title: &'static str,
    #[serde(skip_serializing_if = "is_empty")]
    pub options: &'static [&'static str],
    #[serde(skip_serializing_if = "is_empty")]
    pub secondary_options: &'static [&'static str],
    #[serde(skip_serializing_if = "is_empty")]
    pub questions: &'static [PersonalityQuestion],
    #[serde(skip_serializing_if = "is_empty")]
    pub scale: &'static [&'static str],
}

fn is_empty<T>(items: &&[T]) -> bool {
    items.is_empty()
}

/// Wizard steps in presentation order.
pub fn wizard_steps() -> Vec<StepDefinition> {
    let step = |id, title| StepDefinition {
        id,
        title,
        options: &[],
        secondary_options: &[],
        questions: &[],
        scale: &[],
    };
    vec![
        step(StepId::Personal, "Personal Information"),
        StepDefinition {
            options: EDUCATION_LEVELS,
            secondary_options: EXPERIENCE_LEVELS,
            ..step(StepId::Education, "Education & Experience")
        },
        StepDefinition {
            options: INTEREST_OPTIONS,
            ..step(StepId::Interests, "Interests & Passions")
        },
        StepDefinition {
            options: SKILL_OPTIONS,
            ..step(StepId::Skills, "Skills & Abilities")
        },
        StepDefinition {
            questions: PERSONALITY_QUESTIONS,
            scale: &SCALE_LABELS,
            ..step(StepId::Personality, "Personality Assessment")
        },
    ]
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonalAnswers {
    pub name: String,
    pub email: String,
    pub age: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EducationAnswers {
    pub level: String,
    pub field: Option<String>,
    pub experience: String,
    pub current_role: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SelectionAnswers {
    pub selected: Vec<String>,
}

/// Answers for every step. Steps the user skipped deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssessmentSubmission {
    pub personal: PersonalAnswers,
    pub education: EducationAnswers,
    pub interests: SelectionAnswers,
    pub skills: SelectionAnswers,
    pub personality: BTreeMap<String, i64>,
}

/// Maps a finished wizard into the profile update that completes the
/// assessment. Age, location, field and current role are not kept.
pub fn completion_patch(submission: AssessmentSubmission) -> Result<ProfilePatch, AppError> {
    let AssessmentSubmission {
        personal,
        education,
        interests,
        skills,
        personality,
    } = submission;

    let patch = ProfilePatch {
        name: Some(personal.name.trim().to_string()),
        email: Some(personal.email.trim().to_string()),
        education: Some(education.level),
        experience: Some(education.experience),
        interests: Some(dedup_preserving_order(interests.selected)),
        skills: Some(dedup_preserving_order(skills.selected)),
        personality: Some(personality),
        assessment_completed: Some(true),
        career_recommendations: None,
    };
    validate_patch(&patch)?;
    Ok(patch)
}
