//! Resume Scorer: a content-independent mock analysis.
//!
//! Only blankness of the input matters. The overall score is jittered in
//! `SCORE_BASE..=SCORE_BASE + SCORE_JITTER`; every list is fixed.

use crate::models::resume::{AnalysisResult, SectionScore};
use crate::random::RandomSource;

pub const SCORE_BASE: u8 = 75;
pub const SCORE_JITTER: u8 = 19;

const STRENGTHS: &[&str] = &[
    "Clear professional summary that highlights key achievements",
    "Quantified accomplishments with specific metrics and numbers",
    "Well-organized chronological work experience section",
    "Relevant technical skills clearly listed",
    "Professional formatting with consistent styling",
];

const IMPROVEMENTS: &[&str] = &[
    "Add more industry-specific keywords to improve ATS compatibility",
    "Include more quantified achievements in recent roles",
    "Consider adding a certifications or professional development section",
    "Optimize bullet points to start with strong action verbs",
    "Add relevant volunteer work or side projects if applicable",
];

const KEYWORDS: &[&str] = &[
    "Project Management",
    "Data Analysis",
    "Team Leadership",
    "Strategic Planning",
    "Customer Service",
    "Problem Solving",
    "Communication",
    "Microsoft Office",
];

const SECTIONS: &[(&str, u8, &str)] = &[
    (
        "Contact Information",
        90,
        "Complete and professional contact details provided",
    ),
    (
        "Professional Summary",
        85,
        "Strong summary that highlights key qualifications",
    ),
    (
        "Work Experience",
        80,
        "Good experience section, could use more quantified achievements",
    ),
    (
        "Education",
        75,
        "Education details are present but could include relevant coursework",
    ),
    (
        "Skills",
        70,
        "Skills section needs more industry-specific keywords",
    ),
];

/// Returns `None` for blank or whitespace-only text.
pub fn analyze(resume_text: &str, rng: &dyn RandomSource) -> Option<AnalysisResult> {
    if resume_text.trim().is_empty() {
        return None;
    }

    let jitter = rng.int_inclusive(0, u64::from(SCORE_JITTER));
    // jitter <= SCORE_JITTER, so the sum fits in u8
    let overall_score = SCORE_BASE + jitter as u8;

    Some(AnalysisResult {
        overall_score,
        sections: SECTIONS
            .iter()
            .map(|&(name, score, feedback)| SectionScore {
                name: name.to_string(),
                score,
                feedback: feedback.to_string(),
            })
            .collect(),
        strengths: to_strings(STRENGTHS),
        improvements: to_strings(IMPROVEMENTS),
        keywords: to_strings(KEYWORDS),
    })
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
