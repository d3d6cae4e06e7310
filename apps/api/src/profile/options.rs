//! Fixed option sets offered by the assessment wizard. Stored profiles may
//! only reference labels from these lists.

use serde::Serialize;

pub const INTEREST_OPTIONS: &[&str] = &[
    "Technology & Programming",
    "Design & Creativity",
    "Business & Entrepreneurship",
    "Healthcare & Medicine",
    "Education & Teaching",
    "Science & Research",
    "Arts & Entertainment",
    "Sports & Fitness",
    "Social Work & Community",
    "Finance & Economics",
    "Marketing & Sales",
    "Engineering",
    "Environment & Sustainability",
    "Psychology & Counseling",
    "Law & Legal Services",
    "Travel & Tourism",
    "Food & Hospitality",
    "Agriculture & Farming",
    "Fashion & Beauty",
    "Real Estate",
];

pub const SKILL_OPTIONS: &[&str] = &[
    "Programming/Coding",
    "Data Analysis",
    "Project Management",
    "Leadership",
    "Communication",
    "Problem Solving",
    "Creative Design",
    "Sales & Negotiation",
    "Financial Analysis",
    "Research & Development",
    "Team Collaboration",
    "Public Speaking",
    "Customer Service",
    "Strategic Planning",
    "Technical Writing",
    "Digital Marketing",
    "Quality Assurance",
    "Operations Management",
    "Teaching & Training",
    "Consulting",
    "Event Planning",
    "Social Media Management",
    "Foreign Languages",
    "Graphic Design",
];

pub const EDUCATION_LEVELS: &[&str] = &[
    "High School",
    "Associate Degree",
    "Bachelor's Degree",
    "Master's Degree",
    "PhD/Doctorate",
    "Professional Certification",
];

pub const EXPERIENCE_LEVELS: &[&str] = &[
    "0-1 years",
    "2-3 years",
    "4-6 years",
    "7-10 years",
    "10+ years",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PersonalityQuestion {
    pub id: &'static str,
    pub statement: &'static str,
    #[serde(rename = "trait")]
    pub trait_name: &'static str,
}

pub const PERSONALITY_QUESTIONS: &[PersonalityQuestion] = &[
    PersonalityQuestion {
        id: "extroversion",
        statement: "I enjoy working in teams and social environments",
        trait_name: "Extroversion",
    },
    PersonalityQuestion {
        id: "detail_oriented",
        statement: "I pay close attention to details and accuracy",
        trait_name: "Detail-Oriented",
    },
    PersonalityQuestion {
        id: "risk_taking",
        statement: "I am comfortable taking calculated risks",
        trait_name: "Risk-Taking",
    },
    PersonalityQuestion {
        id: "creativity",
        statement: "I enjoy creative and innovative thinking",
        trait_name: "Creativity",
    },
    PersonalityQuestion {
        id: "leadership",
        statement: "I naturally take on leadership roles",
        trait_name: "Leadership",
    },
    PersonalityQuestion {
        id: "analytical",
        statement: "I prefer to analyze data before making decisions",
        trait_name: "Analytical",
    },
    PersonalityQuestion {
        id: "helping_others",
        statement: "I find fulfillment in helping others succeed",
        trait_name: "Helping Others",
    },
    PersonalityQuestion {
        id: "independence",
        statement: "I prefer working independently with minimal supervision",
        trait_name: "Independence",
    },
];

/// Labels for ratings 1 through 5.
pub const SCALE_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

pub fn is_interest(label: &str) -> bool {
    INTEREST_OPTIONS.contains(&label)
}

pub fn is_skill(label: &str) -> bool {
    SKILL_OPTIONS.contains(&label)
}

pub fn is_personality_question(id: &str) -> bool {
    PERSONALITY_QUESTIONS.iter().any(|q| q.id == id)
}

pub fn is_valid_rating(rating: i64) -> bool {
    (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_set_sizes() {
        assert_eq!(INTEREST_OPTIONS.len(), 20);
        assert_eq!(SKILL_OPTIONS.len(), 24);
        assert_eq!(EDUCATION_LEVELS.len(), 6);
        assert_eq!(EXPERIENCE_LEVELS.len(), 5);
        assert_eq!(PERSONALITY_QUESTIONS.len(), 8);
    }

    #[test]
    fn test_membership_is_exact() {
        assert!(is_skill("Programming/Coding"));
        assert!(!is_skill("programming/coding"));
        assert!(is_interest("Design & Creativity"));
        assert!(is_personality_question("helping_others"));
        assert!(!is_personality_question("humor"));
    }

    #[test]
    fn test_rating_bounds() {
        assert!(is_valid_rating(1));
        assert!(is_valid_rating(5));
        assert!(!is_valid_rating(0));
        assert!(!is_valid_rating(-1));
        assert!(!is_valid_rating(300));
    }
}
