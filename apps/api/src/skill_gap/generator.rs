//! Skill-Gap Generator: fixed gap tables for the careers that have data.
//!
//! Dispatch is an exact match on the career name. One exact skill label
//! per career decides between a high and a low current level for its
//! leading skills (React.js and Node.js for Software Developer, the first
//! skill elsewhere); everything else is constant. Careers without data
//! yield an empty list.

use crate::models::profile::Profile;
use crate::models::skill_gap::{LearningResource, Priority, ResourceType, SkillGap};

/// Careers offered for selection. Only some have gap data.
pub const CAREER_OPTIONS: &[&str] = &[
    "Software Developer",
    "UX/UI Designer",
    "Data Scientist",
    "Product Manager",
    "Digital Marketing Manager",
    "Business Analyst",
    "Cybersecurity Specialist",
    "DevOps Engineer",
];

/// Careers `analyze_gaps` has tables for.
pub const SUPPORTED_CAREERS: &[&str] = &["Software Developer", "UX/UI Designer", "Data Scientist"];

pub fn is_supported(career: &str) -> bool {
    SUPPORTED_CAREERS.contains(&career)
}

pub fn analyze_gaps(target_career: &str, profile: &Profile) -> Vec<SkillGap> {
    match target_career {
        "Software Developer" => {
            let codes = profile.has_skill("Programming/Coding");
            vec![
                gap(
                    "React.js",
                    if codes { 6 } else { 2 },
                    8,
                    Priority::High,
                    vec![
                        resource(
                            ResourceType::Course,
                            "Complete React Developer Course",
                            "Udemy",
                            "40 hours",
                            4.7,
                            "$89.99",
                        ),
                        resource(
                            ResourceType::Certification,
                            "React Developer Certification",
                            "Meta",
                            "6 months",
                            4.8,
                            "$49/month",
                        ),
                    ],
                ),
                gap(
                    "Node.js",
                    if codes { 5 } else { 1 },
                    7,
                    Priority::High,
                    vec![resource(
                        ResourceType::Course,
                        "Node.js Complete Guide",
                        "Coursera",
                        "30 hours",
                        4.6,
                        "$59/month",
                    )],
                ),
                gap(
                    "System Design",
                    3,
                    7,
                    Priority::Medium,
                    vec![resource(
                        ResourceType::Book,
                        "Designing Data-Intensive Applications",
                        "O'Reilly",
                        "3 weeks",
                        4.9,
                        "$44.99",
                    )],
                ),
            ]
        }
        "UX/UI Designer" => vec![
            gap(
                "Figma",
                if profile.has_skill("Creative Design") { 4 } else { 1 },
                8,
                Priority::High,
                vec![resource(
                    ResourceType::Course,
                    "Figma UI/UX Design Essentials",
                    "Coursera",
                    "25 hours",
                    4.8,
                    "$59/month",
                )],
            ),
            gap(
                "User Research",
                2,
                7,
                Priority::High,
                vec![resource(
                    ResourceType::Certification,
                    "Google UX Design Certificate",
                    "Google",
                    "6 months",
                    4.7,
                    "$49/month",
                )],
            ),
        ],
        "Data Scientist" => vec![
            gap(
                "Python for Data Science",
                if profile.has_skill("Data Analysis") { 5 } else { 2 },
                8,
                Priority::High,
                vec![resource(
                    ResourceType::Course,
                    "Python for Data Science and ML",
                    "edX",
                    "50 hours",
                    4.6,
                    "$199",
                )],
            ),
            gap(
                "Machine Learning",
                1,
                8,
                Priority::High,
                vec![resource(
                    ResourceType::Course,
                    "Machine Learning Specialization",
                    "Coursera",
                    "3 months",
                    4.9,
                    "$59/month",
                )],
            ),
        ],
        _ => Vec::new(),
    }
}

/// Human label for a 0 – 10 level.
pub fn level_label(level: u8) -> &'static str {
    match level {
        0..=2 => "Beginner",
        3..=5 => "Intermediate",
        6..=7 => "Advanced",
        _ => "Expert",
    }
}

fn gap(
    skill: &str,
    current_level: u8,
    required_level: u8,
    priority: Priority,
    resources: Vec<LearningResource>,
) -> SkillGap {
    SkillGap {
        skill: skill.to_string(),
        current_level,
        required_level,
        priority,
        resources,
    }
}

fn resource(
    resource_type: ResourceType,
    title: &str,
    provider: &str,
    duration: &str,
    rating: f32,
    price: &str,
) -> LearningResource {
    LearningResource {
        resource_type,
        title: title.to_string(),
        provider: provider.to_string(),
        duration: duration.to_string(),
        rating,
        price: price.to_string(),
        url: "#".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_skills(skills: &[&str]) -> Profile {
        Profile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Profile::default()
        }
    }

    #[test]
    fn test_unsupported_career_yields_empty() {
        let profile = with_skills(&["Programming/Coding"]);
        assert!(analyze_gaps("Product Manager", &profile).is_empty());
        assert!(analyze_gaps("software developer", &profile).is_empty());
        assert!(analyze_gaps("", &profile).is_empty());
    }

    #[test]
    fn test_software_developer_levels_follow_programming_skill() {
        let gaps = analyze_gaps("Software Developer", &with_skills(&["Programming/Coding"]));
        assert_eq!(gaps[0].skill, "React.js");
        assert_eq!(gaps[0].current_level, 6);
        assert_eq!(gaps[1].current_level, 5);

        let gaps = analyze_gaps("Software Developer", &with_skills(&[]));
        assert_eq!(gaps[0].current_level, 2);
        assert_eq!(gaps[1].current_level, 1);
        assert_eq!(gaps[2].skill, "System Design");
        assert_eq!(gaps[2].current_level, 3);
        assert_eq!(gaps[2].priority, Priority::Medium);
    }

    #[test]
    fn test_design_and_data_predicates() {
        let designer = analyze_gaps("UX/UI Designer", &with_skills(&["Creative Design"]));
        assert_eq!(designer.len(), 2);
        assert_eq!(designer[0].current_level, 4);
        assert_eq!(
            analyze_gaps("UX/UI Designer", &with_skills(&["Graphic Design"]))[0].current_level,
            1
        );

        let data = analyze_gaps("Data Scientist", &with_skills(&["Data Analysis"]));
        assert_eq!(data[0].skill, "Python for Data Science");
        assert_eq!(data[0].current_level, 5);
        assert_eq!(data[1].current_level, 1);
    }

    #[test]
    fn test_levels_in_range_for_every_supported_career() {
        for career in SUPPORTED_CAREERS {
            for profile in [
                with_skills(&[]),
                with_skills(&["Programming/Coding", "Creative Design", "Data Analysis"]),
            ] {
                let gaps = analyze_gaps(career, &profile);
                assert!((2..=3).contains(&gaps.len()), "{career}");
                for gap in gaps {
                    assert!(gap.current_level <= 10 && gap.required_level <= 10);
                    assert!(gap.current_level < gap.required_level);
                    assert!(!gap.resources.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_repeated_calls_identical() {
        let profile = with_skills(&["Programming/Coding"]);
        assert_eq!(
            analyze_gaps("Software Developer", &profile),
            analyze_gaps("Software Developer", &profile)
        );
    }

    #[test]
    fn test_supported_careers_are_offered() {
        assert_eq!(CAREER_OPTIONS.len(), 8);
        assert!(SUPPORTED_CAREERS.iter().all(|c| CAREER_OPTIONS.contains(c)));
        assert!(is_supported("Data Scientist"));
        assert!(!is_supported("DevOps Engineer"));
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(level_label(0), "Beginner");
        assert_eq!(level_label(2), "Beginner");
        assert_eq!(level_label(5), "Intermediate");
        assert_eq!(level_label(7), "Advanced");
        assert_eq!(level_label(8), "Expert");
    }
}
