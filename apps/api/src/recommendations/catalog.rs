//! The static career catalog. Base match percentages live here; ranking
//! never writes back to it.

use crate::models::career::CareerEntry;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn career_catalog() -> Vec<CareerEntry> {
    vec![
        CareerEntry {
            id: "1".to_string(),
            title: "Software Developer".to_string(),
            match_score: 92,
            description: "Design, develop, and maintain software applications and systems using \
                          various programming languages and frameworks."
                .to_string(),
            salary: "$75,000 - $150,000".to_string(),
            growth: "+22% (Much faster than average)".to_string(),
            required_skills: strings(&[
                "Programming",
                "Problem Solving",
                "Team Collaboration",
                "Technical Writing",
            ]),
            education: "Bachelor's degree in Computer Science or related field".to_string(),
            companies: strings(&["Google", "Microsoft", "Amazon", "Netflix", "Spotify"]),
            pros: strings(&[
                "High demand",
                "Remote work opportunities",
                "Continuous learning",
                "Creative problem solving",
            ]),
            cons: strings(&[
                "Requires continuous skill updates",
                "Can be stressful with tight deadlines",
            ]),
            daily_tasks: strings(&[
                "Writing and reviewing code",
                "Debugging applications",
                "Collaborating with team members",
                "Planning software architecture",
            ]),
        },
        CareerEntry {
            id: "2".to_string(),
            title: "UX/UI Designer".to_string(),
            match_score: 88,
            description: "Create intuitive and visually appealing user interfaces and experiences \
                          for digital products."
                .to_string(),
            salary: "$65,000 - $130,000".to_string(),
            growth: "+13% (Faster than average)".to_string(),
            required_skills: strings(&[
                "Creative Design",
                "Problem Solving",
                "Communication",
                "Research & Development",
            ]),
            education: "Bachelor's degree in Design, HCI, or related field".to_string(),
            companies: strings(&["Apple", "Adobe", "Airbnb", "Uber", "Figma"]),
            pros: strings(&[
                "Creative freedom",
                "User impact",
                "Growing field",
                "Portfolio-based career",
            ]),
            cons: strings(&["Subjective feedback", "Tight project timelines"]),
            daily_tasks: strings(&[
                "User research",
                "Creating wireframes and prototypes",
                "Design reviews",
                "Usability testing",
            ]),
        },
        CareerEntry {
            id: "3".to_string(),
            title: "Data Scientist".to_string(),
            match_score: 85,
            description: "Analyze complex data to extract insights and help organizations make \
                          informed business decisions."
                .to_string(),
            salary: "$80,000 - $160,000".to_string(),
            growth: "+31% (Much faster than average)".to_string(),
            required_skills: strings(&[
                "Data Analysis",
                "Problem Solving",
                "Programming/Coding",
                "Research & Development",
            ]),
            education: "Bachelor's degree in Statistics, Mathematics, Computer Science, or \
                        related field"
                .to_string(),
            companies: strings(&["Tesla", "Netflix", "LinkedIn", "Spotify", "Airbnb"]),
            pros: strings(&[
                "High growth potential",
                "Intellectual challenges",
                "Data-driven decisions",
                "Versatile across industries",
            ]),
            cons: strings(&[
                "Requires strong mathematical background",
                "Data quality issues",
            ]),
            daily_tasks: strings(&[
                "Data collection and cleaning",
                "Statistical analysis",
                "Creating data visualizations",
                "Presenting findings",
            ]),
        },
    ]
}
