use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    Course,
    Certification,
    Book,
    Practice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub title: String,
    pub provider: String,
    pub duration: String,
    pub rating: f32,
    pub price: String,
    pub url: String,
}

/// Delta between the profile's current and the career's required proficiency
/// in one skill. Levels are on a 0 – 10 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub current_level: u8,
    pub required_level: u8,
    pub priority: Priority,
    pub resources: Vec<LearningResource>,
}
