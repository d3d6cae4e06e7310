// Skill-gap analysis for a selected target career.

pub mod generator;
pub mod handlers;
