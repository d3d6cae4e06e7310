pub mod career;
pub mod chat;
pub mod profile;
pub mod resume;
pub mod skill_gap;
pub mod view;
