// Multi-step career assessment wizard.

pub mod handlers;
pub mod steps;
