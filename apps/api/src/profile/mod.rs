// Profile Store: the single self-reported user profile, its option sets and
// invariants, and the HTTP surface over it.

pub mod handlers;
pub mod options;
pub mod store;
pub mod validation;

pub use store::ProfileStore;
