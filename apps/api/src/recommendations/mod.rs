// Career recommendations: static catalog, profile-driven match scoring and
// the results view.

pub mod catalog;
pub mod handlers;
pub mod scorer;
