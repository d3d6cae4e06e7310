use std::sync::Arc;

use crate::advisor::ChatService;
use crate::config::Config;
use crate::profile::ProfileStore;
use crate::random::RandomSource;
use crate::recommendations::scorer::MatchScorer;
use crate::resume::ResumeService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub profiles: Arc<ProfileStore>,
    pub chat: Arc<ChatService>,
    pub resume: Arc<ResumeService>,
    /// Pluggable match scorer. Default: RuleBasedScorer.
    pub scorer: Arc<dyn MatchScorer>,
    /// Every randomized reply, delay and score draws from here.
    pub rng: Arc<dyn RandomSource>,
}
