use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::inflight::InFlight;
use crate::models::resume::AnalysisResult;
use crate::random::RandomSource;
use crate::resume::analyzer::analyze;

/// Runs analyses with a fixed simulated delay and keeps the latest result.
/// A started analysis always completes and is stored, even if the caller
/// goes away.
pub struct ResumeService {
    latest: Arc<RwLock<Option<AnalysisResult>>>,
    pending: InFlight,
    delay: Duration,
}

impl ResumeService {
    pub fn new(delay: Duration) -> Self {
        ResumeService {
            latest: Arc::new(RwLock::new(None)),
            pending: InFlight::new(),
            delay,
        }
    }

    pub async fn latest(&self) -> Option<AnalysisResult> {
        self.latest.read().await.clone()
    }

    pub fn is_analyzing(&self) -> bool {
        self.pending.is_busy()
    }

    /// Blank text is a no-op: nothing is computed and the latest result
    /// stays as it was. Otherwise the new result replaces it wholesale.
    pub async fn run(
        &self,
        resume_text: &str,
        rng: Arc<dyn RandomSource>,
    ) -> Result<Option<AnalysisResult>, AppError> {
        if resume_text.trim().is_empty() {
            debug!("Ignoring blank resume submission");
            return Ok(None);
        }

        let guard = self.pending.try_acquire().ok_or_else(|| {
            AppError::Conflict("A resume analysis is already running".to_string())
        })?;

        let resume_text = resume_text.to_string();
        let latest = self.latest.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            let _guard = guard;
            tokio::time::sleep(delay).await;

            let result = analyze(&resume_text, rng.as_ref());
            if let Some(result) = &result {
                info!("Resume analyzed, overall score {}", result.overall_score);
                *latest.write().await = Some(result.clone());
            }
            result
        })
        .await
        .map_err(|e| AppError::Internal(e.into()))
    }
}
