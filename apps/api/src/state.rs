use std::sync::Arc;

use crate::backend::InterviewSink;
use crate::config::Config;
use crate::interview::questions::QuestionSelector;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable question selection. Default: ShuffleSelector seeded from QUESTION_SEED.
    pub question_selector: Arc<dyn QuestionSelector>,
    /// Where submitted interviews go. `None` when BACKEND_URL is unset.
    pub interview_sink: Option<Arc<dyn InterviewSink>>,
}
