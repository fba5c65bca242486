pub mod http;
pub mod scripted;
pub mod worker;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use http::HttpAnswerSource;
pub use scripted::ScriptedAnswerSource;
pub use worker::{QueryOutcome, QueryWorker};

/// Shown in place of an answer when a query fails for any reason other than
/// the user aborting it.
pub const FALLBACK_MESSAGE: &str = "Sorry, I couldn't connect to the server. \
     Please check that the backend is running and try again.";

/// One user submission, as the backend expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub user_query: String,
    pub religion: String,
    pub scripture: String,
}

/// The backend's reply envelope; only the answer string matters here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("backend returned HTTP {status}")]
    Status { status: u16 },

    #[error("backend returned a malformed answer payload: {0}")]
    MalformedAnswer(#[from] serde_json::Error),
}

/// Supplies the full answer string for a query. Implementations block; the
/// UI runs them through [`QueryWorker`] so the event loop never waits on one.
pub trait AnswerSource: Send + Sync {
    fn ask(&self, request: &QueryRequest) -> Result<String, SourceError>;
}
