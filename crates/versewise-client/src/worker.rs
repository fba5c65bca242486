use std::{
    sync::{Arc, mpsc},
    thread,
};

use crate::{AnswerSource, FALLBACK_MESSAGE, QueryRequest, SourceError};

/// Result of one query, tagged with the generation it belongs to.
#[derive(Debug)]
pub enum QueryOutcome {
    Answer(String),
    Failed(SourceError),
}

impl QueryOutcome {
    /// The string that flows into the transcript: the answer itself, or the
    /// fixed fallback line for failures. Failures are not a distinct render
    /// path; the fallback reveals like any other answer.
    pub fn into_answer_text(self) -> String {
        match self {
            QueryOutcome::Answer(answer) => answer,
            QueryOutcome::Failed(_) => FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// Runs queries off the UI thread, one background thread per submission.
///
/// Each submission gets a fresh generation number and outcomes come back on
/// the channel tagged with it. Aborting bumps the generation without touching
/// the thread: the request itself is left to finish and its stale result is
/// dropped at the receiving end via [`QueryWorker::accepts`]. At most one
/// generation is ever current, so at most one in-flight query is honored.
pub struct QueryWorker {
    source: Arc<dyn AnswerSource>,
    tx: mpsc::Sender<(u64, QueryOutcome)>,
    generation: u64,
}

impl QueryWorker {
    pub fn new(source: Arc<dyn AnswerSource>) -> (Self, mpsc::Receiver<(u64, QueryOutcome)>) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                source,
                tx,
                generation: 0,
            },
            rx,
        )
    }

    /// Dispatches a query; the outcome arrives on the receiver tagged with
    /// the returned generation.
    pub fn submit(&mut self, request: QueryRequest) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        thread::spawn(move || {
            let outcome = match source.ask(&request) {
                Ok(answer) => QueryOutcome::Answer(answer),
                Err(e) => {
                    log::warn!("query failed: {e}");
                    QueryOutcome::Failed(e)
                }
            };
            // Receiver may be gone on shutdown; nothing to do about it here.
            let _ = tx.send((generation, outcome));
        });

        generation
    }

    /// Invalidates the in-flight query, if any. Its eventual outcome will no
    /// longer be accepted.
    pub fn abort(&mut self) {
        self.generation += 1;
    }

    /// Whether an outcome tagged with `generation` is still the current one.
    pub fn accepts(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedAnswerSource;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn request() -> QueryRequest {
        QueryRequest {
            user_query: "What is duty?".to_string(),
            religion: "Hinduism".to_string(),
            scripture: "Bhagavad Gita".to_string(),
        }
    }

    #[test]
    fn outcome_arrives_tagged_with_its_generation() {
        let (mut worker, rx) = QueryWorker::new(Arc::new(ScriptedAnswerSource::new()));
        let generation = worker.submit(request());

        let (tagged, outcome) = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(tagged, generation);
        assert!(worker.accepts(tagged));
        assert!(outcome.into_answer_text().contains("[VERSE title=\""));
    }

    #[test]
    fn abort_invalidates_the_inflight_generation() {
        let (mut worker, rx) = QueryWorker::new(Arc::new(ScriptedAnswerSource::new()));
        let generation = worker.submit(request());
        worker.abort();

        let (tagged, _) = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(tagged, generation);
        assert!(!worker.accepts(tagged), "aborted outcome must be dropped");
    }

    #[test]
    fn resubmission_supersedes_the_previous_query() {
        let (mut worker, _rx) = QueryWorker::new(Arc::new(ScriptedAnswerSource::new()));
        let first = worker.submit(request());
        let second = worker.submit(request());
        assert!(!worker.accepts(first));
        assert!(worker.accepts(second));
    }

    #[test]
    fn failure_outcome_becomes_the_fallback_message() {
        let outcome = QueryOutcome::Failed(SourceError::Status { status: 500 });
        assert_eq!(outcome.into_answer_text(), FALLBACK_MESSAGE);
    }
}
