use std::{thread, time::Duration};

use crate::{AnswerSource, QueryRequest, SourceError};

/// Canned answers for offline/demo use. Picks a reply by keyword so the demo
/// feels responsive to what was asked, and always includes a tagged verse so
/// the card rendering path is exercised.
pub struct ScriptedAnswerSource {
    delay: Duration,
}

impl ScriptedAnswerSource {
    pub fn new() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    /// Simulates backend latency before answering. Used by the demo mode;
    /// tests keep the default of zero.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    fn pick(&self, request: &QueryRequest) -> String {
        let asked = request.user_query.to_lowercase();
        if asked.contains("peace") || asked.contains("calm") {
            format!(
                "{} points inward for this one. Stillness is not the absence of action \
                 but of attachment to it.\n\n[VERSE title=\"Gita 2.48\"]Perform your duty \
                 equipoised, abandoning all attachment to success or failure. Such \
                 equanimity is called yoga.[/VERSE]\n\nPractice begins with one breath \
                 watched to its end.",
                request.scripture
            )
        } else if asked.contains("duty") || asked.contains("work") || asked.contains("action") {
            "Act because the act is yours to do, not for what it pays.\n\n\
             [VERSE title=\"Gita 2.47\"]You have the right to perform your duty, but not \
             to the fruits of your actions.[/VERSE]\n\nThe fruit belongs to the whole."
                .to_string()
        } else {
            format!(
                "The {} keeps returning to one hinge: what you love shapes what you \
                 become.\n\n[VERSE title=\"Dhammapada 1.1\"]All that we are is the result \
                 of what we have thought.[/VERSE]\n\nAsk it something narrower and it \
                 will answer in kind.",
                request.scripture
            )
        }
    }
}

impl Default for ScriptedAnswerSource {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerSource for ScriptedAnswerSource {
    fn ask(&self, request: &QueryRequest) -> Result<String, SourceError> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(self.pick(request))
    }
}
