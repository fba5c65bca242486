use crate::{AnswerSource, QueryRequest, QueryResponse, SourceError};

/// Blocking HTTP source posting to the backend's `/query` endpoint.
///
/// The endpoint takes the query payload as JSON and replies with
/// `{ "answer": "..." }`, where the answer may embed `[VERSE ...]` blocks.
pub struct HttpAnswerSource {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpAnswerSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            agent: ureq::Agent::new_with_defaults(),
            base_url,
        }
    }

    fn query_url(&self) -> String {
        format!("{}/query", self.base_url)
    }
}

impl AnswerSource for HttpAnswerSource {
    fn ask(&self, request: &QueryRequest) -> Result<String, SourceError> {
        let url = self.query_url();
        log::debug!("querying {url} about {}", request.scripture);

        let response = self
            .agent
            .post(&url)
            .send_json(request)
            .map_err(|e| match e {
                ureq::Error::StatusCode(status) => SourceError::Status { status },
                source => SourceError::Transport {
                    url: url.clone(),
                    source,
                },
            })?;

        let body = response
            .into_body()
            .read_to_string()
            .map_err(|source| SourceError::Transport { url, source })?;

        let parsed: QueryResponse = serde_json::from_str(&body)?;
        Ok(parsed.answer)
    }
}
