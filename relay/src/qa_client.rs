use anyhow::Result;
use reqwest::Client;

use crate::question_payload::QuestionPayload;

/// Client for the downstream question-answering backend.
pub struct QaClient {
    client: Client,
    url: String,
}

impl QaClient {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    /// Forward the question and return the downstream JSON body verbatim.
    ///
    /// Transport errors, non-success statuses, and unparsable bodies all
    /// surface as one flat failure kind.
    pub async fn ask(&self, payload: &QuestionPayload) -> Result<serde_json::Value> {
        let response = self.client.post(&self.url).json(payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow::anyhow!(
                "answer service returned {}: {}",
                status,
                error_text
            ));
        }

        let body: serde_json::Value = response.json().await?;
        Ok(body)
    }
}
