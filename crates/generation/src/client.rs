use crate::config::ClientConfig;
use crate::error::{GenerateError, DEFAULT_ERROR_MESSAGE};
use crate::models::{GenerateRequest, GenerateResponse};
use serde_json::Value;
use std::time::{Duration, Instant};

const GENERATE_PATH: &str = "generate";

/// Anything that can turn a request into cards. The HTTP client is the real
/// one; `MockService` scripts outcomes for tests.
pub trait GenerationService: Send + Sync {
    fn name(&self) -> &str;

    fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, GenerateError>;

    /// Link for an exported file, if this service serves downloads.
    fn export_url(&self, _file: &str) -> Option<String> {
        None
    }
}

/// Blocking client for the remote generator. Call it off the UI thread.
pub struct GenerationClient {
    config: ClientConfig,
    agent: ureq::Agent,
}

impl GenerationClient {
    pub fn new(config: ClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(config.connect_timeout_secs))
            .timeout_read(Duration::from_secs(config.read_timeout_secs))
            .timeout_write(Duration::from_secs(config.write_timeout_secs))
            .build();
        Self { config, agent }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl GenerationService for GenerationClient {
    fn name(&self) -> &str {
        &self.config.base_url
    }

    fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, GenerateError> {
        let url = self.config.endpoint(GENERATE_PATH);
        let payload = serde_json::to_string(request)
            .map_err(|err| GenerateError::network(format!("encode request: {err}")))?;
        let start = Instant::now();
        tracing::info!(
            target: "generation",
            "generate request start: url={}, input_type={}, export_format={}, content_len={}",
            url,
            request.input_type,
            request.export_format,
            request.content.len()
        );
        let response = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .set("Accept", "application/json")
            .send_string(&payload);
        let (status, body) = match response {
            Ok(resp) => {
                let status = resp.status();
                let body = resp.into_string().map_err(|err| {
                    GenerateError::network(format!("read generate response: {err}"))
                })?;
                (status, body)
            }
            Err(ureq::Error::Status(code, resp)) => (code, resp.into_string().unwrap_or_default()),
            Err(err) => {
                tracing::warn!(
                    target: "generation",
                    "generate request failed after {:.2?}: {}",
                    start.elapsed(),
                    err
                );
                return Err(GenerateError::network(format!("reach {url}: {err}")));
            }
        };
        let outcome = interpret_response(status, &body);
        match &outcome {
            Ok(result) => tracing::info!(
                target: "generation",
                "generate request completed in {:.2?} (cards={}, sheets={}, anki={})",
                start.elapsed(),
                result.cards().len(),
                result.sheets_url.is_some(),
                result.anki_file.is_some()
            ),
            Err(err) => tracing::warn!(
                target: "generation",
                "generate request HTTP {} after {:.2?}: {}",
                status,
                start.elapsed(),
                err
            ),
        }
        outcome
    }

    fn export_url(&self, file: &str) -> Option<String> {
        Some(self.config.export_url(file))
    }
}

/// Map a status and body to an outcome. A body that is not JSON counts as a
/// network failure whatever the status. Any 2xx JSON body is a success, even
/// one with an `error` field or malformed cards.
pub fn interpret_response(status: u16, body: &str) -> Result<GenerateResponse, GenerateError> {
    let value: Value = serde_json::from_str(body).map_err(|err| {
        GenerateError::network(format!("invalid response JSON (HTTP {status}): {err}"))
    })?;
    if (200..300).contains(&status) {
        return serde_json::from_value(value).map_err(|err| {
            GenerateError::network(format!("unexpected response shape: {err}"))
        });
    }
    let message = value
        .get("error")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_ERROR_MESSAGE)
        .to_string();
    Err(GenerateError::Application { status, message })
}
