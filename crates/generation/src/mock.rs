use crate::client::GenerationService;
use crate::error::GenerateError;
use crate::models::{Flashcard, GenerateRequest, GenerateResponse};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// Scripted generation service. Pops one outcome per call and records every
/// request it sees; once the script runs dry it echoes the content back as
/// a single card.
#[derive(Default)]
pub struct MockService {
    outcomes: Mutex<VecDeque<Result<GenerateResponse, GenerateError>>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockService {
    pub fn new(outcomes: Vec<Result<GenerateResponse, GenerateError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().clone()
    }
}

impl GenerationService for MockService {
    fn name(&self) -> &str {
        "mock"
    }

    fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, GenerateError> {
        self.requests.lock().push(request.clone());
        self.outcomes.lock().pop_front().unwrap_or_else(|| {
            Ok(GenerateResponse {
                flashcards: Some(vec![Flashcard::new(
                    format!("What is this {} about?", request.input_type),
                    request.content.trim().to_string(),
                )]),
                ..Default::default()
            })
        })
    }

    fn export_url(&self, file: &str) -> Option<String> {
        Some(format!("mock://export/{file}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExportFormat, InputType};

    #[test]
    fn test_scripted_then_fallback() {
        let mock = MockService::new(vec![Err(GenerateError::network("down"))]);
        let request = GenerateRequest::new(InputType::Text, " photosynthesis ", ExportFormat::Anki);

        assert!(mock.generate(&request).is_err());
        let result = mock.generate(&request).unwrap();
        assert_eq!(result.cards()[0].answer, "photosynthesis");
        assert_eq!(mock.requests().len(), 2);
        assert_eq!(mock.requests()[1], request);
    }
}
