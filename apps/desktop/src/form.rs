use generation::{ExportFormat, GenerateError, GenerateRequest, GenerateResponse, InputType};

/// Generation form state. `loading` is display state for the Generate
/// button; it does not serialize anything else the user does.
#[derive(Debug, Default)]
pub struct FormState {
    pub input_type: InputType,
    pub url: String,
    pub text: String,
    pub export_format: ExportFormat,
    loading: bool,
    result: Option<GenerateResponse>,
    error: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field the current input type reads from.
    pub fn content(&self) -> &str {
        match self.input_type {
            InputType::Url => &self.url,
            InputType::Text => &self.text,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&GenerateResponse> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a request: raise the loading flag, clear the previous outcome
    /// and return what to send. `None` while a request is outstanding.
    pub fn begin_request(&mut self) -> Option<GenerateRequest> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        self.result = None;
        Some(GenerateRequest::new(
            self.input_type,
            self.content().to_string(),
            self.export_format,
        ))
    }

    pub fn finish_request(&mut self, outcome: Result<GenerateResponse, GenerateError>) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.error = None;
                self.result = Some(result);
            }
            Err(err) => {
                self.result = None;
                self.error = Some(err.user_message());
            }
        }
    }
}
