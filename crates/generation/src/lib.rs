//! Flashcard generation service boundary
//!
//! Wire models, client configuration and the blocking HTTP client used to
//! submit a URL or pasted text to the remote generator, plus local Anki CSV
//! export of the returned cards.

pub mod anki;
pub mod client;
pub mod config;
pub mod error;
pub mod mock;
pub mod models;

pub use anki::{anki_file_name, save_anki_csv, write_anki_csv};
pub use client::{interpret_response, GenerationClient, GenerationService};
pub use config::ClientConfig;
pub use error::{GenerateError, ParseChoiceError, DEFAULT_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE};
pub use mock::MockService;
pub use models::{
    ExportFormat, Flashcard, GenerateRequest, GenerateResponse, InputType, PREVIEW_LIMIT,
};
