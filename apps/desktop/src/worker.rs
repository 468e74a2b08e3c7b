use crossbeam_channel::Sender;
use generation::{GenerateError, GenerateRequest, GenerateResponse, GenerationService};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

pub enum GenerationEvent {
    Finished(Result<GenerateResponse, GenerateError>),
}

impl std::fmt::Debug for GenerationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationEvent::Finished(Ok(_)) => f.write_str("GenerationEvent::Finished(Ok(..))"),
            GenerationEvent::Finished(Err(err)) => {
                write!(f, "GenerationEvent::Finished(Err({err}))")
            }
        }
    }
}

/// Run one request on a background thread. The outcome goes to `tx`, then
/// `on_done` runs (the app uses it to wake the UI).
pub fn spawn_generation(
    service: Arc<dyn GenerationService>,
    request: GenerateRequest,
    tx: Sender<GenerationEvent>,
    on_done: impl FnOnce() + Send + 'static,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let start = Instant::now();
        tracing::info!(
            target: "generation",
            "Submitting {} request to {}",
            request.input_type,
            service.name()
        );
        let outcome = service.generate(&request);
        if let Err(err) = &outcome {
            tracing::error!(
                target: "generation",
                "Generation failed after {:.2?}: {}",
                start.elapsed(),
                err
            );
        }
        // Receiver may be gone if the window closed.
        let _ = tx.send(GenerationEvent::Finished(outcome));
        on_done();
    })
}
