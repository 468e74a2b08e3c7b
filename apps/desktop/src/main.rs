use anyhow::{anyhow, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};
use desktop::form::FormState;
use desktop::worker::{spawn_generation, GenerationEvent};
use eframe::{egui, NativeOptions};
use generation::{ClientConfig, GenerationClient, GenerationService};
use presets::PresetStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod app_form;
mod app_presets;
mod app_result;

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let config = ClientConfig::from_env();
    tracing::info!("Generation service: {}", config.base_url);
    let service: Arc<dyn GenerationService> = Arc::new(GenerationClient::new(config));

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 860.0])
            .with_title("AI Flashcard Generator"),
        ..NativeOptions::default()
    };
    eframe::run_native(
        "AI Flashcard Generator",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(service)))),
    )
    .map_err(|err| anyhow!("eframe: {err}"))
}

struct App {
    presets: PresetStore,
    form: FormState,
    service: Arc<dyn GenerationService>,
    generation_tx: Sender<GenerationEvent>,
    generation_rx: Receiver<GenerationEvent>,
}

impl App {
    fn new(service: Arc<dyn GenerationService>) -> Self {
        let (generation_tx, generation_rx) = unbounded();
        Self {
            presets: PresetStore::default(),
            form: FormState::new(),
            service,
            generation_tx,
            generation_rx,
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.generation_rx.try_recv() {
            tracing::debug!("generation event {:?}", event);
            match event {
                GenerationEvent::Finished(outcome) => self.form.finish_request(outcome),
            }
        }
    }

    fn generate(&mut self, ctx: &egui::Context) {
        let Some(request) = self.form.begin_request() else {
            return;
        };
        let ctx = ctx.clone();
        spawn_generation(
            Arc::clone(&self.service),
            request,
            self.generation_tx.clone(),
            move || ctx.request_repaint(),
        );
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("AI Flashcard Generator");
                    ui.label("Transform any content into engaging flashcards!");
                });
                ui.add_space(12.0);

                self.presets_ui(ui);
                ui.separator();
                if self.form_ui(ui) {
                    self.generate(ctx);
                }
                self.result_ui(ui);
            });
        });
    }
}
