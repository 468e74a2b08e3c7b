use super::App;
use eframe::egui;

impl App {
    pub(super) fn result_ui(&self, ui: &mut egui::Ui) {
        if let Some(err) = self.form.error() {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(egui::Color32::RED, err);
            });
        }

        let Some(result) = self.form.result() else {
            return;
        };
        ui.add_space(12.0);
        ui.heading("Result");
        for card in result.preview() {
            ui.label(format!("• {} — {}", card.question, card.answer));
        }
        if let Some(url) = &result.sheets_url {
            if ui.link("Open Google Sheet").clicked() {
                let _ = webbrowser::open(url);
            }
        }
        if let Some(file) = &result.anki_file {
            if let Some(url) = self.service.export_url(file) {
                if ui.link("Download Anki CSV").clicked() {
                    let _ = webbrowser::open(&url);
                }
            }
        }
    }
}
