use super::App;
use eframe::egui;
use generation::{ExportFormat, InputType};

impl App {
    /// Input and export controls. Returns true when Generate was clicked.
    pub(super) fn form_ui(&mut self, ui: &mut egui::Ui) -> bool {
        ui.strong("Choose Your Input:");
        ui.horizontal(|ui| {
            for kind in [InputType::Url, InputType::Text] {
                ui.selectable_value(&mut self.form.input_type, kind, kind.label());
            }
        });
        ui.add_space(6.0);

        match self.form.input_type {
            InputType::Url => {
                ui.label("YouTube URL:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.url)
                        .hint_text("https://www.youtube.com/watch?v=...")
                        .desired_width(f32::INFINITY),
                );
            }
            InputType::Text => {
                ui.label("Your Content:");
                ui.add(
                    egui::TextEdit::multiline(&mut self.form.text)
                        .hint_text("Paste your text content here...")
                        .desired_rows(6)
                        .desired_width(f32::INFINITY),
                );
            }
        }
        ui.add_space(6.0);

        ui.label("Export Format:");
        egui::ComboBox::from_id_salt("export_format_combo")
            .width(ui.available_width())
            .selected_text(self.form.export_format.label())
            .show_ui(ui, |ui| {
                for format in ExportFormat::ALL {
                    ui.selectable_value(&mut self.form.export_format, format, format.label());
                }
            });
        ui.add_space(8.0);

        let loading = self.form.is_loading();
        let label = if loading {
            "Generating..."
        } else {
            "Generate Flashcards"
        };
        ui.horizontal(|ui| {
            let clicked = ui
                .add_enabled(!loading, egui::Button::new(label))
                .clicked();
            if loading {
                ui.spinner();
            }
            clicked
        })
        .inner
    }
}
