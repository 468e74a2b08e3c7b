use super::App;
use eframe::egui;

impl App {
    /// Preset picker plus name/text editors and Save / Add New / Delete.
    pub(super) fn presets_ui(&mut self, ui: &mut egui::Ui) {
        ui.strong("Prompt Presets:");

        let selected = self.presets.selected_index();
        let mut picked = None;
        egui::ComboBox::from_id_salt("preset_combo")
            .width(ui.available_width())
            .selected_text(display_name(&self.presets.selected().name))
            .show_ui(ui, |ui| {
                for (idx, preset) in self.presets.presets().iter().enumerate() {
                    if ui
                        .selectable_label(idx == selected, display_name(&preset.name))
                        .clicked()
                    {
                        picked = Some(idx);
                    }
                }
            });
        if let Some(idx) = picked {
            if let Err(err) = self.presets.select(idx) {
                tracing::warn!("preset select ignored: {err}");
            }
        }

        ui.add(
            egui::TextEdit::singleline(self.presets.draft_name_mut())
                .hint_text("Prompt Name")
                .desired_width(f32::INFINITY),
        );
        ui.add(
            egui::TextEdit::multiline(self.presets.draft_text_mut())
                .hint_text("Prompt Text")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );

        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                self.presets.save();
            }
            if ui.button("Add New").clicked() {
                self.presets.add();
            }
            if ui
                .add_enabled(self.presets.can_delete(), egui::Button::new("Delete"))
                .clicked()
            {
                self.presets.delete();
            }
        });
    }
}

fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "(unnamed)"
    } else {
        name
    }
}
