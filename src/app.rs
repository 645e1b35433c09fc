use eframe::{App, Frame, egui};
use egui::{Color32, RichText};

use crate::batch::BatchGenerator;
use crate::form::{FormState, SaveStatus};
use crate::manager::default_export_path;
use crate::password::SecurityLevel;
use crate::settings::AppSettings;

/// The main eframe app struct
pub struct PassGenApp {
    pub form: FormState,
    pub settings: AppSettings,
}

impl Default for PassGenApp {
    fn default() -> Self {
        let settings = AppSettings::load();
        let save_path = default_export_path(&settings.export_file_name);
        Self {
            form: FormState::from_settings(&settings, &save_path),
            settings,
        }
    }
}

impl App for PassGenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Password Generator");
            ui.separator();
            self.show_inputs(ui);
            ui.separator();
            self.show_buttons(ui);
            self.show_save_status(ui);
            ui.separator();
            self.show_output(ui);
        });
    }
}

impl PassGenApp {
    fn show_inputs(&mut self, ui: &mut egui::Ui) {
        ui.label("Enter the number of passwords to generate (1-10):");
        ui.text_edit_singleline(&mut self.form.count_input);

        ui.label("Enter the password length:");
        ui.text_edit_singleline(&mut self.form.length_input);

        ui.label("Select password security level:");
        for level in SecurityLevel::ALL {
            let selected = self.form.security_level() == level;
            if ui.radio(selected, level.label()).clicked() {
                self.form.select_level(level);
            }
        }

        ui.label("Enter custom character set:");
        let enabled = self.form.custom_charset_enabled();
        ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(&mut self.form.custom_charset_input),
        );

        ui.horizontal(|ui| {
            ui.label("Save to:");
            ui.text_edit_singleline(&mut self.form.save_path_input);
        });
    }

    fn show_buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let save_clicked = ui
                .add_enabled(self.form.save_enabled(), egui::Button::new("Save to File"))
                .clicked();
            if save_clicked {
                self.form.save();
            }

            if ui.button("Show Passwords").clicked() {
                self.form.show_passwords(&mut BatchGenerator::new());
                self.persist_settings();
            }
        });
    }

    fn show_save_status(&mut self, ui: &mut egui::Ui) {
        let Some(status) = self.form.save_status.clone() else {
            return;
        };
        match status {
            SaveStatus::Saved(path) => {
                ui.colored_label(Color32::GREEN, format!("Saved to {}", path.display()));
            }
            SaveStatus::NeedsConfirmation(path) => {
                ui.colored_label(
                    Color32::YELLOW,
                    format!("{} already exists. Overwrite?", path.display()),
                );
                ui.horizontal(|ui| {
                    if ui.button("Overwrite").clicked() {
                        self.form.save_confirmed(&path);
                    }
                    if ui.button("Cancel").clicked() {
                        self.form.save_status = None;
                    }
                });
            }
            SaveStatus::Cancelled => {}
            SaveStatus::Failed(msg) => {
                ui.colored_label(Color32::RED, format!("Could not save: {msg}"));
            }
        }
    }

    fn show_output(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
            for line in self.form.output_lines() {
                ui.monospace(line);
            }
        });
        if self.form.message().is_some() && self.form.passwords().is_empty() {
            ui.label(RichText::new("No passwords generated").color(Color32::GRAY));
        }
    }

    /// Remember the last valid inputs as next start's defaults.
    fn persist_settings(&mut self) {
        if self.form.remember_in(&mut self.settings) {
            if let Err(e) = self.settings.save() {
                log::warn!("could not save settings: {e}");
            }
        }
    }
}
