use crate::dialogs::RfdDialogs;
use crate::widgets;
use egui::CentralPanel;
use imgconv_common::Profile;
use imgconv_core::ConversionSession;

pub struct ImageConverterApp {
    session: ConversionSession,
    dialogs: RfdDialogs,
}

impl ImageConverterApp {
    pub fn new(cc: &eframe::CreationContext<'_>, profile: Profile) -> Self {
        cc.egui_ctx.set_zoom_factor(profile.window.ui_scale);

        Self {
            session: ConversionSession::new(profile),
            dialogs: RfdDialogs::new(),
        }
    }

    fn render_format_selector(&mut self, ui: &mut egui::Ui) {
        ui.label("Select Output Format: ");

        let mut format = self.session.target();
        let formats = self.session.formats();
        if widgets::format_selector(ui, &mut format, &formats) {
            // Menu only lists profile formats
            if let Err(e) = self.session.set_target(format) {
                tracing::warn!("Ignoring format selection: {e}");
            }
        }
    }

    fn render_actions(&mut self, ui: &mut egui::Ui) {
        if ui.button("Select Input Image").clicked() {
            self.session.select_input(&mut self.dialogs);
        }

        ui.add_space(5.0);

        if ui.button("Convert Image").clicked() {
            // Errors were already shown to the user
            let _ = self.session.convert_and_notify(&mut self.dialogs);
        }
    }
}

impl eframe::App for ImageConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(5.0);
                ui.label(self.session.selected_label());

                ui.add_space(5.0);
                self.render_format_selector(ui);

                ui.add_space(5.0);
                self.render_actions(ui);
            });
        });
    }
}
