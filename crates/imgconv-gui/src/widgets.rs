use egui::Ui;
use imgconv_common::OutputFormat;

/// Output format combo box
pub fn format_selector(ui: &mut Ui, selected: &mut OutputFormat, formats: &[OutputFormat]) -> bool {
    let mut changed = false;

    egui::ComboBox::from_id_salt("output_format")
        .selected_text(selected.name())
        .show_ui(ui, |ui| {
            for &format in formats {
                if ui
                    .selectable_value(selected, format, format.name())
                    .clicked()
                {
                    changed = true;
                }
            }
        });

    changed
}
