use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – analysis settings
// ---------------------------------------------------------------------------

/// Render the left settings panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Analysis");
    ui.separator();

    let Some(ds) = state.dataset() else {
        ui.label("No dataset loaded.");
        return;
    };

    // Copy what we need so we can mutate state below.
    let num_pairs = ds.num_pairs();
    let labels: Vec<String> = (0..num_pairs).map(|k| ds.column_label(k)).collect();
    let summary = format!(
        "{} samples, {} pair(s){}",
        ds.len(),
        num_pairs,
        if ds.header().is_some() { ", header" } else { "" }
    );

    let mut changed = false;

    ui.strong("Column");
    let current = labels.get(state.config.column).cloned().unwrap_or_default();
    egui::ComboBox::from_id_salt("pair_column")
        .selected_text(current)
        .show_ui(ui, |ui: &mut Ui| {
            for (k, label) in labels.iter().enumerate() {
                let text = RichText::new(label).color(state.palette.color_for(k));
                changed |= ui
                    .selectable_value(&mut state.config.column, k, text)
                    .changed();
            }
        });
    ui.add_space(4.0);

    ui.strong("Sample rate");
    changed |= ui
        .add(
            egui::DragValue::new(&mut state.config.sample_rate)
                .range(1e-6..=f64::MAX)
                .speed(1.0)
                .suffix(" Hz"),
        )
        .changed();
    ui.add_space(4.0);

    ui.strong("dB floor");
    changed |= ui
        .add(
            egui::DragValue::new(&mut state.config.db_floor)
                .range(-400.0..=0.0)
                .speed(1.0)
                .suffix(" dB"),
        )
        .changed();
    ui.add_space(4.0);

    changed |= ui
        .checkbox(&mut state.config.centered, "Center zero frequency")
        .changed();

    if changed {
        state.recompute();
    }

    ui.separator();
    ui.label(summary);
    if let Some(path) = &state.source {
        ui.label(RichText::new(path.display().to_string()).small());
    }
    if let Some((freq, db)) = state.spectrum.as_ref().and_then(|s| s.peak()) {
        ui.label(format!("Peak: {freq:.3} Hz at {db:.1} dB"));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(ui.ctx(), state);
                ui.close_menu();
            }
            ui.separator();
            if ui
                .add_enabled(state.spectrum.is_some(), egui::Button::new("Export spectrum (CSV)…"))
                .clicked()
            {
                save_file_dialog(state, "spectrum.csv", "CSV", "csv", AppState::export_spectrum);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.dataset().is_some(), egui::Button::new("Export dataset (JSON)…"))
                .clicked()
            {
                save_file_dialog(state, "dataset.json", "JSON", "json", AppState::export_dataset);
                ui.close_menu();
            }
        });

        ui.separator();

        if ui.selectable_label(state.show_table, "Data table").clicked() {
            state.show_table = !state.show_table;
        }

        if state.loading() {
            ui.separator();
            ui.spinner();
            ui.label("Loading…");
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(ctx: &egui::Context, state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open sample data")
        .add_filter("Text files", &["txt", "dat", "tsv", "csv", "log"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.start_load(path, ctx);
    }
}

fn save_file_dialog(
    state: &mut AppState,
    default_name: &str,
    filter_name: &str,
    extension: &str,
    write: fn(&AppState, &std::path::Path) -> anyhow::Result<()>,
) {
    let file = rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter(filter_name, &[extension])
        .save_file();

    if let Some(path) = file {
        match write(state, &path) {
            Ok(()) => log::info!("Exported {}", path.display()),
            Err(e) => {
                log::error!("Export failed: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
