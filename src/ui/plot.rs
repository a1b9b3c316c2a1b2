use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Spectrum plot (central panel)
// ---------------------------------------------------------------------------

/// Render the magnitude spectrum of the selected column.
pub fn spectrum_plot(ui: &mut Ui, state: &AppState) {
    let (dataset, spectrum) = match (state.dataset(), &state.spectrum) {
        (Some(ds), Some(sp)) => (ds, sp),
        (None, _) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                if state.loading() {
                    ui.spinner();
                } else {
                    ui.heading("Open a text file of re/im samples  (File → Open…)");
                }
            });
            return;
        }
        (Some(_), None) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No spectrum for the current settings");
            });
            return;
        }
    };

    let column = state.config.column;
    let name = dataset.column_label(column);
    let color = state.palette.color_for(column);

    Plot::new("spectrum_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Frequency (Hz)")
        .y_axis_label("Magnitude (dB)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::from(spectrum.points()))
                .name(&name)
                .color(color)
                .width(1.5);
            plot_ui.line(line);
        });
}
