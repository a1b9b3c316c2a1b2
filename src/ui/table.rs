use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

/// Raw sample table: one row per input line, re/im columns per pair.
pub fn data_table(ui: &mut Ui, state: &AppState) {
    let Some(ds) = state.dataset() else {
        ui.label("No dataset loaded.");
        return;
    };

    let labels: Vec<String> = match ds.header() {
        Some(h) => h.to_vec(),
        None => (0..ds.num_pairs())
            .flat_map(|k| [format!("re {k}"), format!("im {k}")])
            .collect(),
    };

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(40.0))
        .columns(Column::auto().at_least(70.0), ds.num_cols())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            for (j, label) in labels.iter().enumerate() {
                let color = state.palette.color_for(j / 2);
                header.col(|ui| {
                    ui.label(RichText::new(label).strong().color(color));
                });
            }
        })
        .body(|body| {
            body.rows(18.0, ds.len(), |mut row| {
                let i = row.index();
                row.col(|ui| {
                    ui.label(i.to_string());
                });
                for pair in &ds.rows()[i] {
                    row.col(|ui| {
                        ui.monospace(format!("{:.6}", pair.re));
                    });
                    row.col(|ui| {
                        ui.monospace(format!("{:.6}", pair.im));
                    });
                }
            });
        });
}
