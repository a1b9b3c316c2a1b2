use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use phasorscope::config::AnalysisConfig;
use phasorscope::data::{load_file, Dataset, DatasetSlot, ParseError, ParseTicket, SlotUpdate};
use phasorscope::export;
use phasorscope::spectral::{RustFftTransform, Spectrum};

use crate::color::ColumnPalette;

// ---------------------------------------------------------------------------
// Worker → UI message
// ---------------------------------------------------------------------------

/// A finished background read+parse, tagged with the ticket it was started with.
pub struct LoadResult {
    pub ticket: ParseTicket,
    pub path: PathBuf,
    pub result: Result<Dataset, ParseError>,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Current dataset, replaced only by the latest requested load.
    pub slot: DatasetSlot,

    /// File the current dataset came from.
    pub source: Option<PathBuf>,

    /// Analysis settings edited in the side panel.
    pub config: AnalysisConfig,

    /// Spectrum of the selected column (recomputed wholesale on every change).
    pub spectrum: Option<Spectrum>,

    /// One colour per pair column.
    pub palette: ColumnPalette,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether the raw data table is shown.
    pub show_table: bool,

    transform: RustFftTransform,
    tx: Sender<LoadResult>,
    rx: Receiver<LoadResult>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl AppState {
    pub fn new(config: AnalysisConfig) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            slot: DatasetSlot::new(),
            source: None,
            config,
            spectrum: None,
            palette: ColumnPalette::default(),
            status_message: None,
            show_table: false,
            transform: RustFftTransform::new(),
            tx,
            rx,
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.slot.dataset()
    }

    pub fn loading(&self) -> bool {
        self.slot.is_pending()
    }

    /// Read and parse `path` on a worker thread. Any load still in flight
    /// becomes stale and its result will be ignored.
    pub fn start_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let ticket = self.slot.begin();
        log::info!("loading {} (ticket {})", path.display(), ticket.id());

        let tx = self.tx.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let result = load_file(&path);
            // The receiver lives as long as the app; a send error means we are shutting down.
            let _ = tx.send(LoadResult {
                ticket,
                path,
                result,
            });
            ctx.request_repaint();
        });
    }

    /// Drain finished loads, letting the slot decide which one counts.
    pub fn poll_loads(&mut self) {
        while let Ok(LoadResult {
            ticket,
            path,
            result,
        }) = self.rx.try_recv()
        {
            match self.slot.complete(ticket, result) {
                SlotUpdate::Replaced => self.on_dataset_replaced(path),
                SlotUpdate::Rejected(e) => {
                    log::error!("Failed to load {}: {e}", path.display());
                    self.status_message = Some(format!("Error: {e}"));
                }
                SlotUpdate::Stale => {}
            }
        }
    }

    fn on_dataset_replaced(&mut self, path: PathBuf) {
        if let Some(ds) = self.slot.dataset() {
            log::info!(
                "Loaded {} samples x {} pairs from {}",
                ds.len(),
                ds.num_pairs(),
                path.display()
            );
            self.palette = ColumnPalette::new(ds.num_pairs());
            if self.config.column >= ds.num_pairs() {
                self.config.column = 0;
            }
        }
        self.source = Some(path);
        self.status_message = None;
        self.recompute();
    }

    /// Rebuild the spectrum from the current dataset and settings.
    pub fn recompute(&mut self) {
        let Some(ds) = self.slot.dataset() else {
            self.spectrum = None;
            return;
        };
        match Spectrum::compute(ds, &self.config, &mut self.transform) {
            Ok(spectrum) => {
                self.spectrum = Some(spectrum);
                self.status_message = None;
            }
            Err(e) => {
                log::warn!("spectrum not computed: {e}");
                self.spectrum = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    pub fn export_spectrum(&self, path: &Path) -> Result<()> {
        let spectrum = self.spectrum.as_ref().context("no spectrum to export")?;
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        export::spectrum_csv(file, spectrum).context("writing spectrum CSV")?;
        Ok(())
    }

    pub fn export_dataset(&self, path: &Path) -> Result<()> {
        let dataset = self.dataset().context("no dataset to export")?;
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        export::dataset_json(std::io::BufWriter::new(file), dataset)
            .context("writing dataset JSON")?;
        Ok(())
    }
}
