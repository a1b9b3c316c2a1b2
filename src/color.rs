use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Pair column → Color32
// ---------------------------------------------------------------------------

/// One distinct colour per pair column of the loaded dataset.
#[derive(Debug, Clone)]
pub struct ColumnPalette {
    colors: Vec<Color32>,
    default_color: Color32,
}

impl Default for ColumnPalette {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ColumnPalette {
    pub fn new(num_pairs: usize) -> Self {
        ColumnPalette {
            colors: generate_palette(num_pairs),
            default_color: Color32::LIGHT_BLUE,
        }
    }

    /// Colour for pair column `k`.
    pub fn color_for(&self, k: usize) -> Color32 {
        self.colors.get(k).copied().unwrap_or(self.default_color)
    }
}
