// Terminal QR rendering behind the core renderer boundary.

use qrcode::render::unicode;
use qrcode::QrCode;
use qrgrid_core::render::{CodeRenderer, EcLevel};

fn ec_level(level: EcLevel) -> qrcode::EcLevel {
    match level {
        EcLevel::Low => qrcode::EcLevel::L,
        EcLevel::Medium => qrcode::EcLevel::M,
        EcLevel::Quartile => qrcode::EcLevel::Q,
        EcLevel::High => qrcode::EcLevel::H,
    }
}

/// Renders codes as dense unicode blocks on stdout.
///
/// The pixel size maps to a minimum character footprint (roughly 10 px per
/// terminal cell), so the fullscreen size produces a visibly larger code.
pub struct TermRenderer {
    /// Encoding failures from the last render, if any.
    pub last_error: Option<String>,
}

impl TermRenderer {
    pub fn new() -> Self {
        Self { last_error: None }
    }
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeRenderer for TermRenderer {
    fn render_code(&mut self, text: &str, size_px: u32, level: EcLevel) {
        self.last_error = None;
        match QrCode::with_error_correction_level(text, ec_level(level)) {
            Ok(code) => {
                let cells = (size_px / 10).max(1);
                let rendered = code
                    .render::<unicode::Dense1x2>()
                    .dark_color(unicode::Dense1x2::Light)
                    .light_color(unicode::Dense1x2::Dark)
                    .min_dimensions(cells, cells)
                    .build();
                println!("{rendered}");
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
            }
        }
    }
}
