//! Boundary to the QR image generator.
//!
//! The generator itself is an external collaborator: it receives text,
//! a pixel size, and an error-correction level, and produces something
//! drawable on its own surface. Nothing here knows or cares how.

use qrgrid_engine::sheet::Item;

/// QR error-correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EcLevel {
    Low,
    Medium,
    Quartile,
    /// Highest redundancy; what item codes are rendered with.
    #[default]
    High,
}

/// Default pixel size for the in-card rendering.
pub const CARD_SIZE_PX: u32 = 180;

/// Default pixel size for the fullscreen rendering.
pub const FULLSCREEN_SIZE_PX: u32 = 400;

/// Something that can turn text into a scannable code on its own surface.
pub trait CodeRenderer {
    fn render_code(&mut self, text: &str, size_px: u32, level: EcLevel);
}

/// Render one selected item's content, if it has any.
///
/// Called once per selection; items with empty content are skipped rather
/// than rendered as an empty code. Returns whether a render happened.
pub fn render_item(renderer: &mut dyn CodeRenderer, item: &Item, size_px: u32) -> bool {
    if item.content.is_empty() {
        return false;
    }
    renderer.render_code(&item.content, size_px, EcLevel::High);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingRenderer {
        calls: Vec<(String, u32, EcLevel)>,
    }

    impl CodeRenderer for RecordingRenderer {
        fn render_code(&mut self, text: &str, size_px: u32, level: EcLevel) {
            self.calls.push((text.to_string(), size_px, level));
        }
    }

    #[test]
    fn test_renders_content_at_high_level() {
        let mut renderer = RecordingRenderer { calls: Vec::new() };
        let item = Item {
            name: "door".to_string(),
            content: "wifi:door".to_string(),
        };

        assert!(render_item(&mut renderer, &item, CARD_SIZE_PX));
        assert_eq!(
            renderer.calls,
            vec![("wifi:door".to_string(), 180, EcLevel::High)]
        );
    }

    #[test]
    fn test_empty_content_skips_render() {
        let mut renderer = RecordingRenderer { calls: Vec::new() };
        let item = Item {
            name: "unnamed".to_string(),
            content: String::new(),
        };

        assert!(!render_item(&mut renderer, &item, FULLSCREEN_SIZE_PX));
        assert!(renderer.calls.is_empty());
    }
}
