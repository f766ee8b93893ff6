use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart colours
// ---------------------------------------------------------------------------

const LINE_HUE: f32 = 210.0;
const BEST_HUE: f32 = 25.0;

fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Colour of the error-rate line.
pub fn line_color() -> Color32 {
    from_hsl(LINE_HUE, 0.75, 0.55)
}

/// Colour of the marker on the lowest error.
pub fn best_color() -> Color32 {
    from_hsl(BEST_HUE, 0.9, 0.55)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_and_marker_differ() {
        assert_ne!(line_color(), best_color());
    }

    #[test]
    fn line_is_blue_dominant() {
        let c = line_color();
        assert!(c.b() > c.r());
        assert!(c.b() > c.g());
    }

    #[test]
    fn marker_is_red_dominant() {
        let c = best_color();
        assert!(c.r() > c.g());
        assert!(c.r() > c.b());
    }
}
