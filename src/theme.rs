//! Application-wide theme system.
//!
//! A small palette struct covering every UI element, with built-in light
//! and dark variants selected by name from the config or CLI. "Opacity"
//! from the pager transforms is rendered by blending a color toward the
//! theme background, so themes also provide the RGB conversion helpers.

use ratatui::style::Color;

/// Complete application theme defining all UI colors.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,

    /// Screen background behind everything.
    pub background: Color,
    /// Card face fill.
    pub card_background: Color,
    /// Card outline.
    pub card_border: Color,
    /// Card label glyphs (block font / coffee mug).
    pub card_text: Color,

    /// Dot marking the pager's current page.
    pub indicator_active: Color,
    /// All other dots.
    pub indicator_inactive: Color,
    /// Label text inside the dots.
    pub indicator_text: Color,

    /// Footer hint line.
    pub status_text: Color,
}

impl Theme {
    /// Classic dark theme with cyan accents.
    pub fn dark() -> Theme {
        Theme {
            name: "Dark".to_string(),
            description: "Dark palette with cyan accents".to_string(),
            background: Color::Rgb(18, 18, 22),
            card_background: Color::Rgb(32, 34, 40),
            card_border: Color::Cyan,
            card_text: Color::Rgb(236, 239, 244),
            indicator_active: Color::Cyan,
            indicator_inactive: Color::Rgb(70, 74, 84),
            indicator_text: Color::Rgb(18, 18, 22),
            status_text: Color::Rgb(120, 126, 140),
        }
    }

    /// Bright theme for light terminals.
    pub fn light() -> Theme {
        Theme {
            name: "Light".to_string(),
            description: "Bright palette for light terminals".to_string(),
            background: Color::Rgb(245, 245, 248),
            card_background: Color::Rgb(255, 255, 255),
            card_border: Color::Blue,
            card_text: Color::Rgb(30, 30, 40),
            indicator_active: Color::Blue,
            indicator_inactive: Color::Rgb(200, 204, 214),
            indicator_text: Color::Rgb(245, 245, 248),
            status_text: Color::Rgb(110, 116, 130),
        }
    }

    /// Maximum-contrast variant.
    pub fn high_contrast() -> Theme {
        Theme {
            name: "High Contrast".to_string(),
            description: "Pure black and white with yellow accents".to_string(),
            background: Color::Black,
            card_background: Color::Black,
            card_border: Color::White,
            card_text: Color::White,
            indicator_active: Color::Yellow,
            indicator_inactive: Color::Rgb(90, 90, 90),
            indicator_text: Color::Black,
            status_text: Color::White,
        }
    }

    /// Built-in theme names, in cycle order.
    pub fn builtin_names() -> &'static [&'static str] {
        &["dark", "light", "high-contrast"]
    }

    /// Look up a built-in theme by name; unknown names fall back to dark.
    pub fn by_name(name: &str) -> Theme {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "high_contrast" => Self::high_contrast(),
            "dark" => Self::dark(),
            other => {
                tracing::warn!("Unknown theme '{}', falling back to dark", other);
                Self::dark()
            }
        }
    }

    /// Name of the built-in theme following `name` in the cycle order.
    pub fn next_name(name: &str) -> &'static str {
        let names = Self::builtin_names();
        let idx = names
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .unwrap_or(0);
        names[(idx + 1) % names.len()]
    }
}

/// Blend `color` toward `background` by `1 - alpha`.
///
/// This is the terminal stand-in for opacity: alpha 1.0 returns the color
/// unchanged, alpha 0.0 disappears into the background.
pub fn blend_toward(color: Color, background: Color, alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    let (fr, fg, fb) = color_to_rgb(color);
    let (br, bg, bb) = color_to_rgb(background);
    let mix = |f: u8, b: u8| -> u8 { (f as f32 * a + b as f32 * (1.0 - a)).round() as u8 };
    Color::Rgb(mix(fr, br), mix(fg, bg), mix(fb, bb))
}

/// Approximate RGB components for any ratatui color.
fn color_to_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black | Color::Reset => (0, 0, 0),
        Color::Red => (205, 0, 0),
        Color::Green => (0, 205, 0),
        Color::Yellow => (205, 205, 0),
        Color::Blue => (0, 0, 238),
        Color::Magenta => (205, 0, 205),
        Color::Cyan => (0, 205, 205),
        Color::Gray => (229, 229, 229),
        Color::DarkGray => (127, 127, 127),
        Color::LightRed => (255, 0, 0),
        Color::LightGreen => (0, 255, 0),
        Color::LightYellow => (255, 255, 0),
        Color::LightBlue => (92, 92, 255),
        Color::LightMagenta => (255, 0, 255),
        Color::LightCyan => (0, 255, 255),
        Color::White => (255, 255, 255),
        Color::Indexed(_) => (128, 128, 128),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(Theme::by_name("light").name, "Light");
        assert_eq!(Theme::by_name("DARK").name, "Dark");
        assert_eq!(Theme::by_name("high-contrast").name, "High Contrast");
        // Unknown names fall back to dark rather than erroring.
        assert_eq!(Theme::by_name("mauve").name, "Dark");
    }

    #[test]
    fn test_theme_cycle() {
        assert_eq!(Theme::next_name("dark"), "light");
        assert_eq!(Theme::next_name("light"), "high-contrast");
        assert_eq!(Theme::next_name("high-contrast"), "dark");
        assert_eq!(Theme::next_name("bogus"), "light");
    }

    #[test]
    fn test_blend_endpoints() {
        let fg = Color::Rgb(200, 100, 0);
        let bg = Color::Rgb(20, 20, 20);
        assert_eq!(blend_toward(fg, bg, 1.0), Color::Rgb(200, 100, 0));
        assert_eq!(blend_toward(fg, bg, 0.0), Color::Rgb(20, 20, 20));
    }

    #[test]
    fn test_blend_midpoint() {
        let mixed = blend_toward(Color::Rgb(100, 100, 100), Color::Rgb(0, 0, 0), 0.5);
        assert_eq!(mixed, Color::Rgb(50, 50, 50));
    }

    #[test]
    fn test_blend_handles_named_colors() {
        // Named colors go through the RGB table instead of panicking.
        let mixed = blend_toward(Color::White, Color::Black, 0.5);
        assert_eq!(mixed, Color::Rgb(128, 128, 128));
    }
}
