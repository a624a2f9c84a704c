//! Font descriptor for text labels.

/// Default family for new text labels; Pango resolves it to the platform sans-serif.
pub const DEFAULT_FONT_FAMILY: &str = "Sans";

/// Default point size for new text labels.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Font configuration for text rendering.
///
/// Describes which font a text label uses: family name, weight and style. Text
/// labels carry their own descriptor so later font changes never restyle labels
/// that are already on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "DejaVu Serif")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::with_family(DEFAULT_FONT_FAMILY)
    }
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    /// Creates a plain (normal weight, upright) descriptor for `family`.
    pub fn with_family(family: &str) -> Self {
        Self {
            family: family.to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
        }
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size"
    /// Example: "Sans 16" or "Monospace Italic Bold 24"
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];

        if !self.style.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.style));
        }

        if !self.weight.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}", size.round() as i32));

        parts.join(" ")
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
