use crate::canvas::Rgb;

/// Link text.
pub const LINK_BLUE: Rgb = Rgb(0, 0, 200);
/// Section heading underline.
pub const RULE_DARK: Rgb = Rgb(100, 100, 100);
/// Row borders inside an entry.
pub const RULE_LIGHT: Rgb = Rgb(200, 200, 200);

/// Sizes and spacing shared by the worksheet sections.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStyles {
    /// Column label size in points ("Qty", "Rooms", ...).
    pub label_size: f32,

    /// Body text size in points.
    pub body_size: f32,

    /// Section heading size in points ("Groups", "Windows", ...).
    pub section_size: f32,

    /// Document title size in points.
    pub title_size: f32,

    /// Gap below a section heading, in mm.
    pub section_gap: f32,

    /// Gap after each numbered entry and after each section, in mm.
    pub entry_gap: f32,

    /// Line height used for wrapped spec text, in mm.
    pub wrap_line_height: f32,
}

impl Default for SheetStyles {
    fn default() -> Self {
        Self {
            label_size: 8.5,
            body_size: 10.0,
            section_size: 12.0,
            title_size: 14.0,
            section_gap: 9.0,
            entry_gap: 4.0,
            wrap_line_height: 4.5,
        }
    }
}

/// Fixed company contact block printed in the header.
pub mod company {
    pub const STREET: &str = "2514 Hwy 20 E";
    pub const CITY: &str = "Welland";
    pub const PROVINCE: &str = "Ontario";
    pub const POSTAL: &str = "L3B 5N5";
    pub const DOMAIN: &str = "universalwindows.ca";

    pub fn site_url() -> String {
        format!("https://{DOMAIN}")
    }
}
