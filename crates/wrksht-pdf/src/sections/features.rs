use crate::canvas::{Align, Border, Canvas};
use crate::fonts::Font;
use crate::format::soft_wrap;
use crate::styles::SheetStyles;

use super::section_title;

pub const TITLE: &str = "Job Features";

/// Job sheet feature text under its own heading, if there is any.
pub fn render(canvas: &mut Canvas, features: &str, styles: &SheetStyles) {
    if features.is_empty() {
        return;
    }
    section_title(canvas, TITLE, styles);
    canvas.set_font(Font::regular(styles.body_size));
    canvas.multi_cell(
        70.0,
        styles.wrap_line_height,
        &soft_wrap(features),
        Border::NONE,
        Align::Left,
    );
}
