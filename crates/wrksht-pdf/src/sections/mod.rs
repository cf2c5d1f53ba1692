//! One renderer per worksheet section.
//!
//! Each renderer draws at the shared canvas cursor and skips itself when
//! its slice of the quote is empty. They run in a fixed order: header,
//! groups, windows, misc items, job features.

pub mod features;
pub mod groups;
pub mod header;
pub mod other;
pub mod windows;

use crate::canvas::{Advance, Align, Border, Canvas, Cell, Rgb};
use crate::fonts::Font;
use crate::styles::{RULE_DARK, RULE_LIGHT, SheetStyles};

const LABEL_HEIGHT: f32 = 5.0;
const ROW_HEIGHT: f32 = 6.0;
/// Indent of an entry's rows from the left margin.
const ROW_INDENT: f32 = 4.0;
/// Indent of nested rows (group windows, spec lines).
const DETAIL_INDENT: f32 = 8.0;
/// Vertical gap before a sub-heading or spec block.
const BLOCK_GAP: f32 = 2.0;

/// Bold heading with a dark rule underneath.
pub(crate) fn section_title(canvas: &mut Canvas, title: &str, styles: &SheetStyles) {
    canvas.set_draw_color(RULE_DARK);
    canvas.set_text_color(Rgb::BLACK);
    canvas.set_font(Font::bold(styles.section_size));
    canvas.cell(&Cell::new(0.0, ROW_HEIGHT, title).border(Border::BOTTOM));
    canvas.ln(styles.section_gap);
}

/// "1)", "2)", ... on its own line.
pub(crate) fn entry_number(canvas: &mut Canvas, n: usize, styles: &SheetStyles) {
    canvas.set_font(Font::bold(styles.body_size));
    canvas.cell(&Cell::new(0.0, ROW_HEIGHT, &format!("{n})")).advance(Advance::NextLine));
    canvas.set_draw_color(RULE_LIGHT);
}

pub(crate) fn offset(canvas: &mut Canvas, dx: f32, dy: f32) {
    canvas.move_to(canvas.x() + dx, canvas.y() + dy);
}

/// Small column labels above an entry's value row.
pub(crate) fn label_row(canvas: &mut Canvas, columns: &[(f32, &str)], styles: &SheetStyles) {
    canvas.set_font(Font::regular(styles.label_size));
    offset(canvas, ROW_INDENT, 0.0);
    row(canvas, columns, LABEL_HEIGHT, Border::NONE);
}

/// An entry's values, ruled above and below.
pub(crate) fn value_row(canvas: &mut Canvas, columns: &[(f32, &str)], styles: &SheetStyles) {
    canvas.set_font(Font::regular(styles.body_size));
    offset(canvas, ROW_INDENT, 0.0);
    row(canvas, columns, ROW_HEIGHT, Border::TOP_BOTTOM);
}

/// One nested row with a bottom rule.
pub(crate) fn detail_row(canvas: &mut Canvas, columns: &[(f32, &str)]) {
    offset(canvas, DETAIL_INDENT, 0.0);
    row(canvas, columns, ROW_HEIGHT, Border::BOTTOM);
}

fn row(canvas: &mut Canvas, columns: &[(f32, &str)], height: f32, border: Border) {
    let last = columns.len().saturating_sub(1);
    for (i, &(width, text)) in columns.iter().enumerate() {
        let advance = if i == last {
            Advance::NextLine
        } else {
            Advance::Right
        };
        canvas.cell(&Cell::new(width, height, text).border(border).advance(advance));
    }
}

/// "Windows", "Specifications": a small label introducing nested rows.
pub(crate) fn sub_heading(canvas: &mut Canvas, text: &str, styles: &SheetStyles) {
    offset(canvas, ROW_INDENT, BLOCK_GAP);
    canvas.set_font(Font::regular(styles.label_size));
    canvas.cell(&Cell::new(5.0, ROW_HEIGHT, text).advance(Advance::NextLine));
    canvas.set_font(Font::regular(styles.body_size));
}

/// A spec label followed by a single-line value.
pub(crate) fn spec_line(canvas: &mut Canvas, label: &str, value: &str, value_width: f32) {
    offset(canvas, DETAIL_INDENT, 0.0);
    canvas.cell(&Cell::new(25.0, ROW_HEIGHT, label));
    canvas.cell(&Cell::new(value_width, ROW_HEIGHT, value).advance(Advance::NextLine));
}

/// A spec label followed by pre-wrapped text, one item per line.
pub(crate) fn spec_block(
    canvas: &mut Canvas,
    label: &str,
    label_width: f32,
    text: &str,
    width: f32,
    styles: &SheetStyles,
) {
    canvas.cell(&Cell::new(label_width, ROW_HEIGHT, label));
    canvas.multi_cell(width, styles.wrap_line_height, text, Border::NONE, Align::Left);
}

/// Start a spec block below the previous line, leaving a small gap.
pub(crate) fn spec_block_start(canvas: &mut Canvas) {
    offset(canvas, DETAIL_INDENT, BLOCK_GAP);
}

pub(crate) fn rooms(rooms: &[String]) -> String {
    rooms.join(", ")
}
