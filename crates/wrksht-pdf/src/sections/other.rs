use wrksht_core::models::items::Other;

use super::{
    DETAIL_INDENT, entry_number, label_row, offset, rooms, section_title, spec_block, sub_heading,
    value_row,
};
use crate::canvas::Canvas;
use crate::format::soft_wrap;
use crate::styles::SheetStyles;

pub const TITLE: &str = "Misc Items";

/// Numbered miscellaneous line items with their options.
pub fn render(canvas: &mut Canvas, items: &[Other], styles: &SheetStyles) {
    if items.is_empty() {
        return;
    }
    section_title(canvas, TITLE, styles);

    for (i, item) in items.iter().enumerate() {
        let qty = item.qty.to_string();
        let room_list = rooms(&item.rooms);

        entry_number(canvas, i + 1, styles);
        label_row(canvas, &[(7.0, "Qty"), (26.0, "Rooms"), (35.0, "Description")], styles);
        value_row(
            canvas,
            &[
                (7.0, qty.as_str()),
                (26.0, room_list.as_str()),
                (60.0, item.description.as_str()),
            ],
            styles,
        );

        sub_heading(canvas, "Specifications", styles);
        offset(canvas, DETAIL_INDENT, 0.0);
        spec_block(canvas, "Options", 30.0, &soft_wrap(&item.specs.options), 70.0, styles);

        canvas.ln(styles.entry_gap);
    }
    canvas.ln(styles.entry_gap);
}
