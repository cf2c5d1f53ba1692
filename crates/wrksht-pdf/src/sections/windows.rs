use wrksht_core::models::items::Window;

use super::{
    entry_number, label_row, rooms, section_title, spec_block, spec_block_start, spec_line,
    sub_heading, value_row,
};
use crate::canvas::Canvas;
use crate::error::RenderError;
use crate::format::{format_dims, soft_wrap};
use crate::styles::SheetStyles;

pub const TITLE: &str = "Windows";

/// Numbered standalone windows. Same shape as a group entry without the
/// nested window rows; the product name goes in the type column.
pub fn render(canvas: &mut Canvas, windows: &[Window], styles: &SheetStyles) -> Result<(), RenderError> {
    if windows.is_empty() {
        return Ok(());
    }
    section_title(canvas, TITLE, styles);

    for (i, window) in windows.iter().enumerate() {
        let install_type = window.specs.text("installType")?;
        let trim = soft_wrap(window.specs.text("trim")?);
        let options = soft_wrap(window.specs.text("options")?);
        let qty = window.qty.to_string();
        let room_list = rooms(&window.rooms);
        let size = format_dims(&window.dims);

        entry_number(canvas, i + 1, styles);
        label_row(
            canvas,
            &[(7.0, "Qty"), (26.0, "Rooms"), (35.0, "Size"), (45.0, "Type")],
            styles,
        );
        value_row(
            canvas,
            &[
                (7.0, qty.as_str()),
                (26.0, room_list.as_str()),
                (35.0, size.as_str()),
                (60.0, window.product_name.as_str()),
            ],
            styles,
        );

        sub_heading(canvas, "Specifications", styles);
        spec_line(canvas, "Install Type", install_type, 95.0);
        spec_block_start(canvas);
        spec_block(canvas, "Trim", 25.0, &trim, 70.0, styles);
        spec_block_start(canvas);
        spec_block(canvas, "Options", 25.0, &options, 95.0, styles);

        canvas.ln(styles.entry_gap);
    }
    canvas.ln(styles.entry_gap);
    Ok(())
}
