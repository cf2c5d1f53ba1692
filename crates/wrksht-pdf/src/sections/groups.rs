use wrksht_core::models::items::Group;

use super::{
    detail_row, entry_number, label_row, rooms, section_title, spec_block, spec_block_start,
    spec_line, sub_heading, value_row,
};
use crate::canvas::Canvas;
use crate::error::RenderError;
use crate::format::{format_dims, soft_wrap};
use crate::styles::SheetStyles;

pub const TITLE: &str = "Groups";

/// Numbered group entries, each with its nested windows and specs.
pub fn render(canvas: &mut Canvas, groups: &[Group], styles: &SheetStyles) -> Result<(), RenderError> {
    if groups.is_empty() {
        return Ok(());
    }
    section_title(canvas, TITLE, styles);

    for (i, group) in groups.iter().enumerate() {
        let install_type = group.specs.text("installType")?;
        let trim = soft_wrap(group.specs.text("trim")?);
        let options = soft_wrap(group.specs.text("options")?);
        let description = group.specs.text("groupTypeDescription")?;
        let qty = group.qty.to_string();
        let room_list = rooms(&group.rooms);
        let opening = format_dims(&group.dims);

        entry_number(canvas, i + 1, styles);
        label_row(
            canvas,
            &[(7.0, "Qty"), (26.0, "Rooms"), (35.0, "Opening Width"), (45.0, "Type")],
            styles,
        );
        value_row(
            canvas,
            &[
                (7.0, qty.as_str()),
                (26.0, room_list.as_str()),
                (35.0, opening.as_str()),
                (45.0, description),
            ],
            styles,
        );

        sub_heading(canvas, "Windows", styles);
        for item in &group.items {
            let item_qty = item.qty.to_string();
            let size = format_dims(&item.dims);
            detail_row(
                canvas,
                &[
                    (7.0, item_qty.as_str()),
                    (30.0, size.as_str()),
                    (60.0, item.product.text("name")?),
                ],
            );
        }

        sub_heading(canvas, "Specifications", styles);
        spec_line(canvas, "Install Type", install_type, 60.0);
        spec_block_start(canvas);
        spec_block(canvas, "Trim", 25.0, &trim, 70.0, styles);
        spec_block_start(canvas);
        spec_block(canvas, "Options", 25.0, &options, 95.0, styles);

        canvas.ln(styles.entry_gap);
    }
    canvas.ln(styles.entry_gap);
    Ok(())
}
