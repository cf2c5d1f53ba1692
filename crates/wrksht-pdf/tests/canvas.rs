mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use wrksht_pdf::canvas::{Advance, Align, Border, Canvas, Cell, Mark, PAGE_COUNT_ALIAS};
use wrksht_pdf::error::RenderError;
use wrksht_pdf::fonts::Font;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn page_canvas() -> Canvas {
    let mut canvas = Canvas::letter();
    canvas.add_page();
    canvas
}

#[test]
fn add_page_starts_at_top_left_margin() {
    let mut canvas = page_canvas();
    canvas.move_to(80.0, 120.0);
    canvas.add_page();
    assert_eq!(canvas.page_no(), 2);
    assert!(approx(canvas.x(), 10.0));
    assert!(approx(canvas.y(), 10.0));
}

#[test]
fn cell_advance_modes() {
    let mut canvas = page_canvas();

    canvas.cell(&Cell::new(20.0, 6.0, "a"));
    assert!(approx(canvas.x(), 30.0));
    assert!(approx(canvas.y(), 10.0));

    canvas.cell(&Cell::new(20.0, 6.0, "b").advance(Advance::Below));
    assert!(approx(canvas.x(), 30.0));
    assert!(approx(canvas.y(), 16.0));

    canvas.cell(&Cell::new(20.0, 6.0, "c").advance(Advance::NextLine));
    assert!(approx(canvas.x(), 10.0));
    assert!(approx(canvas.y(), 22.0));
}

#[test]
fn zero_width_cell_fills_to_right_margin() {
    let mut canvas = page_canvas();
    canvas.move_to(50.0, 10.0);
    canvas.cell(&Cell::new(0.0, 6.0, "").border(Border::BOTTOM));

    let rule = canvas.pages()[0]
        .marks
        .iter()
        .find_map(|m| match m {
            Mark::Rule { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .expect("bottom rule");
    assert!(approx(rule.0.0, 50.0));
    assert!(approx(rule.1.0, canvas.page_width() - 10.0));
    assert!(approx(rule.0.1, 16.0));
}

#[test]
fn full_border_draws_four_rules() {
    let mut canvas = page_canvas();
    canvas.cell(&Cell::new(30.0, 6.0, "boxed").border(Border::ALL));
    let rules = canvas.pages()[0]
        .marks
        .iter()
        .filter(|m| matches!(m, Mark::Rule { .. }))
        .count();
    assert_eq!(rules, 4);
}

#[test]
fn text_is_padded_and_aligned() {
    let mut canvas = page_canvas();
    canvas.set_font(Font::regular(10.0));
    let width = canvas.string_width("Total");

    canvas.cell(&Cell::new(40.0, 6.0, "Total").advance(Advance::NextLine));
    canvas.cell(&Cell::new(40.0, 6.0, "Total").align(Align::Right).advance(Advance::NextLine));
    canvas.cell(&Cell::new(40.0, 6.0, "Total").align(Align::Center));

    let xs: Vec<f32> = canvas.pages()[0]
        .marks
        .iter()
        .filter_map(|m| match m {
            Mark::Text { x, .. } => Some(*x),
            _ => None,
        })
        .collect();
    assert!(approx(xs[0], 11.0));
    assert!(approx(xs[1], 10.0 + 40.0 - 1.0 - width));
    assert!(approx(xs[2], 10.0 + (40.0 - width) / 2.0));
}

#[test]
fn set_y_counts_negative_values_from_the_bottom() {
    let mut canvas = page_canvas();
    canvas.move_to(100.0, 50.0);
    canvas.set_y(-15.0);
    assert!(approx(canvas.y(), canvas.page_height() - 15.0));
    assert!(approx(canvas.x(), 10.0));
}

#[test]
fn ln_returns_to_left_margin() {
    let mut canvas = page_canvas();
    canvas.move_to(90.0, 40.0);
    canvas.ln(9.0);
    assert!(approx(canvas.x(), 10.0));
    assert!(approx(canvas.y(), 49.0));
}

#[test]
fn multi_cell_honours_hard_breaks() {
    let mut canvas = page_canvas();
    canvas.move_to(40.0, 20.0);
    canvas.multi_cell(70.0, 4.5, "Low-E glass\nArgon fill\nGrids", Border::NONE, Align::Left);

    let texts: Vec<&str> = canvas.pages()[0].texts().collect();
    assert_eq!(texts, ["Low-E glass", "Argon fill", "Grids"]);
    assert!(approx(canvas.y(), 20.0 + 3.0 * 4.5));
    assert!(approx(canvas.x(), 10.0));
}

#[test]
fn multi_cell_wraps_long_lines_within_width() {
    let mut canvas = page_canvas();
    canvas.set_font(Font::regular(10.0));
    let text = "Customer prefers morning appointments only please";
    canvas.multi_cell(30.0, 4.5, text, Border::NONE, Align::Left);

    let lines: Vec<String> = canvas.pages()[0].texts().map(str::to_string).collect();
    assert!(lines.len() > 1);
    assert_eq!(lines.join(" "), text);
    for line in &lines {
        assert!(canvas.string_width(line) <= 28.0 + 1e-3, "{line:?} overflows");
    }
}

#[test]
fn multi_cell_with_empty_text_still_takes_a_line() {
    let mut canvas = page_canvas();
    canvas.multi_cell(70.0, 4.5, "", Border::NONE, Align::Left);
    assert!(approx(canvas.y(), 14.5));
    assert_eq!(canvas.pages()[0].texts().count(), 0);
}

#[test]
fn automatic_page_break_keeps_x() {
    let mut canvas = page_canvas();
    canvas.move_to(50.0, 255.0);
    canvas.cell(&Cell::new(20.0, 10.0, "carried"));

    assert_eq!(canvas.page_no(), 2);
    assert!(approx(canvas.x(), 70.0));
    assert!(approx(canvas.y(), 10.0));
    assert_eq!(canvas.pages()[0].texts().count(), 0);
    assert_eq!(canvas.pages()[1].texts().collect::<Vec<_>>(), ["carried"]);
}

#[test]
fn footer_runs_once_per_page_without_breaking() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut canvas = Canvas::letter();
    canvas.register_footer(move |c: &mut Canvas| {
        counter.fetch_add(1, Ordering::SeqCst);
        c.set_y(-15.0);
        c.cell_with_page_count(&Cell::new(
            0.0,
            10.0,
            &format!("Page {} of {PAGE_COUNT_ALIAS}", c.page_no()),
        ));
    });
    canvas.add_page();
    for i in 0..30 {
        canvas.cell(&Cell::new(0.0, 10.0, &format!("row {i}")).advance(Advance::NextLine));
    }
    assert_eq!(canvas.page_no(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let pdf = canvas.finalize().expect("finalize");
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    let pages = common::page_texts(&pdf);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].last().map(String::as_str), Some("Page 1 of 2"));
    assert_eq!(pages[1].last().map(String::as_str), Some("Page 2 of 2"));
}

#[test]
fn page_count_alias_in_plain_cells_is_kept() {
    let mut canvas = Canvas::letter();
    canvas.register_footer(|c: &mut Canvas| {
        c.set_y(-15.0);
        c.cell_with_page_count(&Cell::new(0.0, 10.0, &format!("of {PAGE_COUNT_ALIAS}")));
    });
    canvas.add_page();
    canvas.cell(&Cell::new(0.0, 10.0, "Ref {nb} per site plan").advance(Advance::NextLine));
    canvas.multi_cell(60.0, 5.0, "Unit {nb}", Border::NONE, Align::Left);

    let pdf = canvas.finalize().expect("finalize");
    let texts = common::page_texts(&pdf).remove(0);
    assert_eq!(texts, ["Ref {nb} per site plan", "Unit {nb}", "of 1"]);
}

#[test]
fn footer_does_not_leak_font_into_next_page() {
    let mut canvas = Canvas::letter();
    canvas.register_footer(|c: &mut Canvas| c.set_font(Font::italic(9.0)));
    canvas.add_page();
    canvas.set_font(Font::bold(12.0));
    canvas.add_page();
    assert_eq!(canvas.font(), Font::bold(12.0));
}

#[test]
fn finalize_without_pages_emits_one_blank_page() {
    let pdf = Canvas::letter().finalize().expect("finalize");
    assert!(pdf.starts_with(b"%PDF-"));
    assert_eq!(common::page_texts(&pdf), vec![Vec::<String>::new()]);
}

#[test]
fn drawing_before_a_page_fails_at_finalize() {
    let mut canvas = Canvas::letter();
    canvas.cell(&Cell::new(10.0, 5.0, "orphan"));
    assert!(canvas.has_error());
    assert!(matches!(canvas.finalize(), Err(RenderError::NoPage(_))));
}

#[test]
fn unregistered_image_is_skipped() {
    let mut canvas = page_canvas();
    canvas.embed_image("logo", 160.0, 10.0, 45.0, 0.0, Some("https://example.com"));
    assert!(canvas.pages()[0].marks.is_empty());
    assert!(canvas.pages()[0].links.is_empty());
    assert!(canvas.finalize().is_ok());
}

#[test]
fn registered_image_keeps_aspect_ratio() {
    let mut canvas = page_canvas();
    canvas.register_image("logo", &common::png_logo(), "image/png");
    assert!(canvas.has_image("logo"));
    canvas.embed_image("logo", 160.0, 10.0, 45.0, 0.0, Some("https://example.com"));

    let page = &canvas.pages()[0];
    match &page.marks[0] {
        Mark::Image { w, h, .. } => {
            assert!(approx(*w, 45.0));
            assert!(approx(*h, 22.5));
        }
        other => panic!("expected image, got {other:?}"),
    }
    assert_eq!(page.links.len(), 1);

    let pdf = canvas.finalize().expect("finalize");
    let doc = lopdf::Document::load_mem(&pdf).expect("parse");
    let page_id = *doc.get_pages().values().next().expect("page");
    let page = doc.get_dictionary(page_id).expect("page dict");
    let annots = page.get(b"Annots").and_then(|a| a.as_array()).expect("annots");
    assert_eq!(annots.len(), 1);
}

#[test]
fn undecodable_image_fails_the_document() {
    let mut canvas = page_canvas();
    canvas.register_image("logo", b"definitely not a png", "image/png");
    assert!(!canvas.has_image("logo"));
    assert!(matches!(canvas.finalize(), Err(RenderError::Image(_))));
}

#[test]
fn link_cell_adds_annotation_over_text() {
    let mut canvas = page_canvas();
    canvas.set_font(Font::regular(12.0).underlined());
    canvas.cell(&Cell::new(0.0, 5.5, "jane@example.com").link("mailto:jane@example.com"));

    let page = &canvas.pages()[0];
    assert_eq!(page.links.len(), 1);
    assert_eq!(page.links[0].uri, "mailto:jane@example.com");
    assert!(page.marks.iter().any(|m| matches!(m, Mark::Fill { .. })));
}
