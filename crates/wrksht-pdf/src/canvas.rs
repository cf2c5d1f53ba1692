//! Cursor-based drawing surface.
//!
//! The canvas keeps fpdf-style state (current position, font, colours,
//! margins) and records what is drawn as a display list per page. Nothing
//! is serialized until [`Canvas::finalize`], which closes the last page,
//! resolves the total-page placeholder and hands the pages to the PDF
//! writer.
//!
//! All lengths are millimetres measured from the top-left page corner.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::RenderError;
use crate::fonts::Font;
use crate::image::ImageXObject;
use crate::writer;

/// Placeholder for the total page count in text drawn with
/// [`Canvas::cell_with_page_count`]. Other text keeps it verbatim.
pub const PAGE_COUNT_ALIAS: &str = "{nb}";

pub const PT_PER_MM: f32 = 72.0 / 25.4;

const LETTER_WIDTH: f32 = 215.9;
const LETTER_HEIGHT: f32 = 279.4;
const MARGIN: f32 = 10.0;
const CELL_PADDING: f32 = MARGIN / 10.0;
const BREAK_MARGIN: f32 = 20.0;

// Underline position and thickness as fractions of the font size.
const UNDERLINE_OFFSET: f32 = 0.1;
const UNDERLINE_THICKNESS: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    pub(crate) fn components(self) -> [f32; 3] {
        [self.0, self.1, self.2].map(|c| f32::from(c) / 255.0)
    }
}

/// Which edges of a cell get a rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Border {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl Border {
    pub const NONE: Border = Border {
        left: false,
        top: false,
        right: false,
        bottom: false,
    };
    pub const ALL: Border = Border {
        left: true,
        top: true,
        right: true,
        bottom: true,
    };
    pub const BOTTOM: Border = Border {
        bottom: true,
        ..Border::NONE
    };
    pub const TOP_BOTTOM: Border = Border {
        top: true,
        bottom: true,
        ..Border::NONE
    };
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Where the cursor goes after a cell is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Advance {
    /// Stay on the line, to the right of the cell.
    #[default]
    Right,
    /// Start of the next line, at the left margin.
    NextLine,
    /// Directly below the cell, same x.
    Below,
}

/// A single-line cell. Width 0 extends to the right margin.
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a> {
    pub width: f32,
    pub height: f32,
    pub text: &'a str,
    pub border: Border,
    pub advance: Advance,
    pub align: Align,
    pub link: Option<&'a str>,
}

impl<'a> Cell<'a> {
    pub fn new(width: f32, height: f32, text: &'a str) -> Self {
        Self {
            width,
            height,
            text,
            border: Border::NONE,
            advance: Advance::Right,
            align: Align::Left,
            link: None,
        }
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn advance(mut self, advance: Advance) -> Self {
        self.advance = advance;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn link(mut self, link: &'a str) -> Self {
        self.link = Some(link);
        self
    }
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    /// Text run; `y` is the baseline. `page_count` runs have
    /// [`PAGE_COUNT_ALIAS`] substituted when the document is finalized.
    Text {
        x: f32,
        y: f32,
        font: Font,
        color: Rgb,
        text: String,
        page_count: bool,
    },
    Rule {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Rgb,
    },
    Fill {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgb,
    },
    Image {
        name: String,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkArea {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub marks: Vec<Mark>,
    pub links: Vec<LinkArea>,
}

impl Page {
    /// Text runs on this page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

type Footer = Box<dyn FnMut(&mut Canvas) + Send>;

pub struct Canvas {
    page_width: f32,
    page_height: f32,
    left_margin: f32,
    top_margin: f32,
    right_margin: f32,
    break_trigger: f32,
    x: f32,
    y: f32,
    last_height: f32,
    font: Font,
    text_color: Rgb,
    draw_color: Rgb,
    line_width: f32,
    pages: Vec<Page>,
    page_open: bool,
    in_footer: bool,
    footer: Option<Footer>,
    images: BTreeMap<String, ImageXObject>,
    error: Option<RenderError>,
    title: String,
    author: String,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::letter()
    }
}

impl Canvas {
    /// A US Letter portrait canvas with 10 mm margins.
    pub fn letter() -> Self {
        Self {
            page_width: LETTER_WIDTH,
            page_height: LETTER_HEIGHT,
            left_margin: MARGIN,
            top_margin: MARGIN,
            right_margin: MARGIN,
            break_trigger: LETTER_HEIGHT - BREAK_MARGIN,
            x: MARGIN,
            y: MARGIN,
            last_height: 0.0,
            font: Font::regular(12.0),
            text_color: Rgb::BLACK,
            draw_color: Rgb::BLACK,
            line_width: 0.2,
            pages: Vec::new(),
            page_open: false,
            in_footer: false,
            footer: None,
            images: BTreeMap::new(),
            error: None,
            title: String::new(),
            author: String::new(),
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_author(&mut self, author: &str) {
        self.author = author.to_string();
    }

    /// Register the callback that draws each page's footer. It runs once
    /// per page, right before the page is closed.
    pub fn register_footer<F>(&mut self, footer: F)
    where
        F: FnMut(&mut Canvas) + Send + 'static,
    {
        self.footer = Some(Box::new(footer));
    }

    /// Close the current page (running the footer) and start a new one
    /// with the cursor at the top-left margin.
    pub fn add_page(&mut self) {
        // The footer may change font and colours; the new page keeps the
        // caller's.
        let (font, text_color, draw_color) = (self.font, self.text_color, self.draw_color);
        if self.page_open {
            self.close_page();
        }
        self.font = font;
        self.text_color = text_color;
        self.draw_color = draw_color;
        self.pages.push(Page::default());
        self.page_open = true;
        self.x = self.left_margin;
        self.y = self.top_margin;
        self.last_height = 0.0;
    }

    fn close_page(&mut self) {
        if let Some(mut footer) = self.footer.take() {
            self.in_footer = true;
            footer(self);
            self.in_footer = false;
            self.footer = Some(footer);
        }
        self.page_open = false;
    }

    /// 1-based number of the current page, 0 before the first page.
    pub fn page_no(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    pub fn page_height(&self) -> f32 {
        self.page_height
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn font(&self) -> Font {
        self.font
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    pub fn set_text_color(&mut self, color: Rgb) {
        self.text_color = color;
    }

    pub fn set_draw_color(&mut self, color: Rgb) {
        self.draw_color = color;
    }

    /// Absolute cursor move.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Move to `y` at the left margin. Negative values count up from the
    /// bottom edge.
    pub fn set_y(&mut self, y: f32) {
        self.x = self.left_margin;
        self.y = if y >= 0.0 { y } else { self.page_height + y };
    }

    /// Line break: back to the left margin, `h` lower.
    pub fn ln(&mut self, h: f32) {
        self.x = self.left_margin;
        self.y += h;
    }

    /// Width of `text` in mm using the current font.
    pub fn string_width(&self, text: &str) -> f32 {
        self.font.string_width(text) / PT_PER_MM
    }

    fn font_height(&self) -> f32 {
        self.font.size / PT_PER_MM
    }

    /// Record the first unrecoverable failure; it surfaces from `finalize`.
    pub fn fail(&mut self, err: RenderError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    fn page_mut(&mut self, op: &'static str) -> Option<&mut Page> {
        if !self.page_open {
            self.fail(RenderError::NoPage(op));
            return None;
        }
        self.pages.last_mut()
    }

    fn push(&mut self, mark: Mark) {
        if let Some(page) = self.page_mut("drawing") {
            page.marks.push(mark);
        }
    }

    fn rule(&mut self, from: (f32, f32), to: (f32, f32)) {
        let (width, color) = (self.line_width, self.draw_color);
        self.push(Mark::Rule {
            from,
            to,
            width,
            color,
        });
    }

    fn breaks_page(&self, h: f32) -> bool {
        self.y + h > self.break_trigger && !self.in_footer && self.page_open
    }

    /// Draw a single-line cell at the cursor and advance it.
    pub fn cell(&mut self, cell: &Cell<'_>) {
        self.draw_cell(cell, false);
    }

    /// Like [`Canvas::cell`], but [`PAGE_COUNT_ALIAS`] in the text is
    /// replaced with the total page count at finalize. Meant for footers.
    pub fn cell_with_page_count(&mut self, cell: &Cell<'_>) {
        self.draw_cell(cell, true);
    }

    fn draw_cell(&mut self, cell: &Cell<'_>, page_count: bool) {
        if self.page_mut("cell").is_none() {
            return;
        }

        let h = cell.height;
        if self.breaks_page(h) {
            let x = self.x;
            self.add_page();
            self.x = x;
        }

        let w = if cell.width == 0.0 {
            self.page_width - self.right_margin - self.x
        } else {
            cell.width
        };
        let (x, y) = (self.x, self.y);

        let b = cell.border;
        if b.left {
            self.rule((x, y), (x, y + h));
        }
        if b.top {
            self.rule((x, y), (x + w, y));
        }
        if b.right {
            self.rule((x + w, y), (x + w, y + h));
        }
        if b.bottom {
            self.rule((x, y + h), (x + w, y + h));
        }

        if !cell.text.is_empty() {
            let text_width = self.string_width(cell.text);
            let dx = match cell.align {
                Align::Left => CELL_PADDING,
                Align::Center => (w - text_width) / 2.0,
                Align::Right => w - CELL_PADDING - text_width,
            };
            let font_height = self.font_height();
            let baseline = y + 0.5 * h + 0.3 * font_height;

            self.push(Mark::Text {
                x: x + dx,
                y: baseline,
                font: self.font,
                color: self.text_color,
                text: cell.text.to_string(),
                page_count,
            });
            if self.font.underline {
                self.push(Mark::Fill {
                    x: x + dx,
                    y: baseline + UNDERLINE_OFFSET * font_height,
                    w: text_width,
                    h: UNDERLINE_THICKNESS * font_height,
                    color: self.text_color,
                });
            }
            if let Some(uri) = cell.link
                && let Some(page) = self.pages.last_mut()
            {
                page.links.push(LinkArea {
                    x: x + dx,
                    y: y + 0.5 * h - 0.5 * font_height,
                    w: text_width,
                    h: font_height,
                    uri: uri.to_string(),
                });
            }
        }

        self.last_height = h;
        match cell.advance {
            Advance::Right => self.x += w,
            Advance::NextLine => {
                self.x = self.left_margin;
                self.y += h;
            }
            Advance::Below => self.y += h,
        }
    }

    /// Draw `text` wrapped to `width`, one cell per line. Embedded newlines
    /// are hard breaks. The cursor ends below the block at the left margin.
    pub fn multi_cell(&mut self, width: f32, line_height: f32, text: &str, border: Border, align: Align) {
        let w = if width == 0.0 {
            self.page_width - self.right_margin - self.x
        } else {
            width
        };
        let lines = self.wrap_lines(text, w - 2.0 * CELL_PADDING);
        let last = lines.len() - 1;

        for (i, line) in lines.iter().enumerate() {
            let line_border = Border {
                left: border.left,
                right: border.right,
                top: border.top && i == 0,
                bottom: border.bottom && i == last,
            };
            self.cell(
                &Cell::new(w, line_height, line)
                    .border(line_border)
                    .advance(Advance::Below)
                    .align(align),
            );
        }
        self.x = self.left_margin;
    }

    /// Greedy word wrap. Never returns an empty list.
    fn wrap_lines(&self, text: &str, max_width: f32) -> Vec<String> {
        let text = text.strip_suffix('\n').unwrap_or(text);
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let paragraph = paragraph.trim_end_matches('\r');
            let mut line = String::new();

            for word in paragraph.split(' ') {
                let candidate = if line.is_empty() {
                    word.to_string()
                } else {
                    format!("{line} {word}")
                };
                if self.string_width(&candidate) <= max_width {
                    line = candidate;
                    continue;
                }

                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                if self.string_width(word) <= max_width {
                    line = word.to_string();
                    continue;
                }

                // Word wider than the cell: break between characters.
                for c in word.chars() {
                    let mut next = line.clone();
                    next.push(c);
                    if !line.is_empty() && self.string_width(&next) > max_width {
                        lines.push(std::mem::take(&mut line));
                        line.push(c);
                    } else {
                        line = next;
                    }
                }
            }
            lines.push(line);
        }

        lines
    }

    /// Decode and register an image under `name` for later placement.
    /// Decode failures are recorded and fail the document at `finalize`.
    pub fn register_image(&mut self, name: &str, bytes: &[u8], mime: &str) {
        match ImageXObject::decode(bytes, mime) {
            Ok(image) => {
                self.images.insert(name.to_string(), image);
            }
            Err(e) => self.fail(e),
        }
    }

    pub fn has_image(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// Place a registered image. A zero height keeps the aspect ratio; an
    /// unregistered `name` is skipped.
    pub fn embed_image(&mut self, name: &str, x: f32, y: f32, w: f32, h: f32, link: Option<&str>) {
        let Some(image) = self.images.get(name) else {
            debug!(image = name, "image not registered, skipping placement");
            return;
        };
        let (px_w, px_h) = (image.width as f32, image.height as f32);
        let (w, h) = match (w == 0.0, h == 0.0) {
            (true, true) => (px_w / PT_PER_MM, px_h / PT_PER_MM),
            (false, true) => (w, w * px_h / px_w),
            (true, false) => (h * px_w / px_h, h),
            (false, false) => (w, h),
        };

        self.push(Mark::Image {
            name: name.to_string(),
            x,
            y,
            w,
            h,
        });
        if let Some(uri) = link
            && let Some(page) = self.page_mut("image link")
        {
            page.links.push(LinkArea {
                x,
                y,
                w,
                h,
                uri: uri.to_string(),
            });
        }
    }

    /// Serialize the document.
    ///
    /// Runs in two phases: the open page is closed (its footer drawn with
    /// the page-count placeholder), then every page-count run gets the
    /// final count and the pages are written out. A recorded
    /// failure aborts with that error and no bytes.
    pub fn finalize(mut self) -> Result<Vec<u8>, RenderError> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        if self.pages.is_empty() {
            self.add_page();
        }
        if self.page_open {
            self.close_page();
        }
        if let Some(err) = self.error.take() {
            return Err(err);
        }

        let total = self.pages.len();
        self.resolve_page_count(total);

        writer::write_pdf(&writer::DocumentInfo {
            title: &self.title,
            author: &self.author,
            page_width: self.page_width,
            page_height: self.page_height,
            pages: &self.pages,
            images: &self.images,
        })
    }

    fn resolve_page_count(&mut self, total: usize) {
        let total = total.to_string();
        for page in &mut self.pages {
            for mark in &mut page.marks {
                if let Mark::Text {
                    text,
                    page_count: true,
                    ..
                } = mark
                {
                    *text = text.replace(PAGE_COUNT_ALIAS, &total);
                }
            }
        }
    }
}
