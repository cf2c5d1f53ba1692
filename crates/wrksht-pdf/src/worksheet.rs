//! Quote to worksheet PDF.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, info};
use wrksht_core::config::Config;
use wrksht_core::models::quote::Quote;
use wrksht_core::s3_keys;
use wrksht_core::sink::OutputSink;

use crate::asset::{RemoteAsset, fetch_remote_asset};
use crate::canvas::{Align, Canvas, Cell, PAGE_COUNT_ALIAS, Rgb};
use crate::error::RenderError;
use crate::fonts::Font;
use crate::sections::{features, groups, header, other, windows};
use crate::styles::SheetStyles;

const DEFAULT_LOGO_TIMEOUT: Duration = Duration::from_secs(5);

/// The parts of the service configuration the renderer reads.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub doc_author: String,
    pub logo_uri: String,
    pub logo_timeout: Duration,
    pub styles: SheetStyles,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            doc_author: String::new(),
            logo_uri: String::new(),
            logo_timeout: DEFAULT_LOGO_TIMEOUT,
            styles: SheetStyles::default(),
        }
    }
}

impl From<&Config> for RenderSettings {
    fn from(config: &Config) -> Self {
        Self {
            doc_author: config.doc_author.clone(),
            logo_uri: config.logo_uri.clone(),
            logo_timeout: config.logo_timeout,
            styles: SheetStyles::default(),
        }
    }
}

/// Renders one quote. Build a new one per request; nothing is shared
/// between renders.
pub struct Worksheet<'a> {
    quote: &'a Quote,
    settings: &'a RenderSettings,
}

impl<'a> Worksheet<'a> {
    pub fn new(quote: &'a Quote, settings: &'a RenderSettings) -> Self {
        Self { quote, settings }
    }

    /// `worksheet/sht-<number>.pdf`
    pub fn output_name(&self) -> String {
        s3_keys::worksheet(self.quote.number)
    }

    /// Fetch the configured logo, then render. A logo that cannot be
    /// fetched is left out of the document.
    pub fn render_with_fetch(&self) -> Result<RenderedWorksheet, RenderError> {
        let logo = fetch_remote_asset(&self.settings.logo_uri, self.settings.logo_timeout);
        self.render(logo.as_ref())
    }

    /// Draw every section in order and serialize the document.
    pub fn render(&self, logo: Option<&RemoteAsset>) -> Result<RenderedWorksheet, RenderError> {
        let quote = self.quote;
        let styles = &self.settings.styles;

        let mut canvas = Canvas::letter();
        canvas.set_title(&format!("Worksheet {} PDF", quote.number));
        canvas.set_author(&self.settings.doc_author);
        canvas.register_footer(page_footer);
        canvas.add_page();

        header::render(&mut canvas, quote, logo, styles);
        groups::render(&mut canvas, &quote.items.group, styles)?;
        windows::render(&mut canvas, &quote.items.window, styles)?;
        other::render(&mut canvas, &quote.items.other, styles);
        features::render(&mut canvas, &quote.features, styles);

        let pages = canvas.page_no();
        let bytes = canvas.finalize()?;
        debug!(quote_number = quote.number, pages, len = bytes.len(), "worksheet rendered");

        Ok(RenderedWorksheet {
            name: self.output_name(),
            bytes,
        })
    }
}

fn page_footer(canvas: &mut Canvas) {
    canvas.set_y(-15.0);
    canvas.set_font(Font::italic(9.0));
    canvas.set_text_color(Rgb::BLACK);
    let text = format!("Page {} of {PAGE_COUNT_ALIAS}", canvas.page_no());
    canvas.cell_with_page_count(&Cell::new(0.0, 10.0, &text).align(Align::Center));
}

/// A finished document and the name it is stored under.
#[derive(Debug, Clone)]
pub struct RenderedWorksheet {
    name: String,
    bytes: Vec<u8>,
}

impl RenderedWorksheet {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Write the PDF to `path`, replacing any existing file.
    pub fn output_to_disk(&self, path: &Path) -> Result<(), RenderError> {
        std::fs::write(path, &self.bytes)?;
        info!(path = %path.display(), "worksheet written");
        Ok(())
    }

    /// Hand the PDF to `sink`, returning the location it reports.
    pub async fn save<S: OutputSink>(self, sink: &S) -> Result<String, RenderError> {
        let location = sink.store(&self.name, self.bytes).await?;
        info!(name = %self.name, location = %location, "worksheet stored");
        Ok(location)
    }
}
