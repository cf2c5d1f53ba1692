//! Raster images prepared as PDF image XObjects.
//!
//! JPEG data is embedded as-is under DCTDecode. Every other format the
//! `image` crate can read is flattened to 8-bit RGB and Flate-compressed,
//! with a separate soft mask when the source carries transparency.

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::{ColorType, ImageFormat};

use crate::error::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageEncoding {
    Dct,
    Flate,
}

#[derive(Debug, Clone)]
pub struct ImageXObject {
    pub width: u32,
    pub height: u32,
    pub encoding: ImageEncoding,
    pub(crate) color_space: &'static str,
    pub(crate) data: Vec<u8>,
    pub(crate) alpha: Option<Vec<u8>>,
}

impl ImageXObject {
    /// Decode `bytes`. `mime` picks the format when it names one we know,
    /// otherwise the format is sniffed from the data.
    pub fn decode(bytes: &[u8], mime: &str) -> Result<Self, RenderError> {
        let format = format_from_mime(mime)
            .or_else(|| image::guess_format(bytes).ok())
            .ok_or_else(|| RenderError::Image(format!("unrecognized image type {mime:?}")))?;

        let decoded = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| RenderError::Image(e.to_string()))?;
        let (width, height) = (decoded.width(), decoded.height());
        if width == 0 || height == 0 {
            return Err(RenderError::Image("image has no pixels".to_string()));
        }

        if format == ImageFormat::Jpeg {
            let color_space = match decoded.color() {
                ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16 => "DeviceGray",
                _ => "DeviceRGB",
            };
            return Ok(Self {
                width,
                height,
                encoding: ImageEncoding::Dct,
                color_space,
                data: bytes.to_vec(),
                alpha: None,
            });
        }

        let rgba = decoded.to_rgba8();
        let pixels = (width as usize) * (height as usize);
        let mut rgb = Vec::with_capacity(pixels * 3);
        let mut alpha = Vec::with_capacity(pixels);
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            rgb.extend_from_slice(&[r, g, b]);
            alpha.push(a);
        }
        let alpha = if alpha.iter().any(|&a| a != u8::MAX) {
            Some(deflate(&alpha)?)
        } else {
            None
        };

        Ok(Self {
            width,
            height,
            encoding: ImageEncoding::Flate,
            color_space: "DeviceRGB",
            data: deflate(&rgb)?,
            alpha,
        })
    }

    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }
}

fn format_from_mime(mime: &str) -> Option<ImageFormat> {
    let mime = mime.to_ascii_lowercase();
    if mime.contains("png") {
        Some(ImageFormat::Png)
    } else if mime.contains("jpeg") || mime.contains("jpg") {
        Some(ImageFormat::Jpeg)
    } else {
        None
    }
}

fn deflate(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
