//! Serializes recorded canvas pages into a PDF file with lopdf.
//!
//! Content streams are written uncompressed; the worksheet pages are small
//! and the text stays greppable in the output.

use std::collections::BTreeMap;

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};

use crate::canvas::{LinkArea, Mark, PT_PER_MM, Page, Rgb};
use crate::error::RenderError;
use crate::fonts::{FontFace, encode_win_ansi};
use crate::image::{ImageEncoding, ImageXObject};

const PRODUCER: &str = "wrksht-pdf";

pub(crate) struct DocumentInfo<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub page_width: f32,
    pub page_height: f32,
    pub pages: &'a [Page],
    pub images: &'a BTreeMap<String, ImageXObject>,
}

pub(crate) fn write_pdf(info: &DocumentInfo<'_>) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for face in FontFace::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(face.resource_name(), font_id);
    }

    let mut xobjects = Dictionary::new();
    let mut image_names = BTreeMap::new();
    for (i, (name, image)) in info.images.iter().enumerate() {
        let resource = format!("I{}", i + 1);
        let image_id = add_image(&mut doc, image);
        xobjects.set(resource.as_bytes().to_vec(), image_id);
        image_names.insert(name.as_str(), resource);
    }

    let mut resources = dictionary! { "Font" => fonts };
    if !xobjects.is_empty() {
        resources.set("XObject", xobjects);
    }
    let resources_id = doc.add_object(resources);

    let page = PageGeometry {
        height: info.page_height,
    };
    let media_box = vec![
        0.into(),
        0.into(),
        (info.page_width * PT_PER_MM).into(),
        (info.page_height * PT_PER_MM).into(),
    ];

    let mut kids = Vec::with_capacity(info.pages.len());
    for recorded in info.pages {
        let content = Content {
            operations: page.operations(&recorded.marks, &image_names),
        };
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => media_box.clone(),
            "Contents" => content_id,
            "Resources" => resources_id,
        };
        if !recorded.links.is_empty() {
            let annots: Vec<Object> = recorded
                .links
                .iter()
                .map(|link| doc.add_object(page.link_annotation(link)).into())
                .collect();
            page_dict.set("Annots", annots);
        }
        kids.push(Object::from(doc.add_object(page_dict)));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(dictionary! {
        "Title" => text_string(info.title),
        "Author" => text_string(info.author),
        "Producer" => text_string(PRODUCER),
    });
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn text_string(text: &str) -> Object {
    Object::String(encode_win_ansi(text), StringFormat::Literal)
}

fn add_image(doc: &mut Document, image: &ImageXObject) -> ObjectId {
    let mut dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => i64::from(image.width),
        "Height" => i64::from(image.height),
        "ColorSpace" => image.color_space,
        "BitsPerComponent" => 8,
    };
    dict.set(
        "Filter",
        match image.encoding {
            ImageEncoding::Dct => "DCTDecode",
            ImageEncoding::Flate => "FlateDecode",
        },
    );

    if let Some(alpha) = &image.alpha {
        let smask_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(image.width),
                "Height" => i64::from(image.height),
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
                "Filter" => "FlateDecode",
            },
            alpha.clone(),
        ));
        dict.set("SMask", smask_id);
    }

    doc.add_object(Stream::new(dict, image.data.clone()))
}

/// Converts top-left millimetre coordinates to PDF user space.
struct PageGeometry {
    height: f32,
}

impl PageGeometry {
    fn x(&self, x: f32) -> f32 {
        x * PT_PER_MM
    }

    fn y(&self, y: f32) -> f32 {
        (self.height - y) * PT_PER_MM
    }

    fn operations(&self, marks: &[Mark], images: &BTreeMap<&str, String>) -> Vec<Operation> {
        let mut ops = Vec::new();
        for mark in marks {
            match mark {
                Mark::Text {
                    x,
                    y,
                    font,
                    color,
                    text,
                    ..
                } => {
                    ops.push(Operation::new("q", vec![]));
                    ops.push(color_op("rg", *color));
                    ops.push(Operation::new("BT", vec![]));
                    ops.push(Operation::new(
                        "Tf",
                        vec![font.face.resource_name().into(), font.size.into()],
                    ));
                    ops.push(Operation::new("Td", vec![self.x(*x).into(), self.y(*y).into()]));
                    ops.push(Operation::new("Tj", vec![text_string(text)]));
                    ops.push(Operation::new("ET", vec![]));
                    ops.push(Operation::new("Q", vec![]));
                }
                Mark::Rule {
                    from,
                    to,
                    width,
                    color,
                } => {
                    ops.push(Operation::new("q", vec![]));
                    ops.push(Operation::new("w", vec![(width * PT_PER_MM).into()]));
                    ops.push(color_op("RG", *color));
                    ops.push(Operation::new("m", vec![self.x(from.0).into(), self.y(from.1).into()]));
                    ops.push(Operation::new("l", vec![self.x(to.0).into(), self.y(to.1).into()]));
                    ops.push(Operation::new("S", vec![]));
                    ops.push(Operation::new("Q", vec![]));
                }
                Mark::Fill { x, y, w, h, color } => {
                    ops.push(Operation::new("q", vec![]));
                    ops.push(color_op("rg", *color));
                    ops.push(Operation::new(
                        "re",
                        vec![
                            self.x(*x).into(),
                            self.y(y + h).into(),
                            (w * PT_PER_MM).into(),
                            (h * PT_PER_MM).into(),
                        ],
                    ));
                    ops.push(Operation::new("f", vec![]));
                    ops.push(Operation::new("Q", vec![]));
                }
                Mark::Image { name, x, y, w, h } => {
                    let Some(resource) = images.get(name.as_str()) else {
                        continue;
                    };
                    ops.push(Operation::new("q", vec![]));
                    ops.push(Operation::new(
                        "cm",
                        vec![
                            (w * PT_PER_MM).into(),
                            0.into(),
                            0.into(),
                            (h * PT_PER_MM).into(),
                            self.x(*x).into(),
                            self.y(y + h).into(),
                        ],
                    ));
                    ops.push(Operation::new(
                        "Do",
                        vec![Object::Name(resource.as_bytes().to_vec())],
                    ));
                    ops.push(Operation::new("Q", vec![]));
                }
            }
        }
        ops
    }

    fn link_annotation(&self, link: &LinkArea) -> Dictionary {
        let rect: Vec<Object> = vec![
            self.x(link.x).into(),
            self.y(link.y + link.h).into(),
            self.x(link.x + link.w).into(),
            self.y(link.y).into(),
        ];
        dictionary! {
            "Type" => "Annot",
            "Subtype" => "Link",
            "Rect" => rect,
            "Border" => vec![0.into(), 0.into(), 0.into()],
            "A" => dictionary! {
                "S" => "URI",
                "URI" => Object::String(link.uri.as_bytes().to_vec(), StringFormat::Literal),
            },
        }
    }
}

fn color_op(operator: &str, color: Rgb) -> Operation {
    let [r, g, b] = color.components();
    Operation::new(operator, vec![r.into(), g.into(), b.into()])
}
