#![allow(dead_code)]

use std::io::Cursor;

use lopdf::content::Content;
use lopdf::{Document, Object};
use wrksht_core::models::customer::{Address, Customer, PersonName, Phone};
use wrksht_core::models::dims::{Dim, Dims};
use wrksht_core::models::items::{Group, GroupWindow, Items, Other, OtherSpecs, Window};
use wrksht_core::models::quote::Quote;
use wrksht_core::models::spec::SpecMap;

pub fn customer() -> Customer {
    let mut customer = Customer {
        name: PersonName {
            first: "Jane".to_string(),
            last: "Doe".to_string(),
            spouse: None,
        },
        email: "jane@example.com".to_string(),
        notes: "Side door access".to_string(),
        address: Address {
            associate: "customer".to_string(),
            street1: "12 Main St".to_string(),
            city: "Welland".to_string(),
            province: "ON".to_string(),
            postal_code: "L3B 1A1".to_string(),
        },
        phones: vec![Phone {
            kind: "mobile".to_string(),
            number: "905-555-0101".to_string(),
            country_code: String::new(),
        }],
        ..Default::default()
    };
    customer.index_phones();
    customer
}

/// A quote with no line items and no features.
pub fn empty_quote(number: u64) -> Quote {
    Quote {
        id: "5ccc90913c4a256251cf326b".to_string(),
        number,
        created_at: jiff::Timestamp::UNIX_EPOCH,
        updated_at: jiff::Timestamp::UNIX_EPOCH,
        customer: customer(),
        jobsheet_id: String::new(),
        features: String::new(),
        items: Items::default(),
    }
}

/// Two kitchen/den units sharing a 12 1/4 x 24 opening.
pub fn kitchen_group() -> Group {
    Group {
        dims: Dims::new(Dim::new(12, "1/4"), Dim::new(24, "")),
        items: vec![GroupWindow {
            dims: Dims::new(Dim::new(6, "1/8"), Dim::new(24, "")),
            product: SpecMap::new().with_text("name", "Slider"),
            qty: 1,
            specs: SpecMap::new(),
        }],
        specs: SpecMap::new()
            .with_text("installType", "Retrofit")
            .with_text("groupTypeDescription", "Twin slider")
            .with_text("options", "Low-E glass, Argon fill, Grids between glass"),
        qty: 2,
        rooms: vec!["Kitchen".to_string(), "Den".to_string()],
    }
}

pub fn bay_window() -> Window {
    Window {
        dims: Dims::new(Dim::new(48, ""), Dim::new(60, "1/2")),
        qty: 1,
        product_id: "p-100".to_string(),
        product_name: "Bay".to_string(),
        rooms: vec!["Living".to_string()],
        specs: SpecMap::new().with_text("trim", "Brick mould"),
    }
}

pub fn screen_item() -> Other {
    Other {
        description: "Screen repair".to_string(),
        qty: 3,
        rooms: vec!["Patio".to_string()],
        specs: OtherSpecs {
            options: "Fibreglass mesh".to_string(),
            location: None,
        },
    }
}

pub fn full_quote(number: u64) -> Quote {
    let mut quote = empty_quote(number);
    quote.items.group.push(kitchen_group());
    quote.items.window.push(bay_window());
    quote.items.other.push(screen_item());
    quote.features = "Capping, Caulking, Disposal of old windows".to_string();
    quote
}

/// Text drawn on each page of a PDF, in content stream order.
pub fn page_texts(pdf: &[u8]) -> Vec<Vec<String>> {
    let doc = Document::load_mem(pdf).expect("parse pdf");
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let data = doc.get_page_content(page_id).expect("page content");
            let content = Content::decode(&data).expect("decode content");
            content
                .operations
                .iter()
                .filter(|op| op.operator == "Tj")
                .filter_map(|op| match op.operands.first() {
                    Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

pub fn all_texts(pdf: &[u8]) -> Vec<String> {
    page_texts(pdf).into_iter().flatten().collect()
}

/// A small PNG, half of it transparent.
pub fn png_logo() -> Vec<u8> {
    let mut img = image::RgbaImage::new(4, 2);
    for (x, _, pixel) in img.enumerate_pixels_mut() {
        let alpha = if x < 2 { 255 } else { 0 };
        *pixel = image::Rgba([10, 20, 200, alpha]);
    }
    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}
