//! Title block: customer contact details on the left, the quote number in
//! the middle, the company logo and address on the right, then the
//! customer notes across the page.

use wrksht_core::models::quote::Quote;

use crate::asset::RemoteAsset;
use crate::canvas::{Advance, Canvas, Cell, Rgb};
use crate::fonts::Font;
use crate::styles::{LINK_BLUE, SheetStyles, company};

/// Image name the logo is registered under.
pub const LOGO: &str = "logo";

const CONTACT_LINE: f32 = 5.5;
const COMPANY_LINE: f32 = 5.0;

pub fn render(canvas: &mut Canvas, quote: &Quote, logo: Option<&RemoteAsset>, styles: &SheetStyles) {
    let customer = &quote.customer;
    let address = &customer.address;

    if let Some(asset) = logo {
        canvas.register_image(LOGO, &asset.bytes, &asset.mime);
    }

    canvas.set_text_color(Rgb::BLACK);
    canvas.set_font(Font::bold(styles.title_size));
    canvas.cell(&Cell::new(0.0, 6.0, "Worksheet").advance(Advance::Below));

    canvas.set_font(Font::regular(12.0));
    let mut contact = vec![
        customer.full_name(),
        address.street1.clone(),
        format!("{}, {}. {}", address.city, address.province, address.postal_code),
    ];
    if let Some(mobile) = customer.phone("mobile") {
        contact.push(format!("Mobile {mobile}"));
    }
    if let Some(home) = customer.phone("home") {
        contact.push(format!("Home {home}"));
    }
    for line in &contact {
        canvas.cell(&Cell::new(0.0, CONTACT_LINE, line).advance(Advance::Below));
    }

    if !customer.email.is_empty() {
        let mailto = format!("mailto:{}", customer.email);
        canvas.set_text_color(LINK_BLUE);
        canvas.set_font(Font::regular(12.0).underlined());
        canvas.cell(
            &Cell::new(0.0, CONTACT_LINE, &customer.email)
                .advance(Advance::Below)
                .link(&mailto),
        );
    }

    canvas.move_to(90.0, 10.0);
    canvas.set_text_color(Rgb::BLACK);
    canvas.set_font(Font::bold(12.0));
    canvas.cell(&Cell::new(0.0, 6.0, "Invoice No").advance(Advance::Below));
    canvas.set_font(Font::regular(12.0));
    canvas.cell(&Cell::new(0.0, 7.0, &quote.number.to_string()).advance(Advance::Below));

    let site = company::site_url();
    if canvas.has_image(LOGO) {
        canvas.embed_image(LOGO, 160.0, 10.0, 45.0, 0.0, Some(&site));
    }

    canvas.move_to(160.0, 30.0);
    canvas.set_font(Font::regular(styles.body_size));
    let locality = format!("{}, {} {}", company::CITY, company::PROVINCE, company::POSTAL);
    for line in [company::STREET, locality.as_str()] {
        canvas.cell(&Cell::new(0.0, COMPANY_LINE, line).advance(Advance::Below));
    }
    canvas.set_text_color(LINK_BLUE);
    canvas.set_font(Font::regular(styles.body_size).underlined());
    canvas.cell(
        &Cell::new(0.0, COMPANY_LINE, company::DOMAIN)
            .advance(Advance::Below)
            .link(&site),
    );

    canvas.move_to(10.0, 50.0);
    canvas.set_font(Font::regular(9.0));
    canvas.set_text_color(Rgb::BLACK);
    canvas.cell(&Cell::new(10.0, 5.0, "Notes:"));
    canvas.set_font(Font::italic(9.0));
    canvas.cell(&Cell::new(0.0, 5.0, &customer.notes).advance(Advance::Below));

    canvas.ln(styles.entry_gap);
}
