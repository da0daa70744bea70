//! Order export links
//!
//! Serializes the composed order text into the two external hand-off
//! interfaces: a WhatsApp deep link and a `mailto:` link. Recipient
//! identifiers come from the `[contact]` configuration section.

use crate::config::ContactConfig;

/// Fixed subject used for the e-mail hand-off
pub const ORDER_SUBJECT: &str = "Pedido de Atacado";

/// Both export handles for one composed order text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLinks {
    pub whatsapp: String,
    pub email: String,
}

/// `https://wa.me/<number>?text=<url-encoded text>`
///
/// `number` is the full recipient identifier including country and area
/// codes, digits only.
pub fn whatsapp_link(number: &str, text: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(text))
}

/// `mailto:<address>?subject=<url-encoded subject>&body=<url-encoded body>`
pub fn mailto_link(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Build both hand-off links for an order text
pub fn order_links(contact: &ContactConfig, text: &str) -> ExportLinks {
    ExportLinks {
        whatsapp: whatsapp_link(&contact.whatsapp, text),
        email: mailto_link(&contact.email, ORDER_SUBJECT, text),
    }
}
