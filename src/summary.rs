//! Order summary composer
//!
//! Derives a human-readable order summary from the cart and the catalog at
//! export time. Cart entries whose reference no longer resolves against the
//! catalog (e.g. after the source file changed mid-session) are skipped and
//! reported as warnings instead of failing the whole summary.

use crate::cart::Cart;
use crate::models::Catalog;

/// Fixed greeting opening the exported order text
pub const ORDER_GREETING: &str = "Olá! Gostaria de orçar o seguinte pedido de atacado:";

/// Totals and per-entry lines derived from the cart at composition time
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    /// Sum of quantities over resolved entries
    pub total_pieces: u32,
    /// Sum of `quantity * price` over resolved entries
    pub total_value: f64,
    /// One line per resolved entry, in cart insertion order
    pub lines: Vec<String>,
    /// References that no longer resolve against the catalog (skipped)
    pub orphaned: Vec<String>,
}

impl OrderSummary {
    /// True when nothing resolved (the cart was empty or fully orphaned)
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The shareable order text: greeting, entry lines, totals block.
    pub fn full_text(&self) -> String {
        let mut text = String::from(ORDER_GREETING);
        text.push('\n');
        for line in &self.lines {
            text.push('\n');
            text.push_str(line);
        }
        text.push_str(&format!(
            "\n\nTotal de Peças: {}\nValor Estimado: R$ {:.2}",
            self.total_pieces, self.total_value
        ));
        text
    }
}

/// Compose the order summary for the current cart state.
///
/// Iterates the cart in insertion order, resolving each reference against
/// the catalog. Unresolvable references go to `orphaned` and contribute
/// nothing to the totals.
pub fn compose_summary(cart: &Cart, catalog: &Catalog) -> OrderSummary {
    let mut summary = OrderSummary {
        total_pieces: 0,
        total_value: 0.0,
        lines: Vec::new(),
        orphaned: Vec::new(),
    };

    for (reference, quantity) in cart.iter() {
        let Some(product) = catalog.find(reference) else {
            summary.orphaned.push(reference.to_string());
            continue;
        };

        summary.total_pieces += quantity;
        summary.total_value += f64::from(quantity) * product.price;
        summary
            .lines
            .push(format!("{}x {} (Ref: {})", quantity, product.name, reference));
    }

    summary
}
