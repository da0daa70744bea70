//! Interactive session state
//!
//! One `Session` value owns everything a running storefront needs: the
//! resolved configuration, the memoized catalog, and the cart. It is created
//! by the command loop, threaded through interaction handlers, and dropped
//! when the session ends; there is no global mutable state.

use crate::cart::{Cart, CartEvent};
use crate::catalog::{CatalogCache, LoadedCatalog};
use crate::config::Config;
use crate::export::{order_links, ExportLinks};
use crate::summary::{compose_summary, OrderSummary};

pub struct Session {
    config: Config,
    catalog: CatalogCache,
    cart: Cart,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let catalog = CatalogCache::new(&config.catalog.source);
        Self {
            config,
            catalog,
            cart: Cart::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The memoized catalog; reloads only when the source file changed
    pub fn catalog(&mut self) -> &LoadedCatalog {
        self.catalog.load()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn set_quantity(&mut self, reference: &str, quantity: u32) -> CartEvent {
        self.cart.set_quantity(reference, quantity)
    }

    pub fn clear_order(&mut self) {
        self.cart.clear();
    }

    /// Compose the order summary against the current catalog state
    pub fn summary(&mut self) -> OrderSummary {
        let loaded = self.catalog.load();
        compose_summary(&self.cart, &loaded.catalog)
    }

    /// Both hand-off links for the current order
    pub fn export_links(&mut self) -> ExportLinks {
        let text = self.summary().full_text();
        order_links(&self.config.contact, &text)
    }
}
