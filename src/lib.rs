//! Vitrine - interactive terminal storefront
//!
//! Vitrine loads a wholesale product catalog from a CSV file, renders it as
//! a paginated gallery in the terminal, tracks a session-scoped order that
//! enforces a minimum quantity per line item, and exports the order as a
//! WhatsApp or e-mail deep link.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod session;
pub mod summary;

// Re-exports for convenience
pub use cart::{Cart, CartEvent, MIN_ORDER_QTY};
pub use catalog::{load_catalog, normalize_price, CatalogCache, LoadedCatalog};
pub use config::Config;
pub use error::{VitrineError, VitrineResult};
pub use models::{Catalog, Product};
pub use summary::{compose_summary, OrderSummary};
