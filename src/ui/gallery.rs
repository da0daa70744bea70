//! Product gallery and detail rendering

use std::path::Path;

use unicode_width::UnicodeWidthStr;

use vitrine::models::Product;

use crate::ui::panel::{Panel, PanelStyle};
use crate::ui::theme;

pub fn format_price(value: f64) -> String {
    format!("R$ {:.2}", value)
}

/// Render a page of products as a tile grid, `columns` tiles per row.
///
/// Tiles share one width so rows line up regardless of name length.
pub fn render_gallery(products: &[Product], columns: usize, supports_unicode: bool) -> String {
    if products.is_empty() {
        return String::new();
    }

    let columns = columns.max(1);
    let tiles: Vec<[String; 3]> = products
        .iter()
        .map(|p| {
            [
                p.name.clone(),
                format_price(p.price),
                format!("Ref: {}", p.reference),
            ]
        })
        .collect();

    let inner_width = tiles
        .iter()
        .flatten()
        .map(|l| l.width())
        .max()
        .unwrap_or(0)
        .saturating_add(2);

    let (tl, tr, bl, br, h, v) = if supports_unicode {
        use theme::borders::*;
        (TOP_LEFT, TOP_RIGHT, BOTTOM_LEFT, BOTTOM_RIGHT, HORIZONTAL, VERTICAL)
    } else {
        use theme::borders_ascii::*;
        (TOP_LEFT, TOP_RIGHT, BOTTOM_LEFT, BOTTOM_RIGHT, HORIZONTAL, VERTICAL)
    };

    let top = format!("{}{}{}", tl, h.repeat(inner_width), tr);
    let bottom = format!("{}{}{}", bl, h.repeat(inner_width), br);

    let mut out = String::new();
    for row in tiles.chunks(columns) {
        let mut rendered: Vec<Vec<String>> = Vec::new();
        for tile in row {
            let mut lines = vec![top.clone()];
            for text in tile {
                lines.push(format!(
                    "{} {}{} {}",
                    v,
                    text,
                    " ".repeat(inner_width - 2 - text.width()),
                    v
                ));
            }
            lines.push(bottom.clone());
            rendered.push(lines);
        }

        for i in 0..rendered[0].len() {
            let line: Vec<&str> = rendered.iter().map(|tile| tile[i].as_str()).collect();
            out.push_str(&line.join("  "));
            out.push('\n');
        }
    }
    out
}

/// Render the expanded view of one product.
///
/// The image line appears only when the referenced asset exists on disk; a
/// missing file is silently skipped.
pub fn render_product_detail(
    product: &Product,
    assets_dir: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut panel = Panel::with_title(product.name.clone()).style(PanelStyle::Info);
    panel.add_empty();
    if !product.description.is_empty() {
        panel.add_line(product.description.clone());
        panel.add_empty();
    }
    panel.add_line(format!("Referência: {}", product.reference));
    panel.add_line(format!("Preço: {}", format_price(product.price)));

    if let Some(image) = &product.image {
        let path = assets_dir.join(image);
        if path.exists() {
            panel.add_line(format!("Imagem: {}", path.display()));
        }
    }

    panel.render(supports_color, supports_unicode)
}
