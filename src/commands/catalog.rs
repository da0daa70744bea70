//! Catalog inspection command (debugging)

use anyhow::Result;

use vitrine::catalog::load_catalog;
use vitrine::config::Config;

use crate::ui::context::{ColorWhen, UiContext};
use crate::ui::gallery::format_price;
use crate::ui::panel::{Panel, PanelStyle};
use crate::ui::theme::Icon;

pub fn cmd_catalog(config: &Config, color: Option<ColorWhen>, json: bool, verbose: u8) -> Result<()> {
    let source = &config.catalog.source;
    let loaded = load_catalog(source);

    if json {
        let payload = serde_json::json!({
            "event": "data",
            "command": "catalog",
            "source": source.display().to_string(),
            "products": loaded.catalog.products(),
            "warnings": loaded.warnings,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let ui = UiContext::new(verbose, color, config);

    if loaded.catalog.is_empty() {
        println!(
            "{} Arquivo '{}' não encontrado ou está vazio.",
            Icon::Warning.colored(ui.color, ui.unicode),
            source.display()
        );
    } else {
        let mut panel = Panel::with_title(format!("Catálogo ({} produtos)", loaded.catalog.len()))
            .style(PanelStyle::Info);
        panel.add_empty();
        for product in loaded.catalog.products() {
            panel.add_line(format!(
                "{}  {}  {}",
                product.reference,
                product.name,
                format_price(product.price)
            ));
        }
        print!("{}", panel.render(ui.color, ui.unicode));
    }

    for warning in &loaded.warnings {
        println!(
            "{} {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            warning
        );
    }

    Ok(())
}
