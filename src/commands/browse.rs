//! Interactive storefront session
//!
//! Menu loop over one `Session`: browse the paginated gallery, set
//! quantities, review the order with its export links, clear, quit. Each
//! cart mutation returns a `CartEvent` that decides the feedback shown;
//! nothing is redrawn wholesale.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use is_terminal::IsTerminal;

use vitrine::cart::{CartEvent, MIN_ORDER_QTY};
use vitrine::config::Config;
use vitrine::models::Product;
use vitrine::session::Session;

use crate::ui::context::{ColorWhen, UiContext};
use crate::ui::gallery::{format_price, render_gallery, render_product_detail};
use crate::ui::panel::{Panel, PanelStyle};
use crate::ui::theme::Icon;

enum Nav {
    Product(usize),
    Next,
    Prev,
    Back,
}

pub fn cmd_browse(config: Config, color: Option<ColorWhen>, verbose: u8) -> Result<()> {
    let ui = UiContext::new(verbose, color, &config);

    if !std::io::stdin().is_terminal() {
        println!("A vitrine é uma sessão interativa e precisa de um terminal.");
        println!("Tente: `vitrine catalog` para inspecionar o catálogo.");
        return Ok(());
    }

    let mut session = Session::new(config);
    print_banner(session.config(), &ui);
    print_load_report(&mut session, &ui);

    loop {
        let cart_label = if session.cart().is_empty() {
            "[2] Meu pedido (vazio)".to_string()
        } else {
            format!(
                "[2] Meu pedido ({} modelos, {} peças)",
                session.cart().len(),
                session.cart().total_pieces()
            )
        };
        let items = vec![
            "[1] Ver vitrine".to_string(),
            cart_label,
            "[3] Limpar pedido".to_string(),
            "[4] Sair".to_string(),
        ];

        let selection = Select::new()
            .with_prompt("O que você gostaria de fazer?")
            .items(&items)
            .default(0)
            .interact()?;

        match selection {
            0 => browse_gallery(&mut session, &ui)?,
            1 => view_order(&mut session, &ui)?,
            2 => clear_order(&mut session, &ui)?,
            _ => return Ok(()),
        }
    }
}

fn print_banner(config: &Config, ui: &UiContext) {
    println!("\n{}", config.store.name);
    println!("{}\n", config.store.tagline);
    println!(
        "{} Regra de Atacado: pedido mínimo de {} peças por modelo.\n",
        Icon::Info.colored(ui.color, ui.unicode),
        MIN_ORDER_QTY
    );
}

fn print_load_report(session: &mut Session, ui: &UiContext) {
    let source = session.config().catalog.source.clone();
    let loaded = session.catalog();
    let total = loaded.catalog.len();
    let warnings = loaded.warnings.clone();

    if total == 0 {
        let mut panel = Panel::with_title("Catálogo vazio").style(PanelStyle::Warning);
        panel.add_line(format!(
            "Arquivo '{}' não encontrado ou está vazio.",
            source.display()
        ));
        panel.add_line("Verifique o caminho do catálogo na configuração.");
        print!("{}", panel.render(ui.color, ui.unicode));
    } else if ui.verbose > 0 {
        println!("Carregados {} produtos de '{}'.", total, source.display());
    }

    for warning in &warnings {
        println!(
            "{} {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            warning
        );
    }
}

fn browse_gallery(session: &mut Session, ui: &UiContext) -> Result<()> {
    let mut page = 0usize;

    loop {
        let products: Vec<Product> = session.catalog().catalog.products().to_vec();
        if products.is_empty() {
            println!(
                "{} Nenhum produto para exibir.",
                Icon::Warning.colored(ui.color, ui.unicode)
            );
            return Ok(());
        }

        let columns = session.config().catalog.columns.max(1);
        let per_page = columns * 2;
        let pages = products.len().div_ceil(per_page);
        page = page.min(pages - 1);

        let start = page * per_page;
        let page_products = &products[start..(start + per_page).min(products.len())];

        if pages > 1 {
            println!("\nPágina {}/{}", page + 1, pages);
        } else {
            println!();
        }
        print!("{}", render_gallery(page_products, columns, ui.unicode));

        let mut items: Vec<String> = page_products
            .iter()
            .map(|p| {
                format!(
                    "{} — {} (Ref: {})",
                    p.name,
                    format_price(p.price),
                    p.reference
                )
            })
            .collect();
        let mut actions: Vec<Nav> = (0..page_products.len()).map(Nav::Product).collect();

        if page + 1 < pages {
            items.push("Próxima página".to_string());
            actions.push(Nav::Next);
        }
        if page > 0 {
            items.push("Página anterior".to_string());
            actions.push(Nav::Prev);
        }
        items.push("Voltar".to_string());
        actions.push(Nav::Back);

        let selection = Select::new()
            .with_prompt("Escolha um produto")
            .items(&items)
            .default(0)
            .interact()?;

        match actions[selection] {
            Nav::Product(i) => {
                let product = page_products[i].clone();
                product_menu(session, &product, ui)?;
            }
            Nav::Next => page += 1,
            Nav::Prev => page -= 1,
            Nav::Back => return Ok(()),
        }
    }
}

fn product_menu(session: &mut Session, product: &Product, ui: &UiContext) -> Result<()> {
    let assets_dir = session.config().catalog.assets_dir.clone();
    print!(
        "\n{}",
        render_product_detail(product, &assets_dir, ui.color, ui.unicode)
    );

    let current = session.cart().get_quantity(&product.reference);
    let max = session.config().catalog.max_quantity;

    let quantity = Input::<u32>::new()
        .with_prompt(format!("Quantidade (0 remove, mínimo {})", MIN_ORDER_QTY))
        .default(current)
        .validate_with(move |q: &u32| -> Result<(), String> {
            if *q > max {
                Err(format!("A quantidade máxima por item é {}.", max))
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    report_event(
        session.set_quantity(&product.reference, quantity),
        product,
        quantity,
        ui,
    );
    Ok(())
}

fn report_event(event: CartEvent, product: &Product, quantity: u32, ui: &UiContext) {
    match event {
        CartEvent::Set { previous: None } => println!(
            "{} Adicionado! {}x {}",
            Icon::Success.colored(ui.color, ui.unicode),
            quantity,
            product.name
        ),
        CartEvent::Set { previous: Some(_) } => println!(
            "{} Atualizado! {}x {}",
            Icon::Success.colored(ui.color, ui.unicode),
            quantity,
            product.name
        ),
        CartEvent::Removed => println!(
            "{} Removido.",
            Icon::Trash.colored(ui.color, ui.unicode)
        ),
        CartEvent::BelowMinimum { min } => println!(
            "{} O pedido mínimo por item é de {} peças.",
            Icon::Warning.colored(ui.color, ui.unicode),
            min
        ),
        CartEvent::Noop => {}
    }
}

fn view_order(session: &mut Session, ui: &UiContext) -> Result<()> {
    if session.cart().is_empty() {
        println!(
            "\n{} Seu pedido está vazio. Adicione itens da vitrine.",
            Icon::Info.colored(ui.color, ui.unicode)
        );
        return Ok(());
    }

    let summary = session.summary();

    let mut panel = Panel::with_title(format!(
        "{} Meu Pedido",
        Icon::Cart.glyph(ui.unicode)
    ))
    .style(PanelStyle::Success);
    panel.add_empty();
    for line in &summary.lines {
        panel.add_line(line.clone());
    }
    panel.add_empty();
    panel.add_line(format!("Total de Peças: {}", summary.total_pieces));
    panel.add_line(format!(
        "Valor Estimado: {}",
        format_price(summary.total_value)
    ));
    print!("\n{}", panel.render(ui.color, ui.unicode));

    for reference in &summary.orphaned {
        println!(
            "{} Referência '{}' não está mais no catálogo; item ignorado.",
            Icon::Warning.colored(ui.color, ui.unicode),
            reference
        );
    }

    if summary.is_empty() {
        return Ok(());
    }

    let contact = session.config().contact.clone();
    if contact.whatsapp.is_empty() && contact.email.is_empty() {
        println!(
            "{} Configure a seção [contact] em vitrine.toml para gerar os links de envio.",
            Icon::Info.colored(ui.color, ui.unicode)
        );
        return Ok(());
    }

    let links = session.export_links();
    if !contact.whatsapp.is_empty() {
        println!(
            "{} Enviar via WhatsApp:\n  {}",
            Icon::Chat.colored(ui.color, ui.unicode),
            links.whatsapp
        );
    }
    if !contact.email.is_empty() {
        println!(
            "{} Enviar via E-mail:\n  {}",
            Icon::Mail.colored(ui.color, ui.unicode),
            links.email
        );
    }
    Ok(())
}

fn clear_order(session: &mut Session, ui: &UiContext) -> Result<()> {
    if session.cart().is_empty() {
        println!("Seu pedido já está vazio.");
        return Ok(());
    }

    let confirmed = Confirm::new()
        .with_prompt("Limpar o pedido atual?")
        .default(false)
        .interact()?;

    if confirmed {
        session.clear_order();
        println!(
            "{} Pedido limpo.",
            Icon::Trash.colored(ui.color, ui.unicode)
        );
    }
    Ok(())
}
