//! Show command
//!
//! Usage: showcase show <PRODUCT_ID>

use std::io::Write;

use anyhow::Context;
use clap::Args;

use showcase_catalog::{CatalogStore, ProductDetail};
use showcase_core::ProductId;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Product ID to show
    pub product_id: String,
}

/// Execute show command
pub async fn execute(source: &super::SourceArgs, args: ShowArgs) -> anyhow::Result<()> {
    let id: ProductId = args.product_id.parse()?;

    let config = source.config()?;
    let loaded = super::load_catalog(&config).await?;
    let store = CatalogStore::new(loaded.products);

    let product = store
        .get(id.as_str())
        .with_context(|| format!("no product with id {id}"))?;
    let detail = ProductDetail::from_product_with(product, &loaded.card_options, |locator| {
        loaded.resolver.resolve(locator)
    });

    let mut out = std::io::stdout().lock();
    write_detail(&mut out, &detail)?;
    out.flush()?;
    Ok(())
}

fn write_detail(out: &mut impl Write, detail: &ProductDetail) -> std::io::Result<()> {
    let card = &detail.card;
    writeln!(out, "{} ({})", card.title, card.id)?;
    writeln!(out, "Price:     {}", card.price_label)?;
    writeln!(out, "Category:  {}", card.category)?;
    writeln!(out, "Condition: {}", card.condition)?;
    writeln!(out, "Status:    {}", card.status)?;
    if !card.tags.is_empty() {
        writeln!(out, "Tags:      {}", card.tags.join(", "))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", detail.description)?;
    writeln!(out)?;
    for image in &detail.images {
        writeln!(out, "Image:     {image}")?;
    }
    writeln!(out, "Buy:       {}", card.marketplace_link)
}
