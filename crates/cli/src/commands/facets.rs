//! Facets command
//!
//! Usage: showcase facets [--category <NAME>]

use std::io::Write;

use clap::Args;

use showcase_catalog::{CatalogStore, FacetField};

#[derive(Debug, Args)]
pub struct FacetsArgs {
    /// Only list tags used by products in this category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Execute facets command
pub async fn execute(source: &super::SourceArgs, args: FacetsArgs) -> anyhow::Result<()> {
    let config = source.config()?;
    let loaded = super::load_catalog(&config).await?;
    let store = CatalogStore::new(loaded.products);

    let mut out = std::io::stdout().lock();
    write_facets(&mut out, &store, args.category.as_deref())?;
    out.flush()?;
    Ok(())
}

fn write_facets(
    out: &mut impl Write,
    store: &CatalogStore,
    category: Option<&str>,
) -> std::io::Result<()> {
    for field in [FacetField::Category, FacetField::Status, FacetField::Condition] {
        writeln!(out, "{}: {}", field.as_str(), store.unique_values(field).join(", "))?;
    }
    match category {
        Some(category) => writeln!(
            out,
            "tags ({category}): {}",
            store.tags_by_category(category).join(", ")
        ),
        None => writeln!(out, "tags: {}", store.unique_tags().join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_catalog::Product;

    fn store() -> CatalogStore {
        CatalogStore::new(vec![
            Product::new("a", "A", 1.0)
                .with_category("lighting")
                .with_status("sold")
                .with_condition("new")
                .with_tags(["metal"]),
            Product::new("b", "B", 2.0)
                .with_category("furniture")
                .with_status("available")
                .with_condition("new")
                .with_tags(["wood", "dining"]),
        ])
    }

    #[test]
    fn lists_sorted_facets() {
        let mut out = Vec::new();
        write_facets(&mut out, &store(), None).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("category: furniture, lighting\n"), "{text}");
        assert!(text.contains("condition: new\n"), "{text}");
        assert!(text.ends_with("tags: dining, metal, wood\n"), "{text}");
    }

    #[test]
    fn tags_can_be_scoped_to_a_category() {
        let mut out = Vec::new();
        write_facets(&mut out, &store(), Some("furniture")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("tags (furniture): dining, wood\n"), "{text}");
    }
}
