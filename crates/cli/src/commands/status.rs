//! Status command
//!
//! Usage: showcase status

use showcase_infra::{bootstrap, ResourceStatus};

/// Execute status command. A failed load is reported, not treated as an error.
pub async fn execute(source: &super::SourceArgs) -> anyhow::Result<()> {
    let config = source.config()?;
    let loaded = bootstrap::load(&config).await;

    println!("{}", loaded.status.summary());
    match &loaded.status {
        ResourceStatus::Ready { product_count, checked_at, .. } => {
            println!("products:  {product_count}");
            println!("resources: {}", loaded.resolver.base());
            println!("checked:   {}", checked_at.to_rfc3339());
        }
        ResourceStatus::Failed { message, checked_at } => {
            println!("error:     {message}");
            println!("checked:   {}", checked_at.to_rfc3339());
        }
    }
    Ok(())
}
