//! Browse command
//!
//! Usage: showcase browse [--search <TEXT>] [--category <NAME>] ... [--all]

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Args;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use showcase_catalog::{CatalogStore, FilterPatch, Product};
use showcase_render::{
    BatchOutcome, DisplaySurface, IncrementalRenderer, LazyLoader, RenderConfig,
};

use crate::terminal::TerminalSurface;

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Case-insensitive text to find in titles and descriptions
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Exact status (e.g. available, sold)
    #[arg(long)]
    pub status: Option<String>,

    /// Exact condition (e.g. new, used)
    #[arg(long)]
    pub condition: Option<String>,

    /// Lowest price shown (inclusive)
    #[arg(long, value_parser = price_arg)]
    pub price_min: Option<f64>,

    /// Highest price shown (inclusive)
    #[arg(long, value_parser = price_arg)]
    pub price_max: Option<f64>,

    /// Products per batch (default: $SHOWCASE_BATCH_SIZE or 12)
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Pause before each batch appears, in milliseconds (default: $SHOWCASE_REVEAL_DELAY_MS or 500)
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Reveal every batch without waiting for Enter
    #[arg(short, long)]
    pub all: bool,
}

fn price_arg(raw: &str) -> Result<f64, String> {
    showcase_catalog::parse_price(raw).map_err(|e| e.to_string())
}

impl BrowseArgs {
    fn patch(&self) -> FilterPatch {
        let mut patch = FilterPatch::new();
        if let Some(search) = &self.search {
            patch = patch.search_term(search.as_str());
        }
        if let Some(category) = &self.category {
            patch = patch.category(category.as_str());
        }
        if let Some(status) = &self.status {
            patch = patch.status(status.as_str());
        }
        if let Some(condition) = &self.condition {
            patch = patch.condition(condition.as_str());
        }
        patch.price_min(self.price_min).price_max(self.price_max)
    }
}

/// Execute browse command
pub async fn execute(source: &super::SourceArgs, args: BrowseArgs) -> anyhow::Result<()> {
    let config = source.config()?;
    let loaded = super::load_catalog(&config).await?;

    let mut store = CatalogStore::new(loaded.products);
    store.set_filters(args.patch());
    let view = store.filtered_view();

    let render_config = RenderConfig::new(
        args.batch_size.unwrap_or(config.batch_size),
        args.delay_ms
            .map(Duration::from_millis)
            .unwrap_or(config.reveal_delay),
    )?
    .with_card_options(loaded.card_options);

    let resolver = loaded.resolver;
    let renderer = IncrementalRenderer::new(TerminalSurface::new(std::io::stdout()), render_config)
        .with_image_resolver(Arc::new(move |locator: &str| resolver.resolve(locator)));
    let loader = LazyLoader::new(renderer);

    let signals = BufReader::new(tokio::io::stdin());
    drive(&loader, view, args.all, signals).await?;

    if let Some(msg) = loader.inspect(|r| r.surface().error().map(ToString::to_string)) {
        anyhow::bail!("failed writing to terminal: {msg}");
    }
    Ok(())
}

/// Show `view` one batch at a time. Each line read from `signals` asks for the
/// next batch (`q` or end of input stops); with `all`, batches follow each
/// other without asking.
pub async fn drive<S, R>(
    loader: &LazyLoader<S>,
    view: Vec<Product>,
    all: bool,
    signals: R,
) -> anyhow::Result<BatchOutcome>
where
    S: DisplaySurface + Send + 'static,
    R: AsyncBufRead + Unpin,
{
    let Some(first) = loader.reset(view) else {
        return Ok(BatchOutcome::Exhausted { total: 0 });
    };
    let mut outcome = first.await.context("batch reveal task failed")?;
    let mut lines = signals.lines();

    while let BatchOutcome::Revealed { revealed, total } = outcome {
        if !all {
            eprint!("-- {revealed} of {total} shown; Enter for more, q to quit -- ");
            if let Err(e) = std::io::stderr().flush() {
                tracing::debug!(error = %e, "prompt flush failed");
            }
            match lines.next_line().await? {
                Some(line) if line.trim().eq_ignore_ascii_case("q") => break,
                Some(_) => {}
                None => break,
            }
        }

        let Some(next) = loader.on_visible() else {
            break;
        };
        outcome = next.await.context("batch reveal task failed")?;
    }

    Ok(outcome)
}
