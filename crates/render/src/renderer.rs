//! Batched reveal state machine.
//!
//! A session is a frozen snapshot of a filtered view. Batches are selected from
//! that snapshot only, so a filter change mid-reveal cannot corrupt an in-flight
//! batch: `reset` replaces the session and any ticket issued for the old one is
//! discarded when it completes.
//!
//! ```text
//! reset(view) ──empty──▶ Idle (show_empty)
//!      │
//!      └─non-empty─▶ Ready ──load_next_batch──▶ Loading ──complete_batch──▶ Ready | Idle (exhausted)
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use showcase_catalog::{CardOptions, Product, ProductCard};
use showcase_core::{DomainError, DomainResult};

use crate::surface::DisplaySurface;

pub const DEFAULT_BATCH_SIZE: usize = 12;
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Maps stored image locators to display URLs.
pub type ImageResolver = Arc<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderState {
    /// No session, or the session is fully revealed.
    Idle,
    /// Session active, items pending, nothing loading.
    Ready,
    /// A batch has been selected and not yet revealed.
    Loading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    batch_size: usize,
    reveal_delay: Duration,
    card_options: CardOptions,
}

impl RenderConfig {
    pub fn new(batch_size: usize, reveal_delay: Duration) -> DomainResult<Self> {
        if batch_size == 0 {
            return Err(DomainError::validation("batch size must be at least 1"));
        }
        Ok(Self {
            batch_size,
            reveal_delay,
            card_options: CardOptions::default(),
        })
    }

    pub fn with_card_options(mut self, card_options: CardOptions) -> Self {
        self.card_options = card_options;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }

    pub fn card_options(&self) -> &CardOptions {
        &self.card_options
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            reveal_delay: DEFAULT_REVEAL_DELAY,
            card_options: CardOptions::default(),
        }
    }
}

/// Mutable reveal state for one filtered view.
#[derive(Debug)]
pub struct RenderSession {
    id: u64,
    items: Vec<Product>,
    revealed_count: usize,
    loading: bool,
}

impl RenderSession {
    fn new(id: u64, items: Vec<Product>) -> Self {
        Self {
            id,
            items,
            revealed_count: 0,
            loading: false,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn is_exhausted(&self) -> bool {
        self.revealed_count >= self.items.len()
    }
}

/// A selected batch awaiting reveal: `items[start..end)` of session `session`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchTicket {
    session: u64,
    start: usize,
    end: usize,
}

impl BatchTicket {
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn range(&self) -> core::ops::Range<usize> {
        self.start..self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Batch shown; more items remain.
    Revealed { revealed: usize, total: usize },
    /// Batch shown and it was the last one.
    Exhausted { total: usize },
    /// The ticket belonged to a superseded session; nothing changed.
    Stale,
}

pub struct IncrementalRenderer<S> {
    surface: S,
    config: RenderConfig,
    resolver: Option<ImageResolver>,
    session: Option<RenderSession>,
    last_session_id: u64,
}

impl<S: core::fmt::Debug> core::fmt::Debug for IncrementalRenderer<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IncrementalRenderer")
            .field("surface", &self.surface)
            .field("config", &self.config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl<S: DisplaySurface> IncrementalRenderer<S> {
    pub fn new(surface: S, config: RenderConfig) -> Self {
        Self {
            surface,
            config,
            resolver: None,
            session: None,
            last_session_id: 0,
        }
    }

    /// Resolve image locators (e.g. onto a resource base URL) when building cards.
    pub fn with_image_resolver(mut self, resolver: ImageResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn state(&self) -> RenderState {
        match &self.session {
            Some(s) if s.loading => RenderState::Loading,
            Some(s) if !s.is_exhausted() => RenderState::Ready,
            _ => RenderState::Idle,
        }
    }

    pub fn session(&self) -> Option<&RenderSession> {
        self.session.as_ref()
    }

    pub fn session_id(&self) -> Option<u64> {
        self.session.as_ref().map(RenderSession::id)
    }

    pub fn revealed_count(&self) -> usize {
        self.session.as_ref().map_or(0, RenderSession::revealed_count)
    }

    pub fn total(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.items.len())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Start a new session for `view`, discarding the current one.
    ///
    /// A non-empty view immediately selects its first batch; the returned ticket
    /// must be passed to [`IncrementalRenderer::complete_batch`].
    pub fn reset(&mut self, view: Vec<Product>) -> Option<BatchTicket> {
        self.last_session_id += 1;
        let id = self.last_session_id;

        if let Some(previous) = self.session.take() {
            if previous.loading {
                tracing::debug!(session = previous.id, "superseding session with a batch in flight");
            }
        }

        self.surface.clear();
        let total = view.len();
        self.session = Some(RenderSession::new(id, view));
        tracing::debug!(session = id, total, "render session started");

        if total == 0 {
            self.surface.show_empty();
            return None;
        }

        self.load_next_batch()
    }

    /// Visibility signal: select the next batch if the session is `Ready`.
    ///
    /// No-op (returns `None`) while `Loading` or `Idle`.
    pub fn load_next_batch(&mut self) -> Option<BatchTicket> {
        let batch_size = self.config.batch_size;
        let session = self.session.as_mut()?;

        if session.loading || session.is_exhausted() {
            tracing::trace!(session = session.id, loading = session.loading, "visibility signal ignored");
            return None;
        }

        let start = session.revealed_count;
        let end = (start + batch_size).min(session.items.len());
        session.loading = true;

        tracing::debug!(session = session.id, start, end, "batch selected");
        Some(BatchTicket {
            session: session.id,
            start,
            end,
        })
    }

    /// Reveal the batch for `ticket`, unless its session has been superseded.
    pub fn complete_batch(&mut self, ticket: BatchTicket) -> BatchOutcome {
        let Some(session) = self.session.as_mut() else {
            return BatchOutcome::Stale;
        };

        if session.id != ticket.session || !session.loading || session.revealed_count != ticket.start {
            tracing::debug!(
                session = ticket.session,
                active = session.id,
                "discarding stale batch"
            );
            return BatchOutcome::Stale;
        }

        let cards = build_cards(
            &session.items[ticket.start..ticket.end],
            &self.config.card_options,
            self.resolver.as_ref(),
        );

        session.revealed_count = ticket.end;
        session.loading = false;
        self.surface.append(cards);

        let total = session.items.len();
        if session.is_exhausted() {
            tracing::debug!(session = session.id, total, "session fully revealed");
            self.surface.exhausted();
            BatchOutcome::Exhausted { total }
        } else {
            BatchOutcome::Revealed {
                revealed: session.revealed_count,
                total,
            }
        }
    }

    /// Select and reveal the next batch in one step (zero-delay callers).
    pub fn reveal_next(&mut self) -> Option<BatchOutcome> {
        let ticket = self.load_next_batch()?;
        Some(self.complete_batch(ticket))
    }
}

fn build_cards(
    items: &[Product],
    options: &CardOptions,
    resolver: Option<&ImageResolver>,
) -> Vec<ProductCard> {
    items
        .iter()
        .map(|p| match resolver {
            Some(resolve) => ProductCard::from_product_with(p, options, |l| resolve(l)),
            None => ProductCard::from_product(p, options),
        })
        .collect()
}
