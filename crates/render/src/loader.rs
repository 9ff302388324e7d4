//! Async lazy-loading driver around [`IncrementalRenderer`].
//!
//! Visibility signals arrive from outside (scroll/intersection callbacks, API
//! polling). Each selected batch is revealed by a spawned task after the
//! configured delay; the renderer's stale-session guard makes a superseded
//! task's completion a no-op, so nothing is ever cancelled.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinHandle;

use showcase_catalog::Product;

use crate::renderer::{BatchOutcome, BatchTicket, IncrementalRenderer, RenderState};
use crate::surface::DisplaySurface;

/// Delay between "batch selected" and "batch revealed".
///
/// Injected so tests can run without wall-clock waits.
#[async_trait]
pub trait Delay: Send + Sync + 'static {
    async fn wait(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Completes immediately regardless of the configured delay.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn wait(&self, _duration: Duration) {}
}

pub struct LazyLoader<S> {
    renderer: Arc<Mutex<IncrementalRenderer<S>>>,
    delay: Arc<dyn Delay>,
}

impl<S> Clone for LazyLoader<S> {
    fn clone(&self) -> Self {
        Self {
            renderer: self.renderer.clone(),
            delay: self.delay.clone(),
        }
    }
}

impl<S> LazyLoader<S>
where
    S: DisplaySurface + Send + 'static,
{
    pub fn new(renderer: IncrementalRenderer<S>) -> Self {
        Self::with_delay(renderer, Arc::new(TokioDelay))
    }

    pub fn with_delay(renderer: IncrementalRenderer<S>, delay: Arc<dyn Delay>) -> Self {
        Self {
            renderer: Arc::new(Mutex::new(renderer)),
            delay,
        }
    }

    /// Replace the current session with `view`.
    ///
    /// Returns the handle of the initial batch reveal, or `None` for an empty view.
    pub fn reset(&self, view: Vec<Product>) -> Option<JoinHandle<BatchOutcome>> {
        let ticket = self.lock().reset(view)?;
        Some(self.spawn_reveal(ticket))
    }

    /// Visibility signal. Safe to call at any time; ignored unless `Ready`.
    pub fn on_visible(&self) -> Option<JoinHandle<BatchOutcome>> {
        let ticket = self.lock().load_next_batch()?;
        Some(self.spawn_reveal(ticket))
    }

    pub fn state(&self) -> RenderState {
        self.lock().state()
    }

    pub fn revealed_count(&self) -> usize {
        self.lock().revealed_count()
    }

    /// Run `f` against the renderer (and through it, the surface).
    pub fn inspect<R>(&self, f: impl FnOnce(&IncrementalRenderer<S>) -> R) -> R {
        f(&self.lock())
    }

    fn spawn_reveal(&self, ticket: BatchTicket) -> JoinHandle<BatchOutcome> {
        let renderer = self.renderer.clone();
        let delay = self.delay.clone();
        let duration = self.lock().config().reveal_delay();

        tokio::spawn(async move {
            delay.wait(duration).await;
            let outcome = renderer
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .complete_batch(ticket);
            tracing::debug!(session = ticket.session(), ?outcome, "batch reveal finished");
            outcome
        })
    }

    fn lock(&self) -> MutexGuard<'_, IncrementalRenderer<S>> {
        self.renderer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
