//! Incremental (batched) rendering of a filtered catalog view.
//!
//! - `renderer`: the synchronous reveal state machine (one session at a time,
//!   at most one batch in flight)
//! - `surface`: the display collaborator trait plus an in-memory implementation
//! - `loader`: tokio driver that completes batches after an injected delay

pub mod loader;
pub mod renderer;
pub mod surface;

pub use loader::{Delay, LazyLoader, NoDelay, TokioDelay};
pub use renderer::{
    BatchOutcome, BatchTicket, IncrementalRenderer, RenderConfig, RenderSession, RenderState,
};
pub use surface::{DisplaySurface, MemorySurface, SurfaceEvent};
