use showcase_catalog::ProductCard;

/// Where revealed cards go.
///
/// Implementations own the actual presentation (terminal, web page, test
/// recorder); the renderer only decides *what* is shown and *when*.
pub trait DisplaySurface {
    /// Drop everything shown by the previous session.
    fn clear(&mut self);

    /// The new session has no items at all.
    fn show_empty(&mut self);

    /// Append one revealed batch, in order.
    fn append(&mut self, batch: Vec<ProductCard>);

    /// Every item of the session has been revealed; retract any "load more" affordance.
    fn exhausted(&mut self);
}

/// Signals observed by a [`MemorySurface`], in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Cleared,
    Empty,
    Appended(Vec<String>),
    Exhausted,
}

/// In-memory surface for tests/dev: keeps the visible cards plus an event log.
#[derive(Debug, Default)]
pub struct MemorySurface {
    cards: Vec<ProductCard>,
    events: Vec<SurfaceEvent>,
    showing_empty: bool,
    more_available: bool,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    pub fn card_ids(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    pub fn is_showing_empty(&self) -> bool {
        self.showing_empty
    }

    /// Whether a "load more" affordance would still be shown.
    pub fn more_available(&self) -> bool {
        self.more_available
    }
}

impl DisplaySurface for MemorySurface {
    fn clear(&mut self) {
        self.cards.clear();
        self.showing_empty = false;
        self.more_available = false;
        self.events.push(SurfaceEvent::Cleared);
    }

    fn show_empty(&mut self) {
        self.showing_empty = true;
        self.more_available = false;
        self.events.push(SurfaceEvent::Empty);
    }

    fn append(&mut self, batch: Vec<ProductCard>) {
        let ids = batch.iter().map(|c| c.id.clone()).collect();
        self.cards.extend(batch);
        self.more_available = true;
        self.events.push(SurfaceEvent::Appended(ids));
    }

    fn exhausted(&mut self) {
        self.more_available = false;
        self.events.push(SurfaceEvent::Exhausted);
    }
}
