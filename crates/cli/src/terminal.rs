//! Line-oriented display surface.

use std::io::{self, Write};

use showcase_catalog::ProductCard;
use showcase_render::DisplaySurface;

/// Writes revealed cards to `out`, numbered across batches.
///
/// [`DisplaySurface`] methods cannot fail, so the first write error is kept
/// and later writes are skipped.
#[derive(Debug)]
pub struct TerminalSurface<W> {
    out: W,
    shown: usize,
    error: Option<io::Error>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            shown: 0,
            error: None,
        }
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn emit(&mut self, write: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = write(&mut self.out).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "terminal write failed");
            self.error = Some(e);
        }
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn clear(&mut self) {
        self.shown = 0;
    }

    fn show_empty(&mut self) {
        self.emit(|out| writeln!(out, "No products match the current filters."));
    }

    fn append(&mut self, batch: Vec<ProductCard>) {
        let first = self.shown + 1;
        self.shown += batch.len();
        self.emit(|out| {
            for (n, card) in (first..).zip(&batch) {
                write_card(out, n, card)?;
            }
            Ok(())
        });
    }

    fn exhausted(&mut self) {
        let shown = self.shown;
        self.emit(|out| writeln!(out, "End of results ({shown} shown)."));
    }
}

fn write_card(out: &mut impl Write, n: usize, card: &ProductCard) -> io::Result<()> {
    writeln!(out, "{n:>3}. {}  {}", card.title, card.price_label)?;
    writeln!(
        out,
        "     {} | {} | {}",
        card.category, card.condition, card.status
    )?;
    if !card.tags.is_empty() {
        writeln!(out, "     tags: {}", card.tags.join(", "))?;
    }
    writeln!(out, "     {}", card.image)
}
