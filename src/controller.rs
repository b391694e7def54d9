//! Host choreography between the editable surface and its mirror
//!
//! The editable surface and the mirror display are external collaborators;
//! the controller only sees them through the [`EditSurface`] and
//! [`MirrorSurface`] traits. Both entry points run synchronously to
//! completion inside the host's event handler, and every refresh replaces
//! the mirror's content wholesale, so the output always reflects exactly one
//! snapshot of the surface.

use crate::highlight::{highlight_content, HighlightMarker, HighlightedLine};
use crate::sanitize::{sanitize, LogicalLine};

/// The editable surface the user types into. The host owns all writes; the
/// core only replaces content wholesale on paste and reads snapshots.
pub trait EditSurface {
    /// Replace all surface content with exactly these lines, one line per
    /// child rendering unit (blank lines become explicit spacer units).
    fn populate(&mut self, lines: &[LogicalLine]);

    /// Read the current content, one logical line per rendering unit.
    fn snapshot(&self) -> Vec<LogicalLine>;
}

/// The secondary display area showing the highlighted markup. The primary
/// editing surface is never mutated on refresh, which preserves the caret.
pub trait MirrorSurface {
    fn render(&mut self, lines: &[HighlightedLine]);
}

/// Coordinates the surface and mirror for the process's duration.
///
/// Created once at startup with its two surface handles; no teardown.
pub struct HighlightController<E, M> {
    surface: E,
    mirror: M,
    marker: HighlightMarker,
}

impl<E: EditSurface, M: MirrorSurface> HighlightController<E, M> {
    pub fn new(surface: E, mirror: M, marker: HighlightMarker) -> Self {
        Self {
            surface,
            mirror,
            marker,
        }
    }

    /// Handle a paste event: sanitize the raw clipboard text, replace the
    /// surface content with the resulting lines, then refresh the mirror.
    pub fn on_paste(&mut self, raw: &str) {
        let lines = sanitize(raw);
        tracing::debug!(line_count = lines.len(), "sanitized paste");
        self.surface.populate(&lines);
        self.on_text_changed();
    }

    /// Handle a text-changed notification: re-highlight the current surface
    /// snapshot from scratch and replace the mirror content with it.
    pub fn on_text_changed(&mut self) {
        let snapshot = self.surface.snapshot();
        let highlighted = highlight_content(&snapshot, &self.marker);
        tracing::trace!(line_count = highlighted.len(), "mirror refreshed");
        self.mirror.render(&highlighted);
    }

    pub fn surface(&self) -> &E {
        &self.surface
    }

    pub fn mirror(&self) -> &M {
        &self.mirror
    }
}

/// In-memory editable surface, used as the CLI's host and as a test double.
#[derive(Debug, Default)]
pub struct BufferSurface {
    lines: Vec<LogicalLine>,
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[LogicalLine] {
        &self.lines
    }
}

impl EditSurface for BufferSurface {
    fn populate(&mut self, lines: &[LogicalLine]) {
        self.lines = lines.to_vec();
    }

    fn snapshot(&self) -> Vec<LogicalLine> {
        self.lines.clone()
    }
}

/// In-memory mirror, holding the most recently rendered markup.
#[derive(Debug, Default)]
pub struct BufferMirror {
    lines: Vec<HighlightedLine>,
}

impl BufferMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[HighlightedLine] {
        &self.lines
    }
}

impl MirrorSurface for BufferMirror {
    fn render(&mut self, lines: &[HighlightedLine]) {
        self.lines = lines.to_vec();
    }
}
