use super::SelectionEvent;
use crate::grid::Cell;
use std::time::{Duration, Instant};
use tracing::debug;

/// Time-based selection: the pointer must rest on one cell for the configured
/// duration. Detection is sampled, not timer-driven: a completion fires on the
/// first sample that arrives after the threshold has elapsed, never between
/// samples.
#[derive(Debug, Default)]
pub struct DwellState {
    hovered: Option<Cell>,
    dwell_start: Option<Instant>,
    completed: Option<Cell>,
}

impl DwellState {
    /// One sample. Off-board samples leave the state untouched. Entering a
    /// cell (re)arms the timer from `now`; once the threshold has elapsed on
    /// the same cell, fires unless that cell was the previous completion.
    /// `completed` is only ever overwritten by the next completion, which is
    /// the sole debounce: resting on a symbol emits once, and the same symbol
    /// can be selected again after a different cell completes.
    pub fn observe(
        &mut self,
        cell: Option<Cell>,
        now: Instant,
        threshold: Duration,
    ) -> Option<SelectionEvent> {
        let cell = cell?;

        if self.hovered != Some(cell) {
            self.hovered = Some(cell);
            self.dwell_start = Some(now);
            return None;
        }

        let start = self.dwell_start?;
        if now.saturating_duration_since(start) >= threshold && self.completed != Some(cell) {
            debug!(row = cell.row, col = cell.col, "dwell completed");
            self.completed = Some(cell);
            self.hovered = None;
            self.dwell_start = None;
            return Some(SelectionEvent { cell });
        }

        None
    }

    pub fn hovered_cell(&self) -> Option<Cell> {
        self.hovered
    }

    pub fn completed_cell(&self) -> Option<Cell> {
        self.completed
    }
}
