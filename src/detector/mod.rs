//! Selection detectors: turn the continuous sample stream into discrete,
//! debounced symbol selections. One detector variant exists per drag mode and
//! lives for exactly one gesture.

mod direction;
mod dwell;

pub use direction::{is_sharp_turn, DirectionState, TURN_THRESHOLD_RADIANS};
pub use dwell::DwellState;

use crate::config::{DragMode, Settings};
use crate::geometry::Point;
use crate::grid::Cell;
use std::time::Instant;

/// A debounced, intentional selection of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionEvent {
    pub cell: Cell,
}

#[derive(Debug)]
pub enum Detector {
    Dwell(DwellState),
    DirectionChange(DirectionState),
}

impl Detector {
    pub fn for_mode(mode: DragMode) -> Self {
        match mode {
            DragMode::Dwell => Detector::Dwell(DwellState::default()),
            DragMode::DirectionChange => Detector::DirectionChange(DirectionState::default()),
        }
    }

    /// Feeds one pointer sample (already resolved to a cell, `None` when off
    /// the board). Thresholds are re-read from live settings on every call.
    pub fn observe(
        &mut self,
        point: Point,
        cell: Option<Cell>,
        now: Instant,
        settings: &Settings,
    ) -> Option<SelectionEvent> {
        match self {
            Detector::Dwell(state) => state.observe(cell, now, settings.dwell_threshold()),
            Detector::DirectionChange(state) => state.observe(point, cell),
        }
    }

    /// The cell the pointer is currently arming, for highlight rendering.
    /// Only the dwell mode has a hover notion.
    pub fn hovered_cell(&self) -> Option<Cell> {
        match self {
            Detector::Dwell(state) => state.hovered_cell(),
            Detector::DirectionChange(_) => None,
        }
    }

    /// The most recently selected cell, shared debounce slot of both modes.
    pub fn completed_cell(&self) -> Option<Cell> {
        match self {
            Detector::Dwell(state) => state.completed_cell(),
            Detector::DirectionChange(state) => state.completed_cell(),
        }
    }
}
