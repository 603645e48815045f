use super::SelectionEvent;
use crate::geometry::{Point, Vec2};
use crate::grid::Cell;
use std::f32::consts::PI;
use tracing::debug;

/// Turns sharper than this (strictly) register a selection.
pub const TURN_THRESHOLD_RADIANS: f32 = 20.0 * PI / 180.0;

/// Strict inequality: a turn of exactly the threshold does not fire.
pub fn is_sharp_turn(angle: f32) -> bool {
    angle > TURN_THRESHOLD_RADIANS
}

/// Motion-based selection: a sharp turn in the drag path marks the symbol the
/// user turned at, so a word can be drawn as a polyline without timed pauses.
/// Needs two samples for a motion vector and three before it can fire.
#[derive(Debug, Default)]
pub struct DirectionState {
    last_point: Option<Point>,
    last_direction: Option<Vec2>,
    completed: Option<Cell>,
}

impl DirectionState {
    /// One sample. The motion vector is updated after every sample whether or
    /// not a turn fired. Zero-length vectors have no defined angle and count
    /// as no turn. Shares the completed-cell debounce contract with dwell.
    pub fn observe(&mut self, point: Point, cell: Option<Cell>) -> Option<SelectionEvent> {
        let prev = self.last_point.replace(point)?;
        let new_direction = prev.direction_to(point);

        let turned = self
            .last_direction
            .and_then(|old| old.angle_to(&new_direction))
            .is_some_and(is_sharp_turn);
        self.last_direction = Some(new_direction);

        if !turned {
            return None;
        }
        // A turn off the board selects nothing
        let cell = cell?;
        if self.completed == Some(cell) {
            return None;
        }

        debug!(row = cell.row, col = cell.col, "direction change");
        self.completed = Some(cell);
        Some(SelectionEvent { cell })
    }

    pub fn completed_cell(&self) -> Option<Cell> {
        self.completed
    }
}
