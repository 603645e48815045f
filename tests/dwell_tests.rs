use dragboard::detector::DwellState;
use std::time::{Duration, Instant};

mod common;
use common::cell;

const THRESHOLD: Duration = Duration::from_millis(500);

fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

#[test]
fn fires_exactly_once_per_rest() {
    let mut dwell = DwellState::default();
    let base = Instant::now();
    let c = cell(2, 3);

    assert!(dwell.observe(Some(c), at(base, 0), THRESHOLD).is_none());
    assert!(dwell.observe(Some(c), at(base, 100), THRESHOLD).is_none());

    let event = dwell.observe(Some(c), at(base, 600), THRESHOLD);
    assert_eq!(event.map(|e| e.cell), Some(c));

    // Finger keeps resting: no flood of repeats, even long past the threshold
    assert!(dwell.observe(Some(c), at(base, 700), THRESHOLD).is_none());
    assert!(dwell.observe(Some(c), at(base, 5_000), THRESHOLD).is_none());
    assert_eq!(dwell.completed_cell(), Some(c));
}

#[test]
fn timer_restarts_on_reentry() {
    let mut dwell = DwellState::default();
    let base = Instant::now();
    let first = cell(2, 3);
    let neighbor = cell(2, 4);

    assert!(dwell.observe(Some(first), at(base, 0), THRESHOLD).is_none());
    assert!(dwell.observe(Some(neighbor), at(base, 250), THRESHOLD).is_none());
    // Back on the first cell: the timer must restart from zero, not resume
    assert!(dwell.observe(Some(first), at(base, 300), THRESHOLD).is_none());
    assert!(dwell.observe(Some(first), at(base, 550), THRESHOLD).is_none());

    let event = dwell.observe(Some(first), at(base, 850), THRESHOLD);
    assert_eq!(event.map(|e| e.cell), Some(first));
}

#[test]
fn off_board_samples_are_ignored() {
    let mut dwell = DwellState::default();
    let base = Instant::now();
    let c = cell(1, 1);

    assert!(dwell.observe(Some(c), at(base, 0), THRESHOLD).is_none());
    // Pointer slips off the board: no state change
    assert!(dwell.observe(None, at(base, 200), THRESHOLD).is_none());
    assert_eq!(dwell.hovered_cell(), Some(c));

    // The original hover is still armed, so this completes
    let event = dwell.observe(Some(c), at(base, 600), THRESHOLD);
    assert_eq!(event.map(|e| e.cell), Some(c));
}

#[test]
fn same_cell_can_be_selected_again_after_dwelling_elsewhere() {
    let mut dwell = DwellState::default();
    let base = Instant::now();
    let a = cell(0, 0);
    let b = cell(0, 1);

    dwell.observe(Some(a), at(base, 0), THRESHOLD);
    assert!(dwell.observe(Some(a), at(base, 600), THRESHOLD).is_some());

    dwell.observe(Some(b), at(base, 700), THRESHOLD);
    assert!(dwell.observe(Some(b), at(base, 1_300), THRESHOLD).is_some());

    // A completed elsewhere since, so A qualifies again
    dwell.observe(Some(a), at(base, 1_400), THRESHOLD);
    assert!(dwell.observe(Some(a), at(base, 2_000), THRESHOLD).is_some());
}

#[test]
fn completion_is_sampled_not_clock_driven() {
    let mut dwell = DwellState::default();
    let base = Instant::now();
    let c = cell(3, 3);

    dwell.observe(Some(c), at(base, 0), THRESHOLD);
    // Nothing fires while no samples arrive; the first sample after the
    // threshold carries the completion, however late it is
    let event = dwell.observe(Some(c), at(base, 10_000), THRESHOLD);
    assert_eq!(event.map(|e| e.cell), Some(c));
}

#[test]
fn idle_until_first_sample() {
    let dwell = DwellState::default();
    assert_eq!(dwell.hovered_cell(), None);
    assert_eq!(dwell.completed_cell(), None);
}

#[test]
fn hover_projection_tracks_armed_cell() {
    let mut dwell = DwellState::default();
    let base = Instant::now();
    let c = cell(4, 4);

    dwell.observe(Some(c), at(base, 0), THRESHOLD);
    assert_eq!(dwell.hovered_cell(), Some(c));

    // Completion clears the hover
    dwell.observe(Some(c), at(base, 600), THRESHOLD);
    assert_eq!(dwell.hovered_cell(), None);
    assert_eq!(dwell.completed_cell(), Some(c));
}
