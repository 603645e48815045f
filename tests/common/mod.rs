#![allow(dead_code)]

use dragboard::correct::SpellCorrector;
use dragboard::geometry::Point;
use dragboard::grid::{Bounds, Cell};
use dragboard::speech::SpeechOutput;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Bounds that give every cell of the 9x5 board a 100x100 footprint.
pub const BOUNDS: Bounds = Bounds {
    width: 500.0,
    height: 900.0,
};

/// Physical center of a cell under `BOUNDS`.
pub fn cell_center(row: usize, col: usize) -> Point {
    Point::new(col as f32 * 100.0 + 50.0, row as f32 * 100.0 + 50.0)
}

pub fn cell(row: usize, col: usize) -> Cell {
    Cell::new(row, col)
}

/// Corrector backed by an explicit word -> correction table.
pub struct MapCorrector {
    map: HashMap<String, String>,
}

impl MapCorrector {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            map: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl SpellCorrector for MapCorrector {
    fn correct(&self, word: &str, _locale: &str) -> Option<String> {
        self.map.get(word).cloned()
    }
}

/// Speech sink that records every utterance for assertions.
#[derive(Clone, Default)]
pub struct RecordingSpeech {
    log: Rc<RefCell<Vec<String>>>,
}

impl RecordingSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spoken(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl SpeechOutput for RecordingSpeech {
    fn speak(&self, text: &str) {
        self.log.borrow_mut().push(text.to_string());
    }
}
