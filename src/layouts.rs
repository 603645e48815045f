use crate::grid::{Grid, Symbol};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Which letter arrangement the board uses. Control and digit rows are the
/// same in every layout; only the 26 letters move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    #[default]
    Alphabetical,
    Frequency,
    Qwerty,
}

impl Layout {
    /// The 26 letters in board order, filled into 5-wide rows; the 26th
    /// letter leads the control row.
    fn letter_order(&self) -> &'static str {
        match self {
            Self::Alphabetical => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Self::Frequency => "ETAOINSRHLDCUMFPGWYBVKXJQZ",
            Self::Qwerty => "QWERTYUIOPASDFGHJKLZXCVBNM",
        }
    }
}

const BOARD_WIDTH: usize = 5;

/// Builds the board for a layout: five letter rows, the control row
/// (26th letter, Space, quick words), the phrase row, and two digit rows.
pub fn grid_for(layout: Layout) -> Grid {
    let letters: Vec<String> = layout.letter_order().chars().map(String::from).collect();

    let mut rows: Vec<Vec<Symbol>> = letters[..25]
        .chunks(BOARD_WIDTH)
        .map(|chunk| chunk.iter().map(|s| Symbol::text(s)).collect())
        .collect();

    rows.push(vec![
        Symbol::text(&letters[25]),
        Symbol::Space,
        Symbol::text("YES"),
        Symbol::text("NO"),
        Symbol::text("Please"),
    ]);
    rows.push(vec![
        Symbol::text("Thank you"),
        Symbol::text("OK"),
        Symbol::text("The"),
        Symbol::Blank,
        Symbol::Blank,
    ]);
    rows.push((0..5).map(|d| Symbol::text(&d.to_string())).collect());
    rows.push((5..10).map(|d| Symbol::text(&d.to_string())).collect());

    Grid::new(rows).expect("built-in layout is rectangular")
}
