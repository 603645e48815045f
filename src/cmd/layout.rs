use clap::Args;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell as TableCell, CellAlignment, Table};
use dragboard::error::DbResult;
use dragboard::layouts::{grid_for, Layout};

#[derive(Args, Debug, Clone)]
pub struct ShowLayoutArgs {
    #[arg(long, value_enum, default_value_t = Layout::Alphabetical)]
    pub layout: Layout,
}

pub fn run(args: ShowLayoutArgs) -> DbResult<()> {
    let grid = grid_for(args.layout);

    println!("\nLayout: {}", args.layout);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in grid.rows() {
        let cells: Vec<TableCell> = row
            .iter()
            .map(|sym| TableCell::new(sym.to_string()).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
    Ok(())
}
