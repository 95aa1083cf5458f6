//! Map grid labels ("N13") as shown on the in-game map.

use super::Position;

/// Width of one grid cell in world units.
pub const GRID_CELL_SIZE: f32 = 146.3;

/// Label of the grid cell containing `position` on a square map of `world_size`.
///
/// Columns run west to east as letters, rows north to south as numbers.
/// Positions off the map clamp to the nearest border cell.
pub fn grid_label(position: Position, world_size: f32) -> String {
    let half = world_size / 2.0;
    let last = last_cell_index(world_size);

    let column = cell_index(position.x + half, last);
    let row = cell_index(half - position.z, last);

    format!("{}{}", column_letters(column), row)
}

fn last_cell_index(world_size: f32) -> u32 {
    let cells = (world_size / GRID_CELL_SIZE).ceil();
    if cells.is_finite() && cells >= 1.0 {
        cells as u32 - 1
    } else {
        0
    }
}

fn cell_index(offset: f32, last: u32) -> u32 {
    let index = (offset / GRID_CELL_SIZE).floor();
    if index.is_nan() || index < 0.0 {
        0
    } else {
        (index as u32).min(last)
    }
}

/// Spreadsheet-style column name: 0 = A, 25 = Z, 26 = AA.
fn column_letters(mut index: u32) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(char::from(b'A' + (index % 26) as u8));
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.iter().rev().collect()
}
