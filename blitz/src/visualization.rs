use crate::{GameTick, Position};

/// Renders the board of a tick for debugging.
///
/// Each cell shows the raw tile with spaces and hyphens removed (so `C-1`
/// becomes `C1`). `Tx` marks the tail of player x and `Px` its position.
pub fn visualize_tick(tick: &GameTick) -> String {
    let mut cells: Vec<Vec<String>> = tick
        .board()
        .rows()
        .iter()
        .map(|row| row.iter().map(|tile| tile.trim().replace('-', "")).collect())
        .collect();

    for player in tick.players() {
        // The last tail entry is the player's own position
        let tail_len = player.tail.len().saturating_sub(1);
        for &pos in &player.tail[..tail_len] {
            if let Some(cell) = cell_mut(&mut cells, pos) {
                if !cell.contains('P') {
                    *cell += &format!("T{}", player.id);
                }
            }
        }
        if let Some(cell) = cell_mut(&mut cells, player.position) {
            *cell += &format!("P{}", player.id);
        }
    }

    let width = cells
        .iter()
        .flatten()
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or(0)
        .max(1);
    let num_cols = cells.iter().map(Vec::len).max().unwrap_or(0);
    let border = "─".repeat(1 + num_cols * (width + 1));

    let mut result = format!("╭{}╮", border);
    for row in &cells {
        result += "\n│ ";
        for col in 0..num_cols {
            let cell = row.get(col).map(String::as_str).unwrap_or("");
            result += &format!("{:<width$} ", cell, width = width);
        }
        result += "│";
    }
    result += &format!("\n╰{}╯", border);
    result
}

fn cell_mut(cells: &mut [Vec<String>], pos: Position) -> Option<&mut String> {
    let x = usize::try_from(pos.x).ok()?;
    let y = usize::try_from(pos.y).ok()?;
    cells.get_mut(y)?.get_mut(x)
}
