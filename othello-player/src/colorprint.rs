//! Coloured terminal output for the board, moves and messages.

use colored::{Color, ColoredString, Colorize};
use itertools::Itertools;
use othello_engine::{Board, Disk, Move};

/// The terminal colour used for a disk.
pub const fn disk_color(disk: Disk) -> Color {
    match disk {
        Disk::Black => Color::Magenta,
        Disk::Empty => Color::White,
        Disk::White => Color::Cyan,
    }
}

/// Board character for a disk, coloured.
pub fn colored_char(disk: Disk) -> ColoredString {
    disk.board_char().to_string().color(disk_color(disk))
}

/// Disk name ("BLACK"), coloured.
pub fn colored_name(disk: Disk) -> ColoredString {
    disk.to_string().color(disk_color(disk))
}

/// Print error message with red colour.
pub fn print_error(message: &str) {
    let (indent, text) = split_leading_whitespace(message);
    println!("{}", format!("{}Error: {}", indent, text).red());
}

/// Print warning message with yellow colour.
pub fn print_warn(message: &str) {
    let (indent, text) = split_leading_whitespace(message);
    println!("{}", format!("{}Warning: {}", indent, text).yellow());
}

/// Render the board with coloured disks and bold indices.
pub fn format_board(board: &Board) -> String {
    let cells: Vec<ColoredString> = board.disks().iter().map(|&d| colored_char(d)).collect();
    format_cells(&cells, board.size())
}

/// Render the board with each possible move's value drawn on its square.
pub fn format_possible_moves(board: &Board, moves: &[Move]) -> String {
    let mut cells: Vec<ColoredString> = board.disks().iter().map(|&d| colored_char(d)).collect();
    for mv in moves {
        cells[mv.square.to_index(board.size())] = mv.value.to_string().yellow();
    }

    let listing = moves.iter().map(|mv| format!("  {}", mv)).join("\n");
    format!(
        "{}\n{}\n{}",
        format!("  Possible moves ({}):", moves.len()).yellow(),
        listing,
        format_cells(&cells, board.size())
    )
}

/// Print the board followed by the current disk counts.
pub fn print_score(board: &Board) {
    let (black, white) = board.player_scores();
    println!("\n{}", format_board(board));
    println!(
        "Score: {} | {}",
        black.to_string().magenta(),
        white.to_string().cyan()
    );
}

fn format_cells(cells: &[ColoredString], size: usize) -> String {
    let header = format!("    {}", (0..size).map(|i| i.to_string().bold()).join(" "));
    let rows = cells
        .chunks(size)
        .enumerate()
        .map(|(y, row)| format!("  {} {}", y.to_string().bold(), row.iter().join(" ")));
    std::iter::once(header).chain(rows).join("\n")
}

/// Split a string into the leading whitespace and the rest of the string.
fn split_leading_whitespace(message: &str) -> (&str, &str) {
    let indent_size = message.len() - message.trim_start().len();
    message.split_at(indent_size)
}
