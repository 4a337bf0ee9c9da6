//! Plain-text renderer for terminals and logs.
//!
//! Draws the board top row first, the way it looks on a printed board, with
//! each cell shown as its number plus a one-character mark:
//!
//! | mark | meaning                 |
//! |------|-------------------------|
//! | `1`  | player 1's token        |
//! | `2`  | player 2's token        |
//! | `*`  | both tokens             |
//! | `v`  | snake head              |
//! | `^`  | ladder foot             |

use std::fmt::Write as _;
use std::io::{self, Write};

use super::Renderer;
use crate::board::{cell_at, BoardCoordinate, Cell, JumpKind, JumpTable, BOARD_WIDTH};
use crate::core::{MoveRecord, Snapshot};

/// Writes frames as text to any `io::Write`.
pub struct TextRenderer<W: Write> {
    out: W,
    jumps: JumpTable,
}

impl<W: Write> TextRenderer<W> {
    /// Render to `out`, marking the snakes and ladders of `jumps`.
    pub fn new(out: W, jumps: JumpTable) -> Self {
        Self { out, jumps }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// The board as lines of text, top row first.
    #[must_use]
    pub fn board_lines(&self, snapshot: &Snapshot) -> Vec<String> {
        (0..BOARD_WIDTH)
            .rev()
            .map(|row| {
                let mut line = String::new();
                for column in 0..BOARD_WIDTH {
                    if let Some(cell) = cell_at(BoardCoordinate { column, row }) {
                        let _ = write!(line, "{:>3}{} ", cell.index(), self.mark(cell, snapshot));
                    }
                }
                line.trim_end().to_string()
            })
            .collect()
    }

    fn mark(&self, cell: Cell, snapshot: &Snapshot) -> char {
        match (snapshot.player_one() == cell, snapshot.player_two() == cell) {
            (true, true) => '*',
            (true, false) => '1',
            (false, true) => '2',
            (false, false) => match self.jumps.jump_at(cell).map(|j| j.kind) {
                Some(JumpKind::Snake) => 'v',
                Some(JumpKind::Ladder) => '^',
                None => ' ',
            },
        }
    }
}

/// The turn line: whose move it is, or who won.
#[must_use]
pub fn turn_line(snapshot: &Snapshot) -> String {
    match snapshot.winner {
        Some(winner) => format!("{winner} wins! Press q to exit."),
        None => format!("Player {}'s Turn", snapshot.current_turn.number()),
    }
}

/// The info line: the last roll, or a prompt before the first one.
#[must_use]
pub fn info_line(snapshot: &Snapshot) -> String {
    match snapshot.last_move() {
        Some(record) => describe_move(record),
        None => "Press ENTER to roll the dice".to_string(),
    }
}

fn describe_move(record: &MoveRecord) -> String {
    let mut line = format!("Dice: {}", record.roll);
    match record.jump {
        Some(JumpKind::Snake) => {
            let _ = write!(line, " - snake! {} slides from {} to {}", record.player, record.landed.index(), record.to.index());
        }
        Some(JumpKind::Ladder) => {
            let _ = write!(line, " - ladder! {} climbs from {} to {}", record.player, record.landed.index(), record.to.index());
        }
        None => {}
    }
    line
}

impl<W: Write> Renderer for TextRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        for line in self.board_lines(snapshot) {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        writeln!(
            self.out,
            "P1: {:>3}   P2: {:>3}",
            snapshot.player_one().index(),
            snapshot.player_two().index()
        )?;
        writeln!(self.out, "{}", turn_line(snapshot))?;
        writeln!(self.out, "{}", info_line(snapshot))?;
        self.out.flush()
    }

    fn spin_frame(&mut self, face: u8) -> io::Result<()> {
        write!(self.out, "\rRolling... {face}")?;
        self.out.flush()
    }
}
