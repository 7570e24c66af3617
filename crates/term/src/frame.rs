//! Text frames: one line per grid row, one glyph per cell.
//!
//! This module is pure apart from [`print_grid`]; it can be unit-tested.

use std::io::{self, Write};

use anyhow::Result;

use crate::core::Grid;
use crate::types::{ALIVE_GLYPH, DEAD_GLYPH};

#[inline(always)]
fn glyph(alive: bool) -> char {
    if alive {
        ALIVE_GLYPH
    } else {
        DEAD_GLYPH
    }
}

/// Render `grid` into `out`, replacing its previous contents.
///
/// Reusing one `String` across frames avoids reallocating every generation.
pub fn render_frame_into(grid: &Grid, out: &mut String) {
    out.clear();
    out.reserve((grid.width() * ALIVE_GLYPH.len_utf8() + 1) * grid.height());
    for row in grid.rows() {
        out.extend(row.iter().map(|&alive| glyph(alive)));
        out.push('\n');
    }
}

/// Render `grid` as text. Rows top to bottom, each terminated by `\n`.
pub fn render_frame(grid: &Grid) -> String {
    let mut out = String::new();
    render_frame_into(grid, &mut out);
    out
}

/// Write the rendered frame to any byte sink.
pub fn write_frame<W: Write + ?Sized>(out: &mut W, grid: &Grid) -> io::Result<()> {
    out.write_all(render_frame(grid).as_bytes())
}

/// Write the rendered frame to stdout.
pub fn print_grid(grid: &Grid) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_frame(&mut lock, grid)?;
    lock.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_reuses_buffer() {
        let grid = Grid::new(3, 2);
        let mut buf = String::from("stale contents");
        render_frame_into(&grid, &mut buf);
        assert_eq!(buf, "   \n   \n");
    }

    #[test]
    fn write_frame_matches_render() {
        let mut grid = Grid::new(2, 1);
        grid.set(1, 0, true);
        let mut bytes = Vec::new();
        write_frame(&mut bytes, &grid).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), render_frame(&grid));
    }
}
