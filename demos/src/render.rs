//! Fixed-width text rendering of a cost map.

use std::io::{self, Write};

use marching_core::{Bounds, Point};
use marching_front::CostMap;

/// Width of a rendered cell, separator excluded.
const CELL_WIDTH: usize = 5;

/// Glyph for points without a cost.
const MISSING: &str = ".";

/// Write `costs` as a grid: a header of `x` coordinates, then one row per
/// `y` from top (`max.y`) to bottom (`min.y`). Only points on the `step`
/// lattice anchored at `bounds.min` are shown.
pub fn write_grid<W: Write>(
    out: &mut W,
    costs: &CostMap,
    bounds: Bounds,
    step: i32,
) -> io::Result<()> {
    let step = step.max(1) as usize;
    let xs: Vec<i32> = (bounds.min.x..=bounds.max.x).step_by(step).collect();

    write!(out, "   x:")?;
    for x in &xs {
        write!(out, " {x:>CELL_WIDTH$}")?;
    }
    writeln!(out)?;
    writeln!(out, "  y")?;

    // Rows are anchored at min.y so they line up with the lattice.
    let rows: Vec<i32> = (bounds.min.y..=bounds.max.y).step_by(step).collect();
    for &y in rows.iter().rev() {
        write!(out, "{y:>CELL_WIDTH$}:")?;
        for &x in &xs {
            match costs.get(Point::new(x, y)) {
                Some(c) => write!(out, " {}", format_cost(c))?,
                None => write!(out, " {MISSING:>CELL_WIDTH$}")?,
            }
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Three significant digits, right-aligned.
fn format_cost(c: f64) -> String {
    let prec: usize = if c < 10.0 {
        2
    } else if c < 100.0 {
        1
    } else {
        0
    };
    format!("{c:>CELL_WIDTH$.prec$}")
}
