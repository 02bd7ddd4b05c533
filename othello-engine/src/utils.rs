//! Miscellaneous project utilities.

use itertools::Itertools;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format `size * size` cells into a grid with column and row indices.
/// `cell_iter` must yield exactly `size * size` items, in row-major order.
pub fn format_grid<T, I>(mut cell_iter: I, size: usize, f: &mut Formatter) -> fmt::Result
where
    T: fmt::Display,
    I: Iterator<Item = T>,
{
    write!(f, "  {}", (0..size).join(" "))?;

    for row in 0..size {
        write!(f, "\n{}", row)?;
        for _ in 0..size {
            write!(f, " {}", cell_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match cell_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
