//! Weightage to quota conversion and random grid fill

use crate::color::ColorWeightage;
use crate::config::TOTAL_WEIGHTAGE;
use crate::error::{GridError, Result};
use crate::random::random_int_inclusive;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Remaining number of cells a color still has to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOccurrence {
    pub color: u32,
    pub occurrences: u32,
}

/// Generated square grid, flattened row by row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub matrix: Vec<u32>,
    pub size: usize,
}

impl Grid {
    /// Iterate the grid one row at a time
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.matrix.chunks(self.size.max(1))
    }

    /// Number of cells holding `color`
    pub fn count_of(&self, color: u32) -> usize {
        self.matrix.iter().filter(|c| **c == color).count()
    }
}

/// Convert weightages into exact per-color cell quotas for a `grid_size` grid
///
/// Every color but the last gets `ceil(cells * weightage / 100)`. The last
/// color receives whatever is left so the quotas always add up to the cell
/// count. Ceiling can overshoot far enough to leave the last color with
/// nothing; that case is reported as [`GridError::QuotaUnderflow`].
pub fn compute_quotas(
    weightages: &[ColorWeightage],
    grid_size: usize,
) -> Result<Vec<ColorOccurrence>> {
    let (last, rest) = weightages.split_last().ok_or(GridError::EmptyColorSet)?;
    let flat_size = (grid_size * grid_size) as u64;
    let total = TOTAL_WEIGHTAGE as u64;

    let mut quotas = Vec::with_capacity(weightages.len());
    let mut assigned: u64 = 0;
    for entry in rest {
        let occurrences = (flat_size * entry.weightage as u64).div_ceil(total);
        assigned += occurrences;
        quotas.push(ColorOccurrence {
            color: entry.color,
            occurrences: occurrences as u32,
        });
    }

    let remainder = flat_size as i64 - assigned as i64;
    if remainder < 1 {
        return Err(GridError::QuotaUnderflow {
            color: last.color,
            quota: remainder,
        });
    }
    quotas.push(ColorOccurrence {
        color: last.color,
        occurrences: remainder as u32,
    });

    debug!("Quotas for {grid_size}x{grid_size} grid: {quotas:?}");
    Ok(quotas)
}

/// Draw the next cell color from the working occurrence list
///
/// The draw is uniform over the entries still present, not weighted by how
/// many cells each has left. An entry is removed once its last cell is used.
/// Returns `None` when the list is exhausted.
pub fn generate_random_cell<R: Rng + ?Sized>(
    rng: &mut R,
    occurrences: &mut Vec<ColorOccurrence>,
) -> Option<u32> {
    if occurrences.is_empty() {
        return None;
    }

    let index = random_int_inclusive(rng, 0, (occurrences.len() - 1) as i32) as usize;
    let entry = &mut occurrences[index];
    let color = entry.color;
    if entry.occurrences <= 1 {
        occurrences.remove(index);
    } else {
        entry.occurrences -= 1;
    }
    Some(color)
}

/// Fill `flat_size` cells by drawing against the quotas, in draw order
///
/// The quotas must cover exactly `flat_size` cells.
pub fn fill_grid<R: Rng + ?Sized>(
    rng: &mut R,
    mut occurrences: Vec<ColorOccurrence>,
    flat_size: usize,
) -> Result<Vec<u32>> {
    let assigned: usize = occurrences.iter().map(|o| o.occurrences as usize).sum();
    if assigned != flat_size {
        return Err(GridError::QuotaMismatch {
            assigned,
            cells: flat_size,
        });
    }

    let mut matrix = Vec::with_capacity(flat_size);
    while let Some(color) = generate_random_cell(rng, &mut occurrences) {
        matrix.push(color);
    }
    Ok(matrix)
}

/// Build the grid for a color set
pub fn compose_grid<R: Rng + ?Sized>(
    rng: &mut R,
    weightages: &[ColorWeightage],
    grid_size: usize,
) -> Result<Grid> {
    let quotas = compute_quotas(weightages, grid_size)?;
    let matrix = fill_grid(rng, quotas, grid_size * grid_size)?;
    Ok(Grid {
        matrix,
        size: grid_size,
    })
}
