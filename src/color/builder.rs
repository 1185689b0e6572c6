//! Distinct color draw and weightage partitioning

use crate::config::{GameConfig, TOTAL_WEIGHTAGE};
use crate::error::{GridError, Result};
use crate::random::random_int_inclusive;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A color and its target share of the grid, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorWeightage {
    pub color: u32,
    pub weightage: u32,
}

/// Draw a color from `0..palette_size` that is not in `chosen`
///
/// Rejection sampling: duplicates are redrawn until a free color turns up.
/// Fails instead of looping forever when the palette has no free color left.
pub fn draw_distinct_color<R: Rng + ?Sized>(
    rng: &mut R,
    chosen: &[u32],
    palette_size: usize,
) -> Result<u32> {
    if chosen.len() >= palette_size {
        return Err(GridError::PaletteTooSmall {
            requested: chosen.len() + 1,
            palette_size,
        });
    }

    let max = (palette_size - 1) as i32;
    loop {
        let color = random_int_inclusive(rng, 0, max) as u32;
        if !chosen.contains(&color) {
            return Ok(color);
        }
    }
}

/// Weightage for the color at `index` out of `color_count`
///
/// Every color but the last draws from `[minimum, remaining - minimum * colors_left]`
/// so each still unassigned color keeps room for its minimum share.
/// The last color takes whatever remains.
pub fn weightage_for_index<R: Rng + ?Sized>(
    rng: &mut R,
    remaining: u32,
    color_count: usize,
    index: usize,
    minimum: u32,
) -> Result<u32> {
    if index + 1 >= color_count {
        return Ok(remaining);
    }

    let colors_left = (color_count - index - 1) as i64;
    let min = minimum as i64;
    let max = remaining as i64 - min * colors_left;
    if max < min {
        return Err(GridError::WeightageRange {
            index,
            min: min as i32,
            max: max as i32,
        });
    }

    Ok(random_int_inclusive(rng, min as i32, max as i32) as u32)
}

/// Pick `color_count` distinct colors and split 100% of weightage across them
///
/// Colors are returned in draw order. Weightages sum to exactly 100 and each
/// is at least the configured minimum.
pub fn build_color_set<R: Rng + ?Sized>(
    rng: &mut R,
    color_count: usize,
    config: &GameConfig,
) -> Result<Vec<ColorWeightage>> {
    if color_count == 0 {
        return Err(GridError::EmptyColorSet);
    }
    if color_count > config.palette_size {
        return Err(GridError::PaletteTooSmall {
            requested: color_count,
            palette_size: config.palette_size,
        });
    }

    let mut chosen: Vec<u32> = Vec::with_capacity(color_count);
    let mut set = Vec::with_capacity(color_count);
    let mut remaining = TOTAL_WEIGHTAGE;

    for index in 0..color_count {
        let color = draw_distinct_color(rng, &chosen, config.palette_size)?;
        chosen.push(color);

        let weightage =
            weightage_for_index(rng, remaining, color_count, index, config.minimum_weightage)?;
        remaining -= weightage;
        set.push(ColorWeightage { color, weightage });
    }

    debug!("Color set drawn: {set:?}");
    Ok(set)
}
