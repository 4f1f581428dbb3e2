//! Layout module - target layouts, shuffled blocks and distraction blocks
//!
//! A round starts from a [`Layout`]: one palette color per grid cell. When
//! the memory phase ends, the layout is turned into a shuffled tray of
//! [`Block`]s, optionally with one extra decoy block that has no correct
//! cell.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::rng::SimpleRng;
use crate::types::{CellIndex, Color, PALETTE};

/// One fixed target assignment of a color to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutEntry {
    pub position: CellIndex,
    pub color: Color,
}

/// Target layout, ordered by position.
pub type Layout = Vec<LayoutEntry>;

/// Placeable block in the tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub id: usize,
    pub color: Color,
    /// Cell this block came from; `None` for a distraction block.
    pub origin_position: Option<CellIndex>,
    pub shuffled_order: usize,
    pub is_distraction: bool,
}

/// Generate a random target layout.
///
/// Every cell independently gets a uniformly random color from the first
/// `min(color_count, PALETTE.len())` palette entries. Repeats are allowed.
pub fn generate_layout(
    grid_size: usize,
    color_count: usize,
    rng: &mut SimpleRng,
) -> Result<Layout, CoreError> {
    if grid_size == 0 || color_count == 0 {
        return Err(CoreError::InvalidConfig {
            grid_size,
            color_count,
        });
    }

    let colors = &PALETTE[..color_count.min(PALETTE.len())];
    let total = grid_size * grid_size;

    let mut layout = Vec::with_capacity(total);
    for position in 0..total {
        let color = colors[rng.next_index(colors.len())];
        layout.push(LayoutEntry { position, color });
    }
    Ok(layout)
}

/// Turn a layout into a uniformly shuffled tray of blocks.
///
/// Block ids are the origin positions, so they are unique and stable for
/// the round; `shuffled_order` is the block's index in the returned tray.
pub fn shuffle_blocks(layout: &[LayoutEntry], rng: &mut SimpleRng) -> Vec<Block> {
    let mut entries = layout.to_vec();
    rng.shuffle(&mut entries);

    entries
        .into_iter()
        .enumerate()
        .map(|(order, entry)| Block {
            id: entry.position,
            color: entry.color,
            origin_position: Some(entry.position),
            shuffled_order: order,
            is_distraction: false,
        })
        .collect()
}

/// Append one decoy block whose color is not used by any block in the tray.
///
/// Candidate colors come from the whole palette, not only the first
/// `color_count` entries, so the decoy may show a color that never appears
/// in the layout's active palette. Returns the tray unchanged when every
/// palette color is already in use.
pub fn add_distraction(blocks: Vec<Block>, color_count: usize, rng: &mut SimpleRng) -> Vec<Block> {
    let used: HashSet<&str> = blocks.iter().map(|b| b.color.id).collect();
    let unused: Vec<Color> = PALETTE
        .iter()
        .filter(|c| !used.contains(c.id))
        .copied()
        .collect();

    let Some(&color) = rng.pick(&unused) else {
        return blocks;
    };

    let outside_active_palette = PALETTE
        .iter()
        .position(|c| c.id == color.id)
        .map_or(true, |i| i >= color_count);
    tracing::debug!(
        color = color.id,
        outside_active_palette,
        "injected distraction block"
    );

    let id = blocks.iter().map(|b| b.id + 1).max().unwrap_or(0);
    let shuffled_order = blocks.len();
    let mut out = blocks;
    out.push(Block {
        id,
        color,
        origin_position: None,
        shuffled_order,
        is_distraction: true,
    });
    out
}
