use std::ops::Range;

use crate::GeneMatchError;

/// A contiguous range of candidate `start1` rows handled by one lane.
///
/// `index` is the tile's position in the map; `rows` the global row range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTile {
    pub index: usize,
    pub rows: Range<usize>,
}

impl RowTile {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Map candidate rows to fixed-height tiles.
#[derive(Debug, Clone)]
pub struct TileMap {
    total_rows: usize,
    tile_rows: usize,
}

impl TileMap {
    /// Create a new `TileMap` covering `total_rows` rows, `tile_rows` per tile.
    pub fn new(total_rows: usize, tile_rows: usize) -> Result<Self, GeneMatchError> {
        if tile_rows == 0 {
            return Err(GeneMatchError::Config("tile_rows must be at least 1".into()));
        }
        Ok(Self { total_rows, tile_rows })
    }

    /// Number of tiles implied by this map.
    pub fn tile_count(&self) -> usize {
        if self.total_rows == 0 { 0 } else { (self.total_rows - 1) / self.tile_rows + 1 }
    }

    /// Map a global row to `(tile, offset)`.
    pub fn map_row(&self, row: usize) -> Option<(usize, usize)> {
        if row >= self.total_rows { return None; }
        Some((row / self.tile_rows, row % self.tile_rows))
    }

    /// The tile at `index`.
    pub fn tile(&self, index: usize) -> Result<RowTile, GeneMatchError> {
        if index >= self.tile_count() {
            return Err(GeneMatchError::Config(format!(
                "tile {index} out of range ({} tiles)",
                self.tile_count()
            )));
        }
        let start = index * self.tile_rows;
        let end = (start + self.tile_rows).min(self.total_rows);
        Ok(RowTile { index, rows: start..end })
    }

    /// Every tile, in row order.
    pub fn tiles(&self) -> Vec<RowTile> {
        let mut tiles = Vec::with_capacity(self.tile_count());
        let mut start = 0usize;
        while start < self.total_rows {
            let end = (start + self.tile_rows).min(self.total_rows);
            tiles.push(RowTile { index: tiles.len(), rows: start..end });
            start = end;
        }
        tiles
    }
}
