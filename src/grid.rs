//! Fixed 4×8 icon grid laid over the sprite sheet.

use anyhow::Result;

/// Number of icon columns in the sheet.
pub const COLUMNS: u32 = 4;

/// Number of icon rows in the sheet.
pub const ROWS: u32 = 8;

/// Cell dimensions derived from the sheet size.
///
/// The sheet carries a small margin, so the cell height is `(H - 2) / 8` and
/// the cell width is `W / 4 - 2`. Pixels past the last full cell are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub cell_width: u32,
    pub cell_height: u32,
}

/// Position of one icon in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Grid {
    /// Compute the grid for a sheet of `width` × `height` pixels.
    pub fn for_sheet(width: u32, height: u32) -> Result<Self> {
        let cell_height = height.saturating_sub(2) / ROWS;
        let cell_width = (width / COLUMNS).saturating_sub(2);

        if cell_width == 0 || cell_height == 0 {
            anyhow::bail!(
                "Sprite sheet {}x{} is too small for a {}x{} grid (cell would be {}x{})",
                width,
                height,
                COLUMNS,
                ROWS,
                cell_width,
                cell_height
            );
        }

        Ok(Self {
            cell_width,
            cell_height,
        })
    }

    /// Top-left pixel of `cell` in sheet coordinates.
    pub fn origin(&self, cell: Cell) -> (u32, u32) {
        (cell.x * self.cell_width, cell.y * self.cell_height)
    }
}

impl Cell {
    /// All cells in row-major order, numbered 1 to 32.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..ROWS).flat_map(|y| (0..COLUMNS).map(move |x| Cell { x, y }))
    }

    /// 1-based row-major index.
    pub fn number(&self) -> u32 {
        1 + self.x + self.y * COLUMNS
    }

    pub fn file_name(&self) -> String {
        format!("algo_{}.png", self.number())
    }
}
