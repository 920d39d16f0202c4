use crate::grid::{Cell, Grid, COLUMNS, ROWS};
use crate::recolor;
use anyhow::{Context, Result};
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage, RgbaImage};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Where to read the sheet from and where to put the icons.
#[derive(Debug, Clone)]
pub struct Options {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Load, recolor and slice the sprite sheet described by `options`.
pub fn run(options: &Options) -> Result<Vec<PathBuf>> {
    let mut sheet = load_sheet(&options.input)?;

    println!("Recoloring {}...", options.input.display());
    recolor::apply_palette(&mut sheet);

    slice_sheet(&sheet, &options.output)
}

fn load_sheet(path: &Path) -> Result<RgbaImage> {
    let source = image::open(path)
        .with_context(|| format!("Failed to load sprite sheet: {}", path.display()))?;

    println!("Sprite sheet size: ({}, {})", source.width(), source.height());
    let sheet = source.to_rgba8();
    println!("Pixel array shape: ({}, {}, 4)", sheet.height(), sheet.width());

    Ok(sheet)
}

/// Copy the RGB channels of `cell` out of the sheet.
pub fn crop_cell(sheet: &RgbaImage, grid: &Grid, cell: Cell) -> RgbImage {
    let (left, top) = grid.origin(cell);
    RgbImage::from_fn(grid.cell_width, grid.cell_height, |x, y| {
        let pixel = sheet.get_pixel(left + x, top + y);
        Rgb([pixel[0], pixel[1], pixel[2]])
    })
}

/// Write every grid cell of `sheet` into `out_dir` as `algo_<n>.png`.
///
/// The grid is validated before anything is written, so a sheet that is too
/// small leaves `out_dir` untouched.
pub fn slice_sheet(sheet: &RgbaImage, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let grid = Grid::for_sheet(sheet.width(), sheet.height())?;

    create_dir_all(out_dir)
        .with_context(|| format!("Can't create output directory: {}", out_dir.display()))?;

    println!(
        "Generating {} icons of {}x{}...",
        COLUMNS * ROWS,
        grid.cell_width,
        grid.cell_height
    );

    let mut written = Vec::new();
    for cell in Cell::all() {
        let icon = crop_cell(sheet, &grid, cell);
        let path = out_dir.join(cell.file_name());
        save_png(icon, &path)?;
        println!("  ✓ Generated {}", cell.file_name());
        written.push(path);
    }

    Ok(written)
}

fn save_png(icon: RgbImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    DynamicImage::ImageRgb8(icon)
        .write_to(&mut writer, ImageOutputFormat::Png)
        .with_context(|| format!("Failed to write PNG: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write PNG: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn crop_copies_rgb_and_drops_alpha() {
        let sheet = RgbaImage::from_fn(44, 82, |x, y| Rgba([x as u8, y as u8, 7, 100]));
        let grid = Grid::for_sheet(44, 82).unwrap();

        let icon = crop_cell(&sheet, &grid, Cell { x: 2, y: 3 });

        assert_eq!(icon.dimensions(), (9, 10));
        assert_eq!(*icon.get_pixel(0, 0), Rgb([18, 30, 7]));
        assert_eq!(*icon.get_pixel(8, 9), Rgb([26, 39, 7]));
    }

    #[test]
    fn last_cell_stays_inside_the_sheet() {
        let sheet = RgbaImage::from_pixel(44, 82, Rgba([1, 2, 3, 255]));
        let grid = Grid::for_sheet(44, 82).unwrap();

        let icon = crop_cell(&sheet, &grid, Cell { x: 3, y: 7 });

        assert_eq!(icon.dimensions(), (9, 10));
        assert!(icon.pixels().all(|p| *p == Rgb([1, 2, 3])));
    }

    #[test]
    fn output_directory_error_names_the_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let out_dir = blocker.join("icons");
        let sheet = RgbaImage::from_pixel(44, 82, Rgba([1, 2, 3, 255]));

        let err = slice_sheet(&sheet, &out_dir).unwrap_err();

        let message = format!("{:#}", err);
        assert!(
            message.contains(&out_dir.display().to_string()),
            "error should name {}: {}",
            out_dir.display(),
            message
        );
    }

    #[test]
    fn png_write_error_names_the_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let out_dir = temp_dir.path();
        // A directory where the first icon should go makes File::create fail.
        std::fs::create_dir(out_dir.join("algo_1.png")).unwrap();
        let sheet = RgbaImage::from_pixel(44, 82, Rgba([1, 2, 3, 255]));

        let err = slice_sheet(&sheet, out_dir).unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("algo_1.png"), "error should name the icon: {}", message);
        assert!(!out_dir.join("algo_2.png").exists());
    }
}
