use image::io::Reader as ImageReader;
use sprite_slicer::grid::{Cell, COLUMNS, ROWS};
use std::path::Path;

fn main() {
    let dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let dir = Path::new(&dir);

    println!("Checking sliced icons in: {}", dir.display());

    let mut expected_size = None;
    let mut missing = 0;
    let mut mismatched = 0;

    for cell in Cell::all() {
        let path = dir.join(cell.file_name());
        let img = match ImageReader::open(&path).and_then(|r| r.with_guessed_format()) {
            Ok(reader) => match reader.decode() {
                Ok(img) => img,
                Err(err) => {
                    println!("  ✗ {}: {}", cell.file_name(), err);
                    missing += 1;
                    continue;
                }
            },
            Err(_) => {
                println!("  ✗ {} is missing", cell.file_name());
                missing += 1;
                continue;
            }
        };

        let rgb = img.to_rgb8();
        let size = rgb.dimensions();
        let corner = rgb.get_pixel(0, 0);
        println!(
            "  {} {}x{} top-left RGB: [{}, {}, {}]",
            cell.file_name(),
            size.0,
            size.1,
            corner[0],
            corner[1],
            corner[2]
        );

        match expected_size {
            None => expected_size = Some(size),
            Some(expected) if expected != size => {
                println!(
                    "  ✗ {} is {}x{}, expected {}x{}",
                    cell.file_name(),
                    size.0,
                    size.1,
                    expected.0,
                    expected.1
                );
                mismatched += 1;
            }
            Some(_) => {}
        }
    }

    let total = COLUMNS * ROWS;
    println!("\nSlice analysis:");
    println!("  {} of {} icons present", total - missing, total);
    println!("  {} size mismatches", mismatched);

    if missing == 0 && mismatched == 0 {
        println!("✓ All icons present and uniformly sized");
    } else {
        let last = Cell {
            x: COLUMNS - 1,
            y: ROWS - 1,
        };
        println!(
            "⚠ Expected algo_1.png through {} with matching sizes",
            last.file_name()
        );
        std::process::exit(1);
    }
}
