//! Exact-match pixel recoloring for the sprite sheet.

use image::{Rgb, RgbaImage};

/// Background painted under fully transparent pixels (#12083D).
pub const BACKGROUND: Rgb<u8> = Rgb([18, 8, 61]);

/// A single exact-match color replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub from: Rgb<u8>,
    pub to: Rgb<u8>,
}

/// Substitutions applied after the background pass, in order.
///
/// White is first turned red and red is later turned gray, so original white
/// pixels end up gray. Reordering these changes the output.
pub const SUBSTITUTIONS: [Substitution; 3] = [
    Substitution {
        from: Rgb([255, 255, 255]),
        to: Rgb([255, 0, 0]),
    },
    Substitution {
        from: Rgb([0, 0, 0]),
        to: Rgb([255, 255, 255]),
    },
    Substitution {
        from: Rgb([255, 0, 0]),
        to: Rgb([127, 127, 127]),
    },
];

/// Set the RGB of every pixel with alpha == 0 to `color`.
/// Alpha is kept. Returns the number of pixels changed.
pub fn set_background(sheet: &mut RgbaImage, color: Rgb<u8>) -> usize {
    let mut changed = 0;
    for pixel in sheet.pixels_mut().filter(|p| p[3] == 0) {
        pixel[0] = color[0];
        pixel[1] = color[1];
        pixel[2] = color[2];
        changed += 1;
    }
    changed
}

/// Replace every pixel whose RGB is exactly `from` with `to`.
/// Alpha is neither matched nor modified. Returns the number of pixels changed.
pub fn change_color(sheet: &mut RgbaImage, from: Rgb<u8>, to: Rgb<u8>) -> usize {
    let mut changed = 0;
    for pixel in sheet
        .pixels_mut()
        .filter(|p| p[0] == from[0] && p[1] == from[1] && p[2] == from[2])
    {
        pixel[0] = to[0];
        pixel[1] = to[1];
        pixel[2] = to[2];
        changed += 1;
    }
    changed
}

/// Run the background pass followed by every entry of [`SUBSTITUTIONS`].
pub fn apply_palette(sheet: &mut RgbaImage) {
    let changed = set_background(sheet, BACKGROUND);
    println!(
        "  ✓ Background {} applied to {} transparent pixels",
        format_rgb(BACKGROUND),
        changed
    );

    for substitution in SUBSTITUTIONS {
        let changed = change_color(sheet, substitution.from, substitution.to);
        println!(
            "  ✓ Recolored {} -> {} ({} pixels)",
            format_rgb(substitution.from),
            format_rgb(substitution.to),
            changed
        );
    }
}

fn format_rgb(color: Rgb<u8>) -> String {
    format!("({}, {}, {})", color[0], color[1], color[2])
}
