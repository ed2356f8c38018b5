//! Terminal preview of a raster using 24-bit ANSI colors.
//!
//! Each character cell shows two vertically stacked pixels: the upper half
//! block takes the top pixel as foreground and the bottom pixel as background.

use isle_terrain::Raster;

const UPPER_HALF: char = '\u{2580}';
const RESET: &str = "\x1b[0m";

/// Grid of sampled pixels for a preview `columns` characters wide.
///
/// Rows are chosen to keep the raster's aspect ratio and rounded up to an
/// even count so every character cell has two pixels.
pub fn preview_grid(raster: &Raster, columns: u32) -> (u32, u32) {
    let (width, height) = raster.dimensions();
    let cols = columns.clamp(1, width);
    let rows = (u64::from(cols) * u64::from(height)).div_ceil(u64::from(width)) as u32;
    (cols, rows.max(1).next_multiple_of(2))
}

/// Nearest-neighbor downsample into `cols` x `rows` RGB samples.
fn sample(raster: &Raster, cols: u32, rows: u32) -> Vec<(u8, u8, u8)> {
    let (width, height) = raster.dimensions();
    let mut samples = Vec::with_capacity((cols * rows) as usize);
    for row in 0..rows {
        let y = ((u64::from(row) * u64::from(height)) / u64::from(rows)) as u32;
        let y = y.min(height - 1);
        for col in 0..cols {
            let x = ((u64::from(col) * u64::from(width)) / u64::from(cols)) as u32;
            let (r, g, b, _) = raster.get_pixel(x, y);
            samples.push((r, g, b));
        }
    }
    samples
}

/// Render `raster` as ANSI half-block art, one line per two sampled rows.
pub fn render_ansi(raster: &Raster, columns: u32) -> String {
    let (cols, rows) = preview_grid(raster, columns);
    let samples = sample(raster, cols, rows);

    let mut out = String::new();
    for pair in samples.chunks(cols as usize * 2) {
        let (top, bottom) = pair.split_at(cols as usize);
        for (&(tr, tg, tb), &(br, bg, bb)) in top.iter().zip(bottom) {
            out.push_str(&format!(
                "\x1b[38;2;{tr};{tg};{tb}m\x1b[48;2;{br};{bg};{bb}m{UPPER_HALF}"
            ));
        }
        out.push_str(RESET);
        out.push('\n');
    }
    out
}
