use rayon::prelude::*;

use crate::core::data::canvas::{BYTES_PER_PIXEL, Canvas, CanvasError};
use crate::core::data::circle::Circle;
use crate::core::data::colour::Colour;
use crate::core::data::dynamic_array::DynamicArray;
use crate::core::data::point::Point;

/// Paints `circles` onto a fresh canvas, rows in parallel.
///
/// The fractal origin maps to the canvas centre. List order is draw order:
/// of the circles covering a pixel, the last one in the list wins.
pub fn rasterise_circles(
    circles: &DynamicArray<Circle>,
    width: u32,
    height: u32,
    background: Colour,
) -> Result<Canvas, CanvasError> {
    let mut canvas = Canvas::new(width, height, background)?;
    let centre_x = (width / 2) as i32;
    let centre_y = (height / 2) as i32;

    let row_bytes = width as usize * BYTES_PER_PIXEL;
    canvas
        .pixels_mut()
        .par_chunks_exact_mut(row_bytes)
        .enumerate()
        .for_each(|(row, bytes)| {
            let y = row as i32 - centre_y;
            for (column, pixel) in bytes.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let point = Point {
                    x: column as i32 - centre_x,
                    y,
                };
                let mut covering = None;
                for circle in circles {
                    if circle.covers(point) {
                        covering = Some(circle.colour());
                    }
                }
                if let Some(colour) = covering {
                    pixel[0] = colour.r;
                    pixel[1] = colour.g;
                    pixel[2] = colour.b;
                }
            }
        });

    Ok(canvas)
}
