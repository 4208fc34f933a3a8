use std::io::Write;
use std::path::Path;

use crate::core::data::canvas::Canvas;

pub fn write_ppm(canvas: &Canvas, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", canvas.width(), canvas.height())?;
    writeln!(file, "255")?;
    file.write_all(canvas.pixels())?;

    Ok(())
}
