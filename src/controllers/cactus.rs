use std::error::Error;
use std::path::Path;
use std::rc::Rc;
use std::time::Instant;

use crate::core::data::colour::Colour;
use crate::core::engine::FractalEngine;
use crate::core::ports::subject::Subject;
use crate::presenters::ppm_display::PpmDisplay;
use crate::presenters::summary_log::SummaryLog;

const CANVAS_WIDTH: u32 = 512;
const CANVAS_HEIGHT: u32 = 512;
const RECURSION_DEPTH: u32 = 8;
const RADIUS_RATIO_PERCENT: u32 = 60;
const CHILDREN_ANGLE_DEGREES: f64 = 60.0;

/// Wires the application: the subject comes first, then both consumers
/// receive it as a dependency, then one parameter push drives the whole
/// pipeline through the notification round.
pub fn cactus_controller(output_path: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
    let output_path = output_path.as_ref();
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let engine: Rc<dyn Subject> = Rc::new(FractalEngine::new());
    let summary = Rc::new(SummaryLog::new(Rc::downgrade(&engine)));
    let display = Rc::new(PpmDisplay::new(
        Rc::downgrade(&engine),
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        Colour::WHITE,
        output_path,
    ));
    engine.register_observer(summary.clone());
    engine.register_observer(display.clone());

    println!("Rendering cactus fractal...");
    println!("Canvas size: {}x{}", CANVAS_WIDTH, CANVAS_HEIGHT);
    println!("Recursion depth: {}", RECURSION_DEPTH);

    let start = Instant::now();
    engine.set_data(
        RECURSION_DEPTH,
        RADIUS_RATIO_PERCENT,
        Colour::GREEN,
        Colour::PINK,
        CHILDREN_ANGLE_DEGREES,
    );
    let duration = start.elapsed();

    println!("Duration:   {:?}", duration);
    println!(
        "Saved {} frame(s) to {}",
        display.frames_written(),
        output_path.display()
    );
    Ok(())
}
