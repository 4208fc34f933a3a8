mod controllers;
mod core;
mod presenters;
mod storage;

pub use crate::controllers::cactus::cactus_controller;
pub use crate::core::actions::generate_fractal::{
    ROOT_DIAMETER, STARTING_ANGLE, generate_fractal,
};
pub use crate::core::actions::rasterise_circles::rasterise_circles;
pub use crate::core::data::canvas::{Canvas, CanvasError};
pub use crate::core::data::circle::Circle;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::dynamic_array::{
    Cursor, CursorError, DEFAULT_CAPACITY, DynamicArray, DynamicArrayError,
};
pub use crate::core::data::fractal_params::FractalParams;
pub use crate::core::data::point::Point;
pub use crate::core::engine::FractalEngine;
pub use crate::core::ports::observer::Observer;
pub use crate::core::ports::subject::Subject;
pub use crate::presenters::ppm_display::{DisplayError, PpmDisplay};
pub use crate::presenters::summary_log::SummaryLog;
pub use crate::storage::write_ppm::write_ppm;
