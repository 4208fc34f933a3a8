pub mod canvas;
pub mod circle;
pub mod colour;
pub mod dynamic_array;
pub mod fractal_params;
pub mod point;
