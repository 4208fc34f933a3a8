use crate::core::data::colour::Colour;

/// Parameter set driving one fractal generation. Values are stored verbatim;
/// degenerate inputs produce degenerate (possibly empty) patterns rather
/// than errors, and termination is always bounded by `recursion_depth`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalParams {
    /// Number of branching levels remaining to generate.
    pub recursion_depth: u32,
    /// Child diameter as a percentage of its parent's diameter.
    pub radius_ratio_percent: u32,
    /// Angular offset of each child branch, in radians.
    pub angle_increment: f64,
    pub body_colour: Colour,
    pub tip_colour: Colour,
}

impl FractalParams {
    /// Builds a parameter set from a child angle given in degrees, the unit
    /// the parameter editor works in.
    #[must_use]
    pub fn from_degrees(
        recursion_depth: u32,
        radius_ratio_percent: u32,
        body_colour: Colour,
        tip_colour: Colour,
        children_angle_degrees: f64,
    ) -> Self {
        Self {
            recursion_depth,
            radius_ratio_percent,
            angle_increment: children_angle_degrees.to_radians(),
            body_colour,
            tip_colour,
        }
    }
}

impl Default for FractalParams {
    /// The unconfigured state: zero depth generates an empty pattern.
    fn default() -> Self {
        Self {
            recursion_depth: 0,
            radius_ratio_percent: 0,
            angle_increment: 0.0,
            body_colour: Colour::BLACK,
            tip_colour: Colour::BLACK,
        }
    }
}
