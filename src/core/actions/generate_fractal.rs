use crate::core::data::circle::Circle;
use crate::core::data::dynamic_array::DynamicArray;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::point::Point;

/// Direction the root branch grows towards.
pub const STARTING_ANGLE: f64 = std::f64::consts::FRAC_PI_2;

/// Diameter of the root circle; every other diameter derives from it
/// through the radius ratio.
pub const ROOT_DIAMETER: u32 = 100;

/// Generates the circle list for `params`, rooted at the origin.
///
/// Circles appear in pre-order: each branch contributes itself, then its
/// full left subtree, then its full right subtree. For a depth `d >= 1`
/// with no diameter collapse the list holds exactly `2^d - 1` circles.
#[must_use]
pub fn generate_fractal(params: &FractalParams) -> DynamicArray<Circle> {
    branch(
        Point { x: 0, y: 0 },
        ROOT_DIAMETER,
        STARTING_ANGLE,
        params.recursion_depth,
        params,
    )
}

fn branch(
    centre: Point,
    diameter: u32,
    angle: f64,
    remaining_depth: u32,
    params: &FractalParams,
) -> DynamicArray<Circle> {
    let mut circles = DynamicArray::new();
    if diameter == 0 || remaining_depth == 0 {
        return circles;
    }

    let colour = if remaining_depth == 1 {
        params.tip_colour
    } else {
        params.body_colour
    };
    circles.add(Circle::new(centre, diameter, colour));

    let child_diameter = diameter * params.radius_ratio_percent / 100;
    let offset = (diameter + child_diameter) / 2;

    // left branch first, then right; each subtree returns its own list
    for direction in [
        angle + params.angle_increment,
        angle - params.angle_increment,
    ] {
        let child_centre = Point {
            x: centre.x - (direction.cos() * f64::from(offset)) as i32,
            y: centre.y - (direction.sin() * f64::from(offset)) as i32,
        };
        circles.add_all(&branch(
            child_centre,
            child_diameter,
            direction,
            remaining_depth - 1,
            params,
        ));
    }

    circles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    fn params(depth: u32, ratio: u32, angle_degrees: f64) -> FractalParams {
        FractalParams::from_degrees(depth, ratio, Colour::GREEN, Colour::PINK, angle_degrees)
    }

    #[test]
    fn test_depth_zero_generates_nothing() {
        let circles = generate_fractal(&params(0, 50, 45.0));

        assert!(circles.is_empty());
    }

    #[test]
    fn test_depth_one_generates_a_single_tip_circle() {
        let circles = generate_fractal(&params(1, 50, 45.0));

        assert_eq!(circles.size(), 1);
        let root = circles.get(0).unwrap();
        assert_eq!(root.centre(), Point { x: 0, y: 0 });
        assert_eq!(root.diameter(), ROOT_DIAMETER);
        assert_eq!(root.colour(), Colour::PINK);
    }

    #[test]
    fn test_complete_tree_has_two_to_the_depth_minus_one_circles() {
        for depth in 1..=6 {
            let circles = generate_fractal(&params(depth, 50, 45.0));

            assert_eq!(circles.size(), 2usize.pow(depth) - 1);
        }
    }

    #[test]
    fn test_depth_two_ratio_fifty_at_forty_five_degrees() {
        let circles: Vec<Circle> = generate_fractal(&params(2, 50, 45.0))
            .into_iter()
            .collect();

        // offset (100 + 50) / 2 = 75; directions 3pi/4 and pi/4; shifts
        // truncate to +-53
        assert_eq!(
            circles,
            vec![
                Circle::new(Point { x: 0, y: 0 }, 100, Colour::GREEN),
                Circle::new(Point { x: 53, y: -53 }, 50, Colour::PINK),
                Circle::new(Point { x: -53, y: -53 }, 50, Colour::PINK),
            ]
        );
    }

    #[test]
    fn test_only_the_deepest_level_wears_the_tip_colour() {
        let circles = generate_fractal(&params(3, 50, 45.0));

        let tips = circles
            .iter()
            .filter(|circle| circle.colour() == Colour::PINK)
            .count();
        let bodies = circles
            .iter()
            .filter(|circle| circle.colour() == Colour::GREEN)
            .count();

        assert_eq!(tips, 4);
        assert_eq!(bodies, 3);
    }

    #[test]
    fn test_preorder_emits_self_then_left_subtree_then_right_subtree() {
        let circles = generate_fractal(&params(3, 50, 45.0));

        // root, then the left child and its two children, then the right
        let root = circles.get(0).unwrap();
        let left = circles.get(1).unwrap();
        let right = circles.get(4).unwrap();

        assert_eq!(root.diameter(), 100);
        assert_eq!(left.diameter(), 50);
        assert_eq!(right.diameter(), 50);
        assert!(left.centre().x > 0);
        assert!(right.centre().x < 0);
        assert_eq!(circles.get(2).unwrap().diameter(), 25);
        assert_eq!(circles.get(3).unwrap().diameter(), 25);
    }

    #[test]
    fn test_ratio_zero_collapses_children_immediately() {
        let circles = generate_fractal(&params(5, 0, 45.0));

        assert_eq!(circles.size(), 1);
    }

    #[test]
    fn test_ratio_one_hundred_keeps_the_diameter() {
        let circles = generate_fractal(&params(3, 100, 45.0));

        assert_eq!(circles.size(), 7);
        assert!(circles.iter().all(|circle| circle.diameter() == 100));
    }

    #[test]
    fn test_child_diameter_and_offset_use_integer_floor() {
        let circles = generate_fractal(&params(2, 33, 0.0));

        // 100 * 33 / 100 = 33; offset (100 + 33) / 2 = 66, straight up
        let left = circles.get(1).unwrap();
        assert_eq!(left.diameter(), 33);
        assert_eq!(left.centre(), Point { x: 0, y: -66 });
    }

    #[test]
    fn test_generation_is_deterministic() {
        let parameters = params(5, 60, 30.0);

        let first: Vec<Circle> = generate_fractal(&parameters).into_iter().collect();
        let second: Vec<Circle> = generate_fractal(&parameters).into_iter().collect();

        assert_eq!(first, second);
    }
}
