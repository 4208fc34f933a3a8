use std::rc::Rc;

use crate::core::data::circle::Circle;
use crate::core::data::colour::Colour;
use crate::core::data::dynamic_array::DynamicArray;
use crate::core::ports::observer::Observer;

/// Capability of a fractal parameter holder that pushes change
/// notifications to subscribed [`Observer`]s.
pub trait Subject {
    /// Subscribes `observer`. No duplicate check; registration order is
    /// notification order.
    fn register_observer(&self, observer: Rc<dyn Observer>);

    /// Unsubscribes the handle identical to `observer`. Unknown handles
    /// leave the subscription set untouched.
    fn remove_observer(&self, observer: &Rc<dyn Observer>);

    /// Notifies every subscriber, synchronously and in registration order.
    fn notify_observers(&self);

    /// Replaces the fractal parameters and notifies subscribers before
    /// returning. The child angle is given in degrees.
    fn set_data(
        &self,
        recursion_depth: u32,
        radius_ratio_percent: u32,
        body_colour: Colour,
        tip_colour: Colour,
        children_angle_degrees: f64,
    );

    /// Generates the circle list for the current parameters. Pure with
    /// respect to the parameters: repeated calls without an intervening
    /// [`Subject::set_data`] yield identical sequences.
    fn get_data(&self) -> DynamicArray<Circle>;
}
