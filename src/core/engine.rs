use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::core::actions::generate_fractal::generate_fractal;
use crate::core::data::circle::Circle;
use crate::core::data::colour::Colour;
use crate::core::data::dynamic_array::DynamicArray;
use crate::core::data::fractal_params::FractalParams;
use crate::core::ports::observer::Observer;
use crate::core::ports::subject::Subject;

/// Holds the current fractal parameters and pushes change notifications to
/// subscribed observers.
///
/// Every method takes `&self`, so the engine can be shared as
/// `Rc<dyn Subject>` and re-entered from inside an observer's `update`:
/// pulling data, registering, or unsubscribing mid-round are all safe.
pub struct FractalEngine {
    params: Cell<FractalParams>,
    observers: RefCell<DynamicArray<Rc<dyn Observer>>>,
}

impl FractalEngine {
    /// An unconfigured engine: no observers, default parameters, empty
    /// pattern until the first `set_data`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: Cell::new(FractalParams::default()),
            observers: RefCell::new(DynamicArray::new()),
        }
    }

    #[must_use]
    pub fn params(&self) -> FractalParams {
        self.params.get()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().size()
    }
}

impl Default for FractalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Subject for FractalEngine {
    fn register_observer(&self, observer: Rc<dyn Observer>) {
        self.observers.borrow_mut().add(observer);
    }

    fn remove_observer(&self, observer: &Rc<dyn Observer>) {
        let mut observers = self.observers.borrow_mut();
        let mut cursor = observers.cursor();
        while cursor.has_next() {
            let Ok(current) = cursor.next() else { break };
            if Rc::ptr_eq(current, observer) {
                let _ = cursor.remove();
                return;
            }
        }
        // unknown handle: the set stays untouched
    }

    fn notify_observers(&self) {
        // iterate a snapshot so observers may register or unsubscribe from
        // inside update() without disturbing this round
        let snapshot = self.observers.borrow().clone();
        debug!(observers = snapshot.size(), "notifying observers");
        for observer in &snapshot {
            if panic::catch_unwind(AssertUnwindSafe(|| observer.update())).is_err() {
                warn!("observer panicked during update; continuing the round");
            }
        }
    }

    fn set_data(
        &self,
        recursion_depth: u32,
        radius_ratio_percent: u32,
        body_colour: Colour,
        tip_colour: Colour,
        children_angle_degrees: f64,
    ) {
        self.params.set(FractalParams::from_degrees(
            recursion_depth,
            radius_ratio_percent,
            body_colour,
            tip_colour,
            children_angle_degrees,
        ));
        self.notify_observers();
    }

    fn get_data(&self) -> DynamicArray<Circle> {
        generate_fractal(&self.params.get())
    }
}
