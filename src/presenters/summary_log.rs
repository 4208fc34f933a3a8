use std::cell::Cell;
use std::rc::Weak;

use tracing::info;

use crate::core::ports::observer::Observer;
use crate::core::ports::subject::Subject;

/// Logs a one-line summary of every notified generation round.
pub struct SummaryLog {
    subject: Weak<dyn Subject>,
    rounds_seen: Cell<u64>,
}

impl SummaryLog {
    pub fn new(subject: Weak<dyn Subject>) -> Self {
        Self {
            subject,
            rounds_seen: Cell::new(0),
        }
    }

    #[must_use]
    pub fn rounds_seen(&self) -> u64 {
        self.rounds_seen.get()
    }
}

impl Observer for SummaryLog {
    fn update(&self) {
        let Some(subject) = self.subject.upgrade() else {
            return;
        };
        let circles = subject.get_data();
        self.rounds_seen.set(self.rounds_seen.get() + 1);
        match circles.get(0) {
            Ok(root) => info!(
                circles = circles.size(),
                root_diameter = root.diameter(),
                "fractal regenerated"
            ),
            Err(_) => info!("fractal regenerated with no circles"),
        }
    }
}
