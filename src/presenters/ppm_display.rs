use std::cell::Cell;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::rc::Weak;

use tracing::{error, info};

use crate::core::actions::rasterise_circles::rasterise_circles;
use crate::core::data::canvas::CanvasError;
use crate::core::data::colour::Colour;
use crate::core::ports::observer::Observer;
use crate::core::ports::subject::Subject;
use crate::storage::write_ppm::write_ppm;

#[derive(Debug)]
pub enum DisplayError {
    Canvas(CanvasError),
    Io(std::io::Error),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "rasterising frame: {}", err),
            Self::Io(err) => write!(f, "writing frame: {}", err),
        }
    }
}

impl Error for DisplayError {}

impl From<CanvasError> for DisplayError {
    fn from(err: CanvasError) -> Self {
        Self::Canvas(err)
    }
}

impl From<std::io::Error> for DisplayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Headless display: renders the subject's circles to a PPM file on every
/// notification. The pull happens inside `update`, so each frame reflects
/// the parameters that triggered it.
pub struct PpmDisplay {
    subject: Weak<dyn Subject>,
    width: u32,
    height: u32,
    background: Colour,
    output_path: PathBuf,
    frames_written: Cell<u64>,
}

impl PpmDisplay {
    pub fn new(
        subject: Weak<dyn Subject>,
        width: u32,
        height: u32,
        background: Colour,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            subject,
            width,
            height,
            background,
            output_path: output_path.into(),
            frames_written: Cell::new(0),
        }
    }

    /// Number of frames successfully rendered to disk so far.
    #[must_use]
    pub fn frames_written(&self) -> u64 {
        self.frames_written.get()
    }

    fn render_frame(&self, subject: &dyn Subject) -> Result<(), DisplayError> {
        let circles = subject.get_data();
        let canvas = rasterise_circles(&circles, self.width, self.height, self.background)?;
        write_ppm(&canvas, &self.output_path)?;
        self.frames_written.set(self.frames_written.get() + 1);
        info!(
            circles = circles.size(),
            path = %self.output_path.display(),
            "frame written"
        );
        Ok(())
    }
}

impl Observer for PpmDisplay {
    fn update(&self) {
        let Some(subject) = self.subject.upgrade() else {
            error!("display notified after its subject was dropped");
            return;
        };
        if let Err(err) = self.render_frame(subject.as_ref()) {
            error!(%err, "failed to render frame");
        }
    }
}
