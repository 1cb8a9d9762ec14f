pub mod bbox;
pub mod detection;
pub mod error;
pub mod math;
pub mod pose;
pub mod tracker;

pub use detection::Detection;
pub use pose::Pose;
pub use tracker::{CentroidTracker, TrackedObject};

use std::rc::Rc;

pub trait Tracking {
    fn update(&mut self, detections: &[Detection]);
    fn tracks(&self) -> Rc<[TrackedObject]>;
    fn reset(&mut self);
}
