use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

use crate::bbox::{BBox, Ltrb};

/// Contains (x,y) of the centroid and, when the detector reports one,
/// the bounding box
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Detection {
    pub x: f32,
    pub y: f32,
    pub bbox: Option<BBox<Ltrb>>,
}

impl Detection {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, bbox: None }
    }

    /// Centroid taken at the box center, the way upstream detectors
    /// report figures.
    #[inline]
    pub fn from_bbox(bbox: BBox<Ltrb>) -> Self {
        Self {
            x: bbox.cx(),
            y: bbox.cy(),
            bbox: Some(bbox),
        }
    }

    #[inline(always)]
    pub fn centroid(&self) -> na::Point2<f32> {
        na::Point2::new(self.x, self.y)
    }
}
