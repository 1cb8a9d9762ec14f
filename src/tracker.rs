use std::collections::BTreeMap;
use std::rc::Rc;

use nalgebra as na;

use crate::bbox::{BBox, Ltrb};
use crate::detection::Detection;
use crate::math;

pub const DEFAULT_MAX_MISSED: u32 = 180;

/// One identified object as of the last update call.
#[derive(Debug, Clone)]
pub struct TrackedObject {
    pub id: u32,
    pub centroid: na::Point2<f32>,
    pub bbox: Option<BBox<Ltrb>>,

    /// Consecutive frames without a matching detection. Callers read this
    /// to hold back rendering of objects inside the disappearance grace
    /// period.
    pub missed: u32,
}

/// Assigns stable ids to per-frame detections by nearest-centroid
/// matching. Ids persist while an object keeps getting matched, survive
/// up to `max_missed` consecutive unmatched frames, and are never handed
/// out again once dropped.
pub struct CentroidTracker {
    max_missed: u32,
    next_id: u32,
    objects: BTreeMap<u32, TrackedObject>,
}

impl CentroidTracker {
    pub fn new(max_missed: u32) -> Self {
        Self {
            max_missed,
            next_id: 1,
            objects: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn objects(&self) -> &BTreeMap<u32, TrackedObject> {
        &self.objects
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    #[inline]
    pub fn max_missed(&self) -> u32 {
        self.max_missed
    }

    fn register(&mut self, det: &Detection) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        tracing::debug!(id, x = det.x, y = det.y, "register");

        self.objects.insert(
            id,
            TrackedObject {
                id,
                centroid: det.centroid(),
                bbox: det.bbox.clone(),
                missed: 0,
            },
        );

        id
    }

    fn deregister(&mut self, id: u32) {
        tracing::debug!(id, "deregister");
        self.objects.remove(&id);
    }

    // Ages one object; drops it once it overstays max_missed.
    fn mark_missed(&mut self, id: u32) {
        let overstayed = match self.objects.get_mut(&id) {
            Some(obj) => {
                obj.missed += 1;
                obj.missed > self.max_missed
            }
            None => return,
        };

        if overstayed {
            self.deregister(id);
        }
    }

    /// Consumes one frame's detections and returns the registry as of the
    /// end of the call. Matched objects take the detection's centroid and
    /// box and their miss counter restarts; unmatched objects age;
    /// leftover detections register as new objects in input order.
    pub fn update(&mut self, detections: &[Detection]) -> &BTreeMap<u32, TrackedObject> {
        if detections.is_empty() {
            // Nothing came in: everything ages, nothing registers.
            let ids: Vec<u32> = self.objects.keys().copied().collect();
            for id in ids {
                self.mark_missed(id);
            }

            return &self.objects;
        }

        if self.objects.is_empty() {
            for det in detections {
                self.register(det);
            }

            return &self.objects;
        }

        let ids: Vec<u32> = self.objects.keys().copied().collect();
        let existing: Vec<na::Point2<f32>> = self.objects.values().map(|o| o.centroid).collect();
        let incoming: Vec<na::Point2<f32>> = detections.iter().map(|d| d.centroid()).collect();

        let dist = math::distance_matrix(&existing, &incoming);
        let pairs = math::greedy_assignment(&dist);

        let mut row_used = vec![false; ids.len()];
        let mut col_used = vec![false; detections.len()];

        for &(row, col) in &pairs {
            row_used[row] = true;
            col_used[col] = true;

            if let Some(obj) = self.objects.get_mut(&ids[row]) {
                obj.centroid = incoming[col];
                obj.bbox = detections[col].bbox.clone();
                obj.missed = 0;
            }
        }

        for (row, &id) in ids.iter().enumerate() {
            if !row_used[row] {
                self.mark_missed(id);
            }
        }

        for (col, det) in detections.iter().enumerate() {
            if !col_used[col] {
                self.register(det);
            }
        }

        &self.objects
    }

    /// Drops every object and restarts id allocation, for when the stream
    /// itself is replaced (switching video source).
    pub fn reset(&mut self) {
        tracing::debug!(dropped = self.objects.len(), "reset");

        self.objects.clear();
        self.next_id = 1;
    }
}

impl Default for CentroidTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MISSED)
    }
}

impl crate::Tracking for CentroidTracker {
    #[inline]
    fn update(&mut self, detections: &[Detection]) {
        CentroidTracker::update(self, detections);
    }

    #[inline]
    fn tracks(&self) -> Rc<[TrackedObject]> {
        self.objects
            .values()
            .cloned()
            .collect::<Vec<_>>()
            .into_boxed_slice()
            .into()
    }

    fn reset(&mut self) {
        CentroidTracker::reset(self);
    }
}
