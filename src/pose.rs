use serde_derive::{Deserialize, Serialize};

use crate::bbox::{BBox, Ltrb};
use crate::detection::Detection;
use crate::error::Error;

/// Keypoints 0..5 of a pose estimate are the head landmarks: nose, eyes,
/// ears. The head is what stays in frame when the lower body is cut off.
pub const HEAD_KEYPOINTS: usize = 5;

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    #[serde(rename = "s")]
    pub score: f32,
}

/// One pose estimate as the upstream detector emits it: keypoints in
/// posenet part order, an overall confidence, and optionally the
/// detector's own box around the whole figure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Pose {
    pub keypoints: Vec<Keypoint>,
    #[serde(rename = "p")]
    pub score: f32,
    pub bbox: Option<BBox<Ltrb>>,
}

impl Pose {
    /// Collapses the pose into the centroid + box the tracker consumes.
    /// With `use_all_keypoints` the detector box wins when present,
    /// otherwise the span of every keypoint; without it, only the head
    /// landmarks span the box. The centroid is always the box center.
    pub fn detection(&self, use_all_keypoints: bool) -> Result<Detection, Error> {
        let bbox = if use_all_keypoints {
            match &self.bbox {
                Some(bbox) => bbox.clone(),
                None => keypoint_span(&self.keypoints, 1)?,
            }
        } else {
            if self.keypoints.len() < HEAD_KEYPOINTS {
                return Err(Error::NotEnoughKeypoints {
                    need: HEAD_KEYPOINTS,
                    got: self.keypoints.len(),
                });
            }

            keypoint_span(&self.keypoints[..HEAD_KEYPOINTS], HEAD_KEYPOINTS)?
        };

        Ok(Detection::from_bbox(bbox))
    }
}

fn keypoint_span(keypoints: &[Keypoint], need: usize) -> Result<BBox<Ltrb>, Error> {
    BBox::enclosing(keypoints.iter().map(|k| (k.x, k.y))).ok_or(Error::NotEnoughKeypoints {
        need,
        got: keypoints.len(),
    })
}

/// Maps a frame's pose estimates to tracker input, dropping poses below
/// the confidence gate.
pub struct PoseMapper {
    pub min_score: f32,
    pub use_all_keypoints: bool,
}

impl PoseMapper {
    pub fn new(min_score: f32) -> Self {
        Self {
            min_score,
            use_all_keypoints: true,
        }
    }

    pub fn detections(&self, poses: &[Pose]) -> Result<Vec<Detection>, Error> {
        poses
            .iter()
            .filter(|pose| pose.score >= self.min_score)
            .map(|pose| pose.detection(self.use_all_keypoints))
            .collect()
    }
}

impl Default for PoseMapper {
    fn default() -> Self {
        // multi-pose confidence gate the detectors ship with
        Self::new(0.625)
    }
}
