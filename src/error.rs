use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("pose has {got} keypoints, need at least {need} to span a box")]
    NotEnoughKeypoints { need: usize, got: usize },
}
