use bdi_core::Vec2;
use bdi_scene::SceneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("speed must be finite and positive, got {0}")]
    InvalidSpeed(f64),

    #[error("position {0} is not inside any room")]
    NotInScene(Vec2),

    #[error("scene lookup failed: {0}")]
    Scene(#[from] SceneError),
}

pub type MotionResult<T> = Result<T, MotionError>;
