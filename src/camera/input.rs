/// A free-fly movement intent, one of the six canonical directions.
///
/// The external input layer maps held keys to these values and passes the
/// active set to [`Camera::process_keyboard`](super::Camera::process_keyboard)
/// once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Along the camera's front vector.
    Forward,
    /// Against the camera's front vector.
    Backward,
    /// Against the camera's right vector.
    Left,
    /// Along the camera's right vector.
    Right,
    /// Along the fixed world up direction.
    Up,
    /// Against the fixed world up direction.
    Down,
}
