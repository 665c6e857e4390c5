//! Ready made scenes, each with the camera it is meant to be seen from.

mod chapel;
mod picking;
mod projection;

pub use chapel::ChapelScene;
pub use picking::PickingScene;
pub use projection::ProjectionScene;
