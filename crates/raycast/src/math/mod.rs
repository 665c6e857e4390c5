pub mod float;
pub mod point;
pub mod transform;
pub mod vec;
