pub mod duration;
pub mod monthly;
