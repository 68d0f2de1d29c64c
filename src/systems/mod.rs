pub mod rotation;
pub mod ranking;
