pub mod entries;
pub mod misc;
pub mod resolve;
