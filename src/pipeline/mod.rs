//! Prediction driver.
mod predict;

pub use predict::Prediction;
