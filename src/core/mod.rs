pub mod classifier;
pub mod unicode;
