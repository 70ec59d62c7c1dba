pub mod runner;

pub use runner::{Pacing, RunMeta, Runner};
