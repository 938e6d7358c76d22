pub mod dataset;
pub mod input;
pub mod report;
pub mod runner;

pub use dataset::UniformDataset;
pub use runner::{BenchmarkResult, measure, run_benchmarks, run_single};
