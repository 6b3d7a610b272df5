pub mod sampler;
pub mod schedule;
