pub mod fit;
pub mod samples;
