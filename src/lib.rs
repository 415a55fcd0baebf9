pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod tracing;
