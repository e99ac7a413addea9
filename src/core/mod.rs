pub mod batch;
pub mod catalog;
pub mod check_endpoints;
pub mod controller;
pub mod recorder;
pub mod report;
pub mod sampler;
pub mod stats;
