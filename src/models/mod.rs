pub mod args;
pub mod config;
pub mod endpoint;
pub mod http_error_stats;
pub mod result;
