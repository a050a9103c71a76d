pub mod config_util;

pub mod tracing_util;
