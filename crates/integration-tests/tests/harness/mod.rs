pub mod logs;
pub mod service;
