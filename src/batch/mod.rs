mod config;
mod report;
mod scheduler;

pub use config::*;
pub use report::*;
pub use scheduler::*;
