pub mod recap;
pub mod task;
