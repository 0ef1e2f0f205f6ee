pub mod durations;
pub mod timer;
