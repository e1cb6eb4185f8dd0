mod timer;

pub use timer::{CountdownSnapshot, CountdownTimer};
