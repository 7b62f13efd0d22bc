pub mod interval;
pub mod weeks;
