//! The timetable engine. Pure, in-memory, no I/O.

pub mod calculator;
pub mod day;
pub mod diagnostics;
pub mod grid;
pub mod logic;
pub mod lookup;
pub mod priority;
pub mod shift_builder;
