pub mod clock;
pub mod color;
pub mod day_cell;
pub mod leave;
pub mod record;
pub mod shift;
pub mod staff;
pub mod week;

pub use clock::{ClockTime, LunchBreak};
pub use color::{ColorResolution, Palette, PriorityTier, Rgb};
pub use day_cell::DayCell;
pub use leave::{LeaveInfo, LeaveType};
pub use record::AttendanceRecord;
pub use shift::{LeaveAnnotation, Shift};
pub use staff::StaffMember;
pub use week::{StaffWeekRow, WeekGroup, WeekInfo};
