pub mod models;
pub mod routes;

pub use models::{Attendance, AttendanceFilter, CreateAttendance};
