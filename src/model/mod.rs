//! Pure data records shared by courses and subscription strategies.

pub mod course_info;
pub mod student;

pub use course_info::*;
pub use student::*;
