use serde::{Deserialize, Serialize};

/// Identifier and title common to every course variant.
///
/// See [`Course`](crate::course::Course) for the behavior attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseInfo {
    pub id: u32,
    pub title: String,
}

impl CourseInfo {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
