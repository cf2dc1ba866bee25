use serde::{Deserialize, Serialize};

/// A student who can be subscribed to courses.
///
/// Students are plain records: built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
}

impl Student {
    /// Creates a new Student instance.
    ///
    /// # Arguments
    /// * `id` - Numeric student identifier
    /// * `name` - Display name, echoed in subscription confirmations
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_student_from_json_fixture() {
        let student: Student =
            serde_json::from_str(r#"{ "id": 1, "name": "Eric Jimenez" }"#).unwrap();
        assert_eq!(student, Student::new(1, "Eric Jimenez"));
    }
}
