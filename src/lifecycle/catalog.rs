use crate::course::{Course, HybridCourse, OfflineCourse, OnlineCourse};
use crate::model::{CourseInfo, Student};
use crate::subscription::{CourseSubscription, OfflineSubscription, OnlineSubscription, SubscriptionError};
use std::io::Write;
use std::sync::Arc;
use tracing::{info, info_span};

/// The sample course catalog and the student subscribing to it.
///
/// `CourseCatalog` acts as the composition root: it is the only place that
/// decides which concrete strategies back which courses.
///
/// # Example
///
/// ```ignore
/// let catalog = CourseCatalog::new();
/// catalog.subscribe_all(&mut std::io::stdout().lock())?;
/// ```
pub struct CourseCatalog {
    /// The student subscribed to every course.
    pub student: Student,

    /// Courses in subscription order: online, offline, hybrid.
    pub courses: Vec<Box<dyn Course>>,
}

impl CourseCatalog {
    /// Creates the catalog with one course of each kind.
    ///
    /// The hybrid course receives its own shared pair of strategies.
    pub fn new() -> Self {
        let student = Student::new(1, "Eric Jimenez");

        let online_subscription: Arc<dyn CourseSubscription> = Arc::new(OnlineSubscription);
        let offline_subscription: Arc<dyn CourseSubscription> = Arc::new(OfflineSubscription);

        let courses: Vec<Box<dyn Course>> = vec![
            Box::new(OnlineCourse::new(111, "C# basico")),
            Box::new(OfflineCourse::new(222, "C# intermedio")),
            Box::new(HybridCourse::new(
                CourseInfo::new(333, "C# Avanzado"),
                online_subscription,
                offline_subscription,
            )),
        ];

        Self { student, courses }
    }

    /// Subscribes the student to every course, in catalog order.
    ///
    /// Stops at the first failing course.
    pub fn subscribe_all(&self, out: &mut dyn Write) -> Result<(), SubscriptionError> {
        for course in &self.courses {
            let span = info_span!("subscription", kind = %course.kind(), course_id = course.id());
            let _guard = span.enter();
            course.subscribe(&self.student, out)?;
            info!(title = course.title(), "Subscribed");
        }
        Ok(())
    }
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::new()
    }
}
