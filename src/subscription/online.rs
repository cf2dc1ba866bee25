use super::{CourseSubscription, SubscriptionError};
use crate::model::{CourseInfo, Student};
use std::io::Write;
use tracing::{debug, instrument};

/// Subscription path for courses taken remotely.
///
/// Has no observable output; only a trace event is recorded.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnlineSubscription;

impl CourseSubscription for OnlineSubscription {
    #[instrument(name = "online_subscription", skip_all, fields(student_id = student.id, course_id = course.id))]
    fn subscribe(
        &self,
        student: &Student,
        course: &CourseInfo,
        _out: &mut dyn Write,
    ) -> Result<(), SubscriptionError> {
        debug!("Online subscription recorded");
        Ok(())
    }
}
