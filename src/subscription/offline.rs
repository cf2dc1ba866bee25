use super::{CourseSubscription, SubscriptionError};
use crate::model::{CourseInfo, Student};
use std::io::Write;
use tracing::{info, instrument};

/// Title printed in every offline confirmation.
///
/// NOTE: the confirmation does not use the title of the course actually being
/// subscribed to; it always names this one. Kept literally, see DESIGN.md.
pub const OFFLINE_CONFIRMATION_TITLE: &str = "C# basico";

/// Subscription path for courses attended in person.
///
/// Writes one confirmation line per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSubscription;

impl CourseSubscription for OfflineSubscription {
    #[instrument(name = "offline_subscription", skip_all, fields(student_id = student.id, course_id = course.id))]
    fn subscribe(
        &self,
        student: &Student,
        course: &CourseInfo,
        out: &mut dyn Write,
    ) -> Result<(), SubscriptionError> {
        writeln!(
            out,
            "Student {} subscribed to hybrid course {}",
            student.name, OFFLINE_CONFIRMATION_TITLE
        )?;
        info!(title = %course.title, "Offline subscription confirmed");
        Ok(())
    }
}
