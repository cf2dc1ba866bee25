use super::{Course, CourseKind};
use crate::model::{CourseInfo, Student};
use crate::subscription::{CourseSubscription, OfflineSubscription, SubscriptionError};
use std::io::Write;
use tracing::{debug, instrument};

/// A course attended in person. Always subscribes through [`OfflineSubscription`].
#[derive(Debug, Clone)]
pub struct OfflineCourse {
    info: CourseInfo,
}

impl OfflineCourse {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            info: CourseInfo::new(id, title),
        }
    }
}

impl Course for OfflineCourse {
    fn info(&self) -> &CourseInfo {
        &self.info
    }

    fn kind(&self) -> CourseKind {
        CourseKind::Offline
    }

    #[instrument(name = "offline_course", skip_all, fields(course_id = self.info.id))]
    fn subscribe(&self, student: &Student, out: &mut dyn Write) -> Result<(), SubscriptionError> {
        debug!(?student, "subscribe called");
        let strategy = OfflineSubscription;
        strategy.subscribe(student, &self.info, out)
    }
}
