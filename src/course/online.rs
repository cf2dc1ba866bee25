use super::{Course, CourseKind};
use crate::model::{CourseInfo, Student};
use crate::subscription::{CourseSubscription, OnlineSubscription, SubscriptionError};
use std::io::Write;
use tracing::{debug, instrument};

/// A course taken remotely. Always subscribes through [`OnlineSubscription`].
#[derive(Debug, Clone)]
pub struct OnlineCourse {
    info: CourseInfo,
}

impl OnlineCourse {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            info: CourseInfo::new(id, title),
        }
    }
}

impl Course for OnlineCourse {
    fn info(&self) -> &CourseInfo {
        &self.info
    }

    fn kind(&self) -> CourseKind {
        CourseKind::Online
    }

    #[instrument(name = "online_course", skip_all, fields(course_id = self.info.id))]
    fn subscribe(&self, student: &Student, out: &mut dyn Write) -> Result<(), SubscriptionError> {
        debug!(?student, "subscribe called");
        let strategy = OnlineSubscription;
        strategy.subscribe(student, &self.info, out)
    }
}
