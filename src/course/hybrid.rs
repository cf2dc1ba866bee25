use super::{Course, CourseKind};
use crate::model::{CourseInfo, Student};
use crate::subscription::{CourseSubscription, SubscriptionError};
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, instrument};

/// A course with both a remote and an in-person track.
///
/// Unlike the single-format courses, the strategies are injected at
/// construction and shared: the same pair may back any number of courses.
///
/// # Subscription order
/// 1. The online strategy runs first.
/// 2. The offline strategy runs second, only if the first succeeded.
#[derive(Clone)]
pub struct HybridCourse {
    info: CourseInfo,
    online: Arc<dyn CourseSubscription>,
    offline: Arc<dyn CourseSubscription>,
}

impl HybridCourse {
    /// Creates a hybrid course from its two strategies.
    ///
    /// # Arguments
    /// * `info` - Identifier and title
    /// * `online` - Strategy for the remote track
    /// * `offline` - Strategy for the in-person track
    pub fn new(
        info: CourseInfo,
        online: Arc<dyn CourseSubscription>,
        offline: Arc<dyn CourseSubscription>,
    ) -> Self {
        Self {
            info,
            online,
            offline,
        }
    }
}

impl Course for HybridCourse {
    fn info(&self) -> &CourseInfo {
        &self.info
    }

    fn kind(&self) -> CourseKind {
        CourseKind::Hybrid
    }

    #[instrument(name = "hybrid_course", skip_all, fields(course_id = self.info.id))]
    fn subscribe(&self, student: &Student, out: &mut dyn Write) -> Result<(), SubscriptionError> {
        debug!(?student, "subscribe called");
        self.online.subscribe(student, &self.info, out)?;
        self.offline.subscribe(student, &self.info, out)
    }
}
