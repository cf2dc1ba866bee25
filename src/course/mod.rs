//! Subscribable courses.
//!
//! Every course implements [`Course`] and delegates the actual subscription
//! work to one or more [`CourseSubscription`](crate::subscription::CourseSubscription)
//! strategies. Adding a new way of subscribing never touches these types.

mod hybrid;
mod offline;
mod online;

pub use hybrid::*;
pub use offline::*;
pub use online::*;

use crate::model::{CourseInfo, Student};
use crate::subscription::SubscriptionError;
use std::fmt;
use std::io::Write;

/// The delivery format of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseKind {
    Online,
    Offline,
    Hybrid,
}

impl fmt::Display for CourseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CourseKind::Online => "online",
            CourseKind::Offline => "offline",
            CourseKind::Hybrid => "hybrid",
        };
        f.write_str(name)
    }
}

/// Something with an identifier and a title that students can subscribe to.
pub trait Course {
    /// Identifier and title of the course.
    fn info(&self) -> &CourseInfo;

    fn kind(&self) -> CourseKind;

    /// Subscribes `student`, writing any confirmation to `out`.
    ///
    /// Repeated calls re-run the same side effects; there is no guard against
    /// subscribing the same student twice.
    fn subscribe(&self, student: &Student, out: &mut dyn Write) -> Result<(), SubscriptionError>;

    fn id(&self) -> u32 {
        self.info().id
    }

    fn title(&self) -> &str {
        &self.info().title
    }
}
