//! Subscription strategies.
//!
//! A [`CourseSubscription`] encapsulates *how* a student gets subscribed to a
//! course. Courses hold one or more strategies and delegate to them, so a new
//! way of subscribing is a new strategy type rather than another branch inside
//! every course.
//!
//! # Main Components
//!
//! - [`OnlineSubscription`] - Silent strategy, only traced
//! - [`OfflineSubscription`] - Writes a confirmation line to the output sink
//! - [`SubscriptionError`] - Failures surfaced by strategies
//!
//! # Testing
//!
//! See [`mock`] for a scripted strategy that records its invocations.

pub mod error;
pub mod mock;
mod offline;
mod online;

pub use error::*;
pub use offline::*;
pub use online::*;

use crate::model::{CourseInfo, Student};
use std::io::Write;

/// Capability shared by every subscription strategy.
///
/// Strategies are stateless and `Send + Sync`, so a single instance may be
/// handed to any number of courses behind an `Arc`.
pub trait CourseSubscription: Send + Sync {
    /// Subscribes `student` to `course`.
    ///
    /// Any human-readable confirmation is written to `out`. Strategies that
    /// have nothing to report leave `out` untouched.
    fn subscribe(
        &self,
        student: &Student,
        course: &CourseInfo,
        out: &mut dyn Write,
    ) -> Result<(), SubscriptionError>;
}
