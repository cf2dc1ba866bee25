//! # Mock Strategy
//!
//! Utilities for testing courses in isolation from real strategies.
//!
//! Create a [`MockSubscription`], queue expectations with
//! [`expect_subscribe`](MockSubscription::expect_subscribe), hand the mock to a
//! course, then call [`verify`](MockSubscription::verify).
//!
//! Mocks built with [`MockSubscription::with_journal`] append every call to a
//! shared [`CallJournal`], which lets a test assert the order in which several
//! strategies were invoked.

use super::{CourseSubscription, SubscriptionError};
use crate::model::{CourseInfo, Student};
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex};

// =============================================================================
// CALL JOURNAL
// =============================================================================

/// One recorded invocation of a mock strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    /// Label of the mock that received the call.
    pub strategy: String,
    pub student_id: u32,
    pub course_id: u32,
}

/// Ordered log of calls, shareable between several mocks.
pub type CallJournal = Arc<Mutex<Vec<MockCall>>>;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

struct Expectation {
    student_id: u32,
    course_id: u32,
    response: Result<(), String>,
}

/// A scripted [`CourseSubscription`] with expectation tracking.
///
/// # Example
/// ```ignore
/// let mock = MockSubscription::new("online");
/// mock.expect_subscribe(1, 333).return_ok();
///
/// let course = HybridCourse::new(info, Arc::new(mock.clone()), offline);
/// course.subscribe(&student, &mut out)?;
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Clone)]
pub struct MockSubscription {
    label: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    journal: CallJournal,
}

impl MockSubscription {
    /// Creates a mock with no expectations and a private journal.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_journal(label, CallJournal::default())
    }

    /// Creates a mock that records into an existing journal.
    pub fn with_journal(label: impl Into<String>, journal: CallJournal) -> Self {
        Self {
            label: label.into(),
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            journal,
        }
    }

    /// Expects a `subscribe` call for the given student and course.
    pub fn expect_subscribe(&self, student_id: u32, course_id: u32) -> SubscribeExpectationBuilder {
        SubscribeExpectationBuilder {
            student_id,
            course_id,
            expectations: self.expectations.clone(),
        }
    }

    /// Returns a snapshot of the calls recorded so far.
    pub fn calls(&self) -> Vec<MockCall> {
        self.journal.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!(
                "Not all expectations were met for mock '{}'. {} remaining",
                self.label,
                exps.len()
            );
        }
    }
}

impl CourseSubscription for MockSubscription {
    fn subscribe(
        &self,
        student: &Student,
        course: &CourseInfo,
        _out: &mut dyn Write,
    ) -> Result<(), SubscriptionError> {
        self.journal.lock().unwrap().push(MockCall {
            strategy: self.label.clone(),
            student_id: student.id,
            course_id: course.id,
        });

        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(exp) if exp.student_id == student.id && exp.course_id == course.id => {
                exp.response.map_err(SubscriptionError::from)
            }
            Some(exp) => panic!(
                "Mock '{}' expected subscribe(student {}, course {}), got subscribe(student {}, course {})",
                self.label, exp.student_id, exp.course_id, student.id, course.id
            ),
            None => panic!("Unexpected subscribe call on mock '{}'", self.label),
        }
    }
}

/// Builder for `subscribe` expectations.
pub struct SubscribeExpectationBuilder {
    student_id: u32,
    course_id: u32,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl SubscribeExpectationBuilder {
    /// Sets the expectation to succeed.
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    /// Sets the expectation to fail with [`SubscriptionError::Rejected`].
    pub fn return_err(self, reason: impl Into<String>) {
        self.push(Err(reason.into()));
    }

    fn push(self, response: Result<(), String>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            student_id: self.student_id,
            course_id: self.course_id,
            response,
        });
    }
}
