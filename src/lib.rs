//! # Course Subscription
//!
//! > **The Open/Closed Principle, one course at a time.**
//!
//! Courses do not know *how* a student gets subscribed. They delegate to
//! interchangeable [`CourseSubscription`](subscription::CourseSubscription)
//! strategies, so a new subscription path is a new type rather than a new
//! `match` arm inside every course.
//!
//! ## 🏗️ Design Philosophy
//!
//! - **Closed for modification**: [`OnlineCourse`](course::OnlineCourse),
//!   [`OfflineCourse`](course::OfflineCourse) and [`HybridCourse`](course::HybridCourse)
//!   never branch on the kind of subscription.
//! - **Open for extension**: any type implementing `CourseSubscription` can be
//!   injected into a `HybridCourse`.
//! - **Shared strategies**: strategies are stateless and live behind `Arc`, so one
//!   instance can back many courses.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Records ([`model`])
//! Plain data: [`Student`](model::Student) and [`CourseInfo`](model::CourseInfo).
//!
//! ### 2. The Strategies ([`subscription`])
//! The capability trait, its two implementations, the error type and a mock.
//!
//! ### 3. The Courses ([`course`])
//! The [`Course`](course::Course) trait and its three variants.
//!
//! ### 4. The Wiring ([`lifecycle`])
//! [`CourseCatalog`](lifecycle::CourseCatalog) builds the sample data;
//! [`setup_tracing`](lifecycle::setup_tracing) configures logging.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Prints the offline confirmations on stdout, logs on stderr
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod course;
pub mod lifecycle;
pub mod model;
pub mod subscription;
