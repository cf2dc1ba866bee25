//! # Observability & Tracing
//!
//! Diagnostics go to **stderr**; stdout carries only subscription
//! confirmations, so the two never interleave.
//!
//! ```bash
//! # Course-level events
//! RUST_LOG=info cargo run
//!
//! # Also show the student payload and the silent online strategy
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` the run reads roughly:
//!
//! ```text
//! DEBUG subscription:online_course: subscribe called student=Student { id: 1, name: "Eric Jimenez" }
//! DEBUG subscription:online_course:online_subscription: Online subscription recorded
//!  INFO subscription: Subscribed title="C# basico"
//! ```

/// Initializes the tracing subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
