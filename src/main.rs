//! Demo entry point: subscribes the sample student to one course of each kind.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use course_subscription::lifecycle::{setup_tracing, CourseCatalog};
use tracing::info;

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting course subscription demo");

    let catalog = CourseCatalog::new();
    let stdout = std::io::stdout();
    catalog
        .subscribe_all(&mut stdout.lock())
        .map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}
