//! Error handling.
//!
//! Errors are split by pipeline stage:
//! - **Transport** (`FetchError`): propagated, ends the run
//! - **Precondition / export** (`CleanError`, `ExportError`): propagated, ends the run
//! - **Persistence** (`StoreError`): logged and returned as a value; the run continues
//! - **Visualization** (`VisualizeError`): propagated

mod types;

// Re-export public API
pub use types::{
    CleanError, ExportError, FetchError, InitializationError, StoreError, VisualizeError,
};
