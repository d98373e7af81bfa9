//! Mlforge Core - domain and application layers
//!
//! This crate provides the domain and application layers for the mlforge
//! skeleton generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          mlforge-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │            (Materializer)               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, Reporter)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    mlforge-adapters (Infrastructure)    │
//! │  (LocalFilesystem, MemoryFilesystem,    │
//! │   RecordingReporter)                    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Manifest, RenderContext, RunConfig)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mlforge_core::{
//!     application::Materializer,
//!     domain::RunConfig,
//! };
//!
//! // 1. Build the run configuration
//! let config = RunConfig::new("cnnClassifier", false, false).unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = Materializer::new(filesystem, reporter);
//! service.materialize(&config);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Materializer,
        ports::{Filesystem, MaterializeEvent, Reporter},
    };
    pub use crate::domain::{MANIFEST, PathSpec, RenderContext, RunConfig};
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
