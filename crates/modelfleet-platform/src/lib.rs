//! modelfleet platform abstraction
//!
//! This crate defines the inference-platform seam for modelfleet:
//! the domain types for serving endpoints and deployed models, the
//! `InferencePlatform` trait that concrete platform clients implement,
//! and the two workflows the CLI drives through that trait.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 modelfleet CLI                   │
//! │            (mfleet sweep/regions)                │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │             modelfleet-platform                  │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │        Platform Abstraction               │   │
//! │  │  trait InferencePlatform { ... }          │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────┐            │
//! │  │ Region Sweep │  │   Removal    │            │
//! │  └──────────────┘  └──────────────┘            │
//! └───────────────────┬──────────────────────────────┘
//!                     │
//!            ┌────────▼────────┐
//!            │  vertex client  │
//!            └─────────────────┘
//! ```

pub mod client;
pub mod error;
pub mod regions;
pub mod removal;
pub mod scan;
pub mod types;

// Re-exports
pub use client::InferencePlatform;
pub use error::{PlatformError, Result};
pub use regions::SERVING_REGIONS;
pub use removal::{
    DeleteOutcome, RemovalError, RemovalOutcome, RemovalPolicy, RemovalRequest, execute_removal,
};
pub use scan::{ScanOptions, scan_regions};
pub use types::{AuthStatus, DeployedModel, Endpoint, RegionActivity};
