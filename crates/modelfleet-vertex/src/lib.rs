//! Vertex AI platform client for modelfleet
//!
//! This crate implements the `InferencePlatform` trait against the
//! Vertex AI REST API, giving modelfleet access to endpoint listing,
//! model undeploy, and model deletion across serving regions.
//!
//! # Requirements
//!
//! - `gcloud` CLI installed and authenticated (`gcloud auth login`);
//!   access tokens are fetched through it and never stored.
//!
//! # Example
//!
//! ```ignore
//! use modelfleet_vertex::{VertexClient, VertexTimeouts};
//! use modelfleet_platform::InferencePlatform;
//!
//! let client = VertexClient::connect("my-project", VertexTimeouts::default()).await?;
//!
//! let auth = client.check_auth().await?;
//! if !auth.authenticated {
//!     panic!("Not authenticated: {:?}", auth.error);
//! }
//!
//! let endpoints = client.list_endpoints("us-central1").await?;
//! ```

pub mod auth;
pub mod client;
pub mod error;

pub use auth::GcloudAuth;
pub use client::{VertexClient, VertexTimeouts};
pub use error::{Result, VertexError};
