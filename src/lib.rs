//! # threadbind
//!
//! Fetch the photos embedded in a social-media reply thread and bind them
//! into a single PDF document, one image-half per page.
//!
//! The pipeline has two strictly sequential steps:
//!
//! 1. [`ThreadWalker`] walks a reply chain backwards from a given tail
//!    status to the thread root, downloading and decoding every photo
//!    attachment along the way.
//! 2. [`PdfAssembler`] reverses the collected images to root-to-leaf order,
//!    splits each at its horizontal midpoint, and writes each half as one
//!    full-bleed page of a PDF.
//!
//! ## Quick Start
//!
//! ```no_run
//! use threadbind::{ApiClient, Config, PdfAssembler, StatusId, ThreadWalker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let client = ApiClient::new(&config)?;
//!     let walker = ThreadWalker::new(&client);
//!
//!     let images = walker.collect(&StatusId::new("1234567890")).await?;
//!     if !images.is_empty() {
//!         PdfAssembler::new().build(images, "thread.pdf".as_ref())?;
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// HTTP client for the social-media API
pub mod client;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// PDF assembly
pub mod pdf;
/// Core types
pub mod types;
/// Input parsing helpers
pub mod utils;
/// Thread traversal
pub mod walker;

// Re-export commonly used types
pub use client::ApiClient;
pub use config::{Config, Credentials};
pub use error::{Error, Result};
pub use pdf::PdfAssembler;
pub use types::{MediaAttachment, MediaKind, Status, StatusId};
pub use walker::ThreadWalker;
