//! mailsift-core - Core library for mailsift.
//!
//! This crate provides the shared error type, configuration, capability
//! traits for the remote inbox service, and the attachment transfer
//! orchestration used by the mailsift tools.
//!
//! # Example
//!
//! ```ignore
//! use mailsift_core::AttachmentDownloader;
//!
//! let downloader = AttachmentDownloader::new(source, fetcher);
//! let manifest = downloader
//!     .download_message("inbox-1", "msg-42", "./downloads".as_ref(), None)
//!     .await?;
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod traits;
pub mod transfer;
pub mod types;

// Re-export commonly used types
pub use config::SiftConfig;
pub use emit::StdoutEmitter;
pub use error::{SiftError, SiftResult};
pub use traits::{AttachmentSource, ReportEmitter, TransferFetcher};
pub use transfer::AttachmentDownloader;
pub use types::{AttachmentDescriptor, DownloadManifest, DownloadedAttachment};
