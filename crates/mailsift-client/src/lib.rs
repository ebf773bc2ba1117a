//! mailsift-client - HTTP client for the remote inbox service.
//!
//! Provides [`InboxClient`], which implements the core
//! `AttachmentSource` capability against the hosted inbox API, and
//! [`HttpFetcher`], the `TransferFetcher` used for the pre-signed
//! attachment download URLs.

mod client;

pub use client::{HttpFetcher, InboxClient, DEFAULT_BASE_URL};
