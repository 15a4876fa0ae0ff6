//! Article storage for the article service.
//!
//! This crate holds the only stateful part of the service: an ordered
//! collection of articles addressed by stable numeric identifiers.
//!
//! # Architecture
//!
//! - **Identifiers** are handed out densely from 0 at creation and are never
//!   reused or reordered.
//! - **Deletion** is logical. A deleted article keeps its identifier slot but
//!   is hidden from reads, updates and listings.
//! - **Updates** replace all text fields at once; there is no merge.
//!
//! # Modules
//!
//! - [`error`] — Error types for store operations
//! - [`types`] — Core types: [`Article`], [`ArticleId`]
//! - [`traits`] — The [`ArticleStore`] trait defining the storage interface
//! - [`memory`] — In-memory [`InMemoryArticleStore`]

pub mod error;
pub mod memory;
pub mod traits;
pub mod types;

pub use error::{Result, StoreError};
pub use memory::InMemoryArticleStore;
pub use traits::ArticleStore;
pub use types::{Article, ArticleId};
