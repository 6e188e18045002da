/// State management module
///
/// This module handles all application state, including:
/// - The list screen's view-state and search filtering (list.rs)
/// - The detail screen's view-state and fetch guard (detail.rs)
/// - The local SQLite table (store.rs)
/// - Shared data structures (data.rs)

use std::future::Future;
use std::pin::Pin;

pub mod data;
pub mod detail;
pub mod list;
pub mod store;

/// Background work handed to the UI runtime
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;
