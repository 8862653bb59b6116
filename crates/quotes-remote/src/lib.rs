//! HTTP access to the remote quote collection.

mod http;
mod projection;

pub use http::{HttpRemoteConfig, HttpRemoteSource};
pub use projection::{project_items, RemoteItem};
