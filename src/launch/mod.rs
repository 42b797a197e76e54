//! Launch data module
//!
//! Records returned by the launch API and the paged result built from them.
//!
//! The provider answers with a paginated envelope (`docs`, `totalDocs`,
//! `hasNextPage`, ...). `LaunchPage` mirrors that envelope, and `QueryResult`
//! is the shape the controller and the presentation layer work with.

mod types;

pub use types::{Launch, LaunchPage, QueryResult};
