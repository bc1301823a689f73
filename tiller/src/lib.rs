//! Declarative page routing for terminal applications.
//!
//! A route table maps URL-style paths to page components; the router built
//! from it exposes navigation by path or by name, browser-style history, and
//! a watch channel the host UI loop can subscribe to. Components are opaque
//! to this crate: rendering and view state belong to the application.

pub mod error;
pub mod history;
pub mod route;
pub mod router;

pub use error::{Error, Result};

// Re-export common types for convenience
pub use history::{History, HistoryMode, Location};
pub use route::{Route, RouteTable};
pub use router::{Router, RouterBuilder};
