#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "axum")]
pub mod binding;
pub mod listing;
mod route;
mod router;
mod server;
mod verb;

pub use listing::Listing;
pub use route::Route;
pub use router::{Context, Router};
pub use server::Server;
pub use verb::{Method, Verb};
