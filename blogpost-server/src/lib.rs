//! HTTP API over blog posts and users, with Basic-auth-gated writes.
//!
//! [`start`] brings the server up and hands back a [`ServerHandle`]; the handle is the only
//! way to stop it again.

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

pub use infrastructure::logging::init_logging;
pub use infrastructure::settings::Settings;
pub use server::{ServerHandle, start};
