/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use quire_server::QuireServer;

/// Re-export quire-server core for convenience
pub use quire_server;

/// Extension trait that converts a `QuireServer` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
}

impl IntoAxumRouter for QuireServer {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self.into_parts())
  }
}
