/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{find_quire_config, load_quire_config};
pub use types::{QuireConfig, ServerSection};
