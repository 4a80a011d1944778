//! pylaunch configuration layer
//!
//! All environment lookups go through this module; callers read typed
//! structs instead of calling `std::env::var` directly.
//!
//! - `loader`: `EnvSource` with `env_or` / `env_optional` / `env_bool`, `.env` parsing
//! - `schema`: `LayoutConfig`, `ObservabilityConfig`, `PauseMode`
//! - `env_keys`: key constants

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{parse_dotenv, DotenvError, EnvSource, DOTENV_FILE};
pub use schema::{ConfigError, LayoutConfig, ObservabilityConfig, PauseMode};
