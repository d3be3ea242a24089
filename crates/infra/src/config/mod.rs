//! Configuration loading: `DUOSYNC_*` environment variables when
//! `DUOSYNC_USERNAME` is set, otherwise probed JSON/TOML files.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
