//! Configuration system.
//! TOML-based, layered resolution: env > project file > defaults.

pub mod server_config;
pub mod signal_config;
pub mod timing_config;

pub use server_config::ServerConfig;
pub use signal_config::SignalConfig;
pub use timing_config::TimingConfig;
