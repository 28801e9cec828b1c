#[cfg(feature = "cli")]
pub mod cli;
pub mod credentials;
pub mod settings;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use credentials::Credentials;
pub use settings::{HeadHunterSettings, Settings, SuperJobSettings};
