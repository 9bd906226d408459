//! CLI command implementations.
//!
//! - `get`: Print one resolved value
//! - `list`: Print every property with its resolved value
//! - `properties`: Print the property registry
//! - `validate`: Validate a configuration document
//! - `app_info`: Print the environment-derived app settings
//! - `completions`: Generate shell completion scripts

pub mod app_info;
pub mod completions;
pub mod get;
pub mod list;
pub mod properties;
pub mod validate;

pub use app_info::AppInfoCommand;
pub use completions::CompletionsCommand;
pub use get::GetCommand;
pub use list::ListCommand;
pub use properties::PropertiesCommand;
pub use validate::ValidateCommand;
