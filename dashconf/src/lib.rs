#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # dashconf
//!
//! Profile-aware configuration resolution for the dashboard.
//!
//! Each dashboard property resolves, in order, from an environment variable
//! (when the property allows it), the active user's profile section, the root
//! configuration, and finally its default.
//!
//! ## Core Types
//!
//! - [`PropertyRegistry`] and [`PropertyDescriptor`]: the declared properties
//! - [`ConfigurationTree`]: the parsed configuration document
//! - [`Resolver`]: the generic lookup
//! - [`UserConfiguration`]: per-user accessors, including derived values
//! - [`AppConfig`]: environment-derived app settings
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use dashconf::env::MapEnv;
//! use dashconf::{ConfigurationTree, PropertyRegistry, UserConfiguration, UserSettings};
//!
//! let registry = PropertyRegistry::dashboard().unwrap();
//! let tree = ConfigurationTree::from_yaml_str(
//!     "dashboard_title: Campus HPC\nprofiles:\n  team1:\n    dashboard_title: Team One\n",
//! )
//! .unwrap();
//! let env = MapEnv::new();
//!
//! let settings = UserSettings::with_profile("team1");
//! let config = UserConfiguration::new(&registry, &tree, &env, &settings);
//! assert_eq!(config.value("dashboard_title").unwrap().as_str(), Some("Team One"));
//! assert_eq!(config.public_url().to_str(), Some("/public"));
//! ```

pub mod app;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod profile;
pub mod property;
pub mod resolver;
pub mod user_config;
pub mod value;

// Re-export key types at crate root for convenience
pub use app::AppConfig;
pub use config::{ConfigLoader, ConfigValidator, ConfigurationTree};
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use profile::{ProfileId, UserSettings};
pub use property::{PropertyDescriptor, PropertyRegistry, ValueMapper};
pub use resolver::{Resolution, Resolver, ValueSource};
pub use user_config::{DerivedProperty, NavbarType, UserConfiguration};
pub use value::Value;
