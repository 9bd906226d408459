//! Property descriptors, value mappers and the property registry.
//!
//! A property is a named configuration value with a default and, optionally,
//! a list of environment variables that override it. The registry holds the
//! descriptors in a fixed order and rejects duplicate names at construction.
//!
//! # Examples
//!
//! ```
//! use dashconf::property::{PropertyDescriptor, PropertyRegistry};
//!
//! let registry = PropertyRegistry::new([
//!     PropertyDescriptor::new("dashboard_title")
//!         .default_value("Open OnDemand")
//!         .read_from_env(),
//! ])
//! .unwrap();
//!
//! let title = registry.get("dashboard_title").unwrap();
//! assert_eq!(title.environment_names(), ["OOD_DASHBOARD_TITLE"]);
//! ```

pub mod descriptor;
pub mod mapper;
pub mod registry;

pub use descriptor::{derived_env_name, PropertyDescriptor, DERIVED_ENV_PREFIX};
pub use mapper::{parse_bool, ValueMapper};
pub use registry::{dashboard_properties, PropertyRegistry};
