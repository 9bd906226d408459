//! Configuration trees: representation, loading and validation.
//!
//! A configuration tree is a parsed YAML document whose root maps property
//! names to values. An optional `profiles` mapping holds per-profile sections
//! of the same shape, which take precedence over the root for users who have
//! selected that profile.
//!
//! # Examples
//!
//! ```
//! use dashconf::config::{ConfigValidator, ConfigurationTree};
//! use dashconf::{ProfileId, PropertyRegistry};
//!
//! let tree = ConfigurationTree::from_yaml_str(
//!     r#"
//! dashboard_logo: "/public/ood.png"
//! profiles:
//!   team1:
//!     dashboard_logo: "/public/team1.png"
//! "#,
//! )
//! .unwrap();
//!
//! let team1 = tree.profile(&ProfileId::new("team1")).unwrap();
//! assert_eq!(team1.get("dashboard_logo").and_then(|v| v.as_str()), Some("/public/team1.png"));
//!
//! let registry = PropertyRegistry::dashboard().unwrap();
//! assert!(ConfigValidator::validate(&tree, &registry).unwrap().is_empty());
//! ```

pub mod loader;
pub mod tree;
pub mod validator;

pub use loader::ConfigLoader;
pub use tree::{ConfigurationTree, PROFILES_KEY};
pub use validator::{ConfigValidator, ValidationWarning};
