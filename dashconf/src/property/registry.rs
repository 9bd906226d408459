//! The ordered property registry.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::property::descriptor::PropertyDescriptor;
use crate::value::empty_sequence;

/// Ordered, immutable set of property descriptors.
///
/// # Examples
///
/// ```
/// use dashconf::property::{PropertyDescriptor, PropertyRegistry};
///
/// let registry = PropertyRegistry::new([
///     PropertyDescriptor::new("dashboard_layout"),
///     PropertyDescriptor::new("pinned_apps_menu_length").default_value(6),
/// ])
/// .unwrap();
/// assert_eq!(registry.len(), 2);
/// assert!(registry.get("dashboard_layout").is_ok());
/// assert!(registry.get("unknown").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PropertyRegistry {
    properties: Vec<PropertyDescriptor>,
    index: HashMap<String, usize>,
}

impl PropertyRegistry {
    /// Builds a registry, preserving the order of `descriptors`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateProperty`] if two descriptors share a name.
    pub fn new(descriptors: impl IntoIterator<Item = PropertyDescriptor>) -> Result<Self> {
        let properties: Vec<PropertyDescriptor> = descriptors.into_iter().collect();
        let mut index = HashMap::with_capacity(properties.len());

        for (position, property) in properties.iter().enumerate() {
            if index.insert(property.name().to_string(), position).is_some() {
                return Err(Error::DuplicateProperty {
                    name: property.name().to_string(),
                });
            }
        }

        Ok(Self { properties, index })
    }

    /// The dashboard's built-in registry.
    ///
    /// # Errors
    ///
    /// Fails only if the built-in table contains a duplicate name.
    pub fn dashboard() -> Result<Self> {
        Self::new(dashboard_properties())
    }

    /// Looks up a descriptor by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRegistered`] for unknown names.
    pub fn get(&self, name: &str) -> Result<&PropertyDescriptor> {
        self.index
            .get(name)
            .map(|&i| &self.properties[i])
            .ok_or_else(|| Error::NotRegistered {
                name: name.to_string(),
            })
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, PropertyDescriptor> {
        self.properties.iter()
    }

    /// Number of registered properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<'a> IntoIterator for &'a PropertyRegistry {
    type Item = &'a PropertyDescriptor;
    type IntoIter = std::slice::Iter<'a, PropertyDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The dashboard's property table, in display order.
#[must_use]
pub fn dashboard_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::new("dashboard_header_img_logo").read_from_env(),
        // Whether the dashboard logo image is hidden
        PropertyDescriptor::boolean("disable_dashboard_logo")
            .default_value(false)
            .env_names(["OOD_DISABLE_DASHBOARD_LOGO", "DISABLE_DASHBOARD_LOGO"]),
        PropertyDescriptor::new("dashboard_logo").read_from_env(),
        // Rendered into the logo's height style attribute
        PropertyDescriptor::new("dashboard_logo_height").read_from_env(),
        PropertyDescriptor::new("brand_bg_color").env_names([
            "OOD_BRAND_BG_COLOR",
            "BOOTSTRAP_NAVBAR_DEFAULT_BG",
            "BOOTSTRAP_NAVBAR_INVERSE_BG",
        ]),
        PropertyDescriptor::new("brand_link_active_bg_color").env_names([
            "OOD_BRAND_LINK_ACTIVE_BG_COLOR",
            "BOOTSTRAP_NAVBAR_DEFAULT_LINK_ACTIVE_BG",
            "BOOTSTRAP_NAVBAR_INVERSE_LINK_ACTIVE_BG",
        ]),
        PropertyDescriptor::new("dashboard_layout"),
        PropertyDescriptor::new("pinned_apps").default_value(empty_sequence()),
        PropertyDescriptor::new("pinned_apps_menu_length").default_value(6),
        // Entries look like `{ id: team1, name: "Team 1", icon: user }`
        PropertyDescriptor::new("profile_links").default_value(empty_sequence()),
        // Relative entries are served from under public_url
        PropertyDescriptor::new("custom_css_files").default_value(empty_sequence()),
        PropertyDescriptor::new("dashboard_title")
            .default_value("Open OnDemand")
            .read_from_env(),
    ]
}
