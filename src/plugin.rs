//! Best-effort build plugin lookup.
//!
//! A site build can be augmented with image routes by a plugin package that
//! may or may not be installed. Resolution happens once against a
//! [`PluginRegistry`]; when the package is missing, or present without the
//! plugin entry point, the build configuration passes through untouched.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Package name the image plugin is published under.
pub const PLUGIN_PACKAGE: &str = "og-image";
/// Route the bundled plugin serves images from.
pub const IMAGE_ROUTE: &str = "/og";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    #[serde(default)]
    pub routes: Vec<ImageRoute>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRoute {
    pub path: String,
    pub template: String,
}

pub trait BuildPlugin {
    fn apply(&self, config: BuildConfig) -> BuildConfig;
}

/// An installed package, which may or may not expose a build plugin.
pub struct Package {
    entry: Option<Box<dyn BuildPlugin + Send + Sync>>,
}

impl Package {
    pub fn with_entry(plugin: impl BuildPlugin + Send + Sync + 'static) -> Self {
        Self {
            entry: Some(Box::new(plugin)),
        }
    }

    pub fn without_entry() -> Self {
        Self { entry: None }
    }
}

#[derive(Default)]
pub struct PluginRegistry {
    packages: HashMap<String, Package>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the bundled [`OgImagePlugin`].
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.install(PLUGIN_PACKAGE, Package::with_entry(OgImagePlugin::default()));
        registry
    }

    pub fn install(&mut self, name: impl Into<String>, package: Package) {
        self.packages.insert(name.into(), package);
    }

    pub fn resolve(&self, name: &str) -> Option<&(dyn BuildPlugin + Send + Sync)> {
        self.packages.get(name)?.entry.as_deref()
    }
}

/// Apply the image plugin if it resolves, otherwise return `config` as is.
pub fn with_og_images(config: BuildConfig, registry: &PluginRegistry) -> BuildConfig {
    match registry.resolve(PLUGIN_PACKAGE) {
        Some(plugin) => plugin.apply(config),
        None => {
            tracing::debug!(package = PLUGIN_PACKAGE, "build plugin not available, config unchanged");
            config
        }
    }
}

/// Adds the image route, once.
#[derive(Debug, Clone)]
pub struct OgImagePlugin {
    pub route: String,
    pub template: String,
}

impl Default for OgImagePlugin {
    fn default() -> Self {
        Self {
            route: IMAGE_ROUTE.to_string(),
            template: crate::cli::models::DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl BuildPlugin for OgImagePlugin {
    fn apply(&self, mut config: BuildConfig) -> BuildConfig {
        if !config.routes.iter().any(|r| r.path == self.route) {
            config.routes.push(ImageRoute {
                path: self.route.clone(),
                template: self.template.clone(),
            });
        }
        config
    }
}
