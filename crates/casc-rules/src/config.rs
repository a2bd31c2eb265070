use casc_query::Pattern;
use casc_types::KeyPath;
use serde::{Deserialize, Serialize};

use crate::builtin::{DropAdded, DropRemoved, IgnorePaths, NormalizedStringsEqual};
use crate::error::ConfigResult;
use crate::pipeline::FilterPipeline;

/// Declarative filter configuration, loadable from TOML.
///
/// Builds a pipeline in a fixed order: added-record drops, removed-record
/// drops, string normalization, then the explicit ignore list. The order
/// matters — later rules see the tree after earlier deletions have been
/// pruned away.
///
/// ```toml
/// drop_added = ["*.methods.*", "*"]
/// normalize_strings = true
/// ignore_paths = ["Node.enums.Type"]
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Patterns under which `Added` records are acceptable.
    pub drop_added: Vec<String>,
    /// Patterns under which `Removed` records are acceptable.
    pub drop_removed: Vec<String>,
    /// Drop changed strings that are equal after normalization.
    pub normalize_strings: bool,
    /// Dotted paths of known-ignorable diffs; missing paths are fine.
    pub ignore_paths: Vec<String>,
}

impl RulesConfig {
    /// A configuration that only strips cosmetic string changes.
    pub fn cosmetic() -> Self {
        Self {
            normalize_strings: true,
            ..Default::default()
        }
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Build the filter pipeline this configuration describes.
    pub fn build_pipeline(&self) -> ConfigResult<FilterPipeline> {
        let mut pipeline = FilterPipeline::new();

        for raw in &self.drop_added {
            let pattern = Pattern::parse(raw)?;
            pipeline.add_rule(Box::new(DropAdded::new(
                format!("drop-added:{raw}"),
                pattern,
            )?));
        }
        for raw in &self.drop_removed {
            let pattern = Pattern::parse(raw)?;
            pipeline.add_rule(Box::new(DropRemoved::new(
                format!("drop-removed:{raw}"),
                pattern,
            )?));
        }
        if self.normalize_strings {
            pipeline.add_rule(Box::new(NormalizedStringsEqual::new()));
        }
        if !self.ignore_paths.is_empty() {
            let paths = self
                .ignore_paths
                .iter()
                .map(|raw| KeyPath::parse(raw))
                .collect::<Result<Vec<_>, _>>()?;
            pipeline.add_rule(Box::new(IgnorePaths::new("ignore-paths", paths)));
        }

        Ok(pipeline)
    }
}
