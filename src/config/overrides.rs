//! Layered composition of partial configurations
//!
//! Every source (config file, environment, caller overrides) produces a
//! [`ConfigLayer`]. Layers are combined left to right with a shallow,
//! per-key merge: a field set in a later layer replaces the earlier value.
//! `hooks` is treated as one value, so a later layer that declares hooks
//! replaces the whole map instead of merging hook by hook.

use super::ConfigLayer;

impl ConfigLayer {
    /// Merge `other` on top of `self`, rightmost wins per key
    pub fn merge(self, other: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            hooks: other.hooks.or(self.hooks),
            project_path: other.project_path.or(self.project_path),
            preserve_unused: other.preserve_unused.or(self.preserve_unused),
            no_ci: other.no_ci.or(self.no_ci),
            ci_only: other.ci_only.or(self.ci_only),
            runner: other.runner.or(self.runner),
        }
    }

    /// Fold any number of ordered layers into one
    pub fn layered<I>(layers: I) -> ConfigLayer
    where
        I: IntoIterator<Item = ConfigLayer>,
    {
        layers
            .into_iter()
            .fold(ConfigLayer::default(), |acc, layer| acc.merge(layer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HookOptions;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn hooks(entries: &[(&str, &str)]) -> Option<BTreeMap<String, Option<HookOptions>>> {
        Some(
            entries
                .iter()
                .map(|(name, command)| {
                    (
                        name.to_string(),
                        Some(HookOptions {
                            command: Some(command.to_string()),
                            ..Default::default()
                        }),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_rightmost_layer_wins() {
        let file = ConfigLayer {
            no_ci: Some(true),
            preserve_unused: Some(true),
            ..Default::default()
        };
        let overrides = ConfigLayer {
            no_ci: Some(false),
            ..Default::default()
        };

        let merged = ConfigLayer::layered([file, overrides]);
        assert_eq!(merged.no_ci, Some(false));
        assert_eq!(merged.preserve_unused, Some(true));
        assert_eq!(merged.ci_only, None);
    }

    #[test]
    fn test_hooks_are_replaced_not_merged() {
        let file = ConfigLayer {
            hooks: hooks(&[("pre-commit", "cargo fmt"), ("pre-push", "cargo test")]),
            ..Default::default()
        };
        let overrides = ConfigLayer {
            hooks: hooks(&[("commit-msg", "commitlint")]),
            ..Default::default()
        };

        let merged = ConfigLayer::layered([file, overrides]);
        let names: Vec<_> = merged.hooks.unwrap().into_keys().collect();
        assert_eq!(names, vec!["commit-msg".to_string()]);
    }

    #[test]
    fn test_unset_layer_keeps_earlier_hooks() {
        let file = ConfigLayer {
            hooks: hooks(&[("pre-commit", "cargo fmt")]),
            project_path: Some(PathBuf::from("/repo")),
            ..Default::default()
        };

        let merged = ConfigLayer::layered([file.clone(), ConfigLayer::default()]);
        assert_eq!(merged, file);
    }

    #[test]
    fn test_no_layers_is_empty() {
        assert_eq!(ConfigLayer::layered(Vec::new()), ConfigLayer::default());
    }
}
