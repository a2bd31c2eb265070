use casc_patch::prune_map;
use casc_types::Map;

use crate::rule::FilterRule;

/// An ordered sequence of filter rules applied to a diffs tree.
///
/// Rules run strictly in order — later rules may assume earlier rules'
/// deletions already happened. The tree is pruned to a fixed point after
/// every rule, so a rule never sees empty structure left behind by its
/// predecessors.
#[derive(Default)]
pub struct FilterPipeline {
    rules: Vec<Box<dyn FilterRule>>,
}

impl FilterPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule to the end of the pipeline.
    pub fn add_rule(&mut self, rule: Box<dyn FilterRule>) {
        self.rules.push(rule);
    }

    /// Builder-style [`Self::add_rule`].
    pub fn with_rule(mut self, rule: Box<dyn FilterRule>) -> Self {
        self.add_rule(rule);
        self
    }

    /// Number of rules in the pipeline.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Run every rule against `diffs` in order, pruning after each.
    ///
    /// The output tree is always fully pruned, even for an empty pipeline.
    pub fn run(&self, diffs: &mut Map) -> RunReport {
        *diffs = prune_map(std::mem::take(diffs));

        let mut passes = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let removed = rule.apply(diffs);
            *diffs = prune_map(std::mem::take(diffs));
            tracing::debug!(
                rule = rule.name(),
                removed,
                remaining = diffs.len(),
                "filter pass complete"
            );
            passes.push(PassResult {
                rule_name: rule.name().to_string(),
                removed,
            });
        }

        RunReport { passes }
    }
}

/// Recorded result from one completed filter pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassResult {
    /// Name of the rule that produced this result.
    pub rule_name: String,
    /// Number of diff entries the rule removed or rewrote.
    pub removed: usize,
}

/// The outcome of running a diffs tree through the full pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Per-rule results in application order.
    pub passes: Vec<PassResult>,
}

impl RunReport {
    /// Total number of diff entries removed across all passes.
    pub fn total_removed(&self) -> usize {
        self.passes.iter().map(|pass| pass.removed).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casc_types::{Key, Value};

    struct DropKey(&'static str);

    impl FilterRule for DropKey {
        fn name(&self) -> &str {
            self.0
        }

        fn apply(&self, diffs: &mut Map) -> usize {
            match diffs.remove(&Key::from(self.0)) {
                Some(_) => 1,
                None => 0,
            }
        }
    }

    fn tree(json: serde_json::Value) -> Map {
        match Value::from(json) {
            Value::Map(map) => map,
            other => panic!("expected mapping, got {other:?}"),
        }
    }

    #[test]
    fn rules_run_in_order_with_per_pass_counts() {
        let pipeline = FilterPipeline::new()
            .with_rule(Box::new(DropKey("a")))
            .with_rule(Box::new(DropKey("missing")))
            .with_rule(Box::new(DropKey("b")));

        let mut diffs = tree(serde_json::json!({"a": 1, "b": 2, "c": 3}));
        let report = pipeline.run(&mut diffs);

        assert_eq!(report.passes.len(), 3);
        assert_eq!(report.passes[0], PassResult { rule_name: "a".into(), removed: 1 });
        assert_eq!(report.passes[1], PassResult { rule_name: "missing".into(), removed: 0 });
        assert_eq!(report.total_removed(), 2);
        assert_eq!(diffs, tree(serde_json::json!({"c": 3})));
    }

    #[test]
    fn output_is_pruned_after_every_rule() {
        // Dropping "x" leaves its parent "a" empty; the prune between
        // passes must cascade it away before the next rule runs.
        struct DropNested;
        impl FilterRule for DropNested {
            fn name(&self) -> &str {
                "drop-nested"
            }
            fn apply(&self, diffs: &mut Map) -> usize {
                let inner = diffs
                    .get_mut(&Key::from("a"))
                    .and_then(Value::as_map_mut);
                match inner {
                    Some(map) => usize::from(map.remove(&Key::from("x")).is_some()),
                    None => 0,
                }
            }
        }

        let pipeline = FilterPipeline::new().with_rule(Box::new(DropNested));
        let mut diffs = tree(serde_json::json!({"a": {"x": 1}, "b": 2}));
        let report = pipeline.run(&mut diffs);

        assert_eq!(report.total_removed(), 1);
        assert_eq!(diffs, tree(serde_json::json!({"b": 2})));
    }

    #[test]
    fn empty_pipeline_still_prunes() {
        let pipeline = FilterPipeline::new();
        let mut diffs = tree(serde_json::json!({"a": {}, "b": 1}));
        let report = pipeline.run(&mut diffs);
        assert!(report.passes.is_empty());
        assert_eq!(diffs, tree(serde_json::json!({"b": 1})));
    }
}
