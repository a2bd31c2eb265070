use casc_types::Map;

/// A single filter pass over a diffs tree.
///
/// A rule decides which differences are acceptable and strips them out of
/// the tree in place. Rules are expected to be defensive: a node of an
/// unexpected shape is skipped, never an error — one ill-shaped rule must
/// not abort the whole run.
///
/// The trait is object-safe and `Send + Sync` so rules can be stored in a
/// `Vec<Box<dyn FilterRule>>`.
pub trait FilterRule: Send + Sync {
    /// Human-readable name of this rule (e.g., "drop-added:*.methods.*").
    fn name(&self) -> &str;

    /// Apply the rule to the diffs tree, returning the number of diff
    /// entries it removed or rewrote. The pipeline prunes after each rule,
    /// so implementations may leave emptied mappings behind.
    fn apply(&self, diffs: &mut Map) -> usize;
}
