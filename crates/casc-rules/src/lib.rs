//! Filter-rule pipeline for casc diff trees.
//!
//! A diffs tree fresh out of the comparator reports every difference; most
//! of them are acceptable. This crate runs an explicit, ordered list of
//! filter rules over the tree — each rule deletes the diffs it judges
//! acceptable, and the tree is pruned to a fixed point after every rule so
//! emptied structure cascades away before the next rule looks.
//!
//! # Key Types
//!
//! - [`FilterRule`] -- One filter pass, object-safe
//! - [`FilterPipeline`] / [`RunReport`] -- Ordered application with per-rule counts
//! - [`builtin`] -- Generic rules: drop added/removed at a pattern, drop
//!   accepted changes, cosmetic string churn, explicit ignore lists
//! - [`RulesConfig`] -- TOML-loadable pipeline description

pub mod builtin;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod rule;
pub mod text;

pub use config::RulesConfig;
pub use error::{ConfigError, ConfigResult};
pub use pipeline::{FilterPipeline, PassResult, RunReport};
pub use rule::FilterRule;
