//! Recursive, concurrent materialization of remote resource trees.
//!
//! Given a tree whose leaves are remote resource locators and whose interior
//! nodes are named groups, [`Materializer::materialize`] fetches every leaf
//! and reconstructs the tree shape through one of two sink strategies: a real
//! directory hierarchy when the host grants one, or a single ZIP artifact
//! handed back to the host otherwise.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - The input tree and progress types
//! - [`core`] - Pure transformations over locators and trees
//! - [`effects`] - Sinks, the concurrent walk and orchestration
//!
//! # Key Features
//!
//! - **One walk, two sinks**: a single recursion drives both output
//!   strategies through the [`Sink`] trait
//! - **Per-branch error isolation**: a failing child never cancels its
//!   siblings; failures are reported to a [`WalkObserver`] and swallowed
//! - **Level-aware progress**: one [`ProgressTick`] per settled child, at
//!   every depth, in completion order

mod core;
mod data;
mod effects;
mod error;

pub use crate::core::{artifact_filename, leaf_count, leaf_name};
pub use data::{Group, Node, ProgressTick, noop_progress};
pub use effects::{
    ArchiveSink, Artifact, ChildFailure, ChildRef, Host, LocalHost, Materialized, Materializer,
    Sink, TracingObserver, TreeSink, WalkObserver,
};
pub use error::{LeafFailure, MaterializeError, PermissionDenied, SinkError};
