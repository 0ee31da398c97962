//! Data layer: the input tree and progress reporting types.

/// One element of an input tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A remote resource, referenced by its locator.
    Leaf(String),
    /// A named collection of child nodes.
    Group(Group),
}

impl Node {
    pub fn leaf(locator: impl Into<String>) -> Self { Node::Leaf(locator.into()) }

    pub fn group(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Group(Group::new(name, children))
    }
}

/// An ordered, possibly empty collection of child nodes.
///
/// `name` is raw input; the display name used for directories, archive
/// folders and the artifact filename is resolved through the naming function
/// passed to [`Materializer::materialize`](crate::Materializer::materialize),
/// exactly once per visit. Sibling display-name collisions are not
/// deduplicated; within a parent, colliding entries overwrite each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name:     String,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }
}

/// Snapshot emitted after every settled child, successful or not.
///
/// `total_leaves` counts settled leaf fetches across the whole invocation;
/// settled groups never increment it. Callers wanting "all nodes" semantics
/// must derive their own count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTick {
    /// Children of the current group settled so far, this one included.
    pub completed_in_group: usize,
    /// Leaves settled across the whole invocation, at emission time.
    pub total_leaves: u64,
    /// Distance of the current group from the tree root (root = 0).
    pub depth: usize,
}

/// Stand-in callback for callers not interested in progress.
pub fn noop_progress(_: ProgressTick) {}
