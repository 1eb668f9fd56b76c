use std::fmt;

use indexmap::IndexMap;

// =============================================================================
// Filesystem Nodes
// =============================================================================

/// Ordered children of a directory. Insertion order is listing order.
pub type Children = IndexMap<String, FsNode>;

/// Represents an entry in the virtual filesystem
#[derive(Clone, Debug, PartialEq)]
pub enum FsNode {
    Directory { children: Children },
    File { content: String },
}

impl FsNode {
    /// Create a file node.
    pub fn file(content: impl Into<String>) -> Self {
        FsNode::File {
            content: content.into(),
        }
    }

    /// Create a directory node from `(name, node)` pairs, keeping their order.
    ///
    /// A repeated name replaces the earlier node in place.
    pub fn dir<I, S>(children: I) -> Self
    where
        I: IntoIterator<Item = (S, FsNode)>,
        S: Into<String>,
    {
        FsNode::Directory {
            children: children
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        }
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, FsNode::Directory { .. })
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            FsNode::Directory { .. } => NodeKind::Directory,
            FsNode::File { .. } => NodeKind::File,
        }
    }
}

/// Kind tag reported by directory listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// Directory entry returned by a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: NodeKind,
}

impl DirEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

// =============================================================================
// Virtual Path
// =============================================================================

/// Absolute location in the virtual filesystem as concrete segment names.
///
/// The empty sequence is the root. Special tokens (`.`, `..`, `~`, `/`) are
/// never stored; [`VirtualPath::join_expr`] resolves them lexically.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VirtualPath(Vec<String>);

impl VirtualPath {
    /// The filesystem root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Last segment, or `None` at the root.
    pub fn name(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Parent path. The parent of the root is the root.
    pub fn parent(&self) -> Self {
        let mut segments = self.0.clone();
        segments.pop();
        Self(segments)
    }

    /// Resolve a path expression against this path without touching the tree.
    ///
    /// - empty or `~` alone: `home`
    /// - leading `/`: absolute from the root
    /// - leading `~/`: relative to `home`
    /// - `.` stays, `..` pops (clamped at the root)
    pub fn join_expr(&self, expr: &str, home: &VirtualPath) -> VirtualPath {
        let expr = expr.trim();
        if expr.is_empty() || expr == "~" {
            return home.clone();
        }

        let (mut segments, rest) = if let Some(rest) = expr.strip_prefix('/') {
            (Vec::new(), rest)
        } else if let Some(rest) = expr.strip_prefix("~/") {
            (home.0.clone(), rest)
        } else {
            (self.0.clone(), expr)
        };

        for part in rest.split('/').filter(|s| !s.is_empty()) {
            match part {
                "." => {}
                ".." => {
                    segments.pop();
                }
                name => segments.push(name.to_string()),
            }
        }

        Self(segments)
    }

    /// Unix-style display form: `/` for the root, `/a/b` otherwise.
    pub fn display(&self) -> String {
        format!("/{}", self.0.join("/"))
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> VirtualPath {
        VirtualPath::from_segments(["home", "mira"])
    }

    #[test]
    fn test_display() {
        assert_eq!(VirtualPath::root().display(), "/");
        assert_eq!(home().display(), "/home/mira");
        assert_eq!(home().to_string(), "/home/mira");
    }

    #[test]
    fn test_parent_clamps_at_root() {
        let p = home().parent();
        assert_eq!(p, VirtualPath::from_segments(["home"]));
        assert!(p.parent().is_root());
        assert!(p.parent().parent().is_root());
    }

    #[test]
    fn test_join_expr_special_tokens() {
        let cwd = home();
        assert_eq!(cwd.join_expr("", &home()), home());
        assert_eq!(cwd.join_expr("~", &home()), home());
        assert!(cwd.join_expr("/", &home()).is_root());
        assert_eq!(cwd.join_expr("..", &home()), VirtualPath::from_segments(["home"]));
        assert_eq!(cwd.join_expr(".", &home()), home());
    }

    #[test]
    fn test_join_expr_relative_and_absolute() {
        let cwd = VirtualPath::from_segments(["home"]);
        assert_eq!(
            cwd.join_expr("mira/notes", &home()),
            VirtualPath::from_segments(["home", "mira", "notes"])
        );
        assert_eq!(
            cwd.join_expr("/home/mira", &home()),
            VirtualPath::from_segments(["home", "mira"])
        );
        assert_eq!(
            VirtualPath::root().join_expr("~/notes", &home()),
            VirtualPath::from_segments(["home", "mira", "notes"])
        );
        assert!(VirtualPath::root().join_expr("../../..", &home()).is_root());
    }

    #[test]
    fn test_node_builders_keep_order() {
        let node = FsNode::dir([
            ("zeta", FsNode::file("z")),
            ("alpha", FsNode::dir(Vec::<(String, FsNode)>::new())),
        ]);
        let FsNode::Directory { children } = node else {
            panic!("Expected Directory variant");
        };
        let names: Vec<_> = children.keys().cloned().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(children["alpha"].kind(), NodeKind::Directory);
        assert!(!children["zeta"].is_directory());
    }
}
