use serde::Serialize;

use crate::core::error::FsError;
use crate::models::{Children, Content, DirEntry, FsNode, VirtualPath};

/// Virtual filesystem.
///
/// The top-level mapping holds the root's children; there is no node for the
/// root itself. The tree shape is fixed after construction.
///
/// # Path Convention
///
/// Lookups take concrete segment sequences ([`VirtualPath`]). Special tokens
/// like `..` or `~` are resolved by the caller before reaching this type.
#[derive(Clone, Debug, Default)]
pub struct VirtualFs {
    root: Children,
}

/// Borrowed handle to a directory inside a [`VirtualFs`].
///
/// Two handles are equal when they point at the same directory node.
#[derive(Clone, Copy, Debug)]
pub struct Directory<'a> {
    children: &'a Children,
}

impl PartialEq for Directory<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.children, other.children)
    }
}

impl Eq for Directory<'_> {}

impl VirtualFs {
    /// Create a filesystem from the root's children.
    pub fn new(root: Children) -> Self {
        Self { root }
    }

    /// Build the portfolio tree: `/home/<user>/` holding one file per section.
    pub fn from_content(content: &Content) -> Self {
        let profile = &content.profile;
        let home_dir = FsNode::dir([
            ("about.txt", FsNode::file(content.about.description.join("\n\n"))),
            ("skills.json", FsNode::file(pretty_json(&content.skills))),
            ("projects.db", FsNode::file(pretty_json(&content.projects))),
            ("experience.log", FsNode::file(pretty_json(&content.experience))),
            (
                "contact.info",
                FsNode::file(format!(
                    "Email: {}\nPhone: {}\nGitHub: {}",
                    profile.email, profile.phone, profile.github
                )),
            ),
            (
                "README.md",
                FsNode::file("# Welcome to my portfolio!\nType `help` to get started."),
            ),
        ]);

        let mut root = Children::new();
        root.insert(
            "home".to_string(),
            FsNode::dir([(profile.user.clone(), home_dir)]),
        );
        Self { root }
    }

    /// Resolve a path to a directory.
    ///
    /// Walks segment by segment from the root. Fails on the first segment that
    /// is missing (`PathNotFound`) or names a file (`NotADirectory`), echoing
    /// that segment.
    pub fn resolve(&self, path: &VirtualPath) -> Result<Directory<'_>, FsError> {
        let mut current = &self.root;

        for segment in path.segments() {
            match current.get(segment) {
                Some(FsNode::Directory { children }) => current = children,
                Some(FsNode::File { .. }) => {
                    return Err(FsError::NotADirectory(segment.clone()));
                }
                None => return Err(FsError::PathNotFound(segment.clone())),
            }
        }

        Ok(Directory { children: current })
    }

    /// The root directory.
    pub fn root(&self) -> Directory<'_> {
        Directory {
            children: &self.root,
        }
    }
}

impl<'a> Directory<'a> {
    /// List children in insertion order.
    pub fn list(&self) -> Vec<DirEntry> {
        self.children
            .iter()
            .map(|(name, node)| DirEntry {
                name: name.clone(),
                kind: node.kind(),
            })
            .collect()
    }

    /// Read the content of a file child.
    pub fn read(&self, name: &str) -> Result<&'a str, FsError> {
        match self.children.get(name) {
            Some(FsNode::File { content }) => Ok(content.as_str()),
            Some(FsNode::Directory { .. }) => Err(FsError::IsADirectory(name.to_string())),
            None => Err(FsError::PathNotFound(name.to_string())),
        }
    }

    /// Child names starting with `prefix` (case-sensitive), in listing order.
    ///
    /// Directory names gain a trailing `/`.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        self.children
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(name, node)| {
                if node.is_directory() {
                    format!("{}/", name)
                } else {
                    name.clone()
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Pretty JSON for file bodies generated from content sections.
fn pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONTENT_JSON;
    use crate::models::NodeKind;

    fn test_fs() -> VirtualFs {
        let mut root = Children::new();
        root.insert(
            "home".into(),
            FsNode::dir([(
                "mira",
                FsNode::dir([
                    ("notes", FsNode::dir([("todo.txt", FsNode::file("ship it"))])),
                    ("notes.md", FsNode::file("# notes")),
                    ("readme.txt", FsNode::file("hello")),
                ]),
            )]),
        );
        root.insert("etc".into(), FsNode::dir([("motd", FsNode::file("hi"))]));
        VirtualFs::new(root)
    }

    fn path(segments: &[&str]) -> VirtualPath {
        VirtualPath::from_segments(segments.iter().copied())
    }

    #[test]
    fn test_resolve_root() {
        let fs = test_fs();
        let root = fs.resolve(&VirtualPath::root()).unwrap();
        assert_eq!(root, fs.root());
        assert_eq!(root.len(), 2);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let fs = test_fs();
        let p = path(&["home", "mira", "notes"]);
        let first = fs.resolve(&p).unwrap();
        let second = fs.resolve(&p).unwrap();
        assert_eq!(first, second);
        assert_ne!(first, fs.resolve(&path(&["home", "mira"])).unwrap());
    }

    #[test]
    fn test_resolve_not_found_echoes_segment() {
        let fs = test_fs();
        assert_eq!(
            fs.resolve(&path(&["home", "Mira", "notes"])),
            Err(FsError::PathNotFound("Mira".into()))
        );
    }

    #[test]
    fn test_resolve_through_file() {
        let fs = test_fs();
        assert_eq!(
            fs.resolve(&path(&["home", "mira", "readme.txt", "x"])),
            Err(FsError::NotADirectory("readme.txt".into()))
        );
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let fs = test_fs();
        let dir = fs.resolve(&path(&["home", "mira"])).unwrap();
        let entries = dir.list();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["notes", "notes.md", "readme.txt"]);
        assert_eq!(entries[0].kind, NodeKind::Directory);
        assert!(entries[0].is_dir());
        assert_eq!(entries[2].kind, NodeKind::File);
    }

    #[test]
    fn test_read() {
        let fs = test_fs();
        let dir = fs.resolve(&path(&["home", "mira"])).unwrap();
        assert_eq!(dir.read("readme.txt"), Ok("hello"));
        assert_eq!(dir.read("notes"), Err(FsError::IsADirectory("notes".into())));
        assert_eq!(
            dir.read("missing.txt"),
            Err(FsError::PathNotFound("missing.txt".into()))
        );
    }

    #[test]
    fn test_completions() {
        let fs = test_fs();
        let dir = fs.resolve(&path(&["home", "mira"])).unwrap();

        assert_eq!(dir.completions("r"), vec!["readme.txt"]);
        assert_eq!(dir.completions("notes"), vec!["notes/", "notes.md"]);
        assert!(dir.completions("x").is_empty());
        // Case-sensitive
        assert!(dir.completions("R").is_empty());
        assert_eq!(dir.completions("").len(), 3);
    }

    #[test]
    fn test_portfolio_tree() {
        let content = Content::from_json(CONTENT_JSON).unwrap();
        let fs = VirtualFs::from_content(&content);

        let home = fs
            .resolve(&path(&["home", content.profile.user.as_str()]))
            .unwrap();
        let names: Vec<_> = home.list().into_iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![
                "about.txt",
                "skills.json",
                "projects.db",
                "experience.log",
                "contact.info",
                "README.md",
            ]
        );

        let skills: serde_json::Value =
            serde_json::from_str(home.read("skills.json").unwrap()).unwrap();
        assert_eq!(
            skills.as_array().map(|a| a.len()),
            Some(content.skills.len())
        );
        assert!(home.read("contact.info").unwrap().contains(&content.profile.email));
    }
}
