/// Location of a folder scope inside an [`Archive`](crate::Archive).
///
/// The root scope is the empty path; joined names use `/` separators, the
/// entry-name convention ZIP itself uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FolderPath(String);

impl FolderPath {
    pub fn root() -> Self { Self(String::new()) }

    /// Scope of a folder named `name` directly under this one.
    pub fn join(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}/{}", self.0, name))
        }
    }

    /// Full entry name of a file named `name` in this scope.
    pub fn entry(&self, name: &str) -> String {
        if self.0.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.0, name)
        }
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_from_root_has_no_leading_separator() {
        let scope = FolderPath::root().join("docs");
        assert_eq!(scope.as_str(), "docs");
        assert_eq!(scope.join("img").as_str(), "docs/img");
    }

    #[test]
    fn entry_names() {
        assert_eq!(FolderPath::root().entry("a.txt"), "a.txt");
        assert_eq!(FolderPath::root().join("docs").entry("a.txt"), "docs/a.txt");
    }
}
