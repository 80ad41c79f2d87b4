use std::{collections::BTreeMap, fmt};

///
/// err
/// Format a message straight into an `ErrorTree`.
///

#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {{
        $errs.add(format!($($arg)*));
    }};
}

///
/// ErrorTree
///
/// Aggregated validation errors. Messages are attached either to the root
/// or to a route (`article.tags`) so every problem in a catalog is reported
/// in one pass instead of failing on the first.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    pub messages: Vec<String>,
    pub children: BTreeMap<String, Self>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, message: impl ToString) {
        self.messages.push(message.to_string());
    }

    pub fn add_for(&mut self, route: impl Into<String>, message: impl ToString) {
        self.children.entry(route.into()).or_default().add(message);
    }

    // merge another tree underneath `route`, skipping empty trees
    pub fn merge_for(&mut self, route: impl Into<String>, other: Self) {
        if other.is_empty() {
            return;
        }

        let child = self.children.entry(route.into()).or_default();
        child.messages.extend(other.messages);
        for (key, tree) in other.children {
            child.merge_for(key, tree);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of messages in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Flatten into `(route, message)` pairs; root messages have an empty route.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);

        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for message in &self.messages {
            out.push((prefix.to_string(), message.clone()));
        }
        for (key, child) in &self.children {
            let route = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            child.flatten_into(&route, out);
        }
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .flatten()
            .into_iter()
            .map(|(route, message)| {
                if route.is_empty() {
                    message
                } else {
                    format!("{route}: {message}")
                }
            })
            .collect::<Vec<_>>();

        write!(f, "{}", lines.join("; "))
    }
}

impl From<String> for ErrorTree {
    fn from(message: String) -> Self {
        let mut tree = Self::new();
        tree.add(message);

        tree
    }
}

impl From<&str> for ErrorTree {
    fn from(message: &str) -> Self {
        Self::from(message.to_string())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_is_ok() {
        let tree = ErrorTree::new();
        assert!(tree.is_empty());
        assert!(tree.result().is_ok());
    }

    #[test]
    fn routed_messages_render_with_prefix() {
        let mut tree = ErrorTree::new();
        err!(tree, "catalog has {} problems", 2);
        tree.add_for("article", "duplicate entity type id");
        tree.add_for("article", "label is empty");

        assert_eq!(tree.len(), 3);
        assert_eq!(
            tree.to_string(),
            "catalog has 2 problems; article: duplicate entity type id; article: label is empty"
        );
    }

    #[test]
    fn merge_nests_routes() {
        let mut inner = ErrorTree::new();
        inner.add_for("tags", "bad name");

        let mut tree = ErrorTree::new();
        tree.merge_for("article", inner);
        tree.merge_for("tag", ErrorTree::new());

        assert_eq!(
            tree.flatten(),
            vec![("article.tags".to_string(), "bad name".to_string())]
        );
        assert!(!tree.children.contains_key("tag"));
    }
}
