use std::collections::BTreeMap;

/// Module dependency graph keyed by root-relative path (`/` separated).
///
/// Every analyzed file is a node, including files without dependencies.
/// Each node keeps its resolved dependencies in extraction order, duplicates
/// included. Iteration is ordered by node path, so two builds over the same
/// tree iterate identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    nodes: BTreeMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn dependencies(&self, node: &str) -> Option<&[String]> {
        self.nodes.get(node).map(Vec::as_slice)
    }

    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.nodes.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of (source, dependency) pairs, duplicates counted.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, Vec<String>)> for DependencyGraph {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut nodes = BTreeMap::new();
        for (node, deps) in iter {
            nodes.entry(node).or_insert_with(Vec::new).extend(deps);
        }
        Self { nodes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DependencyGraph {
        [
            ("src/b.ts".to_string(), vec![]),
            ("src/a.ts".to_string(), vec!["src/b.ts".to_string(), "src/b.ts".to_string()]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_nodes_ordered_by_path() {
        let graph = sample();
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["src/a.ts", "src/b.ts"]);
    }

    #[test]
    fn test_counts() {
        let graph = sample();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.is_empty());
        assert!(DependencyGraph::new().is_empty());
    }

    #[test]
    fn test_dependencies_keep_duplicates() {
        let graph = sample();
        assert_eq!(graph.dependencies("src/a.ts").unwrap(), &["src/b.ts", "src/b.ts"]);
        assert_eq!(graph.dependencies("src/b.ts").unwrap().len(), 0);
        assert!(graph.dependencies("src/c.ts").is_none());
        assert!(graph.contains("src/b.ts"));
    }
}
