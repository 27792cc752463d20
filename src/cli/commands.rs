//! CLI command implementations.

use std::fmt::Debug;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, Path, SAMPLE_EDGES};

/// Whole-graph traversal selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    /// Breadth-first traversal.
    Bft,
    /// Iterative depth-first traversal.
    Dft,
    /// Recursive depth-first traversal.
    DftRecursive,
}

impl TraversalKind {
    /// Command name of this traversal.
    pub fn name(self) -> &'static str {
        match self {
            TraversalKind::Bft => "bft",
            TraversalKind::Dft => "dft",
            TraversalKind::DftRecursive => "dft-recursive",
        }
    }

    /// Run this traversal on `graph`.
    pub fn run<V: Ord + Clone + Debug>(self, graph: &Graph<V>, start: &V) -> GraphResult<Vec<V>> {
        match self {
            TraversalKind::Bft => graph.bft(start),
            TraversalKind::Dft => graph.dft(start),
            TraversalKind::DftRecursive => graph.dft_recursive(start),
        }
    }
}

/// Path search selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Breadth-first (shortest) path search.
    Bfs,
    /// Depth-first path search.
    Dfs,
}

impl SearchKind {
    /// Command name of this search.
    pub fn name(self) -> &'static str {
        match self {
            SearchKind::Bfs => "bfs",
            SearchKind::Dfs => "dfs",
        }
    }

    /// Run this search on `graph`.
    pub fn run<V: Ord + Clone + Debug>(
        self,
        graph: &Graph<V>,
        start: &V,
        destination: &V,
    ) -> GraphResult<Path<V>> {
        match self {
            SearchKind::Bfs => graph.bfs(start, destination),
            SearchKind::Dfs => graph.dfs(start, destination),
        }
    }
}

/// Re-render the identifiers in a traversal or search error as plain text.
fn plain_ids(err: GraphError, start: &str, destination: Option<&str>) -> GraphError {
    match (err, destination) {
        (GraphError::NotFound { .. }, Some(destination)) => {
            GraphError::not_found_named(&start, &destination)
        }
        (GraphError::UnknownVertex(_), _) => GraphError::unknown_vertex_named(&start),
        (err, None) => err,
    }
}

/// Parse an edge list such as `"5-3,6-3,7-1"` into `(from, to)` pairs.
///
/// Returns `None` if any entry is not of the form `from-to`.
pub fn parse_edges(spec: &str) -> Option<Vec<(String, String)>> {
    spec.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (from, to) = entry.split_once('-')?;
            let (from, to) = (from.trim(), to.trim());
            if from.is_empty() || to.is_empty() {
                return None;
            }
            Some((from.to_string(), to.to_string()))
        })
        .collect()
}

/// Build the graph named on the command line, or the sample graph.
pub fn load_graph(edges: Option<&str>) -> Option<Graph<String>> {
    match edges {
        Some(spec) => parse_edges(spec).map(Graph::from_edges),
        None => Some(sample_string_graph()),
    }
}

/// The sample graph with string identifiers.
pub fn sample_string_graph() -> Graph<String> {
    let mut graph = Graph::new();
    for id in 1..=7u32 {
        graph.add_vertex(id.to_string());
    }
    graph.extend(
        SAMPLE_EDGES
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string())),
    );
    graph
}

/// Print the vertex-to-neighbors mapping.
pub fn cmd_show(graph: &Graph<String>, json: bool) -> GraphResult<()> {
    if json {
        let info = serde_json::json!({
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "adjacency": graph,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("{}", graph);
    }
    Ok(())
}

/// Run a traversal and print the visit order.
pub fn cmd_traverse(
    graph: &Graph<String>,
    kind: TraversalKind,
    start: &str,
    json: bool,
) -> GraphResult<()> {
    let start = start.to_string();
    let order = kind
        .run(graph, &start)
        .map_err(|e| plain_ids(e, &start, None))?;

    if json {
        let out = serde_json::json!({
            "operation": kind.name(),
            "start": start,
            "order": order,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("{} from {}: {}", kind.name(), start, order.join(", "));
    }
    Ok(())
}

/// Run a path search and print the path found.
pub fn cmd_search(
    graph: &Graph<String>,
    kind: SearchKind,
    start: &str,
    destination: &str,
    json: bool,
) -> GraphResult<()> {
    let start = start.to_string();
    let destination = destination.to_string();
    let path = kind
        .run(graph, &start, &destination)
        .map_err(|e| plain_ids(e, &start, Some(destination.as_str())))?;

    if json {
        let out = serde_json::json!({
            "operation": kind.name(),
            "start": start,
            "destination": destination,
            "path": path,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!(
            "{} {} -> {}: [{}]",
            kind.name(),
            start,
            destination,
            path.join(", ")
        );
    }
    Ok(())
}

/// Exercise all five operations on the sample graph.
///
/// Always uses the sample graph; an edge list given on the command line
/// does not apply here.
///
/// Search failures are reported inline rather than aborting the demo.
pub fn cmd_demo(json: bool) -> GraphResult<()> {
    let graph = sample_string_graph();
    let traversals = [
        TraversalKind::Dft,
        TraversalKind::Bft,
        TraversalKind::DftRecursive,
    ];
    let searches = [
        (SearchKind::Bfs, "1", "6"),
        (SearchKind::Bfs, "1", "16"),
        (SearchKind::Bfs, "3", "3"),
        (SearchKind::Dfs, "1", "6"),
        (SearchKind::Dfs, "3", "26"),
        (SearchKind::Dfs, "2", "2"),
    ];
    let start = "1".to_string();

    if json {
        let mut runs = Vec::new();
        for kind in traversals {
            let order = kind.run(&graph, &start)?;
            runs.push(serde_json::json!({
                "operation": kind.name(),
                "start": start,
                "order": order,
            }));
        }
        for (kind, from, to) in searches {
            let outcome = match kind
                .run(&graph, &from.to_string(), &to.to_string())
                .map_err(|e| plain_ids(e, from, Some(to)))
            {
                Ok(path) => serde_json::json!({ "path": path }),
                Err(e @ GraphError::NotFound { .. }) => {
                    serde_json::json!({ "not_found": e.to_string() })
                }
                Err(e) => return Err(e),
            };
            runs.push(serde_json::json!({
                "operation": kind.name(),
                "start": from,
                "destination": to,
                "result": outcome,
            }));
        }
        let out = serde_json::json!({
            "adjacency": graph,
            "runs": runs,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("{}", graph);
        for kind in traversals {
            cmd_traverse(&graph, kind, &start, false)?;
        }
        for (kind, from, to) in searches {
            match cmd_search(&graph, kind, from, to, false) {
                Ok(()) => {}
                Err(e @ GraphError::NotFound { .. }) => {
                    println!("{} {} -> {}: {}", kind.name(), from, to, e)
                }
                Err(e) => return Err(e),
            }
        }
    }
    Ok(())
}
