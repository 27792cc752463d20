//! Build the sample graph and run every traversal and search on it.

use graphwalk::*;

fn main() -> GraphResult<()> {
    let mut graph = new_graph();
    for id in 1..=7u32 {
        graph.add_vertex(id);
    }
    for (v1, v2) in SAMPLE_EDGES {
        graph.add_edge(v1, v2);
    }

    // {1: {2}, 2: {3, 4}, 3: {5}, 4: {6, 7}, 5: {3}, 6: {3}, 7: {1, 6}}
    println!("{}", graph);

    println!("dft(1):           {:?}", graph.dft(&1)?);
    println!("bft(1):           {:?}", graph.bft(&1)?);
    println!("dft_recursive(1): {:?}", graph.dft_recursive(&1)?);

    println!("bfs(1, 6):        {:?}", graph.bfs(&1, &6)?);
    match graph.bfs(&1, &16) {
        Ok(path) => println!("bfs(1, 16):       {:?}", path),
        Err(e) => println!("bfs(1, 16):       {}", e),
    }
    println!("bfs(3, 3):        {:?}", graph.bfs(&3, &3)?);

    println!("dfs(1, 6):        {:?}", graph.dfs(&1, &6)?);
    match graph.dfs(&3, &26) {
        Ok(path) => println!("dfs(3, 26):       {:?}", path),
        Err(e) => println!("dfs(3, 26):       {}", e),
    }
    println!("dfs(2, 2):        {:?}", graph.dfs(&2, &2)?);

    Ok(())
}
