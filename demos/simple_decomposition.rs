//! Simple example demonstrating chordal-td usage
//!
//! Run with: cargo run --example simple_decomposition

use chordal_td::{
    chordless_cycles, is_chordal, run_treewidth, SolverConfig, TreeDecomposition,
    TreewidthSolver, UndirectedGraph,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🦀 chordal-td Example\n");

    // 1. Build a graph: two squares sharing the edge 2 - 5
    println!("📊 Building graph...");
    let graph = UndirectedGraph::from_edge_list(
        &[1, 2, 3, 4, 5, 6],
        &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 1), (2, 5)],
    )?;
    println!(
        "  ✅ Graph built: {} vertices, {} edges\n",
        graph.num_vertices(),
        graph.num_edges()
    );

    // 2. Inspect structure
    println!("🔍 Inspecting graph...");
    println!("  chordal: {}", is_chordal(&graph).is_chordal);
    for cycle in chordless_cycles(&graph) {
        println!("  chordless cycle: {cycle:?}");
    }

    // 3. Solve
    println!("\n🌳 Computing tree decomposition...");
    let mut solver = TreewidthSolver::new(SolverConfig::default().with_seed(42));
    let solution = solver.solve(&graph)?;
    println!(
        "  ✅ {:?}: {} bags, width {} ({} trials)",
        solution.strategy,
        solution.decomposition.num_bags(),
        solution.width(),
        solution.trials_run
    );
    solution.decomposition.verify(&graph)?;
    print!("{}", solution.decomposition.to_pace_string(graph.num_vertices()));

    // 4. Persist to Parquet
    println!("\n💾 Saving to Parquet...");
    let path = std::env::temp_dir().join("example_td");
    solution.decomposition.write_parquet(&path).await?;
    println!("  ✅ Saved to {}_bags.parquet", path.display());
    println!("  ✅ Saved to {}_tree_edges.parquet", path.display());

    let loaded = TreeDecomposition::read_parquet(&path).await?;
    assert_eq!(loaded, solution.decomposition);

    // 5. Host entry point with raw input
    println!("\n🔌 Host entry point...");
    let out = run_treewidth(4, 5, &[1, 2, 3, 4], &["1-2", "2-3", "3-4", "4-1", "bogus"])?;
    println!("  bags: {:?}", out.bags);
    println!("  edges (1-based): {:?}", out.edges);

    println!("\n✨ Example complete!");

    Ok(())
}
