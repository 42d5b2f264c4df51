// Binary tree traversal demonstration over the 31-node complete tree

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hanoi_tty::tree::{complete_tree, inorder, level_order, postorder, preorder};

#[derive(Parser, Debug)]
#[command(name = "traversals")]
#[command(about = "Print the four traversal orders of a complete binary tree")]
struct Args {
    /// Number of levels in the tree, root included
    #[arg(short, long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..=20))]
    levels: u32,
}

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Summary line; depth counts the levels below the root
fn heading(nodes: usize, levels: u32) -> String {
    format!("Tree with {} nodes ({} levels)", nodes, levels.saturating_sub(1))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let tree = complete_tree(args.levels);
    debug!(nodes = tree.len(), levels = args.levels, "Built complete tree");

    println!("\nBinary Tree Traversals");
    println!("=============================");
    println!("{}", heading(tree.len(), args.levels));

    let orders = [
        ("1. Pre-order Traversal (Root -> Left -> Right):", preorder(&tree)),
        ("2. In-order Traversal (Left -> Root -> Right):", inorder(&tree)),
        ("3. Post-order Traversal (Left -> Right -> Root):", postorder(&tree)),
        ("4. Level-order Traversal (Level by Level):", level_order(&tree)),
    ];

    for (heading, values) in &orders {
        println!("\n{}", heading);
        println!(" {}", join(values));
    }

    Ok(())
}
