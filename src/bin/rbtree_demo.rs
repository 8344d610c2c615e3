//! rbtree-demo - walks a red-black tree through inserts, traversals and removals
//!
//! Usage:
//!   cargo run --features cli --bin rbtree-demo -- [--keys 10,40,30] [--check-insert] [--check-remove]

use std::fmt::Display;

use anyhow::{Context, Result};
use clap::Parser;
use rbtree::RedBlackTree;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "rbtree-demo")]
#[command(about = "Insert keys into a red-black tree and print its structure")]
struct Cli {
    /// Keys to insert, in order
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [10, 40, 30, 60, 90, 70, 20, 50, 80]
    )]
    keys: Vec<i64>,

    /// Print the tree after every insertion
    #[arg(long)]
    check_insert: bool,

    /// Remove every key again, printing the tree after each removal
    #[arg(long)]
    check_remove: bool,

    /// Log filter directive (overrides RUST_LOG), e.g. `rbtree::rebalance=trace`
    #[arg(long)]
    log_level: Option<String>,
}

fn init_tracing(directive: Option<&str>) -> Result<()> {
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter: {directive}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to install tracing subscriber")
}

fn joined<T: Display>(keys: impl IntoIterator<Item = T>) -> String {
    keys.into_iter()
        .map(|key| key.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    println!("== init-array:\t{}", joined(&cli.keys));

    let mut tree = RedBlackTree::new();
    for &key in &cli.keys {
        tree.insert(key);
        if cli.check_insert {
            println!("== add key:\t{key}");
            println!("== all-information for tree:");
            print!("{}", tree.dump());
            println!();
        }
    }
    info!(len = tree.len(), height = tree.height(), "inserted keys");

    println!("== preOrder:\t{}", joined(tree.pre_order()));
    println!("== inOrder:\t{}", joined(tree.in_order()));
    println!("== postOrder:\t{}", joined(tree.post_order()));

    println!(
        "== min value: {}",
        tree.try_minimum().context("no keys were inserted")?
    );
    println!(
        "== max value: {}",
        tree.try_maximum().context("no keys were inserted")?
    );
    println!("== all-information for tree:");
    print!("{}", tree.dump());

    if cli.check_remove {
        for key in &cli.keys {
            tree.try_remove(key)
                .with_context(|| format!("key {key} vanished before removal"))?;
            println!("== remove key:\t{key}");
            println!("== all-information for tree:");
            print!("{}", tree.dump());
            println!();
        }
    }

    tree.validate().context("tree invariants broken")?;
    tree.destroy();
    Ok(())
}
