use clap::{Parser, Subcommand};
use commands::{
    cover::{run_cover, CoverArgs},
    hull::{run_hull, HullArgs},
    intersect::{run_intersect, IntersectArgs},
    span::{run_span, SpanArgs},
    tile::{run_tile, TileArgs},
    union::{run_union, UnionArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(author, version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Tile(TileArgs),
    Span(SpanArgs),
    Union(UnionArgs),
    Intersect(IntersectArgs),
    Hull(HullArgs),
    Cover(CoverArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Tile(args) => run_tile(args),
        Commands::Span(args) => run_span(args),
        Commands::Union(args) => run_union(args),
        Commands::Intersect(args) => run_intersect(args),
        Commands::Hull(args) => run_hull(args),
        Commands::Cover(args) => run_cover(args),
    }
}
