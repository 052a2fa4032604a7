use anyhow::Result;
use clap::Args;
use log::debug;

use super::parse::parse_bounds;

/// Print the smallest bounds containing two bounds
#[derive(Args, Debug)]
pub struct UnionArgs {
    /// The first bounds as `north,east,south,west`
    #[arg(allow_hyphen_values = true)]
    pub first: String,

    /// The second bounds as `north,east,south,west`
    #[arg(allow_hyphen_values = true)]
    pub second: String,
}

/// Run the `union` command
pub fn run_union(args: UnionArgs) -> Result<()> {
    let first = parse_bounds(&args.first)?;
    let second = parse_bounds(&args.second)?;

    let union = first.union(&second);
    debug!("Union of {first} and {second} spans {:?}", union.span());

    println!("{union}");

    Ok(())
}
