use anyhow::Result;
use clap::Args;
use log::debug;

use super::parse::parse_bounds;

/// Print the overlap of two bounds
#[derive(Args, Debug)]
pub struct IntersectArgs {
    /// The first bounds as `north,east,south,west`
    #[arg(allow_hyphen_values = true)]
    pub first: String,

    /// The second bounds as `north,east,south,west`
    #[arg(allow_hyphen_values = true)]
    pub second: String,
}

/// Run the `intersect` command
pub fn run_intersect(args: IntersectArgs) -> Result<()> {
    let first = parse_bounds(&args.first)?;
    let second = parse_bounds(&args.second)?;

    match first.intersect(&second) {
        Some(intersection) => {
            debug!("{first} and {second} overlap");
            println!("{intersection}");
        }
        None => println!("no intersection"),
    }

    Ok(())
}
