use anyhow::Result;
use clap::Args;
use geobounds_core::{Builder, LatLng};
use log::debug;

use super::parse::parse_lat_lng;

/// Print the bounds enclosing a set of locations
#[derive(Args, Debug)]
pub struct HullArgs {
    /// The locations as `latitude,longitude`
    #[arg(required = true, allow_hyphen_values = true)]
    pub points: Vec<String>,
}

/// Run the `hull` command
pub fn run_hull(args: HullArgs) -> Result<()> {
    let points = args
        .points
        .iter()
        .map(|p| parse_lat_lng(p))
        .collect::<Result<Vec<LatLng>, _>>()?;
    debug!("Building bounds from {} locations", points.len());

    let bounds = Builder::new().includes(points).build()?;
    println!("{bounds}");

    Ok(())
}
