use anyhow::Result;
use clap::Args;
use log::debug;

use super::parse::parse_bounds;

/// Print the span and center of bounds
#[derive(Args, Debug)]
pub struct SpanArgs {
    /// The bounds as `north,east,south,west`
    #[arg(allow_hyphen_values = true)]
    pub bounds: String,
}

/// Run the `span` command
pub fn run_span(args: SpanArgs) -> Result<()> {
    let bounds = parse_bounds(&args.bounds)?;
    debug!("Parsed bounds {bounds}");

    let span = bounds.span();
    let center = bounds.center();
    println!("latitude span: {:?}", span.latitude_span);
    println!("longitude span: {:?}", span.longitude_span);
    println!("center: {:?},{:?}", center.latitude(), center.longitude());
    if bounds.crosses_antimeridian() {
        let wrapped = center.wrap();
        println!(
            "wrapped center: {:?},{:?}",
            wrapped.latitude(),
            wrapped.longitude()
        );
    }

    Ok(())
}
