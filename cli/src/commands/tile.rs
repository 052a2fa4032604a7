use anyhow::Result;
use clap::Args;
use geobounds_core::CanonicalTileId;
use log::debug;

/// Print the geographic bounds of a Web Mercator tile
#[derive(Args, Debug)]
pub struct TileArgs {
    /// The zoom level
    pub z: u8,

    /// The tile column (0 is the westernmost column)
    pub x: u32,

    /// The tile row (0 is the northernmost row)
    pub y: u32,
}

/// Run the `tile` command
pub fn run_tile(args: TileArgs) -> Result<()> {
    let tile = CanonicalTileId::new(args.z, args.x, args.y)?;
    let bounds = tile.bounds();
    debug!("Tile {tile} has a span of {:?}", bounds.span());

    println!("{bounds}");
    if let Some(parent) = tile.parent() {
        println!("parent: {parent}");
    }

    Ok(())
}
