use anyhow::Result;
use structopt::StructOpt;

use restroom_poi::classify::default_groups;
use restroom_poi::cluster::ClusterMethod;
use restroom_poi::{io, pipeline};

#[derive(StructOpt)]
#[structopt(
    name = "restroom_poi",
    about = "Derive restroom POIs from a room footprint layer"
)]
struct Flags {
    /// GeoJSON FeatureCollection of room polygons with `code` and `name` properties
    #[structopt(long)]
    rooms: String,
    /// Output GeoJSON path for the POI layer
    #[structopt(long)]
    output: String,
    /// Merge overlap chains exactly with connected components, instead of the per-room
    /// neighbor expansion
    #[structopt(long)]
    exact_components: bool,
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let flags = Flags::from_args();
    let method = if flags.exact_components {
        ClusterMethod::ConnectedComponents
    } else {
        ClusterMethod::NeighborExpansion
    };

    let rooms = io::read_rooms(&flags.rooms)?;
    let pois = pipeline::derive_pois(&rooms, &default_groups(), method)?;
    io::write_pois(&flags.output, &pois)
}
