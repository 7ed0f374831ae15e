use std::collections::BTreeSet;

use anyhow::Result;

use geomutil::{Polygon, Pt2D};

use crate::rooms::RoomRecord;

/// Room names containing this word mark the shared entry vestibule of a restroom complex.
pub const ANTEROOM_WORD: &str = "předsíň";

/// One row of the output POI layer. The four fields, in this order, are the output contract.
#[derive(Clone, Debug, PartialEq)]
pub struct PoiRow {
    /// "WC", plus the audience name when the pass has one.
    pub poi_type: String,
    /// The representative room's full location code.
    pub location_full: String,
    /// The first 8 characters of that code: building + floor.
    pub location_building_floor: String,
    pub point: Pt2D,
}

/// Turn one pruned cluster into its output row. The point is the centroid of the cluster's
/// anteroom when it has one, and the centroid of the convex hull of all member footprints
/// otherwise. Ties break in lexicographic order of location code.
pub fn pick_representative(
    cluster: &BTreeSet<String>,
    rooms: &[&RoomRecord],
    group_name: &str,
) -> Result<PoiRow> {
    if cluster.is_empty() {
        bail!("an empty cluster reached the representative selector");
    }
    // BTreeSet iteration already visits codes in lexicographic order.
    let mut members = Vec::new();
    for code in cluster {
        match rooms.iter().find(|r| &r.code == code) {
            Some(room) => members.push(*room),
            None => bail!("cluster references room {} not present on this floor", code),
        }
    }

    let (room, point) = match members.iter().find(|r| r.name.contains(ANTEROOM_WORD)) {
        Some(anteroom) => (*anteroom, anteroom.polygon.centroid()),
        None => {
            let hull = Polygon::convex_hull(members.iter().map(|r| r.polygon.clone()).collect());
            (members[0], hull.centroid())
        }
    };

    let poi_type = if group_name.is_empty() {
        "WC".to_string()
    } else {
        format!("WC {}", group_name)
    };
    Ok(PoiRow {
        poi_type,
        location_full: room.code.clone(),
        location_building_floor: room.building_floor().to_string(),
        point,
    })
}
