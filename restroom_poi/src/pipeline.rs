use std::collections::BTreeSet;

use anyhow::Result;

use crate::classify::{AudienceGroup, RoomMatcher};
use crate::cluster::{build_clusters, prune_subsets, ClusterMethod};
use crate::floors::{distinct_floors, rooms_on_floor};
use crate::rooms::RoomRecord;
use crate::select::{pick_representative, PoiRow};

/// Run every audience pass over the room set, in table order, and return one POI per restroom
/// complex per floor. Each room is claimed by at most one pass; later passes only see what's
/// left. A pass matching nothing emits nothing; any failure aborts the whole run.
pub fn derive_pois(
    rooms: &[RoomRecord],
    groups: &[AudienceGroup],
    method: ClusterMethod,
) -> Result<Vec<PoiRow>> {
    let mut claimed: BTreeSet<String> = BTreeSet::new();
    let mut output = Vec::new();
    for group in groups {
        let matched = claim_rooms(rooms, group, &mut claimed)?;
        if group.omit {
            info!(
                "pass {:?}: {} room(s) claimed and omitted",
                group.name,
                matched.len()
            );
            continue;
        }
        if matched.is_empty() {
            info!("pass {:?}: no rooms matched", group.name);
            continue;
        }
        info!("pass {:?}: {} room(s)", group.name, matched.len());
        for floor in distinct_floors(&matched) {
            let floor_rooms = rooms_on_floor(&matched, &floor);
            let clusters = prune_subsets(build_clusters(&floor_rooms, method));
            debug!(
                "pass {:?}, floor {}: {} restroom complex(es)",
                group.name,
                floor,
                clusters.len()
            );
            for cluster in &clusters {
                let poi = pick_representative(cluster, &floor_rooms, group.name)?;
                debug!("emitting {} at {}", poi.location_full, poi.point);
                output.push(poi);
            }
        }
    }
    Ok(output)
}

/// The classification step of one pass: claim this group's rooms and return the subset that
/// should be clustered. Room-number names are claimed but never clustered.
fn claim_rooms<'a>(
    rooms: &'a [RoomRecord],
    group: &AudienceGroup,
    claimed: &mut BTreeSet<String>,
) -> Result<Vec<&'a RoomRecord>> {
    let mut matched = Vec::new();
    if group.keywords.is_empty() {
        // The catch-all pass takes everything still unclaimed.
        for room in rooms {
            if claimed.insert(room.code.clone()) {
                matched.push(room);
            }
        }
        return Ok(matched);
    }

    let matcher = RoomMatcher::new(group)?;
    for room in rooms {
        if claimed.contains(&room.code) {
            continue;
        }
        // Room-number names take precedence over keywords: claimed, never clustered.
        if matcher.is_room_number(&room.name) {
            claimed.insert(room.code.clone());
        } else if matcher.matches_keyword(&room.name) {
            claimed.insert(room.code.clone());
            matched.push(room);
        }
    }
    Ok(matched)
}
