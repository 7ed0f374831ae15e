use anyhow::Result;
use geojson::GeoJson;

use crate::rooms::RoomRecord;
use crate::select::PoiRow;

/// Read a GeoJSON FeatureCollection of room footprints. Each feature needs a polygon geometry
/// and string `code` and `name` properties; anything else is skipped with a warning.
pub fn read_rooms(path: &str) -> Result<Vec<RoomRecord>> {
    let raw = fs_err::read_to_string(path)?;
    let rooms = rooms_from_geojson(&raw)?;
    info!("read {} room(s) from {}", rooms.len(), path);
    Ok(rooms)
}

pub fn rooms_from_geojson(raw: &str) -> Result<Vec<RoomRecord>> {
    let geojson = raw.parse::<GeoJson>()?;
    let collection = match geojson {
        GeoJson::FeatureCollection(c) => c,
        _ => bail!("the room layer isn't a FeatureCollection"),
    };

    let mut rooms = Vec::new();
    for feature in collection.features {
        let geometry = match feature.geometry {
            Some(g) => g,
            None => {
                warn!("skipping a feature without geometry");
                continue;
            }
        };
        let polygon: geo::Polygon = match geometry.value.try_into() {
            Ok(p) => p,
            Err(_) => {
                warn!("skipping a feature without polygon geometry");
                continue;
            }
        };
        let properties = feature.properties.unwrap_or_default();
        let code = match properties.get("code").and_then(|v| v.as_str()) {
            Some(x) => x.to_string(),
            None => {
                warn!("skipping a feature without a string 'code' property");
                continue;
            }
        };
        let name = properties
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();
        match RoomRecord::new(code, name, polygon.into()) {
            Ok(room) => rooms.push(room),
            Err(err) => warn!("skipping a room: {}", err),
        }
    }
    Ok(rooms)
}

/// Write the POI layer as a GeoJSON FeatureCollection of points.
pub fn write_pois(path: &str, pois: &[PoiRow]) -> Result<()> {
    let features = pois
        .iter()
        .map(|poi| {
            let mut properties = serde_json::Map::new();
            properties.insert("type".to_string(), poi.poi_type.clone().into());
            properties.insert("locationFull".to_string(), poi.location_full.clone().into());
            properties.insert(
                "locationBuildingFloor".to_string(),
                poi.location_building_floor.clone().into(),
            );
            geojson::Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(geojson::Value::Point(vec![
                    poi.point.x(),
                    poi.point.y(),
                ]))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();
    let collection = geojson::FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };
    fs_err::write(path, GeoJson::from(collection).to_string())?;
    info!("wrote {} POI(s) to {}", pois.len(), path);
    Ok(())
}
