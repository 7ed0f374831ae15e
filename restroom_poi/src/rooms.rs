use anyhow::Result;

use geomutil::Polygon;

/// One room footprint from the floor-plan dataset, as loaded for a single run. Never mutated.
#[derive(Clone, Debug)]
pub struct RoomRecord {
    /// Hierarchical location code. Characters [5..8] identify the floor, the first 8 the
    /// building + floor, and the full code the room itself.
    pub code: String,
    /// Free-text room name. Only used for classification and for spotting anterooms.
    pub name: String,
    pub polygon: Polygon,
}

impl RoomRecord {
    pub fn new(code: String, name: String, polygon: Polygon) -> Result<RoomRecord> {
        // 8 ASCII characters are the minimum for slicing out a floor and a building+floor prefix.
        if !code.is_ascii() || code.len() < 8 {
            bail!("location code {:?} can't name a building and floor", code);
        }
        Ok(RoomRecord {
            code,
            name,
            polygon,
        })
    }

    /// The 3-character floor identifier.
    pub fn floor_code(&self) -> &str {
        &self.code[5..8]
    }

    /// The building + floor prefix.
    pub fn building_floor(&self) -> &str {
        &self.code[..8]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_slicing() {
        let room = RoomRecord::new(
            "AB123C4501".to_string(),
            "WC".to_string(),
            Polygon::rectangle(1.0, 1.0),
        )
        .unwrap();
        assert_eq!(room.floor_code(), "C45");
        assert_eq!(room.building_floor(), "AB123C45");
    }

    #[test]
    fn short_codes_rejected() {
        assert!(RoomRecord::new(
            "AB12".to_string(),
            "WC".to_string(),
            Polygon::rectangle(1.0, 1.0)
        )
        .is_err());
    }
}
