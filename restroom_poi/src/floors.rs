use crate::rooms::RoomRecord;

/// The distinct floor identifiers present in these rooms, in first-seen order.
pub fn distinct_floors(rooms: &[&RoomRecord]) -> Vec<String> {
    let mut floors: Vec<String> = Vec::new();
    for room in rooms {
        let floor = room.floor_code();
        if !floors.iter().any(|f| f == floor) {
            floors.push(floor.to_string());
        }
    }
    floors
}

/// The subset of rooms whose location code names this floor, in input order.
pub fn rooms_on_floor<'a>(rooms: &[&'a RoomRecord], floor: &str) -> Vec<&'a RoomRecord> {
    rooms
        .iter()
        .filter(|r| r.floor_code() == floor)
        .copied()
        .collect()
}
