use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Room {
    pub hotel_slug: String,
    pub room_slug: String,
    pub room_image: String,
    pub room_title: String,
    pub bedroom_count: u32,
}

impl Room {
    /// Whether this room answers to `slug`, ignoring case and surrounding whitespace.
    pub fn matches_slug(&self, slug: &str) -> bool {
        self.room_slug.trim().eq_ignore_ascii_case(slug.trim())
    }

    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            slug: self.room_slug.clone(),
            title: self.room_title.clone(),
        }
    }
}

/// Reported back when a room image upload names a room that does not exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomSummary {
    pub slug: String,
    pub title: String,
}
