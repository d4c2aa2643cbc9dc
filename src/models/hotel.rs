use serde::{Deserialize, Serialize};

use super::room::Room;

/// A persisted hotel listing.
///
/// Field order is the canonical response layout; serializing a `Hotel`
/// always yields `id, slug, images, title, ...` in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: u64,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub title: String,
    pub description: String,
    pub guest_count: u32,
    pub bedroom_count: u32,
    pub bathroom_count: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub host_info: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

/// Request body for creating or updating a hotel. Every field is optional
/// here; presence is checked by the repository, in declaration order.
///
/// `id` and `slug` are never read from a request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub guest_count: Option<u32>,
    pub bedroom_count: Option<u32>,
    pub bathroom_count: Option<u32>,
    pub amenities: Option<Vec<String>>,
    pub host_info: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub rooms: Option<Vec<Room>>,
    pub images: Option<Vec<String>>,
}

impl HotelInput {
    /// Overlays the supplied fields onto `hotel`. Rooms are fixed after
    /// creation and are not touched.
    pub fn apply_to(self, hotel: &mut Hotel) {
        if let Some(title) = self.title {
            hotel.title = title;
        }
        if let Some(description) = self.description {
            hotel.description = description;
        }
        if let Some(guest_count) = self.guest_count {
            hotel.guest_count = guest_count;
        }
        if let Some(bedroom_count) = self.bedroom_count {
            hotel.bedroom_count = bedroom_count;
        }
        if let Some(bathroom_count) = self.bathroom_count {
            hotel.bathroom_count = bathroom_count;
        }
        if let Some(amenities) = self.amenities {
            hotel.amenities = amenities;
        }
        if let Some(host_info) = self.host_info {
            hotel.host_info = host_info;
        }
        if let Some(address) = self.address {
            hotel.address = address;
        }
        if let Some(latitude) = self.latitude {
            hotel.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            hotel.longitude = longitude;
        }
        if let Some(images) = self.images {
            hotel.images = images;
        }
    }
}
