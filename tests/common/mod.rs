#![allow(dead_code)]

use std::sync::Arc;

use hotelier::{
    db::{MemoryStore, RecordStore},
    error::StoreError,
    models::{
        hotel::{Hotel, HotelInput},
        room::Room,
    },
    services::hotels::HotelRepository,
};
use serde_json::{json, Value};

pub const REQUIRED_FIELDS: [&str; 11] = [
    "title",
    "description",
    "guestCount",
    "bedroomCount",
    "bathroomCount",
    "amenities",
    "hostInfo",
    "address",
    "latitude",
    "longitude",
    "rooms",
];

pub fn hotel_json(title: &str) -> Value {
    json!({
        "title": title,
        "description": "A beautiful hotel.",
        "guestCount": 4,
        "bedroomCount": 2,
        "bathroomCount": 2,
        "amenities": ["WiFi", "Pool"],
        "hostInfo": "Friendly host",
        "address": "123 Test St, Test City",
        "latitude": 12.34,
        "longitude": 56.78,
        "rooms": [
            {
                "hotelSlug": "test-hotel",
                "roomSlug": "room-1",
                "roomImage": "room1.jpg",
                "roomTitle": "Luxury Suite",
                "bedroomCount": 1
            },
            {
                "hotelSlug": "test-hotel",
                "roomSlug": "room-2",
                "roomImage": "room2.jpg",
                "roomTitle": "Garden Room",
                "bedroomCount": 2
            }
        ]
    })
}

pub fn hotel_input(title: &str) -> HotelInput {
    serde_json::from_value(hotel_json(title)).unwrap()
}

/// A fully-formed record as it would sit in the store.
pub fn stored_hotel(id: u64, slug: &str, title: &str) -> Hotel {
    Hotel {
        id,
        slug: slug.to_string(),
        images: Vec::new(),
        title: title.to_string(),
        description: "Stored".to_string(),
        guest_count: 2,
        bedroom_count: 1,
        bathroom_count: 1,
        amenities: Vec::new(),
        host_info: "Host".to_string(),
        address: "1 Main St".to_string(),
        latitude: 0.0,
        longitude: 0.0,
        rooms: vec![Room {
            hotel_slug: slug.to_string(),
            room_slug: "room-1".to_string(),
            room_image: String::new(),
            room_title: "Single".to_string(),
            bedroom_count: 1,
        }],
    }
}

pub fn memory_repository() -> (Arc<MemoryStore>, HotelRepository) {
    let store = Arc::new(MemoryStore::new());
    let repository = HotelRepository::new(store.clone());
    (store, repository)
}

/// Reads like a memory store but refuses every write.
#[derive(Default)]
pub struct ReadOnlyStore {
    pub inner: MemoryStore,
}

impl RecordStore for ReadOnlyStore {
    fn read(&self, id: u64) -> Result<Option<Hotel>, StoreError> {
        self.inner.read(id)
    }

    fn write(&self, id: u64, _hotel: &Hotel) -> Result<(), StoreError> {
        Err(StoreError::io(
            format!("{id}.json"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }

    fn scan(&self) -> Result<Vec<Hotel>, StoreError> {
        self.inner.scan()
    }
}
