use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{info, warn};

use crate::{
    db::RecordStore,
    error::HotelError,
    models::hotel::{Hotel, HotelInput},
    slug::slugify,
};

/// How a request names a hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelKey<'a> {
    /// Numeric id only, no slug fallback.
    Id(u64),
    /// Tried as a numeric id first, then as a slug.
    IdOrSlug(&'a str),
}

/// Parses a path-supplied hotel id, which must be numeric.
pub fn parse_id(identifier: &str) -> Result<u64, HotelError> {
    identifier
        .trim()
        .parse::<u64>()
        .map_err(|_| HotelError::InvalidId)
}

pub struct HotelRepository {
    store: Arc<dyn RecordStore>,
    // Serializes every read-modify-write so id allocation and slug checks
    // cannot interleave within this process.
    write_lock: Mutex<()>,
}

impl HotelRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        HotelRepository {
            store,
            write_lock: Mutex::new(()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create(&self, input: HotelInput) -> Result<Hotel, HotelError> {
        let title = required(input.title, "title")?;
        let description = required(input.description, "description")?;
        let guest_count = required(input.guest_count, "guestCount")?;
        let bedroom_count = required(input.bedroom_count, "bedroomCount")?;
        let bathroom_count = required(input.bathroom_count, "bathroomCount")?;
        let amenities = required(input.amenities, "amenities")?;
        let host_info = required(input.host_info, "hostInfo")?;
        let address = required(input.address, "address")?;
        let latitude = required(input.latitude, "latitude")?;
        let longitude = required(input.longitude, "longitude")?;
        let rooms = required(input.rooms, "rooms")?;

        let _guard = self.lock();

        let id = self.store.next_id()?;
        let mut slug = base_slug(&title, id);

        if self.store.exists(id)? {
            return Err(HotelError::Conflict(id));
        }

        if self.store.find_by_slug(&slug)?.is_some() {
            warn!("Slug '{}' already taken, suffixing with id {}", slug, id);
            slug = format!("{slug}-{id}");
        }

        let hotel = Hotel {
            id,
            slug,
            images: input.images.unwrap_or_default(),
            title,
            description,
            guest_count,
            bedroom_count,
            bathroom_count,
            amenities,
            host_info,
            address,
            latitude,
            longitude,
            rooms,
        };

        self.store.write(id, &hotel)?;
        info!("Created hotel {} with slug '{}'", hotel.id, hotel.slug);

        Ok(hotel)
    }

    /// Looks a hotel up by numeric id, falling back to its slug.
    pub fn get(&self, identifier: &str) -> Result<Hotel, HotelError> {
        self.locate(HotelKey::IdOrSlug(identifier))?
            .ok_or(HotelError::NotFound)
    }

    pub fn update(&self, hotel_id: &str, input: HotelInput) -> Result<Hotel, HotelError> {
        let id = parse_id(hotel_id)?;

        let updated = self.modify(HotelKey::Id(id), |hotel| {
            let new_title = input.title.clone();
            input.apply_to(hotel);
            hotel.id = id;

            if let Some(title) = new_title {
                let mut slug = base_slug(&title, id);
                let taken = self
                    .store
                    .find_by_slug(&slug)?
                    .is_some_and(|other| other.id != id);
                if taken {
                    warn!("Slug '{}' already taken, suffixing with id {}", slug, id);
                    slug = format!("{slug}-{id}");
                }
                hotel.slug = slug;
            }

            Ok(hotel.clone())
        })?;

        info!("Updated hotel {} (slug '{}')", updated.id, updated.slug);
        Ok(updated)
    }

    /// Loads the hotel named by `key`, lets `change` edit it and persists the
    /// result, all under the repository lock. Nothing is written when
    /// `change` fails.
    pub fn modify<T, F>(&self, key: HotelKey<'_>, change: F) -> Result<T, HotelError>
    where
        F: FnOnce(&mut Hotel) -> Result<T, HotelError>,
    {
        let _guard = self.lock();

        let mut hotel = self.locate(key)?.ok_or(HotelError::NotFound)?;
        let id = hotel.id;
        let result = change(&mut hotel)?;
        self.store.write(id, &hotel)?;

        Ok(result)
    }

    fn locate(&self, key: HotelKey<'_>) -> Result<Option<Hotel>, HotelError> {
        match key {
            HotelKey::Id(id) => Ok(self.store.read(id)?),
            HotelKey::IdOrSlug(identifier) => {
                if let Ok(id) = identifier.parse::<u64>() {
                    if let Some(hotel) = self.store.read(id)? {
                        return Ok(Some(hotel));
                    }
                }
                Ok(self.store.find_by_slug(identifier)?)
            }
        }
    }
}

/// Slug derived from `title`, or `hotel-<id>` when the title has no
/// characters that survive slugification.
fn base_slug(title: &str, id: u64) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        warn!("Title {:?} yields an empty slug, using hotel-{}", title, id);
        format!("hotel-{id}")
    } else {
        slug
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, HotelError> {
    value.ok_or(HotelError::MissingField(field))
}
