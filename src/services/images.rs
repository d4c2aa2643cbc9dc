use std::{fs, path::PathBuf, sync::Arc};

use chrono::Utc;
use log::{info, warn};
use rand::Rng;

use super::hotels::{parse_id, HotelKey, HotelRepository};
use crate::error::{HotelError, StoreError};

/// A file received from a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileNaming {
    /// `<unix-millis>-<name>`
    Timestamped,
    /// `<unix-millis>-<random>-<name>`
    TimestampedRandom,
}

/// A directory that uploaded files are written into, and the URL prefix
/// under which they are served.
#[derive(Debug, Clone)]
pub struct UploadDir {
    dir: PathBuf,
    url_prefix: String,
    naming: FileNaming,
}

impl UploadDir {
    pub fn open(
        dir: impl Into<PathBuf>,
        url_prefix: impl Into<String>,
        naming: FileNaming,
    ) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;
        Ok(UploadDir {
            dir,
            url_prefix: url_prefix.into(),
            naming,
        })
    }

    /// Writes `file` under a fresh name and returns the URL it is served at.
    pub fn save(&self, file: &UploadedFile) -> Result<String, StoreError> {
        let stored_name = self.stored_name(&file.file_name);
        let path = self.dir.join(&stored_name);
        fs::write(&path, &file.data).map_err(|e| StoreError::io(path, e))?;

        Ok(format!(
            "{}/{}",
            self.url_prefix.trim_end_matches('/'),
            stored_name
        ))
    }

    fn stored_name(&self, original: &str) -> String {
        let millis = Utc::now().timestamp_millis();
        let name = sanitize_file_name(original);
        match self.naming {
            FileNaming::Timestamped => format!("{millis}-{name}"),
            FileNaming::TimestampedRandom => {
                let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
                format!("{millis}-{suffix}-{name}")
            }
        }
    }
}

/// Keeps only the last path component of a client-supplied file name.
pub fn sanitize_file_name(original: &str) -> String {
    let base = original.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    if base.is_empty() || base == "." || base == ".." {
        return String::from("upload");
    }
    base.split_whitespace().collect::<Vec<_>>().join("_")
}

pub struct ImageService {
    hotels: Arc<HotelRepository>,
    gallery: UploadDir,
    room_images: UploadDir,
    max_gallery_uploads: usize,
}

impl ImageService {
    pub fn new(
        hotels: Arc<HotelRepository>,
        gallery: UploadDir,
        room_images: UploadDir,
        max_gallery_uploads: usize,
    ) -> Self {
        ImageService {
            hotels,
            gallery,
            room_images,
            max_gallery_uploads,
        }
    }

    /// Stores `files` and appends their URLs to the gallery of the hotel named
    /// by `identifier` (id or slug). Returns the hotel's full image list.
    pub fn attach_hotel_images(
        &self,
        identifier: &str,
        files: Vec<UploadedFile>,
    ) -> Result<Vec<String>, HotelError> {
        if files.len() > self.max_gallery_uploads {
            return Err(HotelError::TooManyFiles(self.max_gallery_uploads));
        }

        self.hotels
            .modify(HotelKey::IdOrSlug(identifier), |hotel| {
                for file in &files {
                    let url = self.gallery.save(file)?;
                    hotel.images.push(url);
                }
                info!(
                    "Attached {} image(s) to hotel {}",
                    files.len(),
                    hotel.id
                );
                Ok(hotel.images.clone())
            })
    }

    /// Stores `file` as the image of the room `room_slug` in hotel `hotel_id`,
    /// replacing any previous one. Returns the new image URL.
    pub fn attach_room_image(
        &self,
        hotel_id: &str,
        room_slug: &str,
        file: Option<UploadedFile>,
    ) -> Result<String, HotelError> {
        let id = parse_id(hotel_id)?;
        let requested = room_slug.strip_suffix('/').unwrap_or(room_slug).trim();

        self.hotels.modify(HotelKey::Id(id), |hotel| {
            let file = file.ok_or(HotelError::MissingUpload)?;

            let Some(index) = hotel.rooms.iter().position(|room| room.matches_slug(requested))
            else {
                warn!("Hotel {} has no room '{}'", hotel.id, requested);
                return Err(HotelError::RoomNotFound {
                    requested_slug: requested.to_string(),
                    available_rooms: hotel.rooms.iter().map(|room| room.summary()).collect(),
                });
            };

            let url = self.room_images.save(&file)?;
            hotel.rooms[index].room_image = url.clone();
            info!(
                "Set image of room '{}' in hotel {}",
                hotel.rooms[index].room_slug, hotel.id
            );

            Ok(url)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::sanitize_file_name;

    #[test]
    fn keeps_last_path_component() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name(r"C:\photos\lobby.jpg"), "lobby.jpg");
        assert_eq!(sanitize_file_name("pool view.png"), "pool_view.png");
    }

    #[test]
    fn falls_back_for_empty_names() {
        assert_eq!(sanitize_file_name(""), "upload");
        assert_eq!(sanitize_file_name("photos/"), "upload");
        assert_eq!(sanitize_file_name(".."), "upload");
    }
}
