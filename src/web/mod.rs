pub mod validation;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Multipart, Path, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{error, info};
use serde::Serialize;
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::{
    config::Config,
    db::FileStore,
    error::{FieldError, HotelError},
    models::{
        hotel::{Hotel, HotelInput},
        room::RoomSummary,
    },
    services::{
        hotels::HotelRepository,
        images::{FileNaming, ImageService, UploadDir, UploadedFile},
    },
};
use validation::validate_hotel;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub hotels: Arc<HotelRepository>,
    pub images: Arc<ImageService>,
}

impl AppState {
    /// Checks `config`, then opens the hotel store and upload directories it
    /// names, creating them when missing. Called once at startup.
    pub fn init(config: Arc<Config>) -> Result<Self> {
        config.validate()?;

        let store = FileStore::open(config.hotels_dir())?;
        let hotels = Arc::new(HotelRepository::new(Arc::new(store)));

        let gallery = UploadDir::open(
            &config.upload_dir,
            config.gallery_url_prefix(),
            FileNaming::Timestamped,
        )?;
        let room_images = UploadDir::open(
            &config.room_images_dir,
            config.room_image_route(),
            FileNaming::TimestampedRandom,
        )?;
        let images = Arc::new(ImageService::new(
            hotels.clone(),
            gallery,
            room_images,
            config.max_gallery_uploads,
        ));

        Ok(AppState {
            config,
            hotels,
            images,
        })
    }
}

#[derive(Serialize)]
pub struct HotelResponse {
    pub message: &'static str,
    pub hotel: Hotel,
}

#[derive(Serialize)]
pub struct ImagesResponse {
    pub message: &'static str,
    pub images: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomImageResponse {
    pub message: &'static str,
    pub room_image: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct ValidationErrorBody {
    errors: Vec<FieldError>,
}

#[derive(Serialize)]
struct RoomNotFoundBody {
    error: String,
    details: RoomNotFoundDetails,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoomNotFoundDetails {
    requested_slug: String,
    available_rooms: Vec<RoomSummary>,
}

impl IntoResponse for HotelError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            HotelError::Invalid(errors) => {
                (StatusCode::BAD_REQUEST, Json(ValidationErrorBody { errors })).into_response()
            }
            HotelError::RoomNotFound {
                requested_slug,
                available_rooms,
            } => (
                StatusCode::NOT_FOUND,
                Json(RoomNotFoundBody {
                    error: message,
                    details: RoomNotFoundDetails {
                        requested_slug,
                        available_rooms,
                    },
                }),
            )
                .into_response(),
            HotelError::NotFound => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { error: message })).into_response()
            }
            HotelError::Storage(err) => {
                error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: String::from("Internal server error"),
                    }),
                )
                    .into_response()
            }
            HotelError::MissingField(_)
            | HotelError::InvalidId
            | HotelError::Conflict(_)
            | HotelError::MissingUpload
            | HotelError::TooManyFiles(_) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })).into_response()
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    let room_images = ServeDir::new(&state.config.room_images_dir);
    let gallery = ServeDir::new(&state.config.upload_dir);
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(index))
        .route("/hotels", post(create_hotel))
        .route("/hotels/:identifier", get(get_hotel).put(update_hotel))
        .route("/images/:identifier", post(upload_hotel_images))
        .route(
            "/images/rooms/:hotel_id/:room_slug",
            post(upload_room_image),
        )
        .nest_service(&state.config.room_image_route(), room_images)
        .nest_service("/uploads", gallery)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors())
        .with_state(state)
}

pub async fn start_http_server(state: AppState) -> Result<()> {
    let bind_addr = state.config.http_bind_address.clone();

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind http listener on {}", bind_addr))?;
    let app = router(state);

    info!("Server is running at http://{}", bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await
        .context("HTTP server crashed")
}

/// Open CORS for the browser front end: any origin, JSON bodies, and the
/// methods the routes use. Preflight requests are answered by the layer.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Turns a JSON body into a hotel input, collecting shape errors first.
fn parse_hotel_body(payload: Result<Json<Value>, JsonRejection>) -> Result<HotelInput, HotelError> {
    let Json(body) = payload
        .map_err(|rejection| HotelError::Invalid(vec![FieldError::body("body", rejection.body_text())]))?;

    let Value::Object(fields) = body else {
        return Err(HotelError::Invalid(vec![FieldError::body(
            "body",
            "Request body must be a JSON object",
        )]));
    };

    let errors = validate_hotel(&fields);
    if !errors.is_empty() {
        return Err(HotelError::Invalid(errors));
    }

    serde_json::from_value(Value::Object(fields))
        .map_err(|e| HotelError::Invalid(vec![FieldError::body("body", e.to_string())]))
}

/// Collects every file sent under `field_name`; other fields are skipped.
async fn read_files(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<Vec<UploadedFile>, HotelError> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HotelError::Invalid(vec![FieldError::body(field_name, e.body_text())]))?
    {
        if field.name() != Some(field_name) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| HotelError::Invalid(vec![FieldError::body(field_name, e.body_text())]))?;
        files.push(UploadedFile {
            file_name,
            data: data.to_vec(),
        });
    }

    Ok(files)
}

pub async fn index() -> &'static str {
    "Hello, World!"
}

pub async fn create_hotel(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<HotelResponse>), HotelError> {
    let input = parse_hotel_body(payload)?;
    let hotel = state.hotels.create(input)?;

    Ok((
        StatusCode::CREATED,
        Json(HotelResponse {
            message: "Hotel created successfully",
            hotel,
        }),
    ))
}

pub async fn get_hotel(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<Hotel>, HotelError> {
    state.hotels.get(&identifier).map(Json)
}

pub async fn update_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<HotelResponse>, HotelError> {
    let input = parse_hotel_body(payload)?;
    let hotel = state.hotels.update(&hotel_id, input)?;

    Ok(Json(HotelResponse {
        message: "Hotel updated successfully",
        hotel,
    }))
}

pub async fn upload_hotel_images(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    multipart: Multipart,
) -> Result<Json<ImagesResponse>, HotelError> {
    let files = read_files(multipart, "images").await?;
    let images = state.images.attach_hotel_images(&identifier, files)?;

    Ok(Json(ImagesResponse {
        message: "Image uploaded and hotel updated successfully",
        images,
    }))
}

pub async fn upload_room_image(
    State(state): State<AppState>,
    Path((hotel_id, room_slug)): Path<(String, String)>,
    multipart: Multipart,
) -> Result<Json<RoomImageResponse>, HotelError> {
    let file = read_files(multipart, "roomImage").await?.into_iter().next();
    let room_image = state
        .images
        .attach_room_image(&hotel_id, &room_slug, file)?;

    Ok(Json(RoomImageResponse {
        message: "Room image uploaded and updated successfully.",
        room_image,
    }))
}
