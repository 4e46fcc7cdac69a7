//! HTTP API routes
//!
//! Thin marshaling over `NearbyService`: handlers validate and decode
//! the request, call the service, and map errors to status codes. No
//! business logic lives here.

use crate::error::Error;
use crate::model::{Listing, NewListing, NewRoom, Room};
use crate::pricing::PriceTag;
use crate::server::state::AppState;
use crate::service::{NearbyListing, NearbyPage};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/kost/near", get(near_handler))
        .route("/api/kost/near/carousel", get(carousel_handler))
        .route("/api/kost", axum::routing::post(create_kost_handler))
        .route("/api/kost/:id", get(get_kost_handler))
        .route(
            "/api/kost/:id/rooms",
            get(get_rooms_handler).post(add_room_handler),
        )
        .route("/api/kost/:id/price", get(get_price_handler))
        .with_state(state)
}

/// Query parameters for the nearby endpoints
#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    /// Origin latitude, decimal degrees
    pub lat: String,
    /// Origin longitude, decimal degrees
    pub lng: String,
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: i64,
    /// Page size override
    pub page_size: Option<usize>,
}

fn default_page() -> i64 {
    1
}

/// Carousel response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct CarouselResponse {
    pub carousel_list: Vec<Vec<NearbyListing>>,
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.code.as_str() {
            "INVALID_PAGE" | "INVALID_COORDINATES" | "INVALID_UOM" => StatusCode::BAD_REQUEST,
            "NOT_FOUND" | "NO_GEOLOCATION_MATCH" => StatusCode::NOT_FOUND,
            "GEOCODE_UNAVAILABLE" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidPage(_) => "INVALID_PAGE",
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::InvalidUom(_) => "INVALID_UOM",
            Error::NotFound(_) => "NOT_FOUND",
            Error::NoGeolocationMatch => "NO_GEOLOCATION_MATCH",
            Error::GeocodeUnavailable(_) => "GEOCODE_UNAVAILABLE",
            Error::Store(_) => "STORE_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Ranked nearby listings, one page at a time
///
/// GET /api/kost/near?lat&lng&page&page_size
async fn near_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<NearbyPage>, ApiError> {
    let page_size = query.page_size.unwrap_or(state.config.paging.page_size);

    let page = state
        .service
        .list_nearby(&query.lat, &query.lng, query.page, page_size)
        .await?;

    Ok(Json(page))
}

/// Ranked nearby listings grouped into display carousels
///
/// GET /api/kost/near/carousel?lat&lng
async fn carousel_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<CarouselResponse>, ApiError> {
    let carousel_list = state
        .service
        .nearby_carousels(
            &query.lat,
            &query.lng,
            state.config.paging.carousel_limit,
            state.config.paging.carousel_size,
        )
        .await?;

    Ok(Json(CarouselResponse { carousel_list }))
}

/// Fetch one listing
///
/// GET /api/kost/:id
async fn get_kost_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Listing>, ApiError> {
    Ok(Json(state.service.get_listing(id).await?))
}

/// Fetch a listing's rooms
///
/// GET /api/kost/:id/rooms
async fn get_rooms_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<Room>>, ApiError> {
    Ok(Json(state.service.get_rooms(id).await?))
}

/// Cheapest-room price tag for a listing
///
/// GET /api/kost/:id/price
async fn get_price_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<PriceTag>, ApiError> {
    Ok(Json(state.service.cheapest_room_price(id).await?))
}

/// Create a listing
///
/// POST /api/kost
async fn create_kost_handler(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewListing>,
) -> Result<(StatusCode, Json<Listing>), ApiError> {
    let listing = state.service.create_listing(new).await?;
    Ok((StatusCode::CREATED, Json(listing)))
}

/// Add a room to a listing
///
/// POST /api/kost/:id/rooms
async fn add_room_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Json(new): Json<NewRoom>,
) -> Result<(StatusCode, Json<Room>), ApiError> {
    let room = state.service.add_room(id, new).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::geo::mock::FixedGeocoder;
    use crate::geo::GeocodeProvider;
    use crate::model::{GenderPolicy, UnitOfMeasure, UomCategory};
    use crate::store::memory::MemoryStore;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    // one kilometer of latitude, in degrees, under the ranking distance
    const DEG_PER_KM: f64 = 1.0 / (60.0 * 1.1515 * 1.609344);

    async fn test_state(geocoder: impl GeocodeProvider + 'static) -> Arc<AppState> {
        let store = Arc::new(MemoryStore::new());

        store
            .insert_uom(UnitOfMeasure {
                id: 1,
                category: UomCategory::Currency,
                description: "IDR / month".to_string(),
                rate: 1.0,
                is_active: true,
            })
            .await;
        store
            .insert_uom(UnitOfMeasure {
                id: 2,
                category: UomCategory::Length,
                description: "square meter".to_string(),
                rate: 1.0,
                is_active: true,
            })
            .await;

        Arc::new(AppState::new(
            Config::default(),
            store.clone(),
            store,
            Arc::new(geocoder),
        ))
    }

    async fn seed_listing(state: &AppState, name: &str, km_north: f64, price: f64) -> Listing {
        let listing = state
            .service
            .create_listing(NewListing {
                owner_id: 1,
                name: name.to_string(),
                country: "Indonesia".to_string(),
                city: "Jakarta".to_string(),
                address: String::new(),
                latitude: (-6.2 + km_north * DEG_PER_KM).to_string(),
                longitude: "106.816666".to_string(),
                thumbnail_url: String::new(),
            })
            .await
            .unwrap();

        state
            .service
            .add_room(
                listing.id,
                NewRoom {
                    description: "standard".to_string(),
                    price,
                    price_uom: 1,
                    length: 3.0,
                    width: 4.0,
                    area_uom: 2,
                    capacity: 1,
                    floor_level: 1,
                    gender: GenderPolicy::Any,
                },
            )
            .await
            .unwrap();

        listing
    }

    #[tokio::test]
    async fn test_near_endpoint() {
        let state = test_state(FixedGeocoder::county("Jakarta")).await;
        seed_listing(&state, "Kost Anggrek", 5.0, 800_000.0).await;
        seed_listing(&state, "Kost Melati", 1.0, 500_000.0).await;
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/kost/near?lat=-6.200000&lng=106.816666&page=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let page: NearbyPage = serde_json::from_slice(&body).unwrap();

        assert_eq!(page.total_count, 2);
        assert_eq!(page.items[0].name, "Kost Melati");
        assert_eq!(page.items[0].price, 500_000.0);
        assert_eq!(page.items[0].currency, "IDR / month");
    }

    #[tokio::test]
    async fn test_near_endpoint_invalid_page() {
        let state = test_state(FixedGeocoder::county("Jakarta")).await;
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/kost/near?lat=-6.2&lng=106.8&page=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.code, "INVALID_PAGE");
    }

    #[tokio::test]
    async fn test_near_endpoint_no_geolocation_match() {
        let state = test_state(FixedGeocoder::empty()).await;
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/kost/near?lat=-6.2&lng=106.8")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.code, "NO_GEOLOCATION_MATCH");
    }

    #[tokio::test]
    async fn test_carousel_endpoint() {
        let state = test_state(FixedGeocoder::county("Jakarta")).await;
        for km in 1..=4 {
            seed_listing(&state, &format!("Kost {}", km), km as f64, 500_000.0).await;
        }
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/kost/near/carousel?lat=-6.200000&lng=106.816666")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let carousels: CarouselResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(carousels.carousel_list.len(), 2);
        assert_eq!(carousels.carousel_list[0].len(), 3);
        assert_eq!(carousels.carousel_list[1].len(), 1);
    }

    #[tokio::test]
    async fn test_get_kost_not_found() {
        let state = test_state(FixedGeocoder::county("Jakarta")).await;
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/kost/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.code, "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_create_and_fetch_kost() {
        let state = test_state(FixedGeocoder::county("Jakarta")).await;
        let app = create_router(state);

        let request_body = serde_json::json!({
            "owner_id": 7,
            "name": "Kost Baru",
            "country": "Indonesia",
            "city": "Jakarta",
            "address": "Jl. Thamrin 10",
            "latitude": "-6.19",
            "longitude": "106.82"
        });

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/kost")
                    .header("Content-Type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let created: Listing = serde_json::from_slice(&body).unwrap();
        assert_eq!(created.owner_id, 7);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/kost/{}", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_add_room_invalid_uom() {
        let state = test_state(FixedGeocoder::county("Jakarta")).await;
        let listing = seed_listing(&state, "Kost Melati", 1.0, 500_000.0).await;
        let app = create_router(state);

        // price UOM 2 is a length, not a currency
        let request_body = serde_json::json!({
            "description": "bad room",
            "price": 100000.0,
            "price_uom": 2,
            "length": 3.0,
            "width": 3.0,
            "area_uom": 2,
            "capacity": 1
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/kost/{}/rooms", listing.id))
                    .header("Content-Type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.code, "INVALID_UOM");
    }

    #[tokio::test]
    async fn test_price_endpoint_sentinel_for_empty_listing() {
        let state = test_state(FixedGeocoder::county("Jakarta")).await;
        let listing = state
            .service
            .create_listing(NewListing {
                owner_id: 1,
                name: "Kost Kosong".to_string(),
                country: "Indonesia".to_string(),
                city: "Jakarta".to_string(),
                address: String::new(),
                latitude: "-6.2".to_string(),
                longitude: "106.8".to_string(),
                thumbnail_url: String::new(),
            })
            .await
            .unwrap();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/kost/{}/price", listing.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let tag: PriceTag = serde_json::from_slice(&body).unwrap();
        assert!(tag.is_none());
    }
}
