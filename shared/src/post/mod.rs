pub mod handle;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a journaled trip posted by a user.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// The only id of this post.
    pub id: u64,
    pub name: String,
    pub media: Media,
    pub location: Location,
    pub description: String,
    /// Mood label from an open vocabulary, matched verbatim by filters.
    pub mood: String,
    pub positive_reflection: String,
    pub negative_reflection: String,
    /// Physical effort rating, `1..=5`.
    pub physical_effort: u8,
    /// Economic effort rating, `1..=5`.
    pub economic_effort: u8,
    pub actual_expense: f64,
    pub tags: Vec<String>,
    /// Time of the experience itself, not of the record creation.
    pub date: DateTime<Utc>,
    /// Whether the post is marked as a favorite.
    #[serde(default)]
    pub special: bool,
    #[serde(default)]
    pub folder_id: Option<u64>,
}

/// Media attached to a post. Both links may be absent.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Media {
    pub photo: Option<String>,
    pub video: Option<String>,
}

/// Where the experience took place.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Location {
    /// Manually entered description of the place.
    pub manual: String,
    /// Geographic coordinate, if one was recorded.
    ///
    /// Absence of the whole pair means "no coordinate": `(0, 0)` is a
    /// point in the Gulf of Guinea, not a missing value.
    pub geo: Option<GeoPoint>,
}

/// A geographic coordinate pair in degrees.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Whether both components are finite numbers.
    pub fn is_valid(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Great-circle distance to `other` in kilometers, by the haversine
    /// formula with an Earth radius of 6371 km.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos()
                * other.lat.to_radians().cos()
                * (d_lng / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

/// A folder grouping posts together.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Folder {
    /// The only id of this folder.
    pub id: u64,
    pub name: String,
}
