//! Derives the displayed post list from the raw collection and the
//! active criteria.

use chrono::{Datelike, Local};
use viaggio_shared::post::{GeoPoint, Post};

use crate::store::{Criteria, DistanceFilter, Section, SortKey};

/// Applies every active filter in order, then the selected sort.
///
/// Pure with respect to its inputs; the only ambient dependency is the
/// local calendar year used by [`Section::CurrentYear`].
pub fn filtered_posts(posts: &[Post], criteria: &Criteria) -> Vec<Post> {
    apply(posts, criteria, Local::now().year())
}

pub(crate) fn apply(posts: &[Post], criteria: &Criteria, current_year: i32) -> Vec<Post> {
    let mut posts: Vec<&Post> = posts.iter().collect();

    if !criteria.search_text.is_empty() {
        let text = criteria.search_text.to_lowercase();
        posts.retain(|p| {
            p.name.to_lowercase().contains(&text) || p.description.to_lowercase().contains(&text)
        });
    }

    if let Some(ref mood) = criteria.mood {
        posts.retain(|p| &p.mood == mood);
    }

    if !criteria.tags.is_empty() {
        posts.retain(|p| p.tags.iter().any(|tag| criteria.tags.contains(tag)));
    }

    if let Some(filter) = criteria.distance.filter(DistanceFilter::is_valid) {
        posts.retain(|p| {
            geo_of(p).map_or(false, |geo| {
                filter.center.distance_km(geo) <= filter.radius_km
            })
        });
    }

    match criteria.section {
        Section::All => {}
        Section::Favorites => posts.retain(|p| p.special),
        Section::CurrentYear => {
            posts.retain(|p| p.date.with_timezone(&Local).year() == current_year)
        }
        Section::Folder(id) => posts.retain(|p| p.folder_id == Some(id)),
    }

    let mut posts: Vec<Post> = posts.into_iter().cloned().collect();

    match criteria.sort {
        Some(SortKey::Date) => posts.sort_by(|a, b| b.date.cmp(&a.date)),
        Some(SortKey::Expense) => {
            posts.sort_by(|a, b| b.actual_expense.total_cmp(&a.actual_expense))
        }
        Some(SortKey::Distance) => {
            // Only meaningful with an active proximity center; without
            // one the filtered order is left untouched.
            if let Some(filter) = criteria.distance.filter(DistanceFilter::is_valid) {
                posts.sort_by(|a, b| {
                    distance_to(a, filter.center).total_cmp(&distance_to(b, filter.center))
                });
            }
        }
        None => {}
    }

    posts
}

/// The coordinate of a post, if one is recorded and finite.
fn geo_of(post: &Post) -> Option<GeoPoint> {
    post.location.geo.filter(|geo| geo.is_valid())
}

/// Distance from `post` to `center`; posts without a usable coordinate
/// sort after every located one.
fn distance_to(post: &Post, center: GeoPoint) -> f64 {
    geo_of(post).map_or(f64::INFINITY, |geo| center.distance_km(geo))
}
