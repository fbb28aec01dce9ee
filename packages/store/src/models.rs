//! # Domain models for courses and users
//!
//! The records the remote API serves, plus the fixed [`Region`] set the
//! directory can be filtered by. Everything here is `Serialize + Deserialize`
//! so it can be decoded from wire JSON and mirrored into local storage.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Course`] | A single golf course listing. Created server-side, read-only on the client. |
//! | [`UserProfile`] | The authenticated user's profile with their ordered favorites list. |
//! | [`Region`] | One of the ten places courses can be filed under. |

use serde::{Deserialize, Serialize};

/// A golf course as served by the remote API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub location: String,
    /// Region as the backend renders it, e.g. "New York".
    pub state: String,
    pub holes: u32,
    pub par: u32,
    pub designer: String,
    pub rating: f32,
}

/// The authenticated user's profile.
///
/// No credential material: the login form holds the password only while the
/// request is in flight, and unknown wire fields are dropped on deserialize,
/// so a backend that echoes one back never reaches memory or storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub fullname: String,
    /// Favorited courses, oldest first.
    #[serde(rename = "favoriteCourses", default)]
    pub favorite_courses: Vec<Course>,
}

impl UserProfile {
    pub fn is_favorite(&self, course_id: i64) -> bool {
        self.favorite_courses.iter().any(|c| c.id == course_id)
    }

    /// Append a course to the favorites. Appending a course that is already
    /// present is a no-op, so the list holds each course at most once.
    pub fn add_favorite(&mut self, course: Course) {
        if !self.is_favorite(course.id) {
            self.favorite_courses.push(course);
        }
    }

    /// Drop the favorite with the matching id, if present.
    pub fn remove_favorite(&mut self, course_id: i64) {
        self.favorite_courses.retain(|c| c.id != course_id);
    }
}

/// The fixed set of regions the course directory knows about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    #[default]
    California,
    NewYork,
    Georgia,
    NorthCarolina,
    Wisconsin,
    SouthCarolina,
    NorthernIreland,
    Scotland,
    Pennsylvania,
    Ohio,
}

impl Region {
    pub const ALL: [Region; 10] = [
        Region::California,
        Region::NewYork,
        Region::Georgia,
        Region::NorthCarolina,
        Region::Wisconsin,
        Region::SouthCarolina,
        Region::NorthernIreland,
        Region::Scotland,
        Region::Pennsylvania,
        Region::Ohio,
    ];

    /// Wire value used in query strings and submissions: "new-york".
    pub fn slug(self) -> &'static str {
        match self {
            Region::California => "california",
            Region::NewYork => "new-york",
            Region::Georgia => "georgia",
            Region::NorthCarolina => "north-carolina",
            Region::Wisconsin => "wisconsin",
            Region::SouthCarolina => "south-carolina",
            Region::NorthernIreland => "northern-ireland",
            Region::Scotland => "scotland",
            Region::Pennsylvania => "pennsylvania",
            Region::Ohio => "ohio",
        }
    }

    /// Display name: "New York".
    pub fn label(self) -> &'static str {
        match self {
            Region::California => "California",
            Region::NewYork => "New York",
            Region::Georgia => "Georgia",
            Region::NorthCarolina => "North Carolina",
            Region::Wisconsin => "Wisconsin",
            Region::SouthCarolina => "South Carolina",
            Region::NorthernIreland => "Northern Ireland",
            Region::Scotland => "Scotland",
            Region::Pennsylvania => "Pennsylvania",
            Region::Ohio => "Ohio",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.slug() == slug)
    }

    /// Whether a course's `state` string names this region.
    ///
    /// The backend lists courses with display casing ("New York") but accepts
    /// slugs on submission; both normalize to the same code.
    pub fn matches(self, state: &str) -> bool {
        normalize(state) == self.slug()
    }
}

fn normalize(state: &str) -> String {
    state
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: i64, name: &str) -> Course {
        Course {
            id,
            name: name.to_string(),
            location: "Somewhere".to_string(),
            state: "California".to_string(),
            holes: 18,
            par: 72,
            designer: "A. Designer".to_string(),
            rating: 4.5,
        }
    }

    #[test]
    fn test_region_slug_roundtrip() {
        for region in Region::ALL {
            assert_eq!(Region::from_slug(region.slug()), Some(region));
        }
        assert_eq!(Region::from_slug("narnia"), None);
    }

    #[test]
    fn test_region_matches_display_and_slug_forms() {
        assert!(Region::NewYork.matches("New York"));
        assert!(Region::NewYork.matches("new-york"));
        assert!(Region::NewYork.matches("  new   york "));
        assert!(!Region::NewYork.matches("York"));
        assert!(Region::NorthernIreland.matches("Northern Ireland"));
    }

    #[test]
    fn test_region_serde_uses_slugs() {
        let json = serde_json::to_string(&Region::NorthCarolina).unwrap();
        assert_eq!(json, "\"north-carolina\"");
        let back: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Region::NorthCarolina);
    }

    #[test]
    fn test_add_favorite_is_append_once() {
        let mut user = UserProfile {
            id: "u1".to_string(),
            username: "pete".to_string(),
            fullname: "Peter Parker".to_string(),
            favorite_courses: Vec::new(),
        };

        user.add_favorite(course(1, "Pebble Beach"));
        user.add_favorite(course(2, "Augusta"));
        user.add_favorite(course(1, "Pebble Beach"));

        assert_eq!(user.favorite_courses.len(), 2);
        assert!(user.is_favorite(1));
        assert!(user.is_favorite(2));
        // order of insertion is kept
        assert_eq!(user.favorite_courses[0].id, 1);
    }

    #[test]
    fn test_remove_favorite_matches_id_only() {
        let mut user = UserProfile {
            id: "u1".to_string(),
            username: "pete".to_string(),
            fullname: "Peter Parker".to_string(),
            favorite_courses: vec![course(1, "Pebble Beach"), course(2, "Augusta")],
        };

        user.remove_favorite(1);
        assert_eq!(user.favorite_courses.len(), 1);
        assert_eq!(user.favorite_courses[0].id, 2);

        // removing an id that is not present does nothing
        user.remove_favorite(42);
        assert_eq!(user.favorite_courses.len(), 1);
    }

    #[test]
    fn test_user_profile_drops_unknown_wire_fields() {
        // a backend that still echoes the password must not reach the model
        let json = r#"{
            "id": "u1",
            "username": "pete",
            "password": "hunter2",
            "fullname": "Peter Parker",
            "favoriteCourses": []
        }"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "pete");
        let back = serde_json::to_string(&user).unwrap();
        assert!(!back.contains("hunter2"));
    }

    #[test]
    fn test_user_profile_favorites_default_when_absent() {
        let json = r#"{"id": "u1", "username": "pete", "fullname": "Peter Parker"}"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert!(user.favorite_courses.is_empty());
    }
}
