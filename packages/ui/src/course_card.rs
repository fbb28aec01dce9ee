//! Course listing card with the favorite toggle.

use dioxus::prelude::*;
use store::{Course, Region};

use crate::icons::{FaHeart, FaHeartSolid, FaStar};
use crate::Icon;

#[component]
pub fn CourseCard(
    course: Course,
    /// Whether this course is in the user's favorites.
    favorite: bool,
    /// Whether the heart is rendered at all (authenticated users only).
    can_favorite: bool,
    /// True while this course's toggle request is in flight.
    pending: bool,
    on_toggle: EventHandler<Course>,
) -> Element {
    // Prefer the canonical label; fall back to whatever the backend sent
    let region_label = Region::ALL
        .into_iter()
        .find(|r| r.matches(&course.state))
        .map(|r| r.label().to_string())
        .unwrap_or_else(|| course.state.clone());

    rsx! {
        div {
            class: "course-card",

            div {
                class: "course-card-body",
                h3 { class: "course-card-name", "{course.name}" }
                p { class: "course-card-location", "{course.location}, {region_label}" }
                p {
                    class: "course-card-designer",
                    "Designed by: "
                    span { class: "course-card-designer-name", "{course.designer}" }
                }
                div {
                    class: "course-card-stats",
                    p { "Par: {course.par}" }
                    p { "Holes: {course.holes}" }
                    p {
                        class: "course-card-rating",
                        "Rating: {course.rating} "
                        Icon { icon: FaStar, width: 14, height: 14 }
                    }
                }
            }

            if can_favorite {
                button {
                    class: if favorite { "course-card-heart favorited" } else { "course-card-heart" },
                    disabled: pending,
                    title: if favorite { "Remove from favorites" } else { "Add to favorites" },
                    onclick: {
                        let course = course.clone();
                        move |_| on_toggle.call(course.clone())
                    },
                    if favorite {
                        Icon { icon: FaHeartSolid, width: 20, height: 20 }
                    } else {
                        Icon { icon: FaHeart, width: 20, height: 20 }
                    }
                }
            }
        }
    }
}
