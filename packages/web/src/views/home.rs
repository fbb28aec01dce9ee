use std::collections::HashSet;

use dioxus::prelude::*;

use api::{favorites, CourseApi, HttpApi};
use store::{Course, Region};
use ui::{make_bridge, use_session, CourseCard, RegionSelect};

#[component]
pub fn Home() -> Element {
    let mut region = use_signal(Region::default);
    let mut action_error = use_signal(|| Option::<String>::None);
    // Courses with a favorite toggle currently in flight
    let mut pending = use_signal(HashSet::<i64>::new);
    let mut session = use_session();

    // Changing the region restarts the resource and drops the stale in-flight
    // response, so a slow older request never overwrites a newer one.
    let courses = use_resource(move || async move {
        HttpApi::new().list_courses(region()).await
    });

    let on_toggle = move |course: Course| {
        let Some(mut live) = session().session() else {
            return;
        };
        if pending().contains(&course.id) {
            return;
        }
        pending.write().insert(course.id);
        spawn(async move {
            let client = HttpApi::new();
            let bridge = make_bridge();
            let course_id = course.id;
            let result = if live.user.is_favorite(course_id) {
                favorites::remove(&client, &bridge, &mut live, course_id).await
            } else {
                favorites::add(&client, &bridge, &mut live, course).await
            };
            match result {
                Ok(()) => {
                    action_error.set(None);
                    session.write().set_user(live.user);
                }
                Err(e) => action_error.set(Some(e.to_string())),
            }
            pending.write().remove(&course_id);
        });
    };

    let state = session();

    let listing = match &*courses.read() {
        None => rsx! {
            div { class: "loader", "Loading..." }
        },
        Some(Err(e)) => rsx! {
            div { class: "error-box", "{e}" }
        },
        Some(Ok(list)) => {
            let list = list.clone();
            rsx! {
                h2 { class: "home-courses-title", "Here are the courses:" }
                for course in list {
                    CourseCard {
                        key: "{course.id}",
                        favorite: state.user.as_ref().is_some_and(|u| u.is_favorite(course.id)),
                        can_favorite: state.is_authenticated(),
                        pending: pending().contains(&course.id),
                        on_toggle: on_toggle,
                        course: course,
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "home",

            section {
                class: "home-intro",
                if let Some(ref user) = state.user {
                    div { class: "home-welcome", "Welcome, {user.fullname}" }
                }
                h2 { class: "home-title", "Welcome to iGolf: Your Gateway to Golfing Adventures" }
                p {
                    class: "home-blurb",
                    "Discover the world of golfing excellence with iGolf! Whether "
                    "you're an avid golfer or simply curious about the sport, iGolf "
                    "is your destination to explore premier golf courses, from iconic "
                    "links in the heart of California to hidden gems scattered "
                    "throughout New York."
                }

                div {
                    class: "home-filter",
                    label { class: "home-filter-label", "Select State" }
                    p {
                        class: "home-filter-hint",
                        "This will show you all the courses available in that particular state."
                    }
                    RegionSelect {
                        value: region(),
                        class: "region-select",
                        onchange: move |r| region.set(r),
                    }
                }
            }

            section {
                class: "home-courses",
                if let Some(err) = action_error() {
                    div { class: "error-box", "{err}" }
                }
                {listing}
            }
        }
    }
}
