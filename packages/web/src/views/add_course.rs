//! Course submission form.

use dioxus::prelude::*;

use api::{CourseApi, HttpApi, NewCourse};
use store::Region;
use ui::{use_session, RegionSelect};

use crate::Route;

/// Assemble the submission payload from the raw form values.
///
/// Numeric fields arrive as strings from the inputs; a value that does not
/// parse produces the message shown to the user and nothing is sent.
fn parse_course_form(
    name: &str,
    location: &str,
    state: Region,
    holes: &str,
    par: &str,
    designer: &str,
    rating: &str,
) -> Result<NewCourse, String> {
    let name = name.trim();
    let location = location.trim();
    let designer = designer.trim();
    if name.is_empty() || location.is_empty() || designer.is_empty() {
        return Err("Please fill in every field".to_string());
    }
    let holes: u32 = holes
        .trim()
        .parse()
        .map_err(|_| "Holes must be a whole number".to_string())?;
    let par: u32 = par
        .trim()
        .parse()
        .map_err(|_| "Par must be a whole number".to_string())?;
    let rating: f32 = rating
        .trim()
        .parse()
        .map_err(|_| "Rating must be a number".to_string())?;
    Ok(NewCourse {
        name: name.to_string(),
        location: location.to_string(),
        state,
        holes,
        par,
        designer: designer.to_string(),
        rating,
    })
}

#[component]
pub fn AddCourse() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut state = use_signal(Region::default);
    let mut holes = use_signal(String::new);
    let mut par = use_signal(String::new);
    let mut designer = use_signal(String::new);
    let mut rating = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Guests cannot submit courses
    if !session().loading && session().token.is_none() {
        nav.replace(Route::Home {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        spawn(async move {
            error.set(None);
            notice.set(None);

            let course = match parse_course_form(
                &name(),
                &location(),
                state(),
                &holes(),
                &par(),
                &designer(),
                &rating(),
            ) {
                Ok(course) => course,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            let Some(token) = session().token else {
                return;
            };

            submitting.set(true);
            match HttpApi::new().create_course(&token, &course).await {
                Ok(_) => {
                    // Back to the initial empty form; entered values are only
                    // kept when the submission failed
                    name.set(String::new());
                    location.set(String::new());
                    state.set(Region::default());
                    holes.set(String::new());
                    par.set(String::new());
                    designer.set(String::new());
                    rating.set(String::new());
                    notice.set(Some("Course added successfully!".to_string()));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "form-page",
            h1 { class: "form-title", "Add a new golf course" }

            form {
                class: "form",
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { "Name" }
                    input {
                        r#type: "text",
                        placeholder: "Pebble Beach Golf Links",
                        maxlength: 50,
                        required: true,
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                }

                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "Location" }
                        input {
                            r#type: "text",
                            placeholder: "Monterey County",
                            maxlength: 26,
                            required: true,
                            value: location(),
                            oninput: move |evt| location.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Select State" }
                        RegionSelect {
                            value: state(),
                            class: "region-select",
                            onchange: move |r| state.set(r),
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { "Designer" }
                    input {
                        r#type: "text",
                        placeholder: "Jack Neville & Douglas Grant",
                        maxlength: 50,
                        required: true,
                        value: designer(),
                        oninput: move |evt| designer.set(evt.value()),
                    }
                }

                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "Holes" }
                        input {
                            r#type: "number",
                            placeholder: "18",
                            min: 1,
                            max: 100,
                            required: true,
                            value: holes(),
                            oninput: move |evt| holes.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Par" }
                        input {
                            r#type: "number",
                            placeholder: "72",
                            min: 1,
                            max: 100,
                            required: true,
                            value: par(),
                            oninput: move |evt| par.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Rating" }
                        input {
                            r#type: "number",
                            step: 0.1,
                            placeholder: "4.5",
                            min: 1,
                            max: 5,
                            required: true,
                            value: rating(),
                            oninput: move |evt| rating.set(evt.value()),
                        }
                    }
                }

                button {
                    class: "form-submit",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Submitting..." } else { "Submit" }
                }
            }

            if let Some(msg) = notice() {
                div { class: "notice-box", "{msg}" }
            }
            if let Some(err) = error() {
                div { class: "error-box", "{err}" }
            }
        }
    }
}
