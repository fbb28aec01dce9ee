//! Registration page view.

use dioxus::prelude::*;

use api::{CourseApi, HttpApi};
use ui::use_session;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut fullname = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Already logged in: back to the directory
    if !session().loading && session().token.is_some() {
        nav.replace(Route::Home {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let f = fullname().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if u.is_empty() {
                error.set(Some("Username is required".to_string()));
                return;
            }
            if f.is_empty() {
                error.set(Some("Full name is required".to_string()));
                return;
            }
            if p.len() < 6 {
                error.set(Some("Password must be at least 6 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            submitting.set(true);
            match HttpApi::new().register(&u, &p, &f).await {
                Ok(_) => {
                    nav.replace(Route::Login {});
                }
                Err(e) => {
                    submitting.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "form-page",
            h1 { class: "form-title", "Create your account" }

            form {
                class: "form",
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { "Username" }
                    input {
                        r#type: "text",
                        placeholder: "itspeterparker",
                        maxlength: 26,
                        required: true,
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "Full name" }
                    input {
                        r#type: "text",
                        placeholder: "Peter Parker",
                        maxlength: 50,
                        required: true,
                        value: fullname(),
                        oninput: move |evt| fullname.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "Password" }
                    input {
                        r#type: "password",
                        placeholder: "password",
                        minlength: 6,
                        maxlength: 16,
                        required: true,
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "Confirm password" }
                    input {
                        r#type: "password",
                        placeholder: "password",
                        minlength: 6,
                        maxlength: 16,
                        required: true,
                        value: confirm_password(),
                        oninput: move |evt| confirm_password.set(evt.value()),
                    }
                }

                button {
                    class: "form-submit",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Submitting..." } else { "Register" }
                }
            }

            if let Some(err) = error() {
                div { class: "error-box", "{err}" }
            }

            p {
                class: "form-alt",
                "Already have an account? "
                Link { to: Route::Login {}, "Login" }
            }
        }
    }
}
