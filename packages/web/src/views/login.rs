//! Login page view.

use dioxus::prelude::*;

use api::HttpApi;
use ui::{make_bridge, use_session};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
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
            let p = password();

            if u.is_empty() {
                error.set(Some("Please enter your username".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            submitting.set(true);
            match api::auth::login(&HttpApi::new(), &make_bridge(), &u, &p).await {
                Ok(live) => {
                    session.write().apply(live);
                    nav.replace(Route::Home {});
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
            h1 { class: "form-title", "Login to your account" }

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

                button {
                    class: "form-submit",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Submitting..." } else { "Submit" }
                }
            }

            if let Some(err) = error() {
                div { class: "error-box", "{err}" }
            }

            p {
                class: "form-alt",
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
