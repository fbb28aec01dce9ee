use dioxus::prelude::*;

use ui::{use_session, LogoutButton, Navbar, SessionProvider};
use views::{AddCourse, Home, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/add-course")]
    AddCourse {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// App chrome: navbar with auth-dependent links above the routed view.
#[component]
fn Shell() -> Element {
    let session = use_session();

    rsx! {
        Navbar {
            Link { class: "navbar-brand", to: Route::Home {}, "iGolf" }
            nav {
                class: "navbar-links",
                Link { to: Route::Home {}, "Home" }
                if session().is_authenticated() {
                    Link { to: Route::AddCourse {}, "Add course" }
                    LogoutButton { class: "navbar-logout" }
                } else {
                    Link { to: Route::Login {}, "Login" }
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
        main {
            Outlet::<Route> {}
        }
    }
}
