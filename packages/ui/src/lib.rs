//! This crate contains all shared UI for the workspace.

mod session;
pub use session::{use_session, LogoutButton, SessionProvider, SessionState};

mod bridge;
pub use bridge::make_bridge;

mod navbar;
pub use navbar::Navbar;

mod course_card;
pub use course_card::CourseCard;

mod region_select;
pub use region_select::RegionSelect;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_regular_icons::FaHeart;
    pub use dioxus_free_icons::icons::fa_solid_icons::{FaHeart as FaHeartSolid, FaStar};
}
