pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use models::{Course, Region, UserProfile};
pub use session::{Session, SessionBridge, SessionStore};
