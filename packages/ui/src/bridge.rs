//! Platform selection for the session persistence backend.

use store::{SessionBridge, SessionStore};

/// The persistence bridge for the current platform: browser `localStorage` on
/// web, a process-wide in-memory store elsewhere (native dev shells, tests).
pub fn make_bridge() -> SessionBridge<impl SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionBridge::new(store::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionBridge::new(shared_memory())
    }
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn shared_memory() -> store::MemoryStore {
    use std::sync::OnceLock;
    static STORE: OnceLock<store::MemoryStore> = OnceLock::new();
    STORE.get_or_init(store::MemoryStore::new).clone()
}
