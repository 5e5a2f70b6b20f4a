pub mod error;
pub mod poll;
pub mod remote;
pub mod session;
pub mod sync;

pub use error::SyncError;
pub use poll::{Feed, PollHandle};
pub use remote::{HttpRemote, RemoteError, RemoteStore};
pub use session::SessionManager;
pub use sync::{Source, SyncCoordinator, Synced};

use std::path::Path;
use std::sync::Arc;

use sharebite_storage::Storage;

/// Client-side application core: the mirror, the coordinator in front of it
/// and the session, wired together once at startup.
pub struct AppCore {
    pub storage: Arc<Storage>,
    pub sync: Arc<SyncCoordinator>,
    pub session: SessionManager,
}

impl AppCore {
    pub fn new(db_path: impl AsRef<Path>, base_url: &str) -> anyhow::Result<Self> {
        let storage = Arc::new(Storage::new(db_path)?);
        let remote = Arc::new(HttpRemote::new(base_url)?);
        let sync = Arc::new(SyncCoordinator::new(remote, storage.clone()));
        let session = SessionManager::new(storage.clone());

        Ok(Self {
            storage,
            sync,
            session,
        })
    }
}
