//! The per-client local mirror: the last known snapshot of listings,
//! requests and the logged-in identity, durable across reloads.
//!
//! Collections are stored as whole JSON blobs under fixed keys because the
//! sync policy is full overwrite, never merge; a snapshot either wholly
//! reflects the last successful remote read or the last local mutation.

pub mod listings;
pub mod requests;
pub mod session;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use redb::{Database, TableDefinition};

pub use listings::ListingMirror;
pub use requests::RequestMirror;
pub use session::SessionStore;

pub(crate) const MIRROR_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("mirror");
pub(crate) const SESSION_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("session");

pub struct Storage {
    db: Arc<Database>,
    pub listings: ListingMirror,
    pub requests: RequestMirror,
    pub session: SessionStore,
}

impl Storage {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let db = Arc::new(Database::create(path)?);

        let write_txn = db.begin_write()?;
        write_txn.open_table(MIRROR_TABLE)?;
        write_txn.open_table(SESSION_TABLE)?;
        write_txn.commit()?;

        Ok(Self {
            listings: ListingMirror::new(db.clone()),
            requests: RequestMirror::new(db.clone()),
            session: SessionStore::new(db.clone()),
            db,
        })
    }

    pub fn get_db(&self) -> Arc<Database> {
        self.db.clone()
    }
}
