use std::sync::Arc;

use anyhow::Result;
use redb::{Database, ReadableDatabase};
use sharebite_models::FoodRequest;

use crate::MIRROR_TABLE;

const REQUESTS_KEY: &str = "requests";

/// Last-known pickup requests snapshot. The default for an empty mirror is
/// simply no requests.
pub struct RequestMirror {
    db: Arc<Database>,
}

impl RequestMirror {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn get(&self) -> Result<Vec<FoodRequest>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(MIRROR_TABLE)?;

        if let Some(data) = table.get(REQUESTS_KEY)? {
            let requests: Vec<FoodRequest> = serde_json::from_slice(data.value())?;
            Ok(requests)
        } else {
            Ok(Vec::new())
        }
    }

    /// Full overwrite; the mirror never merges.
    pub fn save(&self, requests: &[FoodRequest]) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(MIRROR_TABLE)?;
            let serialized = serde_json::to_vec(requests)?;
            table.insert(REQUESTS_KEY, serialized.as_slice())?;
        }
        write_txn.commit()?;
        tracing::debug!(count = requests.len(), "saved requests mirror");
        Ok(())
    }
}
