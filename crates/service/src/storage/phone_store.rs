use std::{collections::HashMap, sync::Arc};

use models::{Characteristic, Phone};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::ServiceError;

/// Identifier-keyed table that remembers the order keys were first inserted.
#[derive(Debug, Default)]
struct PhoneTable {
    order: Vec<String>,
    by_id: HashMap<String, Phone>,
}

impl PhoneTable {
    fn clear(&mut self) {
        self.order.clear();
        self.by_id.clear();
    }

    /// Re-inserting an existing identifier replaces the value in place.
    fn insert(&mut self, phone: Phone) {
        let key = phone.identifier.clone();
        if self.by_id.insert(key.clone(), phone).is_none() {
            self.order.push(key);
        }
    }

    fn values(&self) -> Vec<Phone> {
        self.order.iter().filter_map(|id| self.by_id.get(id)).cloned().collect()
    }
}

/// In-memory phone store shared by all request handlers.
///
/// Reads take the read lock; replace and patch take the write lock, so each
/// operation is atomic with respect to the others.
#[derive(Clone, Debug, Default)]
pub struct PhoneStore {
    inner: Arc<RwLock<PhoneTable>>,
}

impl PhoneStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Clear the store and insert `phones` keyed by identifier.
    ///
    /// On duplicate identifiers the last value wins and keeps the position of
    /// the first occurrence. Returns the resulting collection in order.
    pub async fn replace_all(&self, phones: Vec<Phone>) -> Vec<Phone> {
        let submitted = phones.len();
        let mut table = self.inner.write().await;
        table.clear();
        for phone in phones {
            table.insert(phone);
        }
        let stored = table.values();
        drop(table);
        info!(submitted, stored = stored.len(), "phones replaced");
        stored
    }

    /// List all phones in insertion order.
    pub async fn list(&self) -> Vec<Phone> {
        let table = self.inner.read().await;
        table.values()
    }

    pub async fn get(&self, identifier: &str) -> Result<Phone, ServiceError> {
        let table = self.inner.read().await;
        match table.by_id.get(identifier) {
            Some(phone) => Ok(phone.clone()),
            None => {
                debug!(%identifier, "phone lookup missed");
                Err(ServiceError::not_found(identifier))
            }
        }
    }

    /// Replace only the characteristics of one phone and return the updated record.
    pub async fn update_characteristics(
        &self,
        identifier: &str,
        characteristics: Characteristic,
    ) -> Result<Phone, ServiceError> {
        let mut table = self.inner.write().await;
        let existed = table
            .by_id
            .get_mut(identifier)
            .ok_or_else(|| ServiceError::not_found(identifier))?;
        *existed = existed.with_characteristics(characteristics);
        let updated = existed.clone();
        drop(table);
        info!(%identifier, "phone characteristics updated");
        Ok(updated)
    }
}
