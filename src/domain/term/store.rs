use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use tracing::{debug, info};

use super::entity::used_term;
use crate::config::{database::connect_scoped, ConfigError};
use crate::utils::error::AppError;

/// Trailing window, in days, for the recent-term lookup
pub const RECENCY_WINDOW_DAYS: i64 = 30;
/// Upper bound on how many recent terms are fed back into the prompt
pub const RECENT_TERMS_LIMIT: u64 = 50;

/// Storage of handed-out terms.
///
/// One value is held by exactly one request; dropping it releases the underlying connection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TermStore: Send + Sync {
    /// Term names for `category` used within the last `window_days`, most recent first.
    async fn recent_terms(
        &self,
        category: &str,
        window_days: i64,
        limit: u64,
    ) -> Result<Vec<String>, AppError>;

    /// Inserts a term stamped with the current time and commits. Returns the new row id.
    async fn save(&self, term: &str, category: &str) -> Result<i64, AppError>;

    /// Round-trips to the backing store.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Hands out a fresh store handle per request.
#[async_trait]
pub trait StoreConnector: Send + Sync {
    async fn acquire(&self) -> Result<Box<dyn TermStore>, AppError>;
}

pub type SharedStoreConnector = Arc<dyn StoreConnector>;

/// `TermStore` over a sea-orm connection
pub struct SeaOrmTermStore {
    db: DatabaseConnection,
}

impl SeaOrmTermStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn recent_terms_since(
        &self,
        category: &str,
        cutoff: NaiveDateTime,
        limit: u64,
    ) -> Result<Vec<String>, AppError> {
        let rows = used_term::Entity::find()
            .filter(used_term::Column::Category.eq(category))
            .filter(used_term::Column::Timestamp.gte(cutoff))
            .order_by_desc(used_term::Column::Timestamp)
            .order_by_desc(used_term::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| AppError::StoreQuery(e.to_string()))?;

        Ok(rows.into_iter().map(|row| row.term).collect())
    }
}

#[async_trait]
impl TermStore for SeaOrmTermStore {
    async fn recent_terms(
        &self,
        category: &str,
        window_days: i64,
        limit: u64,
    ) -> Result<Vec<String>, AppError> {
        let cutoff = Utc::now().naive_utc() - Duration::days(window_days);
        let terms = self.recent_terms_since(category, cutoff, limit).await?;

        debug!(category = %category, count = terms.len(), "Loaded recent terms");
        Ok(terms)
    }

    async fn save(&self, term: &str, category: &str) -> Result<i64, AppError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        let row = used_term::ActiveModel {
            term: Set(term.to_owned()),
            category: Set(category.to_owned()),
            timestamp: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let inserted = used_term::Entity::insert(row)
            .exec(&txn)
            .await
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        info!(
            term = %term,
            category = %category,
            id = inserted.last_insert_id,
            "Saved new term"
        );
        Ok(inserted.last_insert_id)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db
            .ping()
            .await
            .map_err(|e| AppError::StoreUnavailable(e.to_string()))
    }
}

/// Opens a single-connection MySQL handle per `acquire`.
pub struct MySqlConnector {
    url: Result<String, ConfigError>,
}

impl MySqlConnector {
    /// A connector whose URL could not be built answers every `acquire` with `StoreUnavailable`.
    pub fn new(url: Result<String, ConfigError>) -> Self {
        Self { url }
    }
}

#[async_trait]
impl StoreConnector for MySqlConnector {
    async fn acquire(&self) -> Result<Box<dyn TermStore>, AppError> {
        let url = self
            .url
            .as_ref()
            .map_err(|e| AppError::StoreUnavailable(e.to_string()))?;

        let db = connect_scoped(url)
            .await
            .map_err(|e| AppError::StoreUnavailable(e.to_string()))?;

        Ok(Box::new(SeaOrmTermStore::new(db)))
    }
}
