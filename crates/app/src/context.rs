//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartLedger, CartsService, store::PgCartStore},
        products::{PgProductCatalog, ProductCatalog},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
    pub products: Arc<dyn ProductCatalog>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        let catalog: Arc<dyn ProductCatalog> = Arc::new(PgProductCatalog::new(db.clone()));
        let store = Arc::new(PgCartStore::new(db));

        Ok(Self {
            carts: Arc::new(CartLedger::new(store, Arc::clone(&catalog))),
            products: catalog,
        })
    }
}
