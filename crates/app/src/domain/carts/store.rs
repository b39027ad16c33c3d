//! Cart store.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as, types::Json};

use crate::{
    database::Db,
    domain::carts::models::{Cart, CartUuid, LineItem},
};

const FIND_CART_BY_USER_SQL: &str = include_str!("sql/find_cart_by_user.sql");
const FIND_CART_SQL: &str = include_str!("sql/find_cart.sql");
const UPSERT_CART_SQL: &str = include_str!("sql/upsert_cart.sql");

/// Durable cart persistence, keyed by user and by cart identifier.
#[automock]
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Look up a user's cart, if one exists.
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Cart>, sqlx::Error>;

    /// Look up a cart by its identifier.
    async fn find_by_id(&self, cart: CartUuid) -> Result<Option<Cart>, sqlx::Error>;

    /// Persist a whole cart document, inserting or replacing it.
    async fn save(&self, cart: &Cart) -> Result<(), sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgCartStore {
    db: Db,
}

impl PgCartStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartStore for PgCartStore {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Cart>, sqlx::Error> {
        query_as::<Postgres, Cart>(FIND_CART_BY_USER_SQL)
            .bind(user_id)
            .fetch_optional(self.db.pool())
            .await
    }

    async fn find_by_id(&self, cart: CartUuid) -> Result<Option<Cart>, sqlx::Error> {
        query_as::<Postgres, Cart>(FIND_CART_SQL)
            .bind(cart.into_uuid())
            .fetch_optional(self.db.pool())
            .await
    }

    async fn save(&self, cart: &Cart) -> Result<(), sqlx::Error> {
        query(UPSERT_CART_SQL)
            .bind(cart.uuid.into_uuid())
            .bind(&cart.user_id)
            .bind(Json(&cart.items))
            .execute(self.db.pool())
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for Cart {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let Json(items): Json<Vec<LineItem>> = row.try_get("items")?;

        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            user_id: row.try_get("user_id")?,
            items,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
