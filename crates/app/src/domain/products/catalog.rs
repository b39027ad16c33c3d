//! Product catalog service.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as};

use crate::{
    database::Db,
    domain::products::{
        errors::CatalogError,
        models::{NewProduct, Product, ProductUuid},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone)]
pub struct PgProductCatalog {
    db: Db,
}

impl PgProductCatalog {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCatalog for PgProductCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let products = query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .fetch_all(self.db.pool())
            .await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, CatalogError> {
        let product = query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(self.db.pool())
            .await?;

        Ok(product)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, CatalogError> {
        let price = i64::try_from(product.price)?;

        let created = query_as::<Postgres, Product>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&product.name)
            .bind(price)
            .fetch_one(self.db.pool())
            .await?;

        Ok(created)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), CatalogError> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(self.db.pool())
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(CatalogError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Retrieves all live products.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Retrieve a single product by identifier.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, CatalogError>;

    /// Creates a new product with the given details.
    async fn create_product(&self, product: NewProduct) -> Result<Product, CatalogError>;

    /// Soft-deletes a product with the given UUID.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), CatalogError>;
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price = try_get_amount(row, "price")?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            price,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}

pub(crate) fn try_get_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
