//! Customer repository implementation
//!
//! Customers live in the `customers` table. The address book is stored in a
//! JSONB column and rewritten as a whole on every update, which keeps the
//! list order and the no-duplicates rule owned by the domain entity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::debug;
use uuid::Uuid;

use core_kernel::{CustomerId, DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_profile::{
    Address, Contact, Customer, CustomerFilters, ProfileRepository, ProfileStatus, User,
};

use super::query::{push_pagination, push_profile_conditions, push_profile_ordering};
use crate::error::port_error;
use crate::pool::check_health;

const SELECT_CUSTOMERS: &str = "SELECT id, first_name, last_name, user_id, username, email, \
     phone_number, addresses, status, created_at, updated_at FROM customers";

/// Database row for a customer
#[derive(Debug, Clone, FromRow)]
pub struct CustomerRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub addresses: Json<Vec<Address>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = PortError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<ProfileStatus>()
            .map_err(PortError::transformation)?;

        Ok(Customer {
            id: CustomerId::from_uuid(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            user: User::new(row.user_id, row.username),
            contact: Contact::new(row.email, row.phone_number),
            addresses: row.addresses.0,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// PostgreSQL adapter for [`ProfileRepository<Customer>`]
#[derive(Debug, Clone)]
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    /// Creates a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PostgresCustomerRepository {}

#[async_trait]
impl HealthCheckable for PostgresCustomerRepository {
    async fn health_check(&self) -> HealthCheckResult {
        check_health(&self.pool, "postgres-customer-repository").await
    }
}

#[async_trait]
impl ProfileRepository<Customer> for PostgresCustomerRepository {
    async fn find(&self, filters: &CustomerFilters) -> Result<Vec<Customer>, PortError> {
        let mut builder: QueryBuilder<'static, Postgres> = QueryBuilder::new(SELECT_CUSTOMERS);
        push_profile_conditions(&mut builder, filters);
        push_profile_ordering(&mut builder, filters);
        push_pagination(&mut builder, filters.pagination);

        let rows = builder
            .build_query_as::<CustomerRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(port_error)?;

        debug!(count = rows.len(), "Fetched customers");
        rows.into_iter().map(Customer::try_from).collect()
    }

    async fn count(&self, filters: &CustomerFilters) -> Result<u64, PortError> {
        let mut builder: QueryBuilder<'static, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM customers");
        push_profile_conditions(&mut builder, filters);

        let total: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(port_error)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn insert(&self, customer: &Customer) -> Result<(), PortError> {
        sqlx::query(
            r#"
            INSERT INTO customers (
                id, first_name, last_name, user_id, username, email,
                phone_number, addresses, status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(Uuid::from(customer.id))
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.user.id)
        .bind(&customer.user.username)
        .bind(&customer.contact.email)
        .bind(&customer.contact.phone_number)
        .bind(Json(&customer.addresses))
        .bind(customer.status.as_str())
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await
        .map_err(port_error)?;

        debug!(customer_id = %customer.id, "Inserted customer");
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<(), PortError> {
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET first_name = $2,
                last_name = $3,
                email = $4,
                phone_number = $5,
                addresses = $6,
                status = $7,
                updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(Uuid::from(customer.id))
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.contact.email)
        .bind(&customer.contact.phone_number)
        .bind(Json(&customer.addresses))
        .bind(customer.status.as_str())
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await
        .map_err(port_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("customer", customer.id));
        }
        Ok(())
    }

    async fn delete(&self, customer: &Customer) -> Result<(), PortError> {
        let result = sqlx::query("UPDATE customers SET status = $2, updated_at = $3 WHERE id = $1")
            .bind(Uuid::from(customer.id))
            .bind(customer.status.as_str())
            .bind(customer.updated_at)
            .execute(&self.pool)
            .await
            .map_err(port_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("customer", customer.id));
        }
        debug!(customer_id = %customer.id, status = %customer.status, "Stored customer status");
        Ok(())
    }
}
