//! Owner repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::debug;
use uuid::Uuid;

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, OwnerId, PortError};
use domain_profile::{Contact, Owner, OwnerFilters, ProfileRepository, ProfileStatus, User};

use super::query::{push_pagination, push_profile_conditions, push_profile_ordering};
use crate::error::port_error;
use crate::pool::check_health;

const SELECT_OWNERS: &str = "SELECT id, first_name, last_name, user_id, username, email, \
     phone_number, status, created_at, updated_at FROM owners";

/// Database row for an owner
#[derive(Debug, Clone, FromRow)]
pub struct OwnerRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<OwnerRow> for Owner {
    type Error = PortError;

    fn try_from(row: OwnerRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<ProfileStatus>()
            .map_err(PortError::transformation)?;

        Ok(Owner {
            id: OwnerId::from_uuid(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            user: User::new(row.user_id, row.username),
            contact: Contact::new(row.email, row.phone_number),
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// PostgreSQL adapter for [`ProfileRepository<Owner>`]
#[derive(Debug, Clone)]
pub struct PostgresOwnerRepository {
    pool: PgPool,
}

impl PostgresOwnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PostgresOwnerRepository {}

#[async_trait]
impl HealthCheckable for PostgresOwnerRepository {
    async fn health_check(&self) -> HealthCheckResult {
        check_health(&self.pool, "postgres-owner-repository").await
    }
}

#[async_trait]
impl ProfileRepository<Owner> for PostgresOwnerRepository {
    async fn find(&self, filters: &OwnerFilters) -> Result<Vec<Owner>, PortError> {
        let mut builder: QueryBuilder<'static, Postgres> = QueryBuilder::new(SELECT_OWNERS);
        push_profile_conditions(&mut builder, filters);
        push_profile_ordering(&mut builder, filters);
        push_pagination(&mut builder, filters.pagination);

        let rows = builder
            .build_query_as::<OwnerRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(port_error)?;

        debug!(count = rows.len(), "Fetched owners");
        rows.into_iter().map(Owner::try_from).collect()
    }

    async fn count(&self, filters: &OwnerFilters) -> Result<u64, PortError> {
        let mut builder: QueryBuilder<'static, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM owners");
        push_profile_conditions(&mut builder, filters);

        let total: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(port_error)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn insert(&self, owner: &Owner) -> Result<(), PortError> {
        sqlx::query(
            r#"
            INSERT INTO owners (
                id, first_name, last_name, user_id, username, email,
                phone_number, status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(Uuid::from(owner.id))
        .bind(&owner.first_name)
        .bind(&owner.last_name)
        .bind(&owner.user.id)
        .bind(&owner.user.username)
        .bind(&owner.contact.email)
        .bind(&owner.contact.phone_number)
        .bind(owner.status.as_str())
        .bind(owner.created_at)
        .bind(owner.updated_at)
        .execute(&self.pool)
        .await
        .map_err(port_error)?;

        debug!(owner_id = %owner.id, "Inserted owner");
        Ok(())
    }

    async fn update(&self, owner: &Owner) -> Result<(), PortError> {
        let result = sqlx::query(
            r#"
            UPDATE owners
            SET first_name = $2,
                last_name = $3,
                email = $4,
                phone_number = $5,
                status = $6,
                updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(Uuid::from(owner.id))
        .bind(&owner.first_name)
        .bind(&owner.last_name)
        .bind(&owner.contact.email)
        .bind(&owner.contact.phone_number)
        .bind(owner.status.as_str())
        .bind(owner.updated_at)
        .execute(&self.pool)
        .await
        .map_err(port_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("owner", owner.id));
        }
        Ok(())
    }

    async fn delete(&self, owner: &Owner) -> Result<(), PortError> {
        let result = sqlx::query("UPDATE owners SET status = $2, updated_at = $3 WHERE id = $1")
            .bind(Uuid::from(owner.id))
            .bind(owner.status.as_str())
            .bind(owner.updated_at)
            .execute(&self.pool)
            .await
            .map_err(port_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("owner", owner.id));
        }
        debug!(owner_id = %owner.id, status = %owner.status, "Stored owner status");
        Ok(())
    }
}
