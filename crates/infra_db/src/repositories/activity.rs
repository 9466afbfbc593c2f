//! Activity repository implementation
//!
//! The trail is append-only: rows are inserted and listed, never updated.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use core_kernel::{ActivityId, DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_profile::{Activity, ActivityFilters, ActivityRepository, Resource};

use super::query::{push_activity_conditions, push_pagination};
use crate::error::port_error;
use crate::pool::check_health;

/// Database row for an activity
#[derive(Debug, Clone, FromRow)]
pub struct ActivityRow {
    pub id: Uuid,
    pub action: String,
    pub description: String,
    pub resource_id: String,
    pub resource_kind: String,
    pub metadata: Json<BTreeMap<String, String>>,
    pub created_at: DateTime<Utc>,
}

impl From<ActivityRow> for Activity {
    fn from(row: ActivityRow) -> Self {
        Activity {
            id: ActivityId::from_uuid(row.id),
            action: row.action,
            description: row.description,
            resource: Resource::new(row.resource_id, row.resource_kind),
            metadata: row.metadata.0,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL adapter for [`ActivityRepository`]
#[derive(Debug, Clone)]
pub struct PostgresActivityRepository {
    pool: PgPool,
}

impl PostgresActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PostgresActivityRepository {}

#[async_trait]
impl HealthCheckable for PostgresActivityRepository {
    async fn health_check(&self) -> HealthCheckResult {
        check_health(&self.pool, "postgres-activity-repository").await
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn insert(&self, activity: &Activity) -> Result<(), PortError> {
        sqlx::query(
            r#"
            INSERT INTO activities (
                id, action, description, resource_id, resource_kind, metadata, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(Uuid::from(activity.id))
        .bind(&activity.action)
        .bind(&activity.description)
        .bind(&activity.resource.id)
        .bind(&activity.resource.kind)
        .bind(Json(&activity.metadata))
        .bind(activity.created_at)
        .execute(&self.pool)
        .await
        .map_err(port_error)?;

        Ok(())
    }

    async fn find(&self, filters: &ActivityFilters) -> Result<Vec<Activity>, PortError> {
        let mut builder: QueryBuilder<'static, Postgres> = QueryBuilder::new(
            "SELECT id, action, description, resource_id, resource_kind, metadata, created_at \
             FROM activities",
        );
        push_activity_conditions(&mut builder, filters);
        builder.push(" ORDER BY created_at DESC, id DESC");
        push_pagination(&mut builder, filters.pagination);

        let rows = builder
            .build_query_as::<ActivityRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(port_error)?;

        Ok(rows.into_iter().map(Activity::from).collect())
    }

    async fn count(&self, filters: &ActivityFilters) -> Result<u64, PortError> {
        let mut builder: QueryBuilder<'static, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM activities");
        push_activity_conditions(&mut builder, filters);

        let total: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(port_error)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }
}
