//! Shared SQL fragments for profile and activity listings

use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use core_kernel::PaginationFilters;
use domain_profile::filters::{start_of_day, start_of_next_day};
use domain_profile::{ActivityFilters, ProfileFilters};

/// Escapes `LIKE` wildcards so user input matches literally
fn like_pattern(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// Appends `WHERE ...` for every criterion that is set
///
/// The builder must already contain `SELECT ... FROM <table>`.
pub(crate) fn push_profile_conditions<Id>(
    builder: &mut QueryBuilder<'static, Postgres>,
    filters: &ProfileFilters<Id>,
) where
    Id: Copy + Into<Uuid>,
{
    builder.push(" WHERE TRUE");

    if let Some(id) = filters.id {
        builder.push(" AND id = ").push_bind(id.into());
    }
    if let Some(user_id) = &filters.user_id {
        builder.push(" AND user_id = ").push_bind(user_id.clone());
    }
    if let Some(email) = &filters.email {
        builder.push(" AND email = ").push_bind(email.clone());
    }
    if let Some(phone_number) = &filters.phone_number {
        builder.push(" AND phone_number = ").push_bind(phone_number.clone());
    }
    if let Some(name) = &filters.name {
        let pattern = like_pattern(name);
        builder
            .push(" AND (first_name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR last_name ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(status) = filters.status {
        builder.push(" AND status = ").push_bind(status.as_str());
    }
    if let Some(after) = filters.created_after {
        builder.push(" AND created_at >= ").push_bind(start_of_day(after));
    }
    if let Some(end) = filters.created_before.and_then(start_of_next_day) {
        builder.push(" AND created_at < ").push_bind(end);
    }
}

/// Appends `ORDER BY` for the requested (or default) sort
pub(crate) fn push_profile_ordering<Id>(
    builder: &mut QueryBuilder<'static, Postgres>,
    filters: &ProfileFilters<Id>,
) {
    let sort = filters.sort_or_default();
    builder
        .push(" ORDER BY ")
        .push(sort.field.column())
        .push(" ")
        .push(sort.direction.as_sql())
        .push(", id ASC");
}

/// Appends `WHERE ...` for activity listings
pub(crate) fn push_activity_conditions(
    builder: &mut QueryBuilder<'static, Postgres>,
    filters: &ActivityFilters,
) {
    builder.push(" WHERE TRUE");

    if let Some(id) = filters.id {
        builder.push(" AND id = ").push_bind(Uuid::from(id));
    }
    if let Some(action) = &filters.action {
        builder.push(" AND action = ").push_bind(action.clone());
    }
    if let Some(resource_id) = &filters.resource_id {
        builder.push(" AND resource_id = ").push_bind(resource_id.clone());
    }
    if let Some(resource_kind) = &filters.resource_kind {
        builder.push(" AND resource_kind = ").push_bind(resource_kind.clone());
    }
    if let Some(after) = filters.created_after {
        builder.push(" AND created_at >= ").push_bind(start_of_day(after));
    }
    if let Some(end) = filters.created_before.and_then(start_of_next_day) {
        builder.push(" AND created_at < ").push_bind(end);
    }
}

/// Appends `LIMIT ... OFFSET ...` when a page was requested
pub(crate) fn push_pagination(
    builder: &mut QueryBuilder<'static, Postgres>,
    pagination: Option<PaginationFilters>,
) {
    if let Some(pagination) = pagination {
        builder
            .push(" LIMIT ")
            .push_bind(i64::try_from(pagination.limit()).unwrap_or(i64::MAX))
            .push(" OFFSET ")
            .push_bind(i64::try_from(pagination.offset()).unwrap_or(i64::MAX));
    }
}
