//! HTTP API Layer
//!
//! This crate provides the REST API of the profiles service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for customers, owners and activities
//! - **Middleware**: Authentication and audit logging
//! - **Extractors**: JSON bodies and query strings validated on the way in
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Catalog codes mapped to HTTP statuses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::postgres(pool, config);
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod pagination;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use core_kernel::HealthCheckable;
use domain_profile::{ActivityService, CustomerService, OwnerService};
use infra_db::{
    DatabasePool, PostgresActivityRepository, PostgresCustomerRepository,
    PostgresOwnerRepository,
};

use crate::config::ApiConfig;
use crate::handlers::{activities, customers, health, owners};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<CustomerService>,
    pub owners: Arc<OwnerService>,
    pub activities: Arc<ActivityService>,
    /// Probed by the readiness endpoint
    pub health: Arc<dyn HealthCheckable>,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(
        customers: CustomerService,
        owners: OwnerService,
        activities: ActivityService,
        health: Arc<dyn HealthCheckable>,
        config: ApiConfig,
    ) -> Self {
        Self {
            customers: Arc::new(customers),
            owners: Arc::new(owners),
            activities: Arc::new(activities),
            health,
            config,
        }
    }

    /// Wires the services to the PostgreSQL repositories
    pub fn postgres(pool: DatabasePool, config: ApiConfig) -> Self {
        let activity_repository = Arc::new(PostgresActivityRepository::new(pool.clone()));

        let customers = CustomerService::new(
            Arc::new(PostgresCustomerRepository::new(pool.clone())),
            activity_repository.clone(),
        );
        let owners = OwnerService::new(
            Arc::new(PostgresOwnerRepository::new(pool)),
            activity_repository.clone(),
        );
        let activities = ActivityService::new(activity_repository.clone());

        Self::new(customers, owners, activities, activity_repository, config)
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Services and configuration shared by the handlers
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let customer_routes = Router::new()
        .route(
            "/",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/:id",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
        .route(
            "/:id/addresses",
            get(customers::list_addresses)
                .post(customers::assign_address)
                .put(customers::edit_address)
                .delete(customers::delete_address),
        );

    let owner_routes = Router::new()
        .route("/", get(owners::list_owners).post(owners::create_owner))
        .route(
            "/:id",
            get(owners::get_owner)
                .put(owners::update_owner)
                .delete(owners::delete_owner),
        );

    let activity_routes = Router::new().route("/", get(activities::list_activities));

    // Protected API routes; auth runs first, then audit sees the caller
    let api_routes = Router::new()
        .nest("/customers", customer_routes)
        .nest("/owners", owner_routes)
        .nest("/activities", activity_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any)
                    .expose_headers(Any),
            ),
        )
        .with_state(state)
}
