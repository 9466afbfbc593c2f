//! Integration tests for the PostgreSQL repositories
//!
//! These tests start a PostgreSQL container and are ignored by default.
//! Run them with `cargo test -p infra_db -- --ignored` on a machine with Docker.

use chrono::{Duration, Utc};

use core_kernel::{PaginationFilters, PortError, SortFilters};
use domain_profile::{
    Activity, ActivityFilters, ActivityRepository, CustomerFilters, OwnerFilters, Profile,
    ProfileRepository, ProfileSortField, ProfileStatus,
};
use infra_db::{PostgresActivityRepository, PostgresCustomerRepository, PostgresOwnerRepository};
use test_utils::{create_isolated_test_database, AddressFixtures, TestProfileBuilder};

#[tokio::test]
#[ignore = "requires docker"]
async fn test_customer_round_trip_keeps_addresses() {
    let db = create_isolated_test_database().await.unwrap();
    let repository = PostgresCustomerRepository::new(db.pool().clone());

    let customer = TestProfileBuilder::new()
        .with_address(AddressFixtures::home())
        .with_address(AddressFixtures::work())
        .customer();
    repository.insert(&customer).await.unwrap();

    let stored = repository
        .find_one(CustomerFilters::builder().id(customer.id).build())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stored.id, customer.id);
    assert_eq!(stored.addresses, vec![AddressFixtures::home(), AddressFixtures::work()]);
    assert_eq!(stored.status, ProfileStatus::Active);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_active_email_is_unique() {
    let db = create_isolated_test_database().await.unwrap();
    let repository = PostgresCustomerRepository::new(db.pool().clone());

    let first = TestProfileBuilder::new().with_email("dup@example.com").customer();
    let second = TestProfileBuilder::new().with_email("dup@example.com").customer();

    repository.insert(&first).await.unwrap();
    let result = repository.insert(&second).await;
    assert!(matches!(result, Err(PortError::Conflict { .. })));

    // Once the first one is deleted the email is free again
    let mut deleted = first.clone();
    deleted.mark_deleted();
    repository.delete(&deleted).await.unwrap();
    repository.insert(&second).await.unwrap();
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_update_unknown_customer_is_not_found() {
    let db = create_isolated_test_database().await.unwrap();
    let repository = PostgresCustomerRepository::new(db.pool().clone());

    let result = repository.update(&TestProfileBuilder::new().customer()).await;
    assert!(matches!(result, Err(PortError::NotFound { .. })));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_owner_filters_sorting_and_pagination() {
    let db = create_isolated_test_database().await.unwrap();
    let repository = PostgresOwnerRepository::new(db.pool().clone());

    let now = Utc::now();
    for (offset, last_name) in ["Costa", "Almeida", "Barros"].iter().enumerate() {
        let owner = TestProfileBuilder::new()
            .with_last_name(*last_name)
            .created_at(now - Duration::minutes(offset as i64))
            .owner();
        repository.insert(&owner).await.unwrap();
    }

    let filters = OwnerFilters::builder()
        .is_deleted(false)
        .sort(SortFilters::ascending(ProfileSortField::LastName))
        .pagination(PaginationFilters::new(1, 2))
        .build();

    let page = repository.find(&filters).await.unwrap();
    let names: Vec<&str> = page.iter().map(|o| o.last_name.as_str()).collect();
    assert_eq!(names, vec!["Almeida", "Barros"]);
    assert_eq!(repository.count(&filters).await.unwrap(), 3);

    let by_name = OwnerFilters::builder().name("cos".to_string()).build();
    assert_eq!(repository.count(&by_name).await.unwrap(), 1);

    let today = OwnerFilters::builder()
        .created_after(now.date_naive() - Duration::days(1))
        .created_before(now.date_naive())
        .build();
    assert_eq!(repository.count(&today).await.unwrap(), 3);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_activities_are_listed_newest_first() {
    let db = create_isolated_test_database().await.unwrap();
    let repository = PostgresActivityRepository::new(db.pool().clone());

    let customer = TestProfileBuilder::new().customer();
    let mut older = Activity::profile_created(&customer);
    older.created_at = Utc::now() - Duration::hours(1);
    let newer = Activity::profile_created(&TestProfileBuilder::new().customer());

    repository.insert(&older).await.unwrap();
    repository.insert(&newer).await.unwrap();

    let all = repository.find(&ActivityFilters::default()).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, newer.id);
    assert_eq!(all[1].metadata, older.metadata);

    let filters = ActivityFilters::builder()
        .resource_id(Into::<uuid::Uuid>::into(customer.id).to_string())
        .build();
    assert_eq!(repository.count(&filters).await.unwrap(), 1);

    db.clear_data().await.unwrap();
    assert_eq!(repository.count(&ActivityFilters::default()).await.unwrap(), 0);
}
