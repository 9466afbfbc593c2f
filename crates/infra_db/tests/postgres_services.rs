//! Profile use cases running against PostgreSQL
//!
//! Ignored by default, like the repository tests.

use std::sync::Arc;

use core_kernel::PaginationFilters;
use domain_profile::{
    ActivityQuery, ActivityService, CustomerService, OwnerService, ProfileQuery,
};
use infra_db::{PostgresActivityRepository, PostgresCustomerRepository, PostgresOwnerRepository};
use test_utils::{
    assert_active, assert_addresses, assert_deleted, assert_error_code, assert_newest_first,
    assert_no_duplicate_addresses, assert_page, create_isolated_test_database, AddressFixtures,
    PersonFixtures, TestDatabase,
};

fn services(db: &TestDatabase) -> (CustomerService, OwnerService, ActivityService) {
    let activities = Arc::new(PostgresActivityRepository::new(db.pool().clone()));
    (
        CustomerService::new(
            Arc::new(PostgresCustomerRepository::new(db.pool().clone())),
            activities.clone(),
        ),
        OwnerService::new(
            Arc::new(PostgresOwnerRepository::new(db.pool().clone())),
            activities.clone(),
        ),
        ActivityService::new(activities),
    )
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_customer_lifecycle() {
    let db = create_isolated_test_database().await.unwrap();
    let (customers, _, _) = services(&db);

    let customer = customers.create(PersonFixtures::richard_garcia()).await.unwrap();
    assert_active(&customer);

    assert_error_code(
        &customers.create(PersonFixtures::richard_garcia()).await,
        "#COMANDA-ERROR-76A71",
    );

    customers
        .assign_address(customer.id, AddressFixtures::home())
        .await
        .unwrap();
    assert_error_code(
        &customers.assign_address(customer.id, AddressFixtures::home()).await,
        "#COMANDA-ERROR-4901F",
    );
    customers
        .edit_address(customer.id, AddressFixtures::home(), AddressFixtures::work())
        .await
        .unwrap();

    let stored = customers.fetch_by_id(customer.id).await.unwrap();
    assert_addresses(&stored, &[AddressFixtures::work()]);
    assert_no_duplicate_addresses(&stored);

    customers.delete(customer.id).await.unwrap();
    assert_deleted(&customers.fetch_by_id(customer.id).await.unwrap());
    assert_error_code(
        &customers.fetch_addresses(customer.id).await,
        "#COMANDA-ERROR-AF04C",
    );

    // The email can be reused after the deletion
    customers.create(PersonFixtures::richard_garcia()).await.unwrap();
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_listings_and_activity_trail() {
    let db = create_isolated_test_database().await.unwrap();
    let (customers, owners, activities) = services(&db);

    customers.create(PersonFixtures::richard_garcia()).await.unwrap();
    customers.create(PersonFixtures::ana_souza()).await.unwrap();
    owners.create(PersonFixtures::without_phone()).await.unwrap();

    let page = customers
        .fetch(ProfileQuery {
            pagination: Some(PaginationFilters::new(2, 1)),
            ..ProfileQuery::default()
        })
        .await
        .unwrap();
    assert_page(&page, 2, 2, 1);

    let trail = activities.fetch(ActivityQuery::default()).await.unwrap();
    assert_page(&trail, 3, 1, 3);
    assert_newest_first(&trail.items);

    let owner_trail = activities
        .fetch(ActivityQuery {
            resource_kind: Some("owner".to_string()),
            ..ActivityQuery::default()
        })
        .await
        .unwrap();
    assert_page(&owner_trail, 1, 1, 1);
}
