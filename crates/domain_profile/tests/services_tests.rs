//! Tests for the profile services running over the in-memory repositories

use std::sync::Arc;

use core_kernel::{PaginationFilters, SortFilters};

use domain_profile::{
    ActivityQuery, ActivityService, Address, Contact, Customer, CustomerService,
    InMemoryActivityRepository, InMemoryProfileRepository, NewProfile, Owner, OwnerService,
    Profile, ProfileChanges, ProfileError, ProfileQuery, ProfileSortField, User,
};

struct Fixture {
    customers: Arc<InMemoryProfileRepository<Customer>>,
    activities: Arc<InMemoryActivityRepository>,
    service: CustomerService,
}

fn fixture() -> Fixture {
    let customers = Arc::new(InMemoryProfileRepository::<Customer>::new());
    let activities = Arc::new(InMemoryActivityRepository::new());
    let service = CustomerService::new(customers.clone(), activities.clone());
    Fixture { customers, activities, service }
}

fn new_profile(first_name: &str, email: &str) -> NewProfile {
    NewProfile {
        first_name: first_name.to_string(),
        last_name: "Garcia".to_string(),
        user: User::new(format!("auth0|{}", first_name.to_lowercase()), first_name.to_lowercase()),
        contact: Contact::new(email, "11999999999"),
    }
}

fn home() -> Address {
    Address::new("Avenida Paulista", "1578", "Bela Vista", "São Paulo", "SP", "01310-200")
}

fn office() -> Address {
    Address::new("Rua Funchal", "418", "Vila Olímpia", "São Paulo", "SP", "04551-060")
}

// ============================================================================
// Creation
// ============================================================================

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_echoes_fields_and_records_activity() {
        let f = fixture();

        let customer = f
            .service
            .create(new_profile("Richard", "richard.garcia@example.com"))
            .await
            .unwrap();

        assert_eq!(customer.first_name, "Richard");
        assert_eq!(customer.contact.email, "richard.garcia@example.com");
        assert!(customer.is_active());
        assert_eq!(f.customers.all().await, vec![customer.clone()]);

        let activities = f.activities.all().await;
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].action, "comanda.actions.customer.creation");
        assert_eq!(activities[0].resource.id, customer.id.as_uuid().to_string());
    }

    #[tokio::test]
    async fn test_second_creation_with_same_email_fails() {
        let f = fixture();
        f.service
            .create(new_profile("Richard", "richard.garcia@example.com"))
            .await
            .unwrap();

        let result = f
            .service
            .create(new_profile("Ricardo", "richard.garcia@example.com"))
            .await;

        assert!(matches!(result, Err(ProfileError::ProfileAlreadyExists)));
        assert_eq!(f.customers.all().await.len(), 1);
        assert_eq!(f.activities.all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_email_of_deleted_customer_can_be_reused() {
        let f = fixture();
        let first = f
            .service
            .create(new_profile("Richard", "richard.garcia@example.com"))
            .await
            .unwrap();
        f.service.delete(first.id).await.unwrap();

        let second = f
            .service
            .create(new_profile("Richard", "richard.garcia@example.com"))
            .await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn test_concurrent_creations_yield_one_winner() {
        let f = fixture();
        let service = f.service.clone();
        let other = f.service.clone();

        let (a, b) = tokio::join!(
            service.create(new_profile("Richard", "same@example.com")),
            other.create(new_profile("Ricardo", "same@example.com")),
        );

        assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
        assert_eq!(f.customers.all().await.len(), 1);
    }
}

// ============================================================================
// Edit / Delete
// ============================================================================

mod edit_delete_tests {
    use super::*;

    fn changes(email: &str) -> ProfileChanges {
        ProfileChanges {
            first_name: "Ricardo".to_string(),
            last_name: "Garcia".to_string(),
            contact: Contact::new(email, "11988887777"),
        }
    }

    #[tokio::test]
    async fn test_edit_overwrites_names_and_contact() {
        let f = fixture();
        let customer = f
            .service
            .create(new_profile("Richard", "richard.garcia@example.com"))
            .await
            .unwrap();

        let edited = f
            .service
            .edit(customer.id, changes("ricardo@example.com"))
            .await
            .unwrap();

        assert_eq!(edited.first_name, "Ricardo");
        assert_eq!(edited.contact.phone_number, "11988887777");
        assert_eq!(edited.user, customer.user);
        assert_eq!(f.service.fetch_by_id(customer.id).await.unwrap(), edited);
    }

    #[tokio::test]
    async fn test_edit_unknown_customer() {
        let f = fixture();
        let result = f
            .service
            .edit(core_kernel::CustomerId::new(), changes("x@example.com"))
            .await;

        assert!(matches!(result, Err(ProfileError::CustomerDoesNotExist)));
        assert!(f.customers.all().await.is_empty());
    }

    #[tokio::test]
    async fn test_edit_to_email_of_other_customer_fails() {
        let f = fixture();
        f.service.create(new_profile("Ana", "ana@example.com")).await.unwrap();
        let richard = f
            .service
            .create(new_profile("Richard", "richard@example.com"))
            .await
            .unwrap();

        let result = f.service.edit(richard.id, changes("ana@example.com")).await;
        assert!(matches!(result, Err(ProfileError::ProfileAlreadyExists)));
    }

    #[tokio::test]
    async fn test_delete_is_soft_and_not_repeatable() {
        let f = fixture();
        let customer = f
            .service
            .create(new_profile("Richard", "richard@example.com"))
            .await
            .unwrap();

        f.service.delete(customer.id).await.unwrap();

        let stored = f.service.fetch_by_id(customer.id).await.unwrap();
        assert!(stored.status.is_deleted());

        let again = f.service.delete(customer.id).await;
        assert!(matches!(again, Err(ProfileError::CustomerDoesNotExist)));

        let edit = f.service.edit(customer.id, changes("r@example.com")).await;
        assert!(matches!(edit, Err(ProfileError::CustomerDoesNotExist)));
    }
}

// ============================================================================
// Fetch
// ============================================================================

mod fetch_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_empty_store_returns_empty_page() {
        let f = fixture();
        let page = f.service.fetch(ProfileQuery::default()).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.page_size, 20);
        assert_eq!(page.page_number, 1);
    }

    #[tokio::test]
    async fn test_fetch_paginates_and_counts_all_matches() {
        let f = fixture();
        for n in 0..5 {
            f.service
                .create(new_profile("Richard", &format!("r{}@example.com", n)))
                .await
                .unwrap();
        }

        let page = f
            .service
            .fetch(ProfileQuery {
                pagination: Some(PaginationFilters::new(2, 2)),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 5);
        assert_eq!(page.page_number, 2);
        assert_eq!(page.total_pages(), 3);
    }

    #[tokio::test]
    async fn test_fetch_by_deleted_flag() {
        let f = fixture();
        let kept = f.service.create(new_profile("Ana", "ana@example.com")).await.unwrap();
        let gone = f
            .service
            .create(new_profile("Richard", "richard@example.com"))
            .await
            .unwrap();
        f.service.delete(gone.id).await.unwrap();

        let active = f
            .service
            .fetch(ProfileQuery { is_deleted: Some(false), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(active.items.iter().map(|c| c.id).collect::<Vec<_>>(), vec![kept.id]);

        let deleted = f
            .service
            .fetch(ProfileQuery { is_deleted: Some(true), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(deleted.items.iter().map(|c| c.id).collect::<Vec<_>>(), vec![gone.id]);
    }

    #[tokio::test]
    async fn test_fetch_sorted_by_first_name_descending() {
        let f = fixture();
        f.service.create(new_profile("Ana", "ana@example.com")).await.unwrap();
        f.service.create(new_profile("Carla", "carla@example.com")).await.unwrap();
        f.service.create(new_profile("Bruno", "bruno@example.com")).await.unwrap();

        let page = f
            .service
            .fetch(ProfileQuery {
                sort: Some(SortFilters::descending(ProfileSortField::FirstName)),
                ..Default::default()
            })
            .await
            .unwrap();

        let names: Vec<_> = page.items.iter().map(|c| c.first_name.as_str()).collect();
        assert_eq!(names, vec!["Carla", "Bruno", "Ana"]);
    }

    #[tokio::test]
    async fn test_fetch_by_id_unknown() {
        let f = fixture();
        let result = f.service.fetch_by_id(core_kernel::CustomerId::new()).await;
        assert!(matches!(result, Err(ProfileError::CustomerDoesNotExist)));
    }
}

// ============================================================================
// Addresses
// ============================================================================

mod address_tests {
    use super::*;

    async fn customer_with_home(f: &Fixture) -> Customer {
        let customer = f
            .service
            .create(new_profile("Richard", "richard@example.com"))
            .await
            .unwrap();
        f.service.assign_address(customer.id, home()).await.unwrap();
        customer
    }

    #[tokio::test]
    async fn test_assign_and_fetch_addresses() {
        let f = fixture();
        let customer = customer_with_home(&f).await;

        let assigned = f.service.assign_address(customer.id, office()).await.unwrap();
        assert_eq!(assigned, office());

        let addresses = f.service.fetch_addresses(customer.id).await.unwrap();
        assert_eq!(addresses, vec![home(), office()]);
    }

    #[tokio::test]
    async fn test_assign_duplicate_address() {
        let f = fixture();
        let customer = customer_with_home(&f).await;

        let result = f.service.assign_address(customer.id, home()).await;
        assert!(matches!(result, Err(ProfileError::AddressAlreadyAssigned)));
        assert_eq!(f.service.fetch_addresses(customer.id).await.unwrap(), vec![home()]);
    }

    #[tokio::test]
    async fn test_address_operations_on_unknown_customer() {
        let f = fixture();
        let id = core_kernel::CustomerId::new();

        assert!(matches!(
            f.service.fetch_addresses(id).await,
            Err(ProfileError::CustomerDoesNotExist)
        ));
        assert!(matches!(
            f.service.assign_address(id, home()).await,
            Err(ProfileError::CustomerDoesNotExist)
        ));
        assert!(matches!(
            f.service.delete_address(id, home()).await,
            Err(ProfileError::CustomerDoesNotExist)
        ));
    }

    #[tokio::test]
    async fn test_edit_address() {
        let f = fixture();
        let customer = customer_with_home(&f).await;
        let moved = home().with_complement("Apto 71");

        let replacement = f
            .service
            .edit_address(customer.id, home(), moved.clone())
            .await
            .unwrap();

        assert_eq!(replacement, moved);
        assert_eq!(f.service.fetch_addresses(customer.id).await.unwrap(), vec![moved]);
    }

    #[tokio::test]
    async fn test_edit_missing_target() {
        let f = fixture();
        let customer = customer_with_home(&f).await;

        let result = f.service.edit_address(customer.id, office(), office()).await;
        assert!(matches!(result, Err(ProfileError::AddressDoesNotExist)));
    }

    #[tokio::test]
    async fn test_edit_with_identical_replacement() {
        let f = fixture();
        let customer = customer_with_home(&f).await;

        let result = f.service.edit_address(customer.id, home(), home()).await;
        assert!(matches!(result, Err(ProfileError::AddressAlreadyAssigned)));
        assert_eq!(f.service.fetch_addresses(customer.id).await.unwrap(), vec![home()]);
    }

    #[tokio::test]
    async fn test_delete_address() {
        let f = fixture();
        let customer = customer_with_home(&f).await;

        f.service.delete_address(customer.id, home()).await.unwrap();
        assert!(f.service.fetch_addresses(customer.id).await.unwrap().is_empty());

        let again = f.service.delete_address(customer.id, home()).await;
        assert!(matches!(again, Err(ProfileError::AddressDoesNotExist)));
    }
}

// ============================================================================
// Owners and Activities
// ============================================================================

mod owner_tests {
    use super::*;

    #[tokio::test]
    async fn test_owner_pipeline() {
        let owners = Arc::new(InMemoryProfileRepository::<Owner>::new());
        let activities = Arc::new(InMemoryActivityRepository::new());
        let service = OwnerService::new(owners, activities.clone());

        let owner = service.create(new_profile("Ana", "ana@example.com")).await.unwrap();
        assert!(matches!(
            service.create(new_profile("Ana", "ana@example.com")).await,
            Err(ProfileError::ProfileAlreadyExists)
        ));

        service.delete(owner.id).await.unwrap();
        assert!(matches!(
            service.delete(owner.id).await,
            Err(ProfileError::OwnerDoesNotExist)
        ));

        let activity_service = ActivityService::new(activities);
        let page = activity_service
            .fetch(ActivityQuery {
                resource_kind: Some("owner".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].action, "comanda.actions.owner.creation");
    }
}
