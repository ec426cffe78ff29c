use campusfind_catalog::domain::types::ItemFilter;
use campusfind_catalog::error::CatalogServiceError;
use campusfind_catalog::usecase::catalog::{
    GetItemDetailsUseCase, ItemDetails, ListFoundItemsUseCase,
};
use campusfind_domain::pagination::PageRequest;
use uuid::Uuid;

use crate::helpers::{MockFoundRepo, MockLostRepo, test_found_item, test_lost_item};

#[tokio::test]
async fn should_return_identical_listings_on_repeated_reads() {
    let repo = MockFoundRepo::new(vec![test_found_item(), test_found_item()]);

    let uc = ListFoundItemsUseCase { items: repo };
    let first = uc
        .execute(ItemFilter::default(), PageRequest::default())
        .await
        .unwrap();
    let second = uc
        .execute(ItemFilter::default(), PageRequest::default())
        .await
        .unwrap();

    // Reads never mutate: same items, same image name lists, same order.
    assert_eq!(first, second);
    let images: Vec<_> = first.iter().map(|i| i.images.clone()).collect();
    let images_again: Vec<_> = second.iter().map(|i| i.images.clone()).collect();
    assert_eq!(images, images_again);
}

#[tokio::test]
async fn should_filter_listing_by_category() {
    let mut other = test_found_item();
    other.category = "Electronics".to_owned();
    let repo = MockFoundRepo::new(vec![test_found_item(), other]);

    let uc = ListFoundItemsUseCase { items: repo };
    let items = uc
        .execute(
            ItemFilter {
                category: Some("Electronics".to_owned()),
                subcategory: None,
            },
            PageRequest::default(),
        )
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category, "Electronics");
}

#[tokio::test]
async fn should_resolve_details_from_found_pool_first() {
    let found = test_found_item();
    let uc = GetItemDetailsUseCase {
        found: MockFoundRepo::new(vec![found.clone()]),
        lost: MockLostRepo::new(vec![test_lost_item()]),
    };

    let details = uc.execute(found.id).await.unwrap();
    assert!(matches!(details, ItemDetails::Found(item) if item.id == found.id));
}

#[tokio::test]
async fn should_resolve_details_from_lost_pool_when_not_found() {
    let lost = test_lost_item();
    let uc = GetItemDetailsUseCase {
        found: MockFoundRepo::empty(),
        lost: MockLostRepo::new(vec![lost.clone()]),
    };

    let details = uc.execute(lost.id).await.unwrap();
    assert!(matches!(details, ItemDetails::Lost(item) if item.id == lost.id));
}

#[tokio::test]
async fn should_return_not_found_when_id_in_neither_pool() {
    let uc = GetItemDetailsUseCase {
        found: MockFoundRepo::empty(),
        lost: MockLostRepo::empty(),
    };

    let result = uc.execute(Uuid::now_v7()).await;
    assert!(
        matches!(result, Err(CatalogServiceError::ItemNotFound)),
        "expected ItemNotFound, got {result:?}"
    );
}
