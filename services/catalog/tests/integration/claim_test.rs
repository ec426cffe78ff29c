use campusfind_catalog::domain::repository::FoundItemRepository;
use campusfind_catalog::domain::types::{ClaimantDetails, ItemFilter};
use campusfind_catalog::error::CatalogServiceError;
use campusfind_catalog::usecase::claim::SubmitClaimUseCase;
use campusfind_domain::pagination::PageRequest;
use uuid::Uuid;

use crate::helpers::{MockFoundRepo, test_found_item, valid_claimant};

#[tokio::test]
async fn should_move_item_from_active_pool_to_claimed() {
    let item = test_found_item();
    let repo = MockFoundRepo::new(vec![item.clone()]);
    let items_handle = repo.items_handle();
    let claimed_handle = repo.claimed_handle();

    let uc = SubmitClaimUseCase { items: repo };
    let claimed = uc.execute(item.id, valid_claimant()).await.unwrap();

    // The claimed record is the union of both field sets.
    assert_eq!(claimed.found_item_id, item.id);
    assert_eq!(claimed.item_name, item.item_name);
    assert_eq!(claimed.images, item.images);
    assert_eq!(claimed.claimant_name, "Asha Verma");
    assert_eq!(claimed.claim_details, "Has my student card inside the flap");

    // Exactly one claimed record, and the active pool no longer lists it.
    assert_eq!(claimed_handle.lock().unwrap().len(), 1);
    assert!(items_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_claim_when_any_required_field_is_blank() {
    let item = test_found_item();

    let blank = |mutate: fn(&mut ClaimantDetails)| {
        let mut claimant = valid_claimant();
        mutate(&mut claimant);
        claimant
    };
    let cases: Vec<(ClaimantDetails, &str)> = vec![
        (blank(|c| c.details = String::new()), "details"),
        (blank(|c| c.name = "  ".to_owned()), "name"),
        (blank(|c| c.email = String::new()), "email"),
        (blank(|c| c.sap_id = String::new()), "sapId"),
        (blank(|c| c.contact_number = String::new()), "contactNumber"),
    ];

    for (claimant, field) in cases {
        let repo = MockFoundRepo::new(vec![item.clone()]);
        let items_handle = repo.items_handle();
        let claimed_handle = repo.claimed_handle();

        let uc = SubmitClaimUseCase { items: repo };
        let result = uc.execute(item.id, claimant).await;

        assert!(
            matches!(result, Err(CatalogServiceError::MissingClaimField(f)) if f == field),
            "expected MissingClaimField({field}), got {result:?}"
        );
        // Validation failures leave the pools untouched.
        assert_eq!(items_handle.lock().unwrap().len(), 1);
        assert!(claimed_handle.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn should_return_not_found_for_unknown_item() {
    let repo = MockFoundRepo::empty();
    let claimed_handle = repo.claimed_handle();

    let uc = SubmitClaimUseCase { items: repo };
    let result = uc.execute(Uuid::now_v7(), valid_claimant()).await;

    assert!(
        matches!(result, Err(CatalogServiceError::ItemNotFound)),
        "expected ItemNotFound, got {result:?}"
    );
    assert!(claimed_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_let_exactly_one_of_two_concurrent_claims_win() {
    let item = test_found_item();
    let repo = MockFoundRepo::new(vec![item.clone()]);
    let claimed_handle = repo.claimed_handle();

    let uc_a = SubmitClaimUseCase {
        items: repo.clone(),
    };
    let uc_b = SubmitClaimUseCase { items: repo };

    let (a, b) = tokio::join!(
        uc_a.execute(item.id, valid_claimant()),
        uc_b.execute(item.id, valid_claimant()),
    );

    let winners = [&a, &b].iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1, "exactly one concurrent claim may succeed");
    assert_eq!(claimed_handle.lock().unwrap().len(), 1);

    let loser = if a.is_ok() { b } else { a };
    assert!(
        matches!(loser, Err(CatalogServiceError::ItemNotFound)),
        "the losing claim reads as a missing item"
    );
}

#[tokio::test]
async fn should_not_list_claimed_item_in_active_pool() {
    let item = test_found_item();
    let repo = MockFoundRepo::new(vec![item.clone()]);

    let uc = SubmitClaimUseCase {
        items: repo.clone(),
    };
    uc.execute(item.id, valid_claimant()).await.unwrap();

    let listed = repo
        .list(&ItemFilter::default(), PageRequest::default())
        .await
        .unwrap();
    assert!(listed.iter().all(|i| i.id != item.id));
}
