use campusfind_auth::domain::types::ProfileUpdate;
use campusfind_auth::error::AuthServiceError;
use campusfind_auth::usecase::password::{hash_password, verify_password};
use campusfind_auth::usecase::profile::{
    GetUserUseCase, UpdateAccountInput, UpdateAccountUseCase, UpdateProfileUseCase,
};

use crate::helpers::{MockUserRepo, TEST_EMAIL_DOMAIN, test_user};

#[tokio::test]
async fn should_fetch_own_profile() {
    let user = test_user("asha@gla.ac.in");
    let uc = GetUserUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
    };

    let fetched = uc.execute(user.id).await.unwrap();
    assert_eq!(fetched.email, user.email);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_user() {
    let uc = GetUserUseCase {
        repo: MockUserRepo::empty(),
    };

    let result = uc.execute(uuid::Uuid::now_v7()).await;
    assert!(
        matches!(result, Err(AuthServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_apply_partial_profile_update() {
    let user = test_user("asha@gla.ac.in");
    let uc = UpdateProfileUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
    };

    let updated = uc
        .execute(
            user.id,
            ProfileUpdate {
                phone: Some("9876543210".to_owned()),
                course: Some("B.Tech CSE".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.phone.as_deref(), Some("9876543210"));
    assert_eq!(updated.course.as_deref(), Some("B.Tech CSE"));
    // Untouched fields stay as they were.
    assert_eq!(updated.name, user.name);
    assert_eq!(updated.year, None);
}

#[tokio::test]
async fn should_reject_empty_profile_update() {
    let user = test_user("asha@gla.ac.in");
    let uc = UpdateProfileUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
    };

    let result = uc.execute(user.id, ProfileUpdate::default()).await;
    assert!(
        matches!(result, Err(AuthServiceError::MissingData)),
        "expected MissingData, got {result:?}"
    );
}

#[tokio::test]
async fn should_change_password_when_current_password_matches() {
    let mut user = test_user("asha@gla.ac.in");
    user.password_hash = hash_password("old-password".to_owned()).await.unwrap();
    let repo = MockUserRepo::new(vec![user.clone()]);
    let users_handle = repo.users_handle();

    let uc = UpdateAccountUseCase {
        repo,
        email_domain: TEST_EMAIL_DOMAIN.to_owned(),
    };

    uc.execute(
        user.id,
        UpdateAccountInput {
            new_email: None,
            current_password: Some("old-password".to_owned()),
            new_password: Some("new-password".to_owned()),
        },
    )
    .await
    .unwrap();

    let hash = users_handle.lock().unwrap()[0].password_hash.clone();
    assert!(verify_password("new-password".to_owned(), hash).await.unwrap());
}

#[tokio::test]
async fn should_refuse_password_change_with_wrong_current_password() {
    let mut user = test_user("asha@gla.ac.in");
    user.password_hash = hash_password("old-password".to_owned()).await.unwrap();

    let uc = UpdateAccountUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
        email_domain: TEST_EMAIL_DOMAIN.to_owned(),
    };

    let result = uc
        .execute(
            user.id,
            UpdateAccountInput {
                new_email: None,
                current_password: Some("not-it".to_owned()),
                new_password: Some("new-password".to_owned()),
            },
        )
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::WrongPassword)),
        "expected WrongPassword, got {result:?}"
    );
}

#[tokio::test]
async fn should_unverify_account_on_email_change() {
    let mut user = test_user("asha@gla.ac.in");
    user.verified = true;
    let repo = MockUserRepo::new(vec![user.clone()]);
    let users_handle = repo.users_handle();

    let uc = UpdateAccountUseCase {
        repo,
        email_domain: TEST_EMAIL_DOMAIN.to_owned(),
    };

    let updated = uc
        .execute(
            user.id,
            UpdateAccountInput {
                new_email: Some("asha.verma@gla.ac.in".to_owned()),
                current_password: None,
                new_password: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.email, "asha.verma@gla.ac.in");
    assert!(
        !users_handle.lock().unwrap()[0].verified,
        "changed email must be re-verified"
    );
}

#[tokio::test]
async fn should_refuse_email_change_to_taken_address() {
    let user = test_user("asha@gla.ac.in");
    let other = test_user("taken@gla.ac.in");

    let uc = UpdateAccountUseCase {
        repo: MockUserRepo::new(vec![user.clone(), other]),
        email_domain: TEST_EMAIL_DOMAIN.to_owned(),
    };

    let result = uc
        .execute(
            user.id,
            UpdateAccountInput {
                new_email: Some("taken@gla.ac.in".to_owned()),
                current_password: None,
                new_password: None,
            },
        )
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::UserAlreadyExists)),
        "expected UserAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_account_update_with_nothing_to_change() {
    let user = test_user("asha@gla.ac.in");
    let uc = UpdateAccountUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
        email_domain: TEST_EMAIL_DOMAIN.to_owned(),
    };

    let result = uc
        .execute(
            user.id,
            UpdateAccountInput {
                new_email: None,
                current_password: None,
                new_password: None,
            },
        )
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::MissingData)),
        "expected MissingData, got {result:?}"
    );
}
