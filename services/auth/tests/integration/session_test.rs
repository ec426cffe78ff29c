use campusfind_auth::error::AuthServiceError;
use campusfind_auth::usecase::password::hash_password;
use campusfind_auth::usecase::session::{LoginInput, LoginUseCase};
use campusfind_auth_types::token::validate_session_token;

use crate::helpers::{MockUserRepo, TEST_JWT_SECRET, test_user};

#[tokio::test]
async fn should_login_with_correct_password_and_issue_token() {
    let mut user = test_user("asha@gla.ac.in");
    user.password_hash = hash_password("hunter2".to_owned()).await.unwrap();

    let uc = LoginUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let output = uc
        .execute(LoginInput {
            email: "asha@gla.ac.in".to_owned(),
            password: "hunter2".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(output.user.id, user.id);

    let info = validate_session_token(&output.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
    assert_eq!(info.role, user.role);
}

#[tokio::test]
async fn should_login_even_before_email_verification() {
    let mut user = test_user("asha@gla.ac.in");
    user.verified = false;
    user.password_hash = hash_password("hunter2".to_owned()).await.unwrap();

    let uc = LoginUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    // Verification gates OTP resends, not login.
    let output = uc
        .execute(LoginInput {
            email: "asha@gla.ac.in".to_owned(),
            password: "hunter2".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(output.user.id, user.id);
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let mut user = test_user("asha@gla.ac.in");
    user.password_hash = hash_password("hunter2".to_owned()).await.unwrap();

    let uc = LoginUseCase {
        users: MockUserRepo::new(vec![user]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc
        .execute(LoginInput {
            email: "asha@gla.ac.in".to_owned(),
            password: "hunter3".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_unknown_email_with_same_error_as_wrong_password() {
    let uc = LoginUseCase {
        users: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc
        .execute(LoginInput {
            email: "nobody@gla.ac.in".to_owned(),
            password: "whatever".to_owned(),
        })
        .await;

    // Same variant as a wrong password so responses do not reveal which
    // emails are registered.
    assert!(
        matches!(result, Err(AuthServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_token_signed_with_other_secret() {
    let mut user = test_user("asha@gla.ac.in");
    user.password_hash = hash_password("hunter2".to_owned()).await.unwrap();

    let uc = LoginUseCase {
        users: MockUserRepo::new(vec![user]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let output = uc
        .execute(LoginInput {
            email: "asha@gla.ac.in".to_owned(),
            password: "hunter2".to_owned(),
        })
        .await
        .unwrap();

    assert!(validate_session_token(&output.token, "some-other-secret").is_err());
}
