use campusfind_auth::error::AuthServiceError;
use campusfind_auth::usecase::register::{RegisterInput, RegisterUseCase};

use crate::helpers::{MockOtpRepo, MockUserRepo, TEST_EMAIL_DOMAIN, test_user};

fn register_input(email: &str) -> RegisterInput {
    RegisterInput {
        name: "Asha Verma".to_owned(),
        email: email.to_owned(),
        password: "correct horse battery".to_owned(),
    }
}

#[tokio::test]
async fn should_create_unverified_student_with_hashed_password() {
    let users = MockUserRepo::empty();
    let users_handle = users.users_handle();
    let otps = MockOtpRepo::empty();
    let events_handle = otps.events_handle();

    let uc = RegisterUseCase {
        users,
        otps,
        email_domain: TEST_EMAIL_DOMAIN.to_owned(),
    };

    uc.execute(register_input("new@gla.ac.in")).await.unwrap();

    let users = users_handle.lock().unwrap();
    assert_eq!(users.len(), 1);
    let created = &users[0];
    assert_eq!(created.email, "new@gla.ac.in");
    assert_eq!(created.role, 0, "new accounts start as students");
    assert!(!created.verified, "new accounts start unverified");
    assert_ne!(
        created.password_hash, "correct horse battery",
        "password must never be stored in the clear"
    );
    assert!(created.password_hash.starts_with("$2"), "expected bcrypt hash");

    // Registration also queues the first verification email.
    assert_eq!(events_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_duplicate_registration() {
    let uc = RegisterUseCase {
        users: MockUserRepo::new(vec![test_user("taken@gla.ac.in")]),
        otps: MockOtpRepo::empty(),
        email_domain: TEST_EMAIL_DOMAIN.to_owned(),
    };

    let result = uc.execute(register_input("taken@gla.ac.in")).await;

    assert!(
        matches!(result, Err(AuthServiceError::UserAlreadyExists)),
        "expected UserAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_registration_outside_email_domain() {
    let uc = RegisterUseCase {
        users: MockUserRepo::empty(),
        otps: MockOtpRepo::empty(),
        email_domain: TEST_EMAIL_DOMAIN.to_owned(),
    };

    let result = uc.execute(register_input("new@gmail.com")).await;

    assert!(
        matches!(result, Err(AuthServiceError::NonInstitutionalEmail)),
        "expected NonInstitutionalEmail, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_blank_name_or_password() {
    let uc = RegisterUseCase {
        users: MockUserRepo::empty(),
        otps: MockOtpRepo::empty(),
        email_domain: TEST_EMAIL_DOMAIN.to_owned(),
    };

    let result = uc
        .execute(RegisterInput {
            name: "   ".to_owned(),
            email: "new@gla.ac.in".to_owned(),
            password: "pw".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(AuthServiceError::MissingData)));

    let result = uc
        .execute(RegisterInput {
            name: "Asha".to_owned(),
            email: "new@gla.ac.in".to_owned(),
            password: String::new(),
        })
        .await;
    assert!(matches!(result, Err(AuthServiceError::MissingData)));
}
