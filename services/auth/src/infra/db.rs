use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, TransactionTrait,
    sea_query::{Expr, OnConflict},
};
use uuid::Uuid;

use campusfind_auth_schema::{otps, outbox_events, users};

use crate::domain::repository::{OtpRepository, UserRepository};
use crate::domain::types::{MAX_OTP_ATTEMPTS, Otp, OutboxEvent, ProfileUpdate, User};
use crate::error::AuthServiceError;

// ── User repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            phone: Set(user.phone.clone()),
            course: Set(user.course.clone()),
            year: Set(user.year.clone()),
            section: Set(user.section.clone()),
            role: Set(i16::from(user.role)),
            verified: Set(user.verified),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<(), AuthServiceError> {
        let mut model = users::ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        if let Some(ref name) = update.name {
            model.name = Set(name.clone());
        }
        if let Some(ref phone) = update.phone {
            model.phone = Set(Some(phone.clone()));
        }
        if let Some(ref course) = update.course {
            model.course = Set(Some(course.clone()));
        }
        if let Some(ref year) = update.year {
            model.year = Set(Some(year.clone()));
        }
        if let Some(ref section) = update.section {
            model.section = Set(Some(section.clone()));
        }
        model.update(&self.db).await.context("update profile")?;
        Ok(())
    }

    async fn update_account(
        &self,
        id: Uuid,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<(), AuthServiceError> {
        let mut model = users::ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        if let Some(email) = email {
            // Changing the address voids the previous verification.
            model.email = Set(email.to_owned());
            model.verified = Set(false);
        }
        if let Some(hash) = password_hash {
            model.password_hash = Set(hash.to_owned());
        }
        model.update(&self.db).await.context("update account")?;
        Ok(())
    }

    async fn mark_verified(&self, email: &str) -> Result<(), AuthServiceError> {
        users::Entity::update_many()
            .col_expr(users::Column::Verified, Expr::value(true))
            .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(users::Column::Email.eq(email))
            .exec(&self.db)
            .await
            .context("mark user verified")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        phone: model.phone,
        course: model.course,
        year: model.year,
        section: model.section,
        role: model.role as u8,
        verified: model.verified,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Otp repository ────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOtpRepository {
    pub db: DatabaseConnection,
}

impl OtpRepository for DbOtpRepository {
    async fn find_live(&self, email: &str) -> Result<Option<Otp>, AuthServiceError> {
        let now = Utc::now();
        let model = otps::Entity::find()
            .filter(otps::Column::Email.eq(email))
            .filter(otps::Column::ExpiresAt.gt(now))
            .one(&self.db)
            .await
            .context("find live otp")?;
        Ok(model.map(otp_from_model))
    }

    async fn put_with_outbox(
        &self,
        otp: &Otp,
        event: &OutboxEvent,
    ) -> Result<(), AuthServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let otp = otp.clone();
                let event = event.clone();
                Box::pin(async move {
                    upsert_otp(txn, &otp).await?;
                    insert_outbox_event(txn, &event).await?;
                    Ok(())
                })
            })
            .await
            .context("put otp with outbox")?;
        Ok(())
    }

    async fn record_failed_attempt(&self, email: &str) -> Result<(), AuthServiceError> {
        // Single conditional UPDATE — the cap holds even under concurrent
        // verification calls for the same email.
        otps::Entity::update_many()
            .col_expr(
                otps::Column::Attempts,
                Expr::col(otps::Column::Attempts).add(1),
            )
            .filter(otps::Column::Email.eq(email))
            .filter(otps::Column::Attempts.lt(MAX_OTP_ATTEMPTS))
            .exec(&self.db)
            .await
            .context("record failed otp attempt")?;
        Ok(())
    }

    async fn delete(&self, email: &str) -> Result<bool, AuthServiceError> {
        let result = otps::Entity::delete_many()
            .filter(otps::Column::Email.eq(email))
            .exec(&self.db)
            .await
            .context("delete otp")?;
        Ok(result.rows_affected > 0)
    }
}

async fn upsert_otp(txn: &DatabaseTransaction, otp: &Otp) -> Result<(), sea_orm::DbErr> {
    let model = otps::ActiveModel {
        id: Set(otp.id),
        email: Set(otp.email.clone()),
        code: Set(otp.code.clone()),
        attempts: Set(otp.attempts),
        expires_at: Set(otp.expires_at),
        created_at: Set(otp.created_at),
    };
    otps::Entity::insert(model)
        .on_conflict(
            OnConflict::column(otps::Column::Email)
                .update_columns([
                    otps::Column::Code,
                    otps::Column::Attempts,
                    otps::Column::ExpiresAt,
                    otps::Column::CreatedAt,
                ])
                .to_owned(),
        )
        .exec(txn)
        .await?;
    Ok(())
}

async fn insert_outbox_event(
    txn: &DatabaseTransaction,
    event: &OutboxEvent,
) -> Result<(), sea_orm::DbErr> {
    let now = Utc::now();
    outbox_events::ActiveModel {
        id: Set(event.id),
        kind: Set(event.kind.clone()),
        payload: Set(event.payload.clone()),
        idempotency_key: Set(event.idempotency_key.clone()),
        attempts: Set(0),
        last_error: Set(None),
        created_at: Set(now),
        next_attempt_at: Set(now),
        processed_at: Set(None),
        failed_at: Set(None),
    }
    .insert(txn)
    .await?;
    Ok(())
}

fn otp_from_model(model: otps::Model) -> Otp {
    Otp {
        id: model.id,
        email: model.email,
        code: model.code,
        attempts: model.attempts,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}
