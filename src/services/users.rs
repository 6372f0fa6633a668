use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::entities::user::{self, UserRole};
use crate::errors::ServiceError;

/// User lookup and onboarding. Users come into existence on their first
/// successful login verification.
#[derive(Clone)]
pub struct UserService {
    db: Arc<DatabaseConnection>,
}

/// Profile fields captured during onboarding
#[derive(Debug, Clone)]
pub struct OnboardInput {
    pub name: String,
    pub business_email: String,
    pub company_name: Option<String>,
}

impl UserService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<user::Model, ServiceError> {
        user::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User".to_string()))
    }

    pub async fn find_by_phone(&self, phone: &str) -> Result<Option<user::Model>, ServiceError> {
        Ok(user::Entity::find()
            .filter(user::Column::PhoneNumber.eq(phone))
            .one(&*self.db)
            .await?)
    }

    /// Fetch the user for a verified phone number, creating the record on
    /// first login. Bootstrap phones receive the admin role.
    pub async fn get_or_create_by_phone(
        &self,
        phone: &str,
        admin_phones: &[String],
    ) -> Result<user::Model, ServiceError> {
        if let Some(existing) = self.find_by_phone(phone).await? {
            return Ok(existing);
        }

        let role = if admin_phones.iter().any(|p| p == phone) {
            UserRole::Admin
        } else {
            UserRole::User
        };

        let now = Utc::now();
        let model = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(None),
            email: Set(None),
            phone_number: Set(Some(phone.to_string())),
            business_email: Set(None),
            business_email_verified: Set(false),
            company_name: Set(None),
            image: Set(None),
            role: Set(role),
            is_onboarded: Set(false),
            is_oauth: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model.insert(&*self.db).await?;
        info!(user_id = %created.id, "user created on first login");
        Ok(created)
    }

    /// Store onboarding profile fields. The business email must not belong
    /// to another user.
    pub async fn onboard(&self, id: Uuid, input: OnboardInput) -> Result<user::Model, ServiceError> {
        let existing = self.get_by_id(id).await?;

        let email_taken = user::Entity::find()
            .filter(user::Column::BusinessEmail.eq(&input.business_email))
            .filter(user::Column::Id.ne(id))
            .one(&*self.db)
            .await?
            .is_some();
        if email_taken {
            return Err(ServiceError::Conflict("Business email".to_string()));
        }

        let mut model: user::ActiveModel = existing.into();
        model.name = Set(Some(input.name));
        model.business_email = Set(Some(input.business_email));
        model.business_email_verified = Set(false);
        model.company_name = Set(input.company_name);
        model.updated_at = Set(Utc::now());

        Ok(model.update(&*self.db).await?)
    }

    /// Complete onboarding after the business email is verified
    pub async fn mark_onboarded(&self, id: Uuid) -> Result<user::Model, ServiceError> {
        let existing = self.get_by_id(id).await?;

        let mut model: user::ActiveModel = existing.into();
        model.business_email_verified = Set(true);
        model.is_onboarded = Set(true);
        model.updated_at = Set(Utc::now());

        Ok(model.update(&*self.db).await?)
    }
}
