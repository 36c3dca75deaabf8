use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use crate::entities::scholarship;
use crate::schema::{NewScholarship, ScholarshipPatch};

/// Data access for scholarship records, owning the database handle.
#[derive(Clone)]
pub struct ScholarshipStore {
    db: DatabaseConnection,
}

impl ScholarshipStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every record, oldest first.
    pub async fn list(&self) -> Result<Vec<scholarship::Model>, DbErr> {
        scholarship::Entity::find()
            .order_by_asc(scholarship::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<scholarship::Model>, DbErr> {
        scholarship::Entity::find_by_id(id).one(&self.db).await
    }

    /// Inserts a record; the store assigns the id.
    pub async fn create(&self, input: NewScholarship) -> Result<scholarship::Model, DbErr> {
        let record = scholarship::ActiveModel {
            scholarship_name: Set(input.scholarship_name),
            university_name: Set(input.university_name),
            country: Set(input.country),
            funding_type: Set(input.funding_type),
            professor_email: Set(input.professor_email),
            required_documents: Set(scholarship::RequiredDocuments(input.required_documents)),
            deadline: Set(input.deadline),
            status: Set(input.status),
            apply_link: Set(input.apply_link),
            notes: Set(input.notes),
            ..Default::default()
        };
        record.insert(&self.db).await
    }

    /// Applies the supplied fields to an existing record, leaving the rest
    /// untouched. Returns `None` when no record has the given id.
    pub async fn update(
        &self,
        id: i64,
        patch: ScholarshipPatch,
    ) -> Result<Option<scholarship::Model>, DbErr> {
        let Some(existing) = scholarship::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(existing));
        }

        let mut record: scholarship::ActiveModel = existing.into();
        if let Some(value) = patch.scholarship_name {
            record.scholarship_name = Set(value);
        }
        if let Some(value) = patch.university_name {
            record.university_name = Set(value);
        }
        if let Some(value) = patch.country {
            record.country = Set(value);
        }
        if let Some(value) = patch.funding_type {
            record.funding_type = Set(value);
        }
        if let Some(value) = patch.professor_email {
            record.professor_email = Set(value);
        }
        if let Some(value) = patch.required_documents {
            record.required_documents = Set(scholarship::RequiredDocuments(value));
        }
        if let Some(value) = patch.deadline {
            record.deadline = Set(value);
        }
        if let Some(value) = patch.status {
            record.status = Set(value);
        }
        if let Some(value) = patch.apply_link {
            record.apply_link = Set(value);
        }
        if let Some(value) = patch.notes {
            record.notes = Set(value);
        }

        let updated = record.update(&self.db).await?;
        Ok(Some(updated))
    }

    /// Removes the record if present. Deleting an unknown id is not an error.
    pub async fn delete(&self, id: i64) -> Result<(), DbErr> {
        scholarship::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
