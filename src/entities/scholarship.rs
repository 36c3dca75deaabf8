use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A tracked scholarship application.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "scholarships")]
#[serde(rename_all = "camelCase")]
#[schema(as = Scholarship)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i64,
    pub scholarship_name: String,
    pub university_name: String,
    pub country: String,
    pub funding_type: FundingType,
    pub professor_email: String,
    pub required_documents: RequiredDocuments,
    pub deadline: DateTime<Utc>,
    pub status: ApplicationStatus,
    pub apply_link: Option<String>,
    pub notes: Option<String>,
}

/// How much of the cost the scholarship covers.
#[derive(
    Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum FundingType {
    #[sea_orm(string_value = "Full")]
    Full,
    #[sea_orm(string_value = "Partial")]
    Partial,
}

/// Where the application currently stands.
#[derive(
    Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ApplicationStatus {
    #[sea_orm(string_value = "Applied")]
    Applied,
    #[sea_orm(string_value = "Preparing")]
    Preparing,
    #[sea_orm(string_value = "Submitted")]
    Submitted,
}

/// Document names kept as a JSON array column, preserving request order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema)]
pub struct RequiredDocuments(pub Vec<String>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
