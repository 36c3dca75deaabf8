use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scholarships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scholarships::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Scholarships::ScholarshipName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Scholarships::UniversityName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Scholarships::Country).string().not_null())
                    .col(
                        ColumnDef::new(Scholarships::FundingType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Scholarships::ProfessorEmail)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Scholarships::RequiredDocuments)
                            .json()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Scholarships::Deadline)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Scholarships::Status).string().not_null())
                    .col(ColumnDef::new(Scholarships::ApplyLink).string().null())
                    .col(ColumnDef::new(Scholarships::Notes).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scholarships::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Scholarships {
    Table,
    Id,
    ScholarshipName,
    UniversityName,
    Country,
    FundingType,
    ProfessorEmail,
    RequiredDocuments,
    Deadline,
    Status,
    ApplyLink,
    Notes,
}
