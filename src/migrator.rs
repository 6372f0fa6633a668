use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_users_table::Migration),
            Box::new(m20240601_000002_create_sections_table::Migration),
            Box::new(m20240601_000003_create_categories_table::Migration),
            Box::new(m20240601_000004_create_products_table::Migration),
            Box::new(m20240601_000005_create_detail_tables::Migration),
            Box::new(m20240601_000006_create_attachment_tables::Migration),
        ]
    }
}

// Migration implementations

mod m20240601_000001_create_users_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000001_create_users_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Users::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Users::Name).string().null())
                        .col(ColumnDef::new(Users::Email).string().null().unique_key())
                        .col(
                            ColumnDef::new(Users::PhoneNumber)
                                .string()
                                .null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Users::BusinessEmail).string().null())
                        .col(
                            ColumnDef::new(Users::BusinessEmailVerified)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(Users::CompanyName).string().null())
                        .col(ColumnDef::new(Users::Image).string().null())
                        .col(
                            ColumnDef::new(Users::Role)
                                .string_len(10)
                                .not_null()
                                .default("user"),
                        )
                        .col(
                            ColumnDef::new(Users::IsOnboarded)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Users::IsOauth)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Users::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Users::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Users::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Users {
        Table,
        Id,
        Name,
        Email,
        PhoneNumber,
        BusinessEmail,
        BusinessEmailVerified,
        CompanyName,
        Image,
        Role,
        IsOnboarded,
        IsOauth,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240601_000002_create_sections_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000002_create_sections_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Sections::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Sections::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Sections::Name).string().not_null())
                        .col(
                            ColumnDef::new(Sections::Slug)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Sections::SectionType)
                                .string_len(20)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Sections::Priority)
                                .integer()
                                .not_null()
                                .default(-1),
                        )
                        .col(
                            ColumnDef::new(Sections::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Sections::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_sections_type")
                        .table(Sections::Table)
                        .col(Sections::SectionType)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_sections_priority")
                        .table(Sections::Table)
                        .col(Sections::Priority)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Sections::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Sections {
        Table,
        Id,
        Name,
        Slug,
        SectionType,
        Priority,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240601_000003_create_categories_table {

    use super::m20240601_000002_create_sections_table::Sections;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000003_create_categories_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Categories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Categories::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Categories::Name).string().not_null())
                        .col(
                            ColumnDef::new(Categories::Slug)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Categories::Description).text().null())
                        .col(ColumnDef::new(Categories::ImageUrl).string().null())
                        .col(
                            ColumnDef::new(Categories::Priority)
                                .integer()
                                .not_null()
                                .default(-1),
                        )
                        .col(
                            ColumnDef::new(Categories::Level)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Categories::ParentId).uuid().null())
                        .col(ColumnDef::new(Categories::SectionId).uuid().null())
                        .col(
                            ColumnDef::new(Categories::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Categories::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_categories_parent")
                                .from(Categories::Table, Categories::ParentId)
                                .to(Categories::Table, Categories::Id)
                                .on_delete(ForeignKeyAction::SetNull),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_categories_section")
                                .from(Categories::Table, Categories::SectionId)
                                .to(Sections::Table, Sections::Id)
                                .on_delete(ForeignKeyAction::SetNull),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_categories_parent_id")
                        .table(Categories::Table)
                        .col(Categories::ParentId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_categories_section_id")
                        .table(Categories::Table)
                        .col(Categories::SectionId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_categories_level")
                        .table(Categories::Table)
                        .col(Categories::Level)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Categories::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Categories {
        Table,
        Id,
        Name,
        Slug,
        Description,
        ImageUrl,
        Priority,
        Level,
        ParentId,
        SectionId,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240601_000004_create_products_table {

    use super::m20240601_000002_create_sections_table::Sections;
    use super::m20240601_000003_create_categories_table::Categories;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000004_create_products_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Products::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Products::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Products::Name).string().not_null())
                        .col(
                            ColumnDef::new(Products::Slug)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Products::BrandName).string().null())
                        .col(ColumnDef::new(Products::Industry).string().null())
                        .col(ColumnDef::new(Products::Description).text().null())
                        .col(ColumnDef::new(Products::ImageUrl).string().null())
                        .col(ColumnDef::new(Products::Link).string().null())
                        .col(
                            ColumnDef::new(Products::Priority)
                                .integer()
                                .not_null()
                                .default(-1),
                        )
                        .col(
                            ColumnDef::new(Products::ShowVendor)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Products::HasPricing)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(Products::SectionId).uuid().null())
                        .col(ColumnDef::new(Products::CategoryId).uuid().null())
                        .col(ColumnDef::new(Products::VendorId).uuid().null())
                        .col(
                            ColumnDef::new(Products::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Products::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_products_section")
                                .from(Products::Table, Products::SectionId)
                                .to(Sections::Table, Sections::Id)
                                .on_delete(ForeignKeyAction::SetNull),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_products_category")
                                .from(Products::Table, Products::CategoryId)
                                .to(Categories::Table, Categories::Id)
                                .on_delete(ForeignKeyAction::SetNull),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_products_section_id")
                        .table(Products::Table)
                        .col(Products::SectionId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_products_category_id")
                        .table(Products::Table)
                        .col(Products::CategoryId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_products_vendor_id")
                        .table(Products::Table)
                        .col(Products::VendorId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_products_priority")
                        .table(Products::Table)
                        .col(Products::Priority)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Products::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Products {
        Table,
        Id,
        Name,
        Slug,
        BrandName,
        Industry,
        Description,
        ImageUrl,
        Link,
        Priority,
        ShowVendor,
        HasPricing,
        SectionId,
        CategoryId,
        VendorId,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240601_000005_create_detail_tables {

    use super::m20240601_000004_create_products_table::Products;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000005_create_detail_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(AiProductDetails::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(AiProductDetails::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AiProductDetails::ProductId)
                                .uuid()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(AiProductDetails::IncludeDetails)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(AiProductDetails::SolidDotColor)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(AiProductDetails::Rating)
                                .double()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(AiProductDetails::ReviewCount)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(AiProductDetails::Tagline1).string().null())
                        .col(ColumnDef::new(AiProductDetails::Tagline2).string().null())
                        .col(
                            ColumnDef::new(AiProductDetails::IsClaimable)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(AiProductDetails::Claim).json().null())
                        .col(
                            ColumnDef::new(AiProductDetails::ShowStartupOffer)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(AiProductDetails::StartupOffer)
                                .json()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(AiProductDetails::ShowSpecialOffer)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(AiProductDetails::SpecialOffer)
                                .json()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(AiProductDetails::ShowStartTrial)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(AiProductDetails::StartTrial).json().null())
                        .col(
                            ColumnDef::new(AiProductDetails::ShowBookDemo)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(AiProductDetails::BookDemo).json().null())
                        .col(
                            ColumnDef::new(AiProductDetails::ShowQuote)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(AiProductDetails::Quote).json().null())
                        .col(
                            ColumnDef::new(AiProductDetails::ShowCallBack)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(AiProductDetails::CallBack).json().null())
                        .col(
                            ColumnDef::new(AiProductDetails::ShowChat)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(AiProductDetails::Chat).json().null())
                        .col(
                            ColumnDef::new(AiProductDetails::ShowDiscount)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(AiProductDetails::Discount).json().null())
                        .col(
                            ColumnDef::new(AiProductDetails::ShowWebinar)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(AiProductDetails::Webinar).json().null())
                        .col(
                            ColumnDef::new(AiProductDetails::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AiProductDetails::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_ai_product_details_product")
                                .from(AiProductDetails::Table, AiProductDetails::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(DatacenterCloudDetails::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(DatacenterCloudDetails::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DatacenterCloudDetails::ProductId)
                                .uuid()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(DatacenterCloudDetails::DetailType)
                                .string_len(20)
                                .not_null()
                                .default("DATA_CENTER"),
                        )
                        .col(
                            ColumnDef::new(DatacenterCloudDetails::IsAiCertified)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(DatacenterCloudDetails::IsGreenCompatible)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(DatacenterCloudDetails::AiCertifiedLink)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(DatacenterCloudDetails::GreenCompatibleLink)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(DatacenterCloudDetails::Features)
                                .json()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DatacenterCloudDetails::Certifications)
                                .json()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(DatacenterCloudDetails::Locations)
                                .json()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(DatacenterCloudDetails::Services)
                                .json()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(DatacenterCloudDetails::Expertise)
                                .json()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(DatacenterCloudDetails::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DatacenterCloudDetails::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_datacenter_cloud_details_product")
                                .from(
                                    DatacenterCloudDetails::Table,
                                    DatacenterCloudDetails::ProductId,
                                )
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(NetworkHardwareDetails::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(NetworkHardwareDetails::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(NetworkHardwareDetails::ProductId)
                                .uuid()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(NetworkHardwareDetails::Model)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(NetworkHardwareDetails::Features)
                                .json()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(NetworkHardwareDetails::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(NetworkHardwareDetails::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_network_hardware_details_product")
                                .from(
                                    NetworkHardwareDetails::Table,
                                    NetworkHardwareDetails::ProductId,
                                )
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(SoftwareDetails::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SoftwareDetails::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SoftwareDetails::ProductId)
                                .uuid()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(SoftwareDetails::ViewLink).string().null())
                        .col(
                            ColumnDef::new(SoftwareDetails::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SoftwareDetails::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_software_details_product")
                                .from(SoftwareDetails::Table, SoftwareDetails::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(SoftwarePlans::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SoftwarePlans::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SoftwarePlans::SoftwareDetailsId)
                                .uuid()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SoftwarePlans::Name).string().not_null())
                        .col(
                            ColumnDef::new(SoftwarePlans::Priority)
                                .integer()
                                .not_null()
                                .default(-1),
                        )
                        .col(ColumnDef::new(SoftwarePlans::Features).json().not_null())
                        .col(
                            ColumnDef::new(SoftwarePlans::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SoftwarePlans::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_software_plans_details")
                                .from(SoftwarePlans::Table, SoftwarePlans::SoftwareDetailsId)
                                .to(SoftwareDetails::Table, SoftwareDetails::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_software_plans_details_id")
                        .table(SoftwarePlans::Table)
                        .col(SoftwarePlans::SoftwareDetailsId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SoftwarePlans::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(SoftwareDetails::Table).to_owned())
                .await?;
            manager
                .drop_table(
                    Table::drop()
                        .table(NetworkHardwareDetails::Table)
                        .to_owned(),
                )
                .await?;
            manager
                .drop_table(
                    Table::drop()
                        .table(DatacenterCloudDetails::Table)
                        .to_owned(),
                )
                .await?;
            manager
                .drop_table(Table::drop().table(AiProductDetails::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum AiProductDetails {
        Table,
        Id,
        ProductId,
        IncludeDetails,
        SolidDotColor,
        Rating,
        ReviewCount,
        Tagline1,
        Tagline2,
        IsClaimable,
        Claim,
        ShowStartupOffer,
        StartupOffer,
        ShowSpecialOffer,
        SpecialOffer,
        ShowStartTrial,
        StartTrial,
        ShowBookDemo,
        BookDemo,
        ShowQuote,
        Quote,
        ShowCallBack,
        CallBack,
        ShowChat,
        Chat,
        ShowDiscount,
        Discount,
        ShowWebinar,
        Webinar,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum DatacenterCloudDetails {
        Table,
        Id,
        ProductId,
        DetailType,
        IsAiCertified,
        IsGreenCompatible,
        AiCertifiedLink,
        GreenCompatibleLink,
        Features,
        Certifications,
        Locations,
        Services,
        Expertise,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum NetworkHardwareDetails {
        Table,
        Id,
        ProductId,
        Model,
        Features,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum SoftwareDetails {
        Table,
        Id,
        ProductId,
        ViewLink,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum SoftwarePlans {
        Table,
        Id,
        SoftwareDetailsId,
        Name,
        Priority,
        Features,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240601_000006_create_attachment_tables {

    use super::m20240601_000004_create_products_table::Products;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000006_create_attachment_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(EngagementBlocks::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(EngagementBlocks::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(EngagementBlocks::ProductId)
                                .uuid()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(EngagementBlocks::ShowInfo)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(EngagementBlocks::InfoDetails).json().null())
                        .col(
                            ColumnDef::new(EngagementBlocks::ShowBrochure)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(EngagementBlocks::BrochureDetails)
                                .json()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(EngagementBlocks::ShowForm)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(EngagementBlocks::FormDetails).json().null())
                        .col(
                            ColumnDef::new(EngagementBlocks::ShowTrendingBrands)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(EngagementBlocks::TrendingBrandsDetails)
                                .json()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(EngagementBlocks::ShowCalendar)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(EngagementBlocks::CalendarDetails)
                                .json()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(EngagementBlocks::ShowShareLinks)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(EngagementBlocks::ShareLinks).json().null())
                        .col(
                            ColumnDef::new(EngagementBlocks::ShowBadge)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(EngagementBlocks::BadgeDetails)
                                .json()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(EngagementBlocks::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(EngagementBlocks::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_engagement_blocks_product")
                                .from(EngagementBlocks::Table, EngagementBlocks::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Pricing::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Pricing::Id).uuid().primary_key().not_null())
                        .col(
                            ColumnDef::new(Pricing::ProductId)
                                .uuid()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Pricing::IsStartingPrice)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(Pricing::Price).decimal_len(16, 2).null())
                        .col(ColumnDef::new(Pricing::PriceText).string().null())
                        .col(
                            ColumnDef::new(Pricing::Currency)
                                .string_len(3)
                                .not_null()
                                .default("INR"),
                        )
                        .col(ColumnDef::new(Pricing::BtnText).string().null())
                        .col(ColumnDef::new(Pricing::BtnLink).string().null())
                        .col(
                            ColumnDef::new(Pricing::HasFreeDemo)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(Pricing::FreeDemoLink).string().null())
                        .col(
                            ColumnDef::new(Pricing::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Pricing::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_pricing_product")
                                .from(Pricing::Table, Pricing::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Pricing::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(EngagementBlocks::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum EngagementBlocks {
        Table,
        Id,
        ProductId,
        ShowInfo,
        InfoDetails,
        ShowBrochure,
        BrochureDetails,
        ShowForm,
        FormDetails,
        ShowTrendingBrands,
        TrendingBrandsDetails,
        ShowCalendar,
        CalendarDetails,
        ShowShareLinks,
        ShareLinks,
        ShowBadge,
        BadgeDetails,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum Pricing {
        Table,
        Id,
        ProductId,
        IsStartingPrice,
        Price,
        PriceText,
        Currency,
        BtnText,
        BtnLink,
        HasFreeDemo,
        FreeDemoLink,
        CreatedAt,
        UpdatedAt,
    }
}
