use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::ProfileName).string().null())
                    .col(ColumnDef::new(Users::AvatarUrl).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生档案表（成绩单上的身份信息）
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::UserId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Profiles::RegistrationNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Profiles::StudentName).string().not_null())
                    .col(ColumnDef::new(Profiles::School).string().not_null())
                    .col(ColumnDef::new(Profiles::Program).string().not_null())
                    .col(ColumnDef::new(Profiles::EntryYear).integer().not_null())
                    .col(ColumnDef::new(Profiles::FatherName).string().null())
                    .col(ColumnDef::new(Profiles::MotherName).string().null())
                    .col(ColumnDef::new(Profiles::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Profiles::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Profiles::Table, Profiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成果记录表
        manager
            .create_table(
                Table::create()
                    .table(Achievements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Achievements::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Achievements::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Achievements::Title).string().not_null())
                    .col(ColumnDef::new(Achievements::Category).string().not_null())
                    .col(ColumnDef::new(Achievements::EventType).string().null())
                    .col(ColumnDef::new(Achievements::Organizer).string().null())
                    .col(ColumnDef::new(Achievements::Level).string().not_null())
                    .col(ColumnDef::new(Achievements::Rank).string().not_null())
                    .col(ColumnDef::new(Achievements::Scope).string().not_null())
                    .col(ColumnDef::new(Achievements::Description).text().null())
                    .col(
                        ColumnDef::new(Achievements::CalculatedPoints)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Achievements::CategoryCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Achievements::AchievementDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Achievements::Semester).string().not_null())
                    .col(
                        ColumnDef::new(Achievements::AcademicYear)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Achievements::Status).string().not_null())
                    .col(ColumnDef::new(Achievements::CertificateToken).string().null())
                    .col(ColumnDef::new(Achievements::FacultyRemark).text().null())
                    .col(
                        ColumnDef::new(Achievements::FacultyReviewedBy)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Achievements::FacultyReviewedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Achievements::HodRemark).text().null())
                    .col(
                        ColumnDef::new(Achievements::HodReviewedBy)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Achievements::HodReviewedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Achievements::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Achievements::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Achievements::Table, Achievements::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_achievements_student_semester")
                    .table(Achievements::Table)
                    .col(Achievements::StudentId)
                    .col(Achievements::Semester)
                    .to_owned(),
            )
            .await?;

        // 创建成绩单表（一经生成不可变更）
        manager
            .create_table(
                Table::create()
                    .table(Transcripts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transcripts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Transcripts::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transcripts::Semester).string().null())
                    .col(ColumnDef::new(Transcripts::AcademicYear).string().null())
                    .col(
                        ColumnDef::new(Transcripts::TotalPoints)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transcripts::Grade).string().not_null())
                    .col(
                        ColumnDef::new(Transcripts::VerificationCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Transcripts::AchievementsJson)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transcripts::IsFinal).boolean().not_null())
                    .col(
                        ColumnDef::new(Transcripts::GeneratedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transcripts::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Transcripts::Table, Transcripts::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建文件表（佐证材料）
        manager
            .create_table(
                Table::create()
                    .table(Files::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Files::DownloadToken)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Files::FileName).string().not_null())
                    .col(ColumnDef::new(Files::FileSize).big_integer().not_null())
                    .col(ColumnDef::new(Files::FileType).string().not_null())
                    .col(ColumnDef::new(Files::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Files::UploadedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Files::Table, Files::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Files::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Transcripts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Achievements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    ProfileName,
    AvatarUrl,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    UserId,
    RegistrationNumber,
    StudentName,
    School,
    Program,
    EntryYear,
    FatherName,
    MotherName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Achievements {
    Table,
    Id,
    StudentId,
    Title,
    Category,
    EventType,
    Organizer,
    Level,
    Rank,
    Scope,
    Description,
    CalculatedPoints,
    CategoryCode,
    AchievementDate,
    Semester,
    AcademicYear,
    Status,
    CertificateToken,
    FacultyRemark,
    FacultyReviewedBy,
    FacultyReviewedAt,
    HodRemark,
    HodReviewedBy,
    HodReviewedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Transcripts {
    Table,
    Id,
    StudentId,
    Semester,
    AcademicYear,
    TotalPoints,
    Grade,
    VerificationCode,
    AchievementsJson,
    IsFinal,
    GeneratedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Files {
    Table,
    DownloadToken,
    FileName,
    FileSize,
    FileType,
    UserId,
    UploadedAt,
}
