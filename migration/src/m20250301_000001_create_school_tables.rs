use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 用户表
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
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(
                        ColumnDef::new(Users::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 管理员档案
        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admins::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Admins::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Admins::Table, Admins::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 教师档案
        manager
            .create_table(
                Table::create()
                    .table(Professores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Professores::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Professores::Registration)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Professores::Specialty).string().null())
                    .col(
                        ColumnDef::new(Professores::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Professores::Table, Professores::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 班级表
        manager
            .create_table(
                Table::create()
                    .table(Turmas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Turmas::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Turmas::Nome)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Turmas::Serie).string().not_null())
                    .col(ColumnDef::new(Turmas::Ano).integer().not_null())
                    .col(
                        ColumnDef::new(Turmas::Ativa)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Turmas::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Turmas::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 学生档案
        manager
            .create_table(
                Table::create()
                    .table(Alunos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alunos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Alunos::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Alunos::Matricula)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Alunos::DataNascimento).date().null())
                    .col(ColumnDef::new(Alunos::Responsavel).string().null())
                    .col(ColumnDef::new(Alunos::Status).string().not_null())
                    .col(ColumnDef::new(Alunos::TurmaId).big_integer().null())
                    .col(ColumnDef::new(Alunos::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alunos::Table, Alunos::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alunos::Table, Alunos::TurmaId)
                            .to(Turmas::Table, Turmas::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 学科表
        manager
            .create_table(
                Table::create()
                    .table(Disciplinas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Disciplinas::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Disciplinas::Nome)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Disciplinas::Codigo)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Disciplinas::CargaHoraria)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Disciplinas::Ativa)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Disciplinas::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Disciplinas::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 学科-教师-班级关联表（turma_id 为空表示教师资质）
        manager
            .create_table(
                Table::create()
                    .table(DisciplinaProfessores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DisciplinaProfessores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DisciplinaProfessores::DisciplinaId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DisciplinaProfessores::ProfessorId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(DisciplinaProfessores::TurmaId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(DisciplinaProfessores::Ano)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DisciplinaProfessores::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                DisciplinaProfessores::Table,
                                DisciplinaProfessores::DisciplinaId,
                            )
                            .to(Disciplinas::Table, Disciplinas::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                DisciplinaProfessores::Table,
                                DisciplinaProfessores::ProfessorId,
                            )
                            .to(Professores::Table, Professores::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(DisciplinaProfessores::Table, DisciplinaProfessores::TurmaId)
                            .to(Turmas::Table, Turmas::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 成绩表
        manager
            .create_table(
                Table::create()
                    .table(Notas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notas::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notas::AlunoId).big_integer().not_null())
                    .col(ColumnDef::new(Notas::DisciplinaId).big_integer().not_null())
                    .col(ColumnDef::new(Notas::ProfessorId).big_integer().not_null())
                    .col(ColumnDef::new(Notas::Valor).double().not_null())
                    .col(ColumnDef::new(Notas::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notas::Table, Notas::AlunoId)
                            .to(Alunos::Table, Alunos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notas::Table, Notas::DisciplinaId)
                            .to(Disciplinas::Table, Disciplinas::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notas::Table, Notas::ProfessorId)
                            .to(Professores::Table, Professores::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 缺勤表
        manager
            .create_table(
                Table::create()
                    .table(Faltas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Faltas::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Faltas::AlunoId).big_integer().not_null())
                    .col(ColumnDef::new(Faltas::DisciplinaId).big_integer().not_null())
                    .col(ColumnDef::new(Faltas::ProfessorId).big_integer().not_null())
                    .col(ColumnDef::new(Faltas::Data).date().not_null())
                    .col(
                        ColumnDef::new(Faltas::Justificada)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Faltas::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Faltas::Table, Faltas::AlunoId)
                            .to(Alunos::Table, Alunos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Faltas::Table, Faltas::DisciplinaId)
                            .to(Disciplinas::Table, Disciplinas::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Faltas::Table, Faltas::ProfessorId)
                            .to(Professores::Table, Professores::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_alunos_turma_id")
                    .table(Alunos::Table)
                    .col(Alunos::TurmaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_disciplina_professores_unique")
                    .table(DisciplinaProfessores::Table)
                    .col(DisciplinaProfessores::DisciplinaId)
                    .col(DisciplinaProfessores::ProfessorId)
                    .col(DisciplinaProfessores::TurmaId)
                    .col(DisciplinaProfessores::Ano)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_disciplina_professores_professor_id")
                    .table(DisciplinaProfessores::Table)
                    .col(DisciplinaProfessores::ProfessorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_disciplina_professores_turma_id")
                    .table(DisciplinaProfessores::Table)
                    .col(DisciplinaProfessores::TurmaId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Faltas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DisciplinaProfessores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Disciplinas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Alunos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Turmas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    Name,
    PasswordHash,
    Role,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Admins {
    #[sea_orm(iden = "admins")]
    Table,
    Id,
    UserId,
}

#[derive(DeriveIden)]
enum Professores {
    #[sea_orm(iden = "professores")]
    Table,
    Id,
    UserId,
    Registration,
    Specialty,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Alunos {
    #[sea_orm(iden = "alunos")]
    Table,
    Id,
    UserId,
    Matricula,
    DataNascimento,
    Responsavel,
    Status,
    TurmaId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Disciplinas {
    #[sea_orm(iden = "disciplinas")]
    Table,
    Id,
    Nome,
    Codigo,
    CargaHoraria,
    Ativa,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Turmas {
    #[sea_orm(iden = "turmas")]
    Table,
    Id,
    Nome,
    Serie,
    Ano,
    Ativa,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum DisciplinaProfessores {
    #[sea_orm(iden = "disciplina_professores")]
    Table,
    Id,
    DisciplinaId,
    ProfessorId,
    TurmaId,
    Ano,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Notas {
    #[sea_orm(iden = "notas")]
    Table,
    Id,
    AlunoId,
    DisciplinaId,
    ProfessorId,
    Valor,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Faltas {
    #[sea_orm(iden = "faltas")]
    Table,
    Id,
    AlunoId,
    DisciplinaId,
    ProfessorId,
    Data,
    Justificada,
    CreatedAt,
}
