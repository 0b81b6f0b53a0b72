//! 学生档案实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "alunos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub matricula: String,
    pub data_nascimento: Option<Date>,
    pub responsavel: Option<String>,
    pub status: String,
    pub turma_id: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::turmas::Entity",
        from = "Column::TurmaId",
        to = "super::turmas::Column::Id",
        on_delete = "SetNull"
    )]
    Turma,
    #[sea_orm(has_many = "super::notas::Entity")]
    Notas,
    #[sea_orm(has_many = "super::faltas::Entity")]
    Faltas,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::turmas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Turma.def()
    }
}

impl Related<super::notas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notas.def()
    }
}

impl Related<super::faltas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faltas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 与用户记录及班级摘要组合为业务模型
    pub fn into_aluno(
        self,
        user: super::users::Model,
        turma: Option<crate::models::turmas::entities::TurmaRef>,
    ) -> crate::models::alunos::entities::Aluno {
        use crate::models::alunos::entities::{Aluno, AlunoStatus};

        Aluno {
            id: self.id,
            user_id: self.user_id,
            name: user.name,
            email: user.email,
            matricula: self.matricula,
            data_nascimento: self.data_nascimento,
            responsavel: self.responsavel,
            status: self
                .status
                .parse::<AlunoStatus>()
                .unwrap_or(AlunoStatus::Cursando),
            active: user.active,
            turma,
        }
    }
}
