//! 成绩实体（仅用于删除前的引用检查）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub aluno_id: i64,
    pub disciplina_id: i64,
    pub professor_id: i64,
    #[sea_orm(column_type = "Double")]
    pub valor: f64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::alunos::Entity",
        from = "Column::AlunoId",
        to = "super::alunos::Column::Id",
        on_delete = "Cascade"
    )]
    Aluno,
    #[sea_orm(
        belongs_to = "super::professores::Entity",
        from = "Column::ProfessorId",
        to = "super::professores::Column::Id"
    )]
    Professor,
}

impl Related<super::alunos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aluno.def()
    }
}

impl Related<super::professores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
