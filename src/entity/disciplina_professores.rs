//! 学科-教师-班级关联实体
//!
//! `turma_id` 为空时表示教师资质（capacitação），否则表示班级授课安排（vínculo）。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "disciplina_professores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub disciplina_id: i64,
    pub professor_id: Option<i64>,
    pub turma_id: Option<i64>,
    pub ano: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::disciplinas::Entity",
        from = "Column::DisciplinaId",
        to = "super::disciplinas::Column::Id"
    )]
    Disciplina,
    #[sea_orm(
        belongs_to = "super::professores::Entity",
        from = "Column::ProfessorId",
        to = "super::professores::Column::Id"
    )]
    Professor,
    #[sea_orm(
        belongs_to = "super::turmas::Entity",
        from = "Column::TurmaId",
        to = "super::turmas::Column::Id"
    )]
    Turma,
}

impl Related<super::disciplinas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Disciplina.def()
    }
}

impl Related<super::professores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl Related<super::turmas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Turma.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
