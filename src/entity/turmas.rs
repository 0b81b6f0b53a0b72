//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "turmas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub nome: String,
    pub serie: String,
    pub ano: i32,
    pub ativa: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::alunos::Entity")]
    Alunos,
    #[sea_orm(has_many = "super::disciplina_professores::Entity")]
    DisciplinaProfessores,
}

impl Related<super::alunos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alunos.def()
    }
}

impl Related<super::disciplina_professores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DisciplinaProfessores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_turma(self) -> crate::models::turmas::entities::Turma {
        use crate::models::turmas::entities::Turma;

        Turma {
            id: self.id,
            nome: self.nome,
            serie: self.serie,
            ano: self.ano,
            ativa: self.ativa,
        }
    }

    pub fn to_ref(&self) -> crate::models::turmas::entities::TurmaRef {
        crate::models::turmas::entities::TurmaRef {
            id: self.id,
            nome: self.nome.clone(),
        }
    }
}
