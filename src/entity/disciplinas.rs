//! 学科实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "disciplinas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub nome: String,
    #[sea_orm(unique)]
    pub codigo: String,
    pub carga_horaria: i32,
    pub ativa: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::disciplina_professores::Entity")]
    DisciplinaProfessores,
}

impl Related<super::disciplina_professores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DisciplinaProfessores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_disciplina(self) -> crate::models::disciplinas::entities::Disciplina {
        use crate::models::disciplinas::entities::Disciplina;

        Disciplina {
            id: self.id,
            nome: self.nome,
            codigo: self.codigo,
            carga_horaria: self.carga_horaria,
            ativa: self.ativa,
        }
    }
}
