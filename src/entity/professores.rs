//! 教师档案实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "professores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub registration: String,
    pub specialty: Option<String>,
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
    #[sea_orm(has_many = "super::disciplina_professores::Entity")]
    DisciplinaProfessores,
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

impl Related<super::disciplina_professores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DisciplinaProfessores.def()
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
    /// 与用户记录组合为业务模型
    pub fn into_professor(
        self,
        user: super::users::Model,
    ) -> crate::models::professores::entities::Professor {
        use crate::models::professores::entities::Professor;

        Professor {
            id: self.id,
            user_id: self.user_id,
            name: user.name,
            email: user.email,
            registration: self.registration,
            specialty: self.specialty,
            active: user.active,
        }
    }
}
