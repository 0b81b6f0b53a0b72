use super::SeaOrmStorage;
use crate::entity::prelude::{Alunos, Disciplinas, Professores, Turmas, Users};
use crate::entity::users::Column as UserColumn;
use crate::errors::{GestaoError, Result};
use crate::models::dashboard::responses::CountsResponse;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

impl SeaOrmStorage {
    /// 管理端统计
    pub async fn counts_impl(&self) -> Result<CountsResponse> {
        let map_err = |e: sea_orm::DbErr| GestaoError::database_operation(format!("统计失败: {e}"));

        Ok(CountsResponse {
            usuarios_ativos: Users::find()
                .filter(UserColumn::Active.eq(true))
                .count(&self.db)
                .await
                .map_err(map_err)?,
            professores: Professores::find().count(&self.db).await.map_err(map_err)?,
            alunos: Alunos::find().count(&self.db).await.map_err(map_err)?,
            disciplinas: Disciplinas::find().count(&self.db).await.map_err(map_err)?,
            turmas: Turmas::find().count(&self.db).await.map_err(map_err)?,
        })
    }
}
