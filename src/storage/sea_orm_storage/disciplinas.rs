use super::SeaOrmStorage;
use crate::entity::disciplina_professores::{Column as DpColumn, Entity as DisciplinaProfessores};
use crate::entity::disciplinas::{ActiveModel, Column, Entity as Disciplinas, Model};
use crate::entity::faltas::{Column as FaltaColumn, Entity as Faltas};
use crate::entity::notas::{Column as NotaColumn, Entity as Notas};
use crate::errors::{GestaoError, Result};
use crate::models::disciplinas::{
    entities::Disciplina,
    requests::{CreateDisciplinaRequest, UpdateDisciplinaRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

/// 获取学科，不存在时返回 NotFound
pub(super) async fn find_disciplina<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Model> {
    Disciplinas::find_by_id(id)
        .one(conn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("查询学科失败: {e}")))?
        .ok_or_else(|| GestaoError::not_found(format!("Disciplina {id} não encontrada")))
}

/// 确认所有学科 ID 都存在
pub(super) async fn ensure_disciplinas_exist<C: ConnectionTrait>(
    conn: &C,
    ids: &[i64],
) -> Result<()> {
    let found = super::hydrate::disciplinas_by_id(conn, ids.iter().copied()).await?;
    if let Some(missing) = ids.iter().find(|id| !found.contains_key(id)) {
        return Err(GestaoError::not_found(format!(
            "Disciplina {missing} não encontrada"
        )));
    }
    Ok(())
}

async fn ensure_unique<C: ConnectionTrait>(
    conn: &C,
    nome: &str,
    codigo: &str,
    exclude_id: Option<i64>,
) -> Result<()> {
    let mut by_codigo = Disciplinas::find().filter(Column::Codigo.eq(codigo));
    let mut by_nome = Disciplinas::find().filter(Column::Nome.eq(nome));
    if let Some(id) = exclude_id {
        by_codigo = by_codigo.filter(Column::Id.ne(id));
        by_nome = by_nome.filter(Column::Id.ne(id));
    }

    if by_codigo.count(conn).await? > 0 {
        return Err(GestaoError::duplicate_code(format!(
            "Já existe uma disciplina com o código {codigo}"
        )));
    }
    if by_nome.count(conn).await? > 0 {
        return Err(GestaoError::duplicate_name(format!(
            "Já existe uma disciplina com o nome {nome}"
        )));
    }
    Ok(())
}

impl SeaOrmStorage {
    /// 创建学科
    pub async fn create_disciplina_impl(&self, req: CreateDisciplinaRequest) -> Result<Disciplina> {
        req.validate()?;
        let nome = req.nome.trim();
        let codigo = req.codigo.trim();

        ensure_unique(&self.db, nome, codigo, None).await?;

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            nome: Set(nome.to_string()),
            codigo: Set(codigo.to_string()),
            carga_horaria: Set(req.carga_horaria),
            ativa: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| GestaoError::database_operation(format!("创建学科失败: {e}")))?;

        Ok(model.into_disciplina())
    }

    /// 更新学科
    pub async fn update_disciplina_impl(
        &self,
        id: i64,
        req: UpdateDisciplinaRequest,
    ) -> Result<Disciplina> {
        let existing = find_disciplina(&self.db, id).await?;
        req.validate()?;
        let nome = req.nome.trim();
        let codigo = req.codigo.trim();

        ensure_unique(&self.db, nome, codigo, Some(id)).await?;

        let model = ActiveModel {
            id: Set(id),
            nome: Set(nome.to_string()),
            codigo: Set(codigo.to_string()),
            carga_horaria: Set(req.carga_horaria.unwrap_or(existing.carga_horaria)),
            ativa: Set(req.ativa.unwrap_or(existing.ativa)),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| GestaoError::database_operation(format!("更新学科失败: {e}")))?;

        Ok(model.into_disciplina())
    }

    /// 切换学科启用状态
    pub async fn toggle_disciplina_active_impl(&self, id: i64) -> Result<bool> {
        let existing = find_disciplina(&self.db, id).await?;
        let ativa = !existing.ativa;

        ActiveModel {
            id: Set(id),
            ativa: Set(ativa),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| GestaoError::database_operation(format!("更新学科状态失败: {e}")))?;

        Ok(ativa)
    }

    /// 删除学科（仍被任何关联、成绩或缺勤引用时拒绝）
    pub async fn delete_disciplina_impl(&self, id: i64) -> Result<()> {
        find_disciplina(&self.db, id).await?;

        let associations = DisciplinaProfessores::find()
            .filter(DpColumn::DisciplinaId.eq(id))
            .count(&self.db)
            .await?;
        if associations > 0 {
            return Err(GestaoError::has_associations(
                "Não é possível excluir uma disciplina que possui professores ou turmas associados",
            ));
        }

        let grades = Notas::find()
            .filter(NotaColumn::DisciplinaId.eq(id))
            .count(&self.db)
            .await?;
        if grades > 0 {
            return Err(GestaoError::has_grades(
                "Não é possível excluir uma disciplina que possui notas lançadas",
            ));
        }

        let absences = Faltas::find()
            .filter(FaltaColumn::DisciplinaId.eq(id))
            .count(&self.db)
            .await?;
        if absences > 0 {
            return Err(GestaoError::has_absences(
                "Não é possível excluir uma disciplina que possui faltas registradas",
            ));
        }

        Disciplinas::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除学科失败: {e}")))?;

        Ok(())
    }

    /// 按名称列出所有学科
    pub async fn list_disciplinas_impl(&self) -> Result<Vec<Disciplina>> {
        let items = Disciplinas::find()
            .order_by_asc(Column::Nome)
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询学科列表失败: {e}")))?;

        Ok(items.into_iter().map(|m| m.into_disciplina()).collect())
    }
}
