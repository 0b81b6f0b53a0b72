use super::SeaOrmStorage;
use super::disciplinas::ensure_disciplinas_exist;
use super::hydrate::turma_views;
use crate::entity::alunos::{Column as AlunoColumn, Entity as Alunos};
use crate::entity::disciplina_professores::{
    ActiveModel as DpActiveModel, Column as DpColumn, Entity as DisciplinaProfessores,
};
use crate::entity::professores::{Column as ProfessorColumn, Entity as Professores};
use crate::entity::turmas::{ActiveModel, Column, Entity as Turmas, Model};
use crate::errors::{GestaoError, Result};
use crate::models::turmas::{
    entities::TurmaView,
    requests::{TurmaDisciplinaInput, TurmaRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::collections::HashSet;

/// 获取班级，不存在时返回 NotFound
pub(super) async fn find_turma<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Model> {
    Turmas::find_by_id(id)
        .one(conn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("查询班级失败: {e}")))?
        .ok_or_else(|| GestaoError::not_found(format!("Turma {id} não encontrada")))
}

/// 确认所有教师 ID 都存在
pub(super) async fn ensure_professores_exist<C: ConnectionTrait>(
    conn: &C,
    ids: &[i64],
) -> Result<()> {
    if ids.is_empty() {
        return Ok(());
    }

    let found: HashSet<i64> = Professores::find()
        .filter(ProfessorColumn::Id.is_in(ids.iter().copied()))
        .all(conn)
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();

    if let Some(missing) = ids.iter().find(|id| !found.contains(id)) {
        return Err(GestaoError::not_found(format!(
            "Professor {missing} não encontrado"
        )));
    }
    Ok(())
}

async fn ensure_nome_available<C: ConnectionTrait>(
    conn: &C,
    nome: &str,
    exclude_id: Option<i64>,
) -> Result<()> {
    let mut select = Turmas::find().filter(Column::Nome.eq(nome));
    if let Some(id) = exclude_id {
        select = select.filter(Column::Id.ne(id));
    }

    if select.count(conn).await? > 0 {
        return Err(GestaoError::duplicate_name(format!(
            "Já existe uma turma com o nome {nome}"
        )));
    }
    Ok(())
}

/// 校验学科与教师引用
async fn ensure_references<C: ConnectionTrait>(
    conn: &C,
    items: &[TurmaDisciplinaInput],
) -> Result<()> {
    let disciplina_ids: Vec<i64> = items.iter().map(|i| i.disciplina_id).collect();
    ensure_disciplinas_exist(conn, &disciplina_ids).await?;

    let professor_ids: Vec<i64> = items.iter().filter_map(|i| i.professor_id).collect();
    ensure_professores_exist(conn, &professor_ids).await
}

/// 写入班级的授课安排行
async fn insert_vinculos<C: ConnectionTrait>(
    conn: &C,
    turma_id: i64,
    ano: i32,
    items: &[TurmaDisciplinaInput],
) -> Result<()> {
    let now = chrono::Utc::now().timestamp();
    for item in items {
        DpActiveModel {
            disciplina_id: Set(item.disciplina_id),
            professor_id: Set(item.professor_id),
            turma_id: Set(Some(turma_id)),
            ano: Set(ano),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(conn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("创建班级学科失败: {e}")))?;
    }
    Ok(())
}

impl SeaOrmStorage {
    /// 创建班级及其授课安排
    pub async fn create_turma_impl(&self, req: TurmaRequest) -> Result<TurmaView> {
        req.validate()?;
        let nome = req.nome.trim();

        let txn = self.db.begin().await?;

        ensure_nome_available(&txn, nome, None).await?;
        ensure_references(&txn, &req.disciplinas).await?;

        let now = chrono::Utc::now().timestamp();
        let turma = ActiveModel {
            nome: Set(nome.to_string()),
            serie: Set(req.serie.trim().to_string()),
            ano: Set(req.ano),
            ativa: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("创建班级失败: {e}")))?;

        insert_vinculos(&txn, turma.id, req.ano, &req.disciplinas).await?;

        txn.commit().await?;
        self.get_turma_view_impl(turma.id).await
    }

    /// 更新班级；授课安排整体替换
    pub async fn update_turma_impl(&self, id: i64, req: TurmaRequest) -> Result<TurmaView> {
        let txn = self.db.begin().await?;

        find_turma(&txn, id).await?;
        req.validate()?;
        let nome = req.nome.trim();

        ensure_nome_available(&txn, nome, Some(id)).await?;
        ensure_references(&txn, &req.disciplinas).await?;

        ActiveModel {
            id: Set(id),
            nome: Set(nome.to_string()),
            serie: Set(req.serie.trim().to_string()),
            ano: Set(req.ano),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("更新班级失败: {e}")))?;

        DisciplinaProfessores::delete_many()
            .filter(DpColumn::TurmaId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除班级学科失败: {e}")))?;

        insert_vinculos(&txn, id, req.ano, &req.disciplinas).await?;

        txn.commit().await?;
        self.get_turma_view_impl(id).await
    }

    /// 删除班级
    ///
    /// 依次检查：有在读学生、班级仍启用、仍有任何授课安排行（无论是否已分配教师）。
    pub async fn delete_turma_impl(&self, id: i64) -> Result<()> {
        let txn = self.db.begin().await?;

        let turma = find_turma(&txn, id).await?;

        let alunos = Alunos::find()
            .filter(AlunoColumn::TurmaId.eq(id))
            .count(&txn)
            .await?;
        if alunos > 0 {
            return Err(GestaoError::has_enrolled_students(
                "Não é possível excluir uma turma que possui alunos matriculados",
            ));
        }

        if turma.ativa {
            return Err(GestaoError::turma_is_active(
                "Desative a turma antes de excluí-la",
            ));
        }

        let rows = DisciplinaProfessores::find()
            .filter(DpColumn::TurmaId.eq(id))
            .count(&txn)
            .await?;
        if rows > 0 {
            return Err(GestaoError::has_associations(
                "Não é possível excluir uma turma que possui disciplinas associadas",
            ));
        }

        Turmas::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除班级失败: {e}")))?;

        txn.commit().await?;
        Ok(())
    }

    /// 切换班级启用状态（无级联）
    pub async fn toggle_turma_active_impl(&self, id: i64) -> Result<bool> {
        let turma = find_turma(&self.db, id).await?;
        let ativa = !turma.ativa;

        ActiveModel {
            id: Set(id),
            ativa: Set(ativa),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| GestaoError::database_operation(format!("更新班级状态失败: {e}")))?;

        Ok(ativa)
    }

    /// 列出所有班级及其授课安排
    pub async fn list_turmas_impl(&self) -> Result<Vec<TurmaView>> {
        let turmas = Turmas::find()
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询班级列表失败: {e}")))?;

        turma_views(&self.db, turmas).await
    }

    /// 班级视图
    pub async fn get_turma_view_impl(&self, id: i64) -> Result<TurmaView> {
        let turma = find_turma(&self.db, id).await?;
        turma_views(&self.db, vec![turma])
            .await?
            .pop()
            .ok_or_else(|| GestaoError::not_found(format!("Turma {id} não encontrada")))
    }
}
