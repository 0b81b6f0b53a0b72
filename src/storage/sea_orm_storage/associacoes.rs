use super::SeaOrmStorage;
use super::disciplinas::find_disciplina;
use super::hydrate::atribuicoes;
use super::professores::find_professor;
use super::turmas::find_turma;
use crate::entity::disciplina_professores::{ActiveModel, Column, Entity as DisciplinaProfessores};
use crate::errors::{GestaoError, Result};
use crate::models::associacoes::{entities::Atribuicao, requests::CreateAssociacaoRequest};
use chrono::Datelike;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建关联（无班级为资质，有班级为授课安排）
    pub async fn create_associacao_impl(&self, req: CreateAssociacaoRequest) -> Result<Atribuicao> {
        if req.professor_id.is_none() && req.turma_id.is_none() {
            return Err(GestaoError::validation(
                "Informe o professor, a turma ou ambos",
            ));
        }
        let ano = req.ano.unwrap_or_else(|| chrono::Utc::now().year());

        let txn = self.db.begin().await?;

        find_disciplina(&txn, req.disciplina_id).await?;
        if let Some(professor_id) = req.professor_id {
            find_professor(&txn, professor_id).await?;
        }
        if let Some(turma_id) = req.turma_id {
            find_turma(&txn, turma_id).await?;
        }

        // 唯一索引中 NULL 互不相等，需要显式按 IS NULL 比较
        let mut existing = DisciplinaProfessores::find()
            .filter(Column::DisciplinaId.eq(req.disciplina_id))
            .filter(Column::Ano.eq(ano));
        existing = match req.professor_id {
            Some(id) => existing.filter(Column::ProfessorId.eq(id)),
            None => existing.filter(Column::ProfessorId.is_null()),
        };
        existing = match req.turma_id {
            Some(id) => existing.filter(Column::TurmaId.eq(id)),
            None => existing.filter(Column::TurmaId.is_null()),
        };
        if existing.count(&txn).await? > 0 {
            return Err(GestaoError::duplicate_association("Esta associação já existe"));
        }

        let row = ActiveModel {
            disciplina_id: Set(req.disciplina_id),
            professor_id: Set(req.professor_id),
            turma_id: Set(req.turma_id),
            ano: Set(ano),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("创建关联失败: {e}")))?;

        let mut hydrated = atribuicoes(&txn, vec![row]).await?;
        txn.commit().await?;

        hydrated
            .pop()
            .ok_or_else(|| GestaoError::internal("Associação criada não pôde ser carregada"))
    }

    /// 列出关联，可按教师筛选
    pub async fn list_associacoes_impl(&self, professor_id: Option<i64>) -> Result<Vec<Atribuicao>> {
        let mut select = DisciplinaProfessores::find();
        if let Some(id) = professor_id {
            select = select.filter(Column::ProfessorId.eq(id));
        }

        let rows = select
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询关联列表失败: {e}")))?;

        atribuicoes(&self.db, rows).await
    }

    /// 删除关联
    pub async fn delete_associacao_impl(&self, id: i64) -> Result<()> {
        let result = DisciplinaProfessores::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除关联失败: {e}")))?;

        if result.rows_affected == 0 {
            return Err(GestaoError::not_found(format!(
                "Associação {id} não encontrada"
            )));
        }
        Ok(())
    }
}
