use super::SeaOrmStorage;
use super::disciplinas::ensure_disciplinas_exist;
use super::hydrate::professor_views;
use super::users::{ensure_email_available, flip_user_active, insert_user, update_user_fields};
use crate::entity::disciplina_professores::{
    ActiveModel as DpActiveModel, Column as DpColumn, Entity as DisciplinaProfessores,
};
use crate::entity::faltas::{Column as FaltaColumn, Entity as Faltas};
use crate::entity::notas::{Column as NotaColumn, Entity as Notas};
use crate::entity::professores::{ActiveModel, Column, Entity as Professores, Model};
use crate::entity::users::Entity as Users;
use crate::errors::{GestaoError, Result};
use crate::models::professores::{
    entities::ProfessorView,
    requests::{CreateProfessorRequest, UpdateProfessorRequest},
};
use crate::models::users::entities::UserRole;
use chrono::Datelike;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::collections::HashSet;
use tracing::debug;

/// 获取教师档案，不存在时返回 NotFound
pub(super) async fn find_professor<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Model> {
    Professores::find_by_id(id)
        .one(conn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("查询教师失败: {e}")))?
        .ok_or_else(|| GestaoError::not_found(format!("Professor {id} não encontrado")))
}

async fn ensure_registration_available<C: ConnectionTrait>(
    conn: &C,
    registration: &str,
    exclude_id: Option<i64>,
) -> Result<()> {
    let mut select = Professores::find().filter(Column::Registration.eq(registration));
    if let Some(id) = exclude_id {
        select = select.filter(Column::Id.ne(id));
    }

    if select.count(conn).await? > 0 {
        return Err(GestaoError::duplicate_registration(format!(
            "A matrícula {registration} já está em uso"
        )));
    }
    Ok(())
}

/// 去重并保持原有顺序
fn distinct_ids(ids: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// 为教师写入资质行（turma_id 为空）
async fn insert_capacitacoes<C: ConnectionTrait>(
    conn: &C,
    professor_id: i64,
    disciplina_ids: &[i64],
) -> Result<()> {
    let now = chrono::Utc::now();
    for disciplina_id in disciplina_ids {
        DpActiveModel {
            disciplina_id: Set(*disciplina_id),
            professor_id: Set(Some(professor_id)),
            turma_id: Set(None),
            ano: Set(now.year()),
            created_at: Set(now.timestamp()),
            ..Default::default()
        }
        .insert(conn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("创建教师资质失败: {e}")))?;
    }
    Ok(())
}

/// 取消教师在所有班级中的授课分配，资质保持不变
pub(super) async fn unassign_vinculos<C: ConnectionTrait>(
    conn: &C,
    professor_id: i64,
) -> Result<u64> {
    let result = DisciplinaProfessores::update_many()
        .set(DpActiveModel {
            professor_id: Set(None),
            ..Default::default()
        })
        .filter(DpColumn::ProfessorId.eq(professor_id))
        .filter(DpColumn::TurmaId.is_not_null())
        .exec(conn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("取消授课分配失败: {e}")))?;

    Ok(result.rows_affected)
}

impl SeaOrmStorage {
    /// 创建教师：用户 + 档案 + 资质，在同一事务中完成
    pub async fn create_professor_impl(&self, req: CreateProfessorRequest) -> Result<ProfessorView> {
        req.validate()?;
        if req.password.is_empty() {
            return Err(GestaoError::validation("Senha é obrigatória"));
        }

        let email = req.email.trim();
        let registration = req.registration.trim();
        let disciplina_ids = distinct_ids(&req.disciplinas);

        let txn = self.db.begin().await?;

        ensure_email_available(&txn, email, None).await?;
        ensure_registration_available(&txn, registration, None).await?;
        ensure_disciplinas_exist(&txn, &disciplina_ids).await?;

        let user = insert_user(
            &txn,
            req.name.trim(),
            email,
            &req.password,
            UserRole::Professor,
        )
        .await?;

        let professor = ActiveModel {
            user_id: Set(user.id),
            registration: Set(registration.to_string()),
            specialty: Set(req.specialty.filter(|s| !s.trim().is_empty())),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("创建教师档案失败: {e}")))?;

        insert_capacitacoes(&txn, professor.id, &disciplina_ids).await?;

        txn.commit().await?;
        debug!(
            "Professor {} created with {} capacitações",
            professor.id,
            disciplina_ids.len()
        );

        self.get_professor_view_impl(professor.id).await
    }

    /// 更新教师；提供 disciplinas 时整体替换资质并取消其授课分配
    pub async fn update_professor_impl(
        &self,
        id: i64,
        req: UpdateProfessorRequest,
    ) -> Result<ProfessorView> {
        let txn = self.db.begin().await?;

        let professor = find_professor(&txn, id).await?;
        req.validate()?;

        let email = req.email.trim();
        let registration = req.registration.trim();
        let disciplina_ids = req.disciplinas.as_deref().map(distinct_ids);

        ensure_email_available(&txn, email, Some(professor.user_id)).await?;
        ensure_registration_available(&txn, registration, Some(id)).await?;
        if let Some(ids) = &disciplina_ids {
            ensure_disciplinas_exist(&txn, ids).await?;
        }

        update_user_fields(
            &txn,
            professor.user_id,
            req.name.trim(),
            email,
            req.password,
        )
        .await?;

        ActiveModel {
            id: Set(id),
            registration: Set(registration.to_string()),
            specialty: Set(req.specialty.filter(|s| !s.trim().is_empty())),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("更新教师档案失败: {e}")))?;

        if let Some(ids) = disciplina_ids {
            DisciplinaProfessores::delete_many()
                .filter(DpColumn::ProfessorId.eq(id))
                .filter(DpColumn::TurmaId.is_null())
                .exec(&txn)
                .await
                .map_err(|e| GestaoError::database_operation(format!("删除教师资质失败: {e}")))?;

            unassign_vinculos(&txn, id).await?;
            insert_capacitacoes(&txn, id, &ids).await?;
        }

        txn.commit().await?;
        self.get_professor_view_impl(id).await
    }

    /// 删除教师（仍有授课分配、成绩或缺勤记录时拒绝）
    pub async fn delete_professor_impl(&self, id: i64) -> Result<()> {
        let txn = self.db.begin().await?;

        let professor = find_professor(&txn, id).await?;

        let vinculos = DisciplinaProfessores::find()
            .filter(DpColumn::ProfessorId.eq(id))
            .filter(DpColumn::TurmaId.is_not_null())
            .count(&txn)
            .await?;
        if vinculos > 0 {
            return Err(GestaoError::has_active_assignments(
                "Não é possível excluir um professor com turmas atribuídas",
            ));
        }

        let grades = Notas::find()
            .filter(NotaColumn::ProfessorId.eq(id))
            .count(&txn)
            .await?;
        if grades > 0 {
            return Err(GestaoError::has_grades(
                "Não é possível excluir um professor que lançou notas",
            ));
        }

        let absences = Faltas::find()
            .filter(FaltaColumn::ProfessorId.eq(id))
            .count(&txn)
            .await?;
        if absences > 0 {
            return Err(GestaoError::has_absences(
                "Não é possível excluir um professor que registrou faltas",
            ));
        }

        DisciplinaProfessores::delete_many()
            .filter(DpColumn::ProfessorId.eq(id))
            .exec(&txn)
            .await?;
        Professores::delete_by_id(id).exec(&txn).await?;
        Users::delete_by_id(professor.user_id)
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除教师用户失败: {e}")))?;

        txn.commit().await?;
        Ok(())
    }

    /// 切换教师启用状态；停用时取消其所有授课分配
    pub async fn toggle_professor_active_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        let professor = find_professor(&txn, id).await?;
        let active = flip_user_active(&txn, professor.user_id).await?;

        if !active {
            let cleared = unassign_vinculos(&txn, id).await?;
            debug!("Professor {} deactivated, {} vínculos cleared", id, cleared);
        }

        txn.commit().await?;
        Ok(active)
    }

    /// 列出所有教师（按姓名排序）
    pub async fn list_professores_impl(&self) -> Result<Vec<ProfessorView>> {
        let professores = Professores::find()
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询教师列表失败: {e}")))?;

        professor_views(&self.db, professores).await
    }

    /// 教师视图
    pub async fn get_professor_view_impl(&self, id: i64) -> Result<ProfessorView> {
        let professor = find_professor(&self.db, id).await?;
        professor_views(&self.db, vec![professor])
            .await?
            .pop()
            .ok_or_else(|| GestaoError::not_found(format!("Professor {id} não encontrado")))
    }

    /// 通过用户 ID 获取教师视图
    pub async fn get_professor_view_by_user_impl(&self, user_id: i64) -> Result<ProfessorView> {
        let professor = Professores::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
            .ok_or_else(|| GestaoError::not_found("Perfil de professor não encontrado"))?;

        professor_views(&self.db, vec![professor])
            .await?
            .pop()
            .ok_or_else(|| GestaoError::not_found("Perfil de professor não encontrado"))
    }
}
