use super::SeaOrmStorage;
use super::hydrate::{turmas_by_id, users_by_id};
use super::turmas::find_turma;
use super::users::{ensure_email_available, flip_user_active, insert_user, update_user_fields};
use crate::entity::alunos::{ActiveModel, Column, Entity as Alunos, Model};
use crate::entity::faltas::{Column as FaltaColumn, Entity as Faltas};
use crate::entity::notas::{Column as NotaColumn, Entity as Notas};
use crate::entity::users::Entity as Users;
use crate::errors::{GestaoError, Result};
use crate::models::alunos::{
    entities::{Aluno, AlunoStatus},
    requests::{CreateAlunoRequest, UpdateAlunoRequest},
};
use crate::models::users::entities::UserRole;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};

async fn find_aluno<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Model> {
    Alunos::find_by_id(id)
        .one(conn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("查询学生失败: {e}")))?
        .ok_or_else(|| GestaoError::not_found(format!("Aluno {id} não encontrado")))
}

async fn ensure_matricula_available<C: ConnectionTrait>(
    conn: &C,
    matricula: &str,
    exclude_id: Option<i64>,
) -> Result<()> {
    let mut select = Alunos::find().filter(Column::Matricula.eq(matricula));
    if let Some(id) = exclude_id {
        select = select.filter(Column::Id.ne(id));
    }

    if select.count(conn).await? > 0 {
        return Err(GestaoError::duplicate_matricula(format!(
            "A matrícula {matricula} já está em uso"
        )));
    }
    Ok(())
}

/// 组装学生业务模型，按姓名排序
async fn aluno_views<C: ConnectionTrait>(conn: &C, alunos: Vec<Model>) -> Result<Vec<Aluno>> {
    let users = users_by_id(conn, alunos.iter().map(|a| a.user_id)).await?;
    let turmas = turmas_by_id(conn, alunos.iter().filter_map(|a| a.turma_id)).await?;

    let mut items = Vec::with_capacity(alunos.len());
    for aluno in alunos {
        let user = users
            .get(&aluno.user_id)
            .cloned()
            .ok_or_else(|| GestaoError::internal(format!("学生 {} 缺少用户记录", aluno.id)))?;
        let turma = aluno
            .turma_id
            .and_then(|tid| turmas.get(&tid))
            .map(|t| t.to_ref());
        items.push(aluno.into_aluno(user, turma));
    }

    items.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(items)
}

impl SeaOrmStorage {
    /// 创建学生：用户 + 档案
    pub async fn create_aluno_impl(&self, req: CreateAlunoRequest) -> Result<Aluno> {
        req.validate()?;
        if req.password.is_empty() {
            return Err(GestaoError::validation("Senha é obrigatória"));
        }

        let email = req.email.trim();
        let matricula = req.matricula.trim();

        let txn = self.db.begin().await?;

        ensure_email_available(&txn, email, None).await?;
        ensure_matricula_available(&txn, matricula, None).await?;
        if let Some(turma_id) = req.turma_id {
            find_turma(&txn, turma_id).await?;
        }

        let user =
            insert_user(&txn, req.name.trim(), email, &req.password, UserRole::Aluno).await?;

        let aluno = ActiveModel {
            user_id: Set(user.id),
            matricula: Set(matricula.to_string()),
            data_nascimento: Set(req.data_nascimento),
            responsavel: Set(req.responsavel.filter(|r| !r.trim().is_empty())),
            status: Set(AlunoStatus::Cursando.to_string()),
            turma_id: Set(req.turma_id),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("创建学生档案失败: {e}")))?;

        let mut items = aluno_views(&txn, vec![aluno]).await?;
        txn.commit().await?;

        items
            .pop()
            .ok_or_else(|| GestaoError::internal("Aluno criado não pôde ser carregado"))
    }

    /// 更新学生；turma_id 为空时取消入班，未提供出生日期时保留原值
    pub async fn update_aluno_impl(&self, id: i64, req: UpdateAlunoRequest) -> Result<Aluno> {
        let txn = self.db.begin().await?;

        let existing = find_aluno(&txn, id).await?;
        req.validate()?;

        let email = req.email.trim();
        let matricula = req.matricula.trim();

        ensure_email_available(&txn, email, Some(existing.user_id)).await?;
        ensure_matricula_available(&txn, matricula, Some(id)).await?;
        if let Some(turma_id) = req.turma_id {
            find_turma(&txn, turma_id).await?;
        }

        update_user_fields(&txn, existing.user_id, req.name.trim(), email, req.password).await?;

        let status = req
            .status
            .map(|s| s.to_string())
            .unwrap_or(existing.status);

        let aluno = ActiveModel {
            id: Set(id),
            matricula: Set(matricula.to_string()),
            data_nascimento: Set(req.data_nascimento.or(existing.data_nascimento)),
            responsavel: Set(req.responsavel.filter(|r| !r.trim().is_empty())),
            status: Set(status),
            turma_id: Set(req.turma_id),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("更新学生档案失败: {e}")))?;

        let mut items = aluno_views(&txn, vec![aluno]).await?;
        txn.commit().await?;

        items
            .pop()
            .ok_or_else(|| GestaoError::internal("Aluno atualizado não pôde ser carregado"))
    }

    /// 删除学生及其成绩、缺勤记录和用户
    pub async fn delete_aluno_impl(&self, id: i64) -> Result<()> {
        let txn = self.db.begin().await?;

        let aluno = find_aluno(&txn, id).await?;

        Notas::delete_many()
            .filter(NotaColumn::AlunoId.eq(id))
            .exec(&txn)
            .await?;
        Faltas::delete_many()
            .filter(FaltaColumn::AlunoId.eq(id))
            .exec(&txn)
            .await?;
        Alunos::delete_by_id(id).exec(&txn).await?;
        Users::delete_by_id(aluno.user_id)
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除学生用户失败: {e}")))?;

        txn.commit().await?;
        Ok(())
    }

    /// 切换学生启用状态
    pub async fn toggle_aluno_active_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        let aluno = find_aluno(&txn, id).await?;
        let active = flip_user_active(&txn, aluno.user_id).await?;

        txn.commit().await?;
        Ok(active)
    }

    /// 列出所有学生（按姓名排序）
    pub async fn list_alunos_impl(&self) -> Result<Vec<Aluno>> {
        let alunos = Alunos::find()
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询学生列表失败: {e}")))?;

        aluno_views(&self.db, alunos).await
    }

    /// 通过用户 ID 获取学生
    pub async fn get_aluno_by_user_impl(&self, user_id: i64) -> Result<Aluno> {
        let aluno = Alunos::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
            .ok_or_else(|| GestaoError::not_found("Perfil de aluno não encontrado"))?;

        aluno_views(&self.db, vec![aluno])
            .await?
            .pop()
            .ok_or_else(|| GestaoError::not_found("Perfil de aluno não encontrado"))
    }
}
