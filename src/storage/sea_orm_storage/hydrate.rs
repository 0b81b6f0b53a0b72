//! 批量组装读取模型
//!
//! 先按 ID 批量查询关联表，再在内存中拼装，避免逐行查询。

use std::collections::{HashMap, HashSet};

use crate::entity::disciplina_professores::{
    Column as DpColumn, Entity as DisciplinaProfessores, Model as DpModel,
};
use crate::entity::disciplinas::{
    Column as DisciplinaColumn, Entity as Disciplinas, Model as DisciplinaModel,
};
use crate::entity::professores::{
    Column as ProfessorColumn, Entity as Professores, Model as ProfessorModel,
};
use crate::entity::turmas::{Column as TurmaColumn, Entity as Turmas, Model as TurmaModel};
use crate::entity::users::{Column as UserColumn, Entity as Users, Model as UserModel};
use crate::errors::{GestaoError, Result};
use crate::models::{
    associacoes::entities::Atribuicao,
    disciplinas::entities::{Disciplina, DisciplinaRef},
    professores::entities::{ProfessorRef, ProfessorView, VinculoResumo},
    turmas::entities::{TurmaDisciplina, TurmaView},
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use tracing::warn;

fn unique_ids(ids: impl IntoIterator<Item = i64>) -> Vec<i64> {
    ids.into_iter().collect::<HashSet<_>>().into_iter().collect()
}

pub(super) fn disciplina_ref(m: &DisciplinaModel) -> DisciplinaRef {
    DisciplinaRef {
        id: m.id,
        nome: m.nome.clone(),
        codigo: m.codigo.clone(),
    }
}

pub(super) async fn users_by_id<C: ConnectionTrait>(
    conn: &C,
    ids: impl IntoIterator<Item = i64>,
) -> Result<HashMap<i64, UserModel>> {
    let ids = unique_ids(ids);
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let users = Users::find()
        .filter(UserColumn::Id.is_in(ids))
        .all(conn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("查询用户失败: {e}")))?;

    Ok(users.into_iter().map(|u| (u.id, u)).collect())
}

pub(super) async fn disciplinas_by_id<C: ConnectionTrait>(
    conn: &C,
    ids: impl IntoIterator<Item = i64>,
) -> Result<HashMap<i64, DisciplinaModel>> {
    let ids = unique_ids(ids);
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let disciplinas = Disciplinas::find()
        .filter(DisciplinaColumn::Id.is_in(ids))
        .all(conn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("查询学科失败: {e}")))?;

    Ok(disciplinas.into_iter().map(|d| (d.id, d)).collect())
}

pub(super) async fn turmas_by_id<C: ConnectionTrait>(
    conn: &C,
    ids: impl IntoIterator<Item = i64>,
) -> Result<HashMap<i64, TurmaModel>> {
    let ids = unique_ids(ids);
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let turmas = Turmas::find()
        .filter(TurmaColumn::Id.is_in(ids))
        .all(conn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("查询班级失败: {e}")))?;

    Ok(turmas.into_iter().map(|t| (t.id, t)).collect())
}

/// 教师 ID -> 教师摘要（姓名来自用户表）
pub(super) async fn professor_refs<C: ConnectionTrait>(
    conn: &C,
    ids: impl IntoIterator<Item = i64>,
) -> Result<HashMap<i64, ProfessorRef>> {
    let ids = unique_ids(ids);
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = Professores::find()
        .filter(ProfessorColumn::Id.is_in(ids))
        .find_also_related(Users)
        .all(conn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("查询教师失败: {e}")))?;

    Ok(rows
        .into_iter()
        .filter_map(|(professor, user)| {
            user.map(|u| {
                (
                    professor.id,
                    ProfessorRef {
                        id: professor.id,
                        name: u.name,
                    },
                )
            })
        })
        .collect())
}

/// 组装教师视图，按姓名排序
///
/// 资质与授课安排分别查询。
pub(super) async fn professor_views<C: ConnectionTrait>(
    conn: &C,
    professores: Vec<ProfessorModel>,
) -> Result<Vec<ProfessorView>> {
    if professores.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i64> = professores.iter().map(|p| p.id).collect();
    let users = users_by_id(conn, professores.iter().map(|p| p.user_id)).await?;

    let capacitacao_rows = DisciplinaProfessores::find()
        .filter(DpColumn::ProfessorId.is_in(ids.iter().copied()))
        .filter(DpColumn::TurmaId.is_null())
        .all(conn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("查询教师资质失败: {e}")))?;

    let vinculo_rows = DisciplinaProfessores::find()
        .filter(DpColumn::ProfessorId.is_in(ids))
        .filter(DpColumn::TurmaId.is_not_null())
        .all(conn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("查询教师授课安排失败: {e}")))?;

    let disciplinas = disciplinas_by_id(
        conn,
        capacitacao_rows
            .iter()
            .chain(vinculo_rows.iter())
            .map(|r| r.disciplina_id),
    )
    .await?;
    let turmas = turmas_by_id(conn, vinculo_rows.iter().filter_map(|r| r.turma_id)).await?;

    let mut views = Vec::with_capacity(professores.len());
    for professor in professores {
        let user = users.get(&professor.user_id).cloned().ok_or_else(|| {
            GestaoError::internal(format!("教师 {} 缺少用户记录", professor.id))
        })?;

        let mut seen = HashSet::new();
        let mut capacitacoes: Vec<Disciplina> = capacitacao_rows
            .iter()
            .filter(|r| r.professor_id == Some(professor.id))
            .filter_map(|r| disciplinas.get(&r.disciplina_id))
            .filter(|d| seen.insert(d.id))
            .map(|d| d.clone().into_disciplina())
            .collect();

        let mut vinculos: Vec<VinculoResumo> = vinculo_rows
            .iter()
            .filter(|r| r.professor_id == Some(professor.id))
            .filter_map(|row| {
                let disciplina = disciplinas.get(&row.disciplina_id)?;
                let turma = turmas.get(&row.turma_id?)?;
                Some(VinculoResumo {
                    id: row.id,
                    turma: turma.to_ref(),
                    disciplina: disciplina_ref(disciplina),
                    ano: row.ano,
                })
            })
            .collect();

        capacitacoes.sort_by(|a, b| a.nome.cmp(&b.nome));
        vinculos.sort_by(|a, b| {
            (a.turma.nome.as_str(), a.disciplina.nome.as_str())
                .cmp(&(b.turma.nome.as_str(), b.disciplina.nome.as_str()))
        });

        views.push(ProfessorView {
            professor: professor.into_professor(user),
            capacitacoes,
            vinculos,
        });
    }

    views.sort_by(|a, b| a.professor.name.cmp(&b.professor.name));
    Ok(views)
}

/// 组装班级视图，班级按名称排序，班级内按学科名排序
pub(super) async fn turma_views<C: ConnectionTrait>(
    conn: &C,
    turmas: Vec<TurmaModel>,
) -> Result<Vec<TurmaView>> {
    if turmas.is_empty() {
        return Ok(Vec::new());
    }

    let rows = DisciplinaProfessores::find()
        .filter(DpColumn::TurmaId.is_in(turmas.iter().map(|t| t.id)))
        .all(conn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("查询班级关联失败: {e}")))?;

    let disciplinas = disciplinas_by_id(conn, rows.iter().map(|r| r.disciplina_id)).await?;
    let professores = professor_refs(conn, rows.iter().filter_map(|r| r.professor_id)).await?;

    let mut views: Vec<TurmaView> = turmas
        .into_iter()
        .map(|turma| {
            let mut items: Vec<TurmaDisciplina> = rows
                .iter()
                .filter(|r| r.turma_id == Some(turma.id))
                .filter_map(|r| {
                    disciplinas.get(&r.disciplina_id).map(|d| TurmaDisciplina {
                        id: r.id,
                        disciplina: disciplina_ref(d),
                        professor: r.professor_id.and_then(|pid| professores.get(&pid).cloned()),
                    })
                })
                .collect();
            items.sort_by(|a, b| a.disciplina.nome.cmp(&b.disciplina.nome));

            TurmaView {
                turma: turma.into_turma(),
                disciplinas: items,
            }
        })
        .collect();

    views.sort_by(|a, b| a.turma.nome.cmp(&b.turma.nome));
    Ok(views)
}

/// 把关联行转换为 `Atribuicao`，按教师名、学科名排序（未分配的排在前面）
pub(super) async fn atribuicoes<C: ConnectionTrait>(
    conn: &C,
    rows: Vec<DpModel>,
) -> Result<Vec<Atribuicao>> {
    let disciplinas = disciplinas_by_id(conn, rows.iter().map(|r| r.disciplina_id)).await?;
    let professores = professor_refs(conn, rows.iter().filter_map(|r| r.professor_id)).await?;
    let turmas = turmas_by_id(conn, rows.iter().filter_map(|r| r.turma_id)).await?;

    let mut items: Vec<Atribuicao> = rows
        .into_iter()
        .filter_map(|row| {
            let disciplina = disciplina_ref(disciplinas.get(&row.disciplina_id)?);
            let professor = row.professor_id.and_then(|pid| professores.get(&pid).cloned());
            let turma = row
                .turma_id
                .and_then(|tid| turmas.get(&tid))
                .map(|t| t.to_ref());

            let atribuicao = Atribuicao::from_parts(row.id, row.ano, disciplina, professor, turma);
            if atribuicao.is_none() {
                warn!("Skipping association row {} without turma or professor", row.id);
            }
            atribuicao
        })
        .collect();

    items.sort_by(|a, b| {
        let key_a = (a.professor().map(|p| p.name.as_str()), a.disciplina().nome.as_str());
        let key_b = (b.professor().map(|p| p.name.as_str()), b.disciplina().nome.as_str());
        key_a.cmp(&key_b)
    });
    Ok(items)
}
