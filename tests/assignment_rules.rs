//! 关联一致性规则的集成测试（内存 SQLite）

use chrono::{Datelike, NaiveDate};
use gestao_escolar::entity::{faltas, notas};
use gestao_escolar::errors::GestaoError;
use gestao_escolar::models::{
    alunos::{
        entities::AlunoStatus,
        requests::{CreateAlunoRequest, UpdateAlunoRequest},
    },
    associacoes::{entities::Atribuicao, requests::CreateAssociacaoRequest},
    disciplinas::{
        entities::Disciplina,
        requests::{CreateDisciplinaRequest, UpdateDisciplinaRequest},
    },
    professores::{
        entities::ProfessorView,
        requests::{CreateProfessorRequest, UpdateProfessorRequest},
    },
    turmas::{
        entities::TurmaView,
        requests::{TurmaDisciplinaInput, TurmaRequest},
    },
};
use gestao_escolar::storage::Storage;
use gestao_escolar::storage::sea_orm_storage::SeaOrmStorage;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, Set};

async fn setup() -> (SeaOrmStorage, DatabaseConnection) {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    let storage = SeaOrmStorage::from_connection(db.clone()).await.unwrap();
    (storage, db)
}

async fn disciplina(storage: &SeaOrmStorage, nome: &str, codigo: &str) -> Disciplina {
    storage
        .create_disciplina(CreateDisciplinaRequest {
            nome: nome.to_string(),
            codigo: codigo.to_string(),
            carga_horaria: 4,
        })
        .await
        .unwrap()
}

fn professor_request(name: &str, email: &str, registration: &str, disciplinas: Vec<i64>) -> CreateProfessorRequest {
    CreateProfessorRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: "hash".to_string(),
        registration: registration.to_string(),
        specialty: None,
        disciplinas,
    }
}

async fn professor(
    storage: &SeaOrmStorage,
    name: &str,
    email: &str,
    registration: &str,
    disciplinas: Vec<i64>,
) -> ProfessorView {
    storage
        .create_professor(professor_request(name, email, registration, disciplinas))
        .await
        .unwrap()
}

fn turma_request(nome: &str, rows: &[(i64, Option<i64>)]) -> TurmaRequest {
    TurmaRequest {
        nome: nome.to_string(),
        serie: "1º ANO".to_string(),
        ano: 2024,
        disciplinas: rows
            .iter()
            .map(|(disciplina_id, professor_id)| TurmaDisciplinaInput {
                disciplina_id: *disciplina_id,
                professor_id: *professor_id,
            })
            .collect(),
    }
}

fn aluno_request(name: &str, email: &str, matricula: &str, turma_id: Option<i64>) -> CreateAlunoRequest {
    CreateAlunoRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: "hash".to_string(),
        matricula: matricula.to_string(),
        data_nascimento: NaiveDate::from_ymd_opt(2010, 3, 15),
        responsavel: Some("Maria".to_string()),
        turma_id,
    }
}

/// (学科名, 教师名) 对，按学科名排列
fn pairs(view: &TurmaView) -> Vec<(String, Option<String>)> {
    view.disciplinas
        .iter()
        .map(|row| {
            (
                row.disciplina.nome.clone(),
                row.professor.as_ref().map(|p| p.name.clone()),
            )
        })
        .collect()
}

#[tokio::test]
async fn matematica_ana_primeiro_a_scenario() {
    let (storage, _db) = setup().await;

    let mat = disciplina(&storage, "Matemática", "MAT").await;
    let ana = professor(&storage, "Ana", "ana@x.com", "P1", vec![mat.id]).await;

    let view = storage.get_professor_view(ana.professor.id).await.unwrap();
    let capacitacoes: Vec<&str> = view.capacitacoes.iter().map(|d| d.nome.as_str()).collect();
    assert_eq!(capacitacoes, vec!["Matemática"]);
    assert!(view.vinculos.is_empty());

    let turma = storage
        .create_turma(turma_request("1ºA", &[(mat.id, Some(ana.professor.id))]))
        .await
        .unwrap();
    assert_eq!(
        pairs(&turma),
        vec![("Matemática".to_string(), Some("Ana".to_string()))]
    );

    storage
        .update_turma(turma.turma.id, turma_request("1ºA", &[(mat.id, None)]))
        .await
        .unwrap();
    let turma = storage.get_turma_view(turma.turma.id).await.unwrap();
    assert_eq!(pairs(&turma), vec![("Matemática".to_string(), None)]);
}

#[tokio::test]
async fn deactivating_professor_unassigns_vinculos_only() {
    let (storage, _db) = setup().await;

    let mat = disciplina(&storage, "Matemática", "MAT").await;
    let fis = disciplina(&storage, "Física", "FIS").await;
    let ana = professor(&storage, "Ana", "ana@x.com", "P1", vec![mat.id, fis.id]).await;
    let pid = ana.professor.id;

    let turma_a = storage
        .create_turma(turma_request("1ºA", &[(mat.id, Some(pid))]))
        .await
        .unwrap();
    let turma_b = storage
        .create_turma(turma_request("1ºB", &[(mat.id, Some(pid)), (fis.id, Some(pid))]))
        .await
        .unwrap();
    assert_eq!(
        storage.get_professor_view(pid).await.unwrap().vinculos.len(),
        3
    );

    let active = storage.toggle_professor_active(pid).await.unwrap();
    assert!(!active);

    let view = storage.get_professor_view(pid).await.unwrap();
    assert!(!view.professor.active);
    assert!(view.vinculos.is_empty());
    assert_eq!(view.capacitacoes.len(), 2);

    for id in [turma_a.turma.id, turma_b.turma.id] {
        let turma = storage.get_turma_view(id).await.unwrap();
        assert!(turma.disciplinas.iter().all(|row| row.professor.is_none()));
    }

    // 重新启用不会恢复授课分配
    assert!(storage.toggle_professor_active(pid).await.unwrap());
    assert!(storage.get_professor_view(pid).await.unwrap().vinculos.is_empty());
}

#[tokio::test]
async fn professor_view_keeps_capacitacoes_and_vinculos_apart() {
    let (storage, _db) = setup().await;

    let mat = disciplina(&storage, "Matemática", "MAT").await;
    let por = disciplina(&storage, "Português", "POR").await;
    let ana = professor(&storage, "Ana", "ana@x.com", "P1", vec![mat.id]).await;

    storage
        .create_turma(turma_request("1ºA", &[(por.id, Some(ana.professor.id))]))
        .await
        .unwrap();

    let view = storage.get_professor_view(ana.professor.id).await.unwrap();
    let capacitacoes: Vec<&str> = view.capacitacoes.iter().map(|d| d.nome.as_str()).collect();
    assert_eq!(capacitacoes, vec!["Matemática"]);

    assert_eq!(view.vinculos.len(), 1);
    assert_eq!(view.vinculos[0].turma.nome, "1ºA");
    assert_eq!(view.vinculos[0].disciplina.nome, "Português");
}

#[tokio::test]
async fn update_turma_replaces_assignment_rows() {
    let (storage, _db) = setup().await;

    let mat = disciplina(&storage, "Matemática", "MAT").await;
    let por = disciplina(&storage, "Português", "POR").await;
    let his = disciplina(&storage, "História", "HIS").await;
    let ana = professor(&storage, "Ana", "ana@x.com", "P1", vec![mat.id]).await;
    let bruno = professor(&storage, "Bruno", "bruno@x.com", "P2", vec![por.id]).await;

    let turma = storage
        .create_turma(turma_request(
            "2ºA",
            &[(mat.id, Some(ana.professor.id)), (por.id, None)],
        ))
        .await
        .unwrap();

    let updated = storage
        .update_turma(
            turma.turma.id,
            turma_request(
                "2ºA",
                &[(por.id, Some(bruno.professor.id)), (his.id, None)],
            ),
        )
        .await
        .unwrap();

    assert_eq!(
        pairs(&updated),
        vec![
            ("História".to_string(), None),
            ("Português".to_string(), Some("Bruno".to_string())),
        ]
    );
    assert!(
        storage
            .get_professor_view(ana.professor.id)
            .await
            .unwrap()
            .vinculos
            .is_empty()
    );
}

#[tokio::test]
async fn create_turma_rejects_invalid_assignment_lists() {
    let (storage, _db) = setup().await;
    let mat = disciplina(&storage, "Matemática", "MAT").await;

    let err = storage
        .create_turma(turma_request("1ºA", &[]))
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::Validation(_)));

    let err = storage
        .create_turma(turma_request("1ºA", &[(mat.id, None), (mat.id, None)]))
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::Validation(_)));

    let err = storage
        .create_turma(turma_request("1ºA", &[(999, None)]))
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::NotFound(_)));

    let err = storage
        .create_turma(turma_request("1ºA", &[(mat.id, Some(999))]))
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::NotFound(_)));

    assert!(storage.list_turmas().await.unwrap().is_empty());
    assert_eq!(storage.counts().await.unwrap().turmas, 0);
}

#[tokio::test]
async fn delete_disciplina_is_blocked_while_referenced() {
    let (storage, _db) = setup().await;

    let mat = disciplina(&storage, "Matemática", "MAT").await;
    let ana = professor(&storage, "Ana", "ana@x.com", "P1", vec![mat.id]).await;

    let err = storage.delete_disciplina(mat.id).await.unwrap_err();
    assert!(matches!(err, GestaoError::HasAssociations(_)));

    storage
        .update_professor(
            ana.professor.id,
            UpdateProfessorRequest {
                name: "Ana".to_string(),
                email: "ana@x.com".to_string(),
                password: None,
                registration: "P1".to_string(),
                specialty: None,
                disciplinas: Some(vec![]),
            },
        )
        .await
        .unwrap();

    storage.delete_disciplina(mat.id).await.unwrap();
    assert!(storage.list_disciplinas().await.unwrap().is_empty());

    let err = storage.delete_disciplina(mat.id).await.unwrap_err();
    assert!(matches!(err, GestaoError::NotFound(_)));
}

#[tokio::test]
async fn delete_turma_follows_guard_order() {
    let (storage, _db) = setup().await;

    let mat = disciplina(&storage, "Matemática", "MAT").await;
    let por = disciplina(&storage, "Português", "POR").await;
    let ana = professor(&storage, "Ana", "ana@x.com", "P1", vec![mat.id]).await;

    let turma = storage
        .create_turma(turma_request(
            "1ºA",
            &[(mat.id, Some(ana.professor.id)), (por.id, None)],
        ))
        .await
        .unwrap();
    let id = turma.turma.id;

    let aluno = storage
        .create_aluno(aluno_request("Carlos", "carlos@x.com", "A1", Some(id)))
        .await
        .unwrap();

    let err = storage.delete_turma(id).await.unwrap_err();
    assert!(matches!(err, GestaoError::HasEnrolledStudents(_)));

    storage.delete_aluno(aluno.id).await.unwrap();

    let err = storage.delete_turma(id).await.unwrap_err();
    assert!(matches!(err, GestaoError::TurmaIsActive(_)));

    assert!(!storage.toggle_turma_active(id).await.unwrap());

    let err = storage.delete_turma(id).await.unwrap_err();
    assert!(matches!(err, GestaoError::HasAssociations(_)));

    // 教师停用后只剩未分配的行，仍然不能删除
    storage.toggle_professor_active(ana.professor.id).await.unwrap();
    let view = storage.get_turma_view(id).await.unwrap();
    assert!(view.disciplinas.iter().all(|row| row.professor.is_none()));
    let err = storage.delete_turma(id).await.unwrap_err();
    assert!(matches!(err, GestaoError::HasAssociations(_)));

    for row in &view.disciplinas {
        storage.delete_associacao(row.id).await.unwrap();
    }
    storage.delete_turma(id).await.unwrap();

    let err = storage.get_turma_view(id).await.unwrap_err();
    assert!(matches!(err, GestaoError::NotFound(_)));
    // 教师资质不受影响
    assert_eq!(
        storage
            .get_professor_view(ana.professor.id)
            .await
            .unwrap()
            .capacitacoes
            .len(),
        1
    );
}

#[tokio::test]
async fn active_turma_cannot_be_deleted_even_without_teachers() {
    let (storage, _db) = setup().await;
    let mat = disciplina(&storage, "Matemática", "MAT").await;

    let turma = storage
        .create_turma(turma_request("3ºC", &[(mat.id, None)]))
        .await
        .unwrap();

    let err = storage.delete_turma(turma.turma.id).await.unwrap_err();
    assert!(matches!(err, GestaoError::TurmaIsActive(_)));

    storage.toggle_turma_active(turma.turma.id).await.unwrap();
    let err = storage.delete_turma(turma.turma.id).await.unwrap_err();
    assert!(matches!(err, GestaoError::HasAssociations(_)));

    storage
        .delete_associacao(turma.disciplinas[0].id)
        .await
        .unwrap();
    storage.delete_turma(turma.turma.id).await.unwrap();
    assert!(storage.list_associacoes(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_association_rejects_exact_duplicates() {
    let (storage, _db) = setup().await;

    let mat = disciplina(&storage, "Matemática", "MAT").await;
    let fis = disciplina(&storage, "Física", "FIS").await;
    let ana = professor(&storage, "Ana", "ana@x.com", "P1", vec![]).await;
    let turma = storage
        .create_turma(turma_request("1ºA", &[(fis.id, None)]))
        .await
        .unwrap();

    let request = |turma_id: Option<i64>, ano: Option<i32>| CreateAssociacaoRequest {
        professor_id: Some(ana.professor.id),
        disciplina_id: mat.id,
        turma_id,
        ano,
    };

    let capacitacao = storage.create_associacao(request(None, None)).await.unwrap();
    assert!(capacitacao.is_capacitacao());
    match &capacitacao {
        Atribuicao::Capacitacao { ano, professor, .. } => {
            assert_eq!(*ano, chrono::Utc::now().year());
            assert_eq!(professor.name, "Ana");
        }
        other => panic!("unexpected {other:?}"),
    }

    let err = storage
        .create_associacao(request(None, None))
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::DuplicateAssociation(_)));

    // 任一字段不同即可创建
    storage
        .create_associacao(request(None, Some(2020)))
        .await
        .unwrap();
    let vinculo = storage
        .create_associacao(request(Some(turma.turma.id), Some(2024)))
        .await
        .unwrap();
    assert!(!vinculo.is_capacitacao());

    let err = storage
        .create_associacao(request(Some(turma.turma.id), Some(2024)))
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::DuplicateAssociation(_)));

    // 未分配教师的授课安排同样按 NULL 比较
    let unassigned = CreateAssociacaoRequest {
        professor_id: None,
        disciplina_id: fis.id,
        turma_id: Some(turma.turma.id),
        ano: Some(2024),
    };
    let err = storage.create_associacao(unassigned).await.unwrap_err();
    assert!(matches!(err, GestaoError::DuplicateAssociation(_)));

    let listed = storage
        .list_associacoes(Some(ana.professor.id))
        .await
        .unwrap();
    assert_eq!(listed.len(), 3);

    storage.delete_associacao(vinculo.id()).await.unwrap();
    let err = storage.delete_associacao(vinculo.id()).await.unwrap_err();
    assert!(matches!(err, GestaoError::NotFound(_)));
}

#[tokio::test]
async fn create_association_requires_professor_or_turma() {
    let (storage, _db) = setup().await;
    let mat = disciplina(&storage, "Matemática", "MAT").await;

    let err = storage
        .create_associacao(CreateAssociacaoRequest {
            professor_id: None,
            disciplina_id: mat.id,
            turma_id: None,
            ano: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::Validation(_)));

    let err = storage
        .create_associacao(CreateAssociacaoRequest {
            professor_id: Some(42),
            disciplina_id: mat.id,
            turma_id: None,
            ano: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::NotFound(_)));
}

#[tokio::test]
async fn professor_delete_guards() {
    let (storage, db) = setup().await;

    let mat = disciplina(&storage, "Matemática", "MAT").await;
    let ana = professor(&storage, "Ana", "ana@x.com", "P1", vec![mat.id]).await;
    let pid = ana.professor.id;
    let turma = storage
        .create_turma(turma_request("1ºA", &[(mat.id, Some(pid))]))
        .await
        .unwrap();
    let aluno = storage
        .create_aluno(aluno_request("Carlos", "carlos@x.com", "A1", Some(turma.turma.id)))
        .await
        .unwrap();

    let err = storage.delete_professor(pid).await.unwrap_err();
    assert!(matches!(err, GestaoError::HasActiveAssignments(_)));

    storage
        .update_turma(turma.turma.id, turma_request("1ºA", &[(mat.id, None)]))
        .await
        .unwrap();

    let nota = notas::ActiveModel {
        aluno_id: Set(aluno.id),
        disciplina_id: Set(mat.id),
        professor_id: Set(pid),
        valor: Set(8.5),
        created_at: Set(0),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let err = storage.delete_professor(pid).await.unwrap_err();
    assert!(matches!(err, GestaoError::HasGrades(_)));

    notas::Entity::delete_by_id(nota.id).exec(&db).await.unwrap();

    faltas::ActiveModel {
        aluno_id: Set(aluno.id),
        disciplina_id: Set(mat.id),
        professor_id: Set(pid),
        data: Set(NaiveDate::from_ymd_opt(2024, 4, 2).unwrap()),
        justificada: Set(false),
        created_at: Set(0),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let err = storage.delete_professor(pid).await.unwrap_err();
    assert!(matches!(err, GestaoError::HasAbsences(_)));

    // 删除学生会连带删除其缺勤记录
    storage.delete_aluno(aluno.id).await.unwrap();
    storage.delete_professor(pid).await.unwrap();

    let err = storage.get_professor_view(pid).await.unwrap_err();
    assert!(matches!(err, GestaoError::NotFound(_)));
    assert!(storage.get_user_by_email("ana@x.com").await.unwrap().is_none());
    assert!(storage.list_associacoes(None).await.unwrap().iter().all(|a| a.professor().is_none()));
}

#[tokio::test]
async fn update_professor_replaces_capacitacoes() {
    let (storage, _db) = setup().await;

    let mat = disciplina(&storage, "Matemática", "MAT").await;
    let fis = disciplina(&storage, "Física", "FIS").await;
    let qui = disciplina(&storage, "Química", "QUI").await;
    let ana = professor(&storage, "Ana", "ana@x.com", "P1", vec![mat.id, fis.id]).await;
    let pid = ana.professor.id;

    storage
        .create_turma(turma_request("1ºA", &[(mat.id, Some(pid))]))
        .await
        .unwrap();

    let update = |disciplinas: Option<Vec<i64>>| UpdateProfessorRequest {
        name: "Ana Souza".to_string(),
        email: "ana@x.com".to_string(),
        password: None,
        registration: "P1".to_string(),
        specialty: Some("Exatas".to_string()),
        disciplinas,
    };

    // 不提供 disciplinas 时保持原有关联
    let view = storage.update_professor(pid, update(None)).await.unwrap();
    assert_eq!(view.professor.name, "Ana Souza");
    assert_eq!(view.capacitacoes.len(), 2);
    assert_eq!(view.vinculos.len(), 1);

    let view = storage
        .update_professor(pid, update(Some(vec![qui.id, qui.id])))
        .await
        .unwrap();
    let nomes: Vec<&str> = view.capacitacoes.iter().map(|d| d.nome.as_str()).collect();
    assert_eq!(nomes, vec!["Química"]);
    assert!(view.vinculos.is_empty());

    let err = storage
        .update_professor(pid, update(Some(vec![999])))
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::NotFound(_)));
    // 失败的更新整体回滚
    let view = storage.get_professor_view(pid).await.unwrap();
    assert_eq!(view.capacitacoes.len(), 1);

    let err = storage.update_professor(404, update(None)).await.unwrap_err();
    assert!(matches!(err, GestaoError::NotFound(_)));
}

#[tokio::test]
async fn uniqueness_is_enforced() {
    let (storage, _db) = setup().await;

    let mat = disciplina(&storage, "Matemática", "MAT").await;
    let err = storage
        .create_disciplina(CreateDisciplinaRequest {
            nome: "Outra".to_string(),
            codigo: "MAT".to_string(),
            carga_horaria: 2,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::DuplicateCode(_)));

    let err = storage
        .create_disciplina(CreateDisciplinaRequest {
            nome: "Matemática".to_string(),
            codigo: "MAT2".to_string(),
            carga_horaria: 2,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::DuplicateName(_)));

    // 更新时排除自身
    let updated = storage
        .update_disciplina(
            mat.id,
            UpdateDisciplinaRequest {
                nome: "Matemática".to_string(),
                codigo: "MAT".to_string(),
                carga_horaria: None,
                ativa: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.carga_horaria, 4);
    assert!(updated.ativa);

    professor(&storage, "Ana", "ana@x.com", "P1", vec![]).await;
    let err = storage
        .create_professor(professor_request("Ana 2", "ana@x.com", "P2", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::DuplicateEmail(_)));

    let err = storage
        .create_professor(professor_request("Bruno", "bruno@x.com", "P1", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::DuplicateRegistration(_)));

    let err = storage
        .create_professor(professor_request("Bruno", "invalido", "P9", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::Validation(_)));

    storage
        .create_turma(turma_request("1ºA", &[(mat.id, None)]))
        .await
        .unwrap();
    let err = storage
        .create_turma(turma_request("1ºA", &[(mat.id, None)]))
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::DuplicateName(_)));

    storage
        .create_aluno(aluno_request("Carlos", "carlos@x.com", "A1", None))
        .await
        .unwrap();
    let err = storage
        .create_aluno(aluno_request("Dora", "dora@x.com", "A1", None))
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::DuplicateMatricula(_)));

    let err = storage
        .create_aluno(aluno_request("Dora", "ana@x.com", "A2", None))
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::DuplicateEmail(_)));
}

#[tokio::test]
async fn aluno_lifecycle() {
    let (storage, _db) = setup().await;

    let mat = disciplina(&storage, "Matemática", "MAT").await;
    let turma = storage
        .create_turma(turma_request("1ºA", &[(mat.id, None)]))
        .await
        .unwrap();

    let err = storage
        .create_aluno(aluno_request("Carlos", "carlos@x.com", "A1", Some(999)))
        .await
        .unwrap_err();
    assert!(matches!(err, GestaoError::NotFound(_)));

    let aluno = storage
        .create_aluno(aluno_request("Carlos", "carlos@x.com", "A1", Some(turma.turma.id)))
        .await
        .unwrap();
    assert_eq!(aluno.status, AlunoStatus::Cursando);
    assert_eq!(aluno.turma.as_ref().map(|t| t.nome.as_str()), Some("1ºA"));

    let by_user = storage.get_aluno_by_user(aluno.user_id).await.unwrap();
    assert_eq!(by_user.id, aluno.id);

    let updated = storage
        .update_aluno(
            aluno.id,
            UpdateAlunoRequest {
                name: "Carlos Lima".to_string(),
                email: "carlos@x.com".to_string(),
                password: None,
                matricula: "A1".to_string(),
                data_nascimento: None,
                responsavel: None,
                turma_id: None,
                status: Some(AlunoStatus::Transferido),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Carlos Lima");
    assert!(updated.turma.is_none());
    // 未提供出生日期时保留原值
    assert_eq!(updated.data_nascimento, NaiveDate::from_ymd_opt(2010, 3, 15));
    assert_eq!(updated.status, AlunoStatus::Transferido);

    assert!(!storage.toggle_aluno_active(aluno.id).await.unwrap());
    let user = storage.get_user_by_id(aluno.user_id).await.unwrap().unwrap();
    assert!(!user.active);

    storage.delete_aluno(aluno.id).await.unwrap();
    assert!(storage.list_alunos().await.unwrap().is_empty());
    assert!(storage.get_user_by_id(aluno.user_id).await.unwrap().is_none());
}

#[tokio::test]
async fn counts_reflect_active_users() {
    let (storage, _db) = setup().await;

    storage
        .create_admin("Administrador", "admin@x.com", "hash")
        .await
        .unwrap();
    let mat = disciplina(&storage, "Matemática", "MAT").await;
    let ana = professor(&storage, "Ana", "ana@x.com", "P1", vec![mat.id]).await;
    professor(&storage, "Bruno", "bruno@x.com", "P2", vec![]).await;
    let turma = storage
        .create_turma(turma_request("1ºA", &[(mat.id, Some(ana.professor.id))]))
        .await
        .unwrap();
    storage
        .create_aluno(aluno_request("Carlos", "carlos@x.com", "A1", Some(turma.turma.id)))
        .await
        .unwrap();

    let counts = storage.counts().await.unwrap();
    assert_eq!(counts.usuarios_ativos, 4);
    assert_eq!(counts.professores, 2);
    assert_eq!(counts.alunos, 1);
    assert_eq!(counts.disciplinas, 1);
    assert_eq!(counts.turmas, 1);
    assert_eq!(storage.count_users().await.unwrap(), 4);

    storage.toggle_professor_active(ana.professor.id).await.unwrap();
    assert_eq!(storage.counts().await.unwrap().usuarios_ativos, 3);

    let listed: Vec<String> = storage
        .list_professores()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.professor.name)
        .collect();
    assert_eq!(listed, vec!["Ana".to_string(), "Bruno".to_string()]);
}
