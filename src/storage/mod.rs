use std::sync::Arc;

use crate::models::{
    alunos::{
        entities::Aluno,
        requests::{CreateAlunoRequest, UpdateAlunoRequest},
    },
    associacoes::{entities::Atribuicao, requests::CreateAssociacaoRequest},
    dashboard::responses::CountsResponse,
    disciplinas::{
        entities::Disciplina,
        requests::{CreateDisciplinaRequest, UpdateDisciplinaRequest},
    },
    professores::{
        entities::ProfessorView,
        requests::{CreateProfessorRequest, UpdateProfessorRequest},
    },
    turmas::{entities::TurmaView, requests::TurmaRequest},
    users::entities::User,
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 存储层接口
///
/// 所有删除保护检查都在任何写操作之前完成；
/// 多语句写操作在同一事务中执行，失败时整体回滚。
/// 请求中的 `password` 字段在调用前必须已被替换为哈希值。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;
    // 创建管理员
    async fn create_admin(&self, name: &str, email: &str, password_hash: &str) -> Result<User>;

    /// 教师
    async fn create_professor(&self, req: CreateProfessorRequest) -> Result<ProfessorView>;
    async fn update_professor(&self, id: i64, req: UpdateProfessorRequest)
    -> Result<ProfessorView>;
    async fn delete_professor(&self, id: i64) -> Result<()>;
    // 切换启用状态，返回新的状态
    async fn toggle_professor_active(&self, id: i64) -> Result<bool>;
    async fn list_professores(&self) -> Result<Vec<ProfessorView>>;
    async fn get_professor_view(&self, id: i64) -> Result<ProfessorView>;
    async fn get_professor_view_by_user(&self, user_id: i64) -> Result<ProfessorView>;

    /// 班级
    async fn create_turma(&self, req: TurmaRequest) -> Result<TurmaView>;
    async fn update_turma(&self, id: i64, req: TurmaRequest) -> Result<TurmaView>;
    async fn delete_turma(&self, id: i64) -> Result<()>;
    async fn toggle_turma_active(&self, id: i64) -> Result<bool>;
    async fn list_turmas(&self) -> Result<Vec<TurmaView>>;
    async fn get_turma_view(&self, id: i64) -> Result<TurmaView>;

    /// 学科
    async fn create_disciplina(&self, req: CreateDisciplinaRequest) -> Result<Disciplina>;
    async fn update_disciplina(&self, id: i64, req: UpdateDisciplinaRequest)
    -> Result<Disciplina>;
    async fn toggle_disciplina_active(&self, id: i64) -> Result<bool>;
    async fn delete_disciplina(&self, id: i64) -> Result<()>;
    async fn list_disciplinas(&self) -> Result<Vec<Disciplina>>;

    /// 关联
    async fn create_associacao(&self, req: CreateAssociacaoRequest) -> Result<Atribuicao>;
    async fn list_associacoes(&self, professor_id: Option<i64>) -> Result<Vec<Atribuicao>>;
    async fn delete_associacao(&self, id: i64) -> Result<()>;

    /// 学生
    async fn create_aluno(&self, req: CreateAlunoRequest) -> Result<Aluno>;
    async fn update_aluno(&self, id: i64, req: UpdateAlunoRequest) -> Result<Aluno>;
    async fn delete_aluno(&self, id: i64) -> Result<()>;
    async fn toggle_aluno_active(&self, id: i64) -> Result<bool>;
    async fn list_alunos(&self) -> Result<Vec<Aluno>>;
    async fn get_aluno_by_user(&self, user_id: i64) -> Result<Aluno>;

    /// 统计
    async fn counts(&self) -> Result<CountsResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
