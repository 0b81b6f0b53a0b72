//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 关联一致性规则（删除保护、整体替换、停用时取消分配）都在这里实现。

mod alunos;
mod associacoes;
mod dashboard;
mod disciplinas;
mod hydrate;
mod professores;
mod turmas;
mod users;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{GestaoError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db = Self::connect(&config.database).await?;
        Self::from_connection(db).await
    }

    /// 使用已有连接创建存储实例并运行迁移
    pub async fn from_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| GestaoError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// 根据 URL 建立数据库连接
    pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        info!("Database connected: {}", db_url);
        Ok(db)
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| GestaoError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| GestaoError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| GestaoError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(GestaoError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn create_admin(&self, name: &str, email: &str, password_hash: &str) -> Result<User> {
        self.create_admin_impl(name, email, password_hash).await
    }

    // 教师模块
    async fn create_professor(&self, req: CreateProfessorRequest) -> Result<ProfessorView> {
        self.create_professor_impl(req).await
    }

    async fn update_professor(
        &self,
        id: i64,
        req: UpdateProfessorRequest,
    ) -> Result<ProfessorView> {
        self.update_professor_impl(id, req).await
    }

    async fn delete_professor(&self, id: i64) -> Result<()> {
        self.delete_professor_impl(id).await
    }

    async fn toggle_professor_active(&self, id: i64) -> Result<bool> {
        self.toggle_professor_active_impl(id).await
    }

    async fn list_professores(&self) -> Result<Vec<ProfessorView>> {
        self.list_professores_impl().await
    }

    async fn get_professor_view(&self, id: i64) -> Result<ProfessorView> {
        self.get_professor_view_impl(id).await
    }

    async fn get_professor_view_by_user(&self, user_id: i64) -> Result<ProfessorView> {
        self.get_professor_view_by_user_impl(user_id).await
    }

    // 班级模块
    async fn create_turma(&self, req: TurmaRequest) -> Result<TurmaView> {
        self.create_turma_impl(req).await
    }

    async fn update_turma(&self, id: i64, req: TurmaRequest) -> Result<TurmaView> {
        self.update_turma_impl(id, req).await
    }

    async fn delete_turma(&self, id: i64) -> Result<()> {
        self.delete_turma_impl(id).await
    }

    async fn toggle_turma_active(&self, id: i64) -> Result<bool> {
        self.toggle_turma_active_impl(id).await
    }

    async fn list_turmas(&self) -> Result<Vec<TurmaView>> {
        self.list_turmas_impl().await
    }

    async fn get_turma_view(&self, id: i64) -> Result<TurmaView> {
        self.get_turma_view_impl(id).await
    }

    // 学科模块
    async fn create_disciplina(&self, req: CreateDisciplinaRequest) -> Result<Disciplina> {
        self.create_disciplina_impl(req).await
    }

    async fn update_disciplina(
        &self,
        id: i64,
        req: UpdateDisciplinaRequest,
    ) -> Result<Disciplina> {
        self.update_disciplina_impl(id, req).await
    }

    async fn toggle_disciplina_active(&self, id: i64) -> Result<bool> {
        self.toggle_disciplina_active_impl(id).await
    }

    async fn delete_disciplina(&self, id: i64) -> Result<()> {
        self.delete_disciplina_impl(id).await
    }

    async fn list_disciplinas(&self) -> Result<Vec<Disciplina>> {
        self.list_disciplinas_impl().await
    }

    // 关联模块
    async fn create_associacao(&self, req: CreateAssociacaoRequest) -> Result<Atribuicao> {
        self.create_associacao_impl(req).await
    }

    async fn list_associacoes(&self, professor_id: Option<i64>) -> Result<Vec<Atribuicao>> {
        self.list_associacoes_impl(professor_id).await
    }

    async fn delete_associacao(&self, id: i64) -> Result<()> {
        self.delete_associacao_impl(id).await
    }

    // 学生模块
    async fn create_aluno(&self, req: CreateAlunoRequest) -> Result<Aluno> {
        self.create_aluno_impl(req).await
    }

    async fn update_aluno(&self, id: i64, req: UpdateAlunoRequest) -> Result<Aluno> {
        self.update_aluno_impl(id, req).await
    }

    async fn delete_aluno(&self, id: i64) -> Result<()> {
        self.delete_aluno_impl(id).await
    }

    async fn toggle_aluno_active(&self, id: i64) -> Result<bool> {
        self.toggle_aluno_active_impl(id).await
    }

    async fn list_alunos(&self) -> Result<Vec<Aluno>> {
        self.list_alunos_impl().await
    }

    async fn get_aluno_by_user(&self, user_id: i64) -> Result<Aluno> {
        self.get_aluno_by_user_impl(user_id).await
    }

    // 统计
    async fn counts(&self) -> Result<CountsResponse> {
        self.counts_impl().await
    }
}
