use super::SeaOrmStorage;
use crate::entity::admins::ActiveModel as AdminActiveModel;
use crate::entity::users::{ActiveModel, Column, Entity as Users, Model};
use crate::errors::{GestaoError, Result};
use crate::models::users::entities::{User, UserRole};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};

/// 检查邮箱是否已被其他用户占用
pub(super) async fn ensure_email_available<C: ConnectionTrait>(
    conn: &C,
    email: &str,
    exclude_user_id: Option<i64>,
) -> Result<()> {
    let mut select = Users::find().filter(Column::Email.eq(email));
    if let Some(user_id) = exclude_user_id {
        select = select.filter(Column::Id.ne(user_id));
    }

    let taken = select
        .count(conn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("查询邮箱失败: {e}")))?;

    if taken > 0 {
        return Err(GestaoError::duplicate_email(format!(
            "O e-mail {email} já está em uso"
        )));
    }
    Ok(())
}

/// 插入用户记录
pub(super) async fn insert_user<C: ConnectionTrait>(
    conn: &C,
    name: &str,
    email: &str,
    password_hash: &str,
    role: UserRole,
) -> Result<Model> {
    let now = chrono::Utc::now().timestamp();

    let model = ActiveModel {
        email: Set(email.to_string()),
        name: Set(name.to_string()),
        password_hash: Set(password_hash.to_string()),
        role: Set(role.to_string()),
        active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    model
        .insert(conn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("创建用户失败: {e}")))
}

/// 更新用户基本信息；仅当提供了新的哈希时才更新密码
pub(super) async fn update_user_fields<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    name: &str,
    email: &str,
    password_hash: Option<String>,
) -> Result<Model> {
    let mut model = ActiveModel {
        id: Set(user_id),
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        updated_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    };

    if let Some(hash) = password_hash.filter(|h| !h.is_empty()) {
        model.password_hash = Set(hash);
    }

    model
        .update(conn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("更新用户失败: {e}")))
}

/// 切换用户启用状态，返回新的状态
pub(super) async fn flip_user_active<C: ConnectionTrait>(conn: &C, user_id: i64) -> Result<bool> {
    let user = Users::find_by_id(user_id)
        .one(conn)
        .await?
        .ok_or_else(|| GestaoError::not_found("Usuário não encontrado"))?;

    let active = !user.active;
    ActiveModel {
        id: Set(user_id),
        active: Set(active),
        updated_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    }
    .update(conn)
    .await
    .map_err(|e| GestaoError::database_operation(format!("更新用户状态失败: {e}")))?;

    Ok(active)
}

impl SeaOrmStorage {
    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        Users::find()
            .count(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("统计用户失败: {e}")))
    }

    /// 创建管理员（用户 + 管理员档案）
    pub async fn create_admin_impl(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User> {
        let txn = self.db.begin().await?;

        ensure_email_available(&txn, email, None).await?;
        let user = insert_user(&txn, name, email, password_hash, UserRole::Admin).await?;

        AdminActiveModel {
            user_id: Set(user.id),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| GestaoError::database_operation(format!("创建管理员档案失败: {e}")))?;

        txn.commit().await?;
        Ok(user.into_user())
    }
}
