//! Gestão Escolar - 学校管理后端服务
//!
//! 基于 Actix Web + SeaORM，维护班级（turmas）、学科（disciplinas）、
//! 教师（professores）、学生（alunos）以及教师与学科、班级之间的关联。
//!
//! # 架构
//! - `cache`: 已认证用户缓存（Moka）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证、授权与限流中间件
//! - `models`: 请求、响应与领域模型
//! - `routes`: API 路由层
//! - `runtime`: 启动与关闭
//! - `services`: HTTP 业务层
//! - `storage`: 数据存储层，关联一致性规则在此实现
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
