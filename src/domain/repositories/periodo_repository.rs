// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::periodo::Periodo;
use async_trait::async_trait;
use sea_orm::{ConnAcquireErr, DbErr, RuntimeErr};
use thiserror::Error;

/// 仓库错误类型
///
/// 按照故障来源对底层数据库错误进行分类，调用方据此决定响应状态
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 在超时时间内连接池无法提供连接
    #[error("Connection pool exhausted: no connection became available in time")]
    PoolExhausted,
    /// 数据库不可达或连接在操作过程中断开
    #[error("Database connection error: {0}")]
    Connection(DbErr),
    /// 语句被数据库拒绝或无法执行
    #[error("Query error: {0}")]
    Query(DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        match &err {
            DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => Self::PoolExhausted,
            DbErr::ConnectionAcquire(_) => Self::Connection(err),
            DbErr::Conn(runtime) if is_pool_timeout(runtime) => Self::PoolExhausted,
            DbErr::Conn(_) => Self::Connection(err),
            DbErr::Exec(runtime) | DbErr::Query(runtime) => {
                if is_pool_timeout(runtime) {
                    Self::PoolExhausted
                } else if is_connection_failure(runtime) {
                    Self::Connection(err)
                } else {
                    Self::Query(err)
                }
            }
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => Self::NotFound,
            _ => Self::Query(err),
        }
    }
}

fn is_pool_timeout(err: &RuntimeErr) -> bool {
    matches!(err, RuntimeErr::SqlxError(sqlx::Error::PoolTimedOut))
}

fn is_connection_failure(err: &RuntimeErr) -> bool {
    matches!(
        err,
        RuntimeErr::SqlxError(
            sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::PoolClosed
                | sqlx::Error::WorkerCrashed
        )
    )
}

/// 期间仓库特质
///
/// 定义期间数据访问接口。实现者绑定在一个会话上，
/// 所有操作都属于该会话的工作单元，提交与回滚由会话持有者决定。
#[async_trait]
pub trait PeriodoRepository: Send + Sync {
    /// 查询全部期间
    ///
    /// 不过滤、不排序、不分页；结果顺序由数据库决定，调用方不应依赖
    async fn list_all(&self) -> Result<Vec<Periodo>, RepositoryError>;

    /// 根据年份查找期间
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Periodo))` - 找到记录
    /// * `Ok(None)` - 未找到记录
    /// * `Err(RepositoryError)` - 查询失败
    async fn find_by_periodo(&self, periodo: i32) -> Result<Option<Periodo>, RepositoryError>;

    /// 创建期间
    async fn create(&self, periodo: &Periodo) -> Result<Periodo, RepositoryError>;

    /// 更新期间的天数字段
    ///
    /// 记录不存在时返回 `RepositoryError::NotFound`
    async fn update(&self, periodo: &Periodo) -> Result<Periodo, RepositoryError>;

    /// 删除期间，返回是否确实删除了记录
    async fn delete(&self, periodo: i32) -> Result<bool, RepositoryError>;

    /// 按年份降序列出期间，可选限制条数
    async fn list_latest(&self, limit: Option<u64>) -> Result<Vec<Periodo>, RepositoryError>;

    /// 列出月天数大于阈值的期间
    async fn list_with_dias_mes_above(
        &self,
        threshold: i16,
    ) -> Result<Vec<Periodo>, RepositoryError>;

    /// 统计期间总数
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// 非空月天数的平均值，没有任何非空值时返回 `None`
    async fn average_dias_mes(&self) -> Result<Option<f64>, RepositoryError>;
}
