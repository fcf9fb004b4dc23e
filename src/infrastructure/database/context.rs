// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::DatabaseSettings;
use crate::domain::repositories::periodo_repository::RepositoryError;
use crate::infrastructure::database::connection;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, RuntimeErr, TransactionTrait};
use std::sync::Arc;
use tracing::{debug, warn};

/// 会话：绑定在一个连接池连接上的工作单元
///
/// 会话被丢弃时（包括 `?` 提前返回和 panic）自动回滚并把连接归还连接池；
/// 只有显式调用 `commit()` 才会持久化修改。
pub type Session = DatabaseTransaction;

/// 数据访问上下文
///
/// 在进程启动时创建一次，持有连接池，为每个请求或脚本步骤发放独立会话，
/// 关闭时释放整个连接池。
#[derive(Clone)]
pub struct DataAccess {
    db: Arc<DatabaseConnection>,
}

impl DataAccess {
    /// 根据配置创建数据访问上下文
    ///
    /// 连接池是惰性的，数据库不可达不会在这里报错，而是在首次获取会话时报错
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, RepositoryError> {
        let db = connection::create_pool(settings).await?;
        debug!(
            max_connections = settings.max_connections(),
            pool_timeout_secs = settings.pool_timeout,
            "Database pool configured"
        );
        Ok(Self { db: Arc::new(db) })
    }

    /// 包装一个已有的数据库连接
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }

    /// 获取一个会话
    ///
    /// # 返回值
    ///
    /// * `Ok(Session)` - 绑定在连接池连接上的会话
    /// * `Err(RepositoryError::PoolExhausted)` - 超时内没有可用连接
    /// * `Err(RepositoryError::Connection)` - 数据库不可达
    pub async fn acquire_session(&self) -> Result<Session, RepositoryError> {
        self.db.begin().await.map_err(|e| {
            let err = self.classify(e);
            warn!("Failed to acquire database session: {}", err);
            err
        })
    }

    /// 将连接池级别的错误分类
    ///
    /// 惰性连接池在连不上数据库时也会一直重试到获取超时，
    /// 所以超时时连接池若仍有空余容量，说明是新连接建立失败而不是连接池耗尽
    pub(crate) fn classify(&self, err: DbErr) -> RepositoryError {
        match RepositoryError::from(err) {
            RepositoryError::PoolExhausted if self.has_spare_capacity() => {
                RepositoryError::Connection(DbErr::Conn(RuntimeErr::Internal(
                    "could not open a database connection before the pool timeout".to_string(),
                )))
            }
            other => other,
        }
    }

    fn has_spare_capacity(&self) -> bool {
        match self.db.as_ref() {
            DatabaseConnection::SqlxPostgresPoolConnection(_) => {
                let pool = self.db.get_postgres_connection_pool();
                pool.size() < pool.options().get_max_connections()
            }
            DatabaseConnection::SqlxSqlitePoolConnection(_) => {
                let pool = self.db.get_sqlite_connection_pool();
                pool.size() < pool.options().get_max_connections()
            }
            _ => false,
        }
    }

    /// 连接池级别的句柄，用于不需要工作单元的语句（存活检查、建表）
    pub fn connection(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }

    /// 关闭连接池
    ///
    /// 仍有其他句柄共享连接池时只记录警告，连接池随最后一个句柄释放
    pub async fn close(self) -> Result<(), RepositoryError> {
        match Arc::try_unwrap(self.db) {
            Ok(db) => db.close().await?,
            Err(shared) => warn!(
                handles = Arc::strong_count(&shared),
                "Database pool still shared, it will close when the last handle is dropped"
            ),
        }
        Ok(())
    }
}
