// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::DatabaseSettings;
use crate::domain::repositories::periodo_repository::RepositoryError;
use crate::infrastructure::database::context::DataAccess;
use crate::utils::retry_policy::{RetryExhausted, RetryPolicy};
use sea_orm::{ConnectionTrait, Statement};
use tracing::info;

/// 执行一次存活检查往返
pub async fn ping(data: &DataAccess) -> Result<(), RepositoryError> {
    let db = data.connection();
    db.execute(Statement::from_string(db.get_database_backend(), "SELECT 1"))
        .await
        .map_err(|e| data.classify(e))?;
    Ok(())
}

/// 查询数据库服务器版本
pub async fn server_version(data: &DataAccess) -> Result<String, RepositoryError> {
    let db = data.connection();
    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "SELECT version() AS version",
        ))
        .await
        .map_err(|e| data.classify(e))?
        .ok_or(RepositoryError::NotFound)?;

    Ok(row.try_get::<String>("", "version")?)
}

/// 等待数据库可用
///
/// 每次尝试都新建一个单连接的探测连接池（获取连接的超时不超过重试间隔），
/// 存活检查失败后按策略固定间隔重试。返回通过检查的探测上下文，
/// 适合初始化工具执行少量语句，不用于服务请求。
pub async fn wait_for_database(
    settings: &DatabaseSettings,
    policy: &RetryPolicy,
) -> Result<DataAccess, RetryExhausted<RepositoryError>> {
    let probe = probe_settings(settings, policy);

    policy
        .retry(|attempt| {
            let probe = probe.clone();
            async move {
                info!(
                    "Waiting for database connection (attempt {}/{})...",
                    attempt, policy.max_attempts
                );
                let data = DataAccess::connect(&probe).await?;
                ping(&data).await?;
                Ok::<_, RepositoryError>(data)
            }
        })
        .await
}

fn probe_settings(settings: &DatabaseSettings, policy: &RetryPolicy) -> DatabaseSettings {
    DatabaseSettings {
        pool_size: 1,
        max_overflow: 0,
        pool_timeout: settings
            .pool_timeout
            .min(policy.backoff.as_secs())
            .max(1),
        ..settings.clone()
    }
}
