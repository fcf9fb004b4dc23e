// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::periodo_repository::RepositoryError;
use crate::infrastructure::database::entities::periodo;
use sea_orm::{ConnectionTrait, DbBackend, Schema, Statement};
use tracing::info;

/// 期间表所在的数据库模式
pub const SCHEMA_NAME: &str = "gpc";

/// 确保模式和期间表存在
///
/// 幂等操作：已存在时不做任何修改，也不会触碰已有数据。
/// 仅供初始化工具和示例脚本使用，HTTP 服务从不建表。
pub async fn ensure_schema<C>(db: &C) -> Result<(), RepositoryError>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();

    if backend == DbBackend::Postgres {
        db.execute(Statement::from_string(
            backend,
            format!("CREATE SCHEMA IF NOT EXISTS {}", SCHEMA_NAME),
        ))
        .await?;
    }

    let schema = Schema::new(backend);
    let mut create_table = schema.create_table_from_entity(periodo::Entity);
    create_table.if_not_exists();
    db.execute(backend.build(&create_table)).await?;

    info!("Schema {}.periodo is in place", SCHEMA_NAME);
    Ok(())
}
