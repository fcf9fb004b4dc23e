// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use tracing::debug;

use crate::domain::models::periodo::Periodo;
use crate::infrastructure::database::context::DataAccess;
use crate::infrastructure::repositories::periodo_repo_impl::list_periods;
use crate::presentation::errors::AppError;

/// 获取全部期间
///
/// 为本次请求获取一个会话，执行一次全表查询，随后立即释放会话。
///
/// # 返回值
///
/// JSON 数组，每个元素包含 `periodo`、`dias_mes`、`dias_mes_ico`
///
/// # 错误
///
/// - 连接池耗尽或数据库不可达时返回 503
/// - 查询被拒绝时返回 500
pub async fn list_periodos(
    Extension(data_access): Extension<DataAccess>,
) -> Result<Json<Vec<Periodo>>, AppError> {
    let session = data_access.acquire_session().await?;
    let periodos = list_periods(&session).await?;
    session.rollback().await?;

    debug!("Returning {} periodos", periodos.len());
    Ok(Json(periodos))
}
