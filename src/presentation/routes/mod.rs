// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::handlers::periodo_handler;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// 创建应用路由
///
/// 处理器通过 `Extension<DataAccess>` 获取数据访问上下文，由调用方挂载
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/periodos", get(periodo_handler::list_periodos))
}

/// 根端点
///
/// # 返回值
///
/// 返回问候消息
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "¡Hola desde Laive API!" }))
}
