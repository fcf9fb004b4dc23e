// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{get_json, mock_app};
use axum::http::StatusCode;
use laive::infrastructure::database::entities::periodo;
use sea_orm::{ConnAcquireErr, DatabaseBackend, DbErr, MockDatabase, RuntimeErr};
use serde_json::json;

fn row(periodo: i32, dias_mes: Option<i16>, dias_mes_ico: Option<i16>) -> periodo::Model {
    periodo::Model {
        periodo,
        dias_mes,
        dias_mes_ico,
    }
}

/// 根端点测试
#[tokio::test]
async fn root_returns_greeting() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let (status, body) = get_json(mock_app(db), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "¡Hola desde Laive API!" }));
}

/// 每一行对应一个 JSON 对象，空值渲染为 null
#[tokio::test]
async fn periodos_returns_one_object_per_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            row(2023, Some(30), Some(31)),
            row(2024, Some(31), Some(30)),
            row(2026, None, None),
        ]])
        .into_connection();

    let (status, body) = get_json(mock_app(db), "/periodos").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "periodo": 2023, "dias_mes": 30, "dias_mes_ico": 31 },
            { "periodo": 2024, "dias_mes": 31, "dias_mes_ico": 30 },
            { "periodo": 2026, "dias_mes": null, "dias_mes_ico": null },
        ])
    );
}

/// 空表返回空数组
#[tokio::test]
async fn periodos_on_empty_table_returns_empty_array() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<periodo::Model>::new()])
        .into_connection();

    let (status, body) = get_json(mock_app(db), "/periodos").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

/// 查询被拒绝时返回 500
#[tokio::test]
async fn periodos_query_error_returns_500() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("relation does not exist".to_string())])
        .into_connection();

    let (status, body) = get_json(mock_app(db), "/periodos").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("relation does not exist"));
}

/// 连接池耗尽时返回 503
#[tokio::test]
async fn periodos_pool_exhausted_returns_503() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::ConnectionAcquire(ConnAcquireErr::Timeout)])
        .into_connection();

    let (status, body) = get_json(mock_app(db), "/periodos").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].is_string());
}

/// 数据库连接断开时返回 503
#[tokio::test]
async fn periodos_connection_error_returns_503() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Conn(RuntimeErr::Internal(
            "connection refused".to_string(),
        ))])
        .into_connection();

    let (status, body) = get_json(mock_app(db), "/periodos").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Database connection error"));
}
