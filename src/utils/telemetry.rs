// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化日志
///
/// `RUST_LOG` 优先；未设置时使用配置的日志级别，
/// 开启 SQL 回显时把 sqlx 的语句日志提升到 info
pub fn init_telemetry(log_level: &str, sql_echo: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(log_level, sql_echo).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn default_directives(log_level: &str, sql_echo: bool) -> String {
    let level = log_level.to_lowercase();
    let sqlx_level = if sql_echo { "info" } else { "warn" };
    format!("{level},laive={level},sqlx={sqlx_level},sea_orm={sqlx_level}")
}
