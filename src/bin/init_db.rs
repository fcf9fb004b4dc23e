// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use laive::config::settings::Settings;
use laive::infrastructure::database::{health, schema};
use laive::utils::retry_policy::RetryPolicy;
use laive::utils::telemetry;
use std::process::ExitCode;
use tracing::{error, info};

/// 数据库初始化工具
///
/// 等待数据库可用（每 2 秒一次，最多 30 次），输出服务器版本并确保期间表存在。
/// 任何一步失败都记录日志并以非零状态码退出。
#[tokio::main]
async fn main() -> ExitCode {
    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    telemetry::init_telemetry(&settings.log_level, settings.debug);

    info!("Checking database connectivity...");
    let policy = RetryPolicy::connectivity_check();
    let data_access = match health::wait_for_database(&settings.database(), &policy).await {
        Ok(data_access) => data_access,
        Err(e) => {
            error!(
                "Could not connect to the database after {} attempts: {}",
                e.attempts, e.last_error
            );
            return ExitCode::FAILURE;
        }
    };
    info!("Database connection established");

    match health::server_version(&data_access).await {
        Ok(version) => info!("Connected to {}", version),
        Err(e) => {
            error!("Failed to query the database version: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if let Err(e) = schema::ensure_schema(data_access.connection()).await {
        error!("Failed to create the periodo table: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = data_access.close().await {
        error!("Failed to close the database pool: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Database connectivity verified");
    ExitCode::SUCCESS
}
