// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::start_postgres;
use laive::domain::models::periodo::Periodo;
use laive::domain::repositories::periodo_repository::PeriodoRepository;
use laive::infrastructure::database::schema;
use laive::infrastructure::repositories::periodo_repo_impl::{list_periods, PeriodoRepositoryImpl};

/// 重复执行模式初始化不报错，也不改变已有数据
#[tokio::test]
#[ignore = "requires docker"]
async fn ensure_schema_is_idempotent() {
    let db = start_postgres().await;
    let data_access = &db.data_access;

    let session = data_access.acquire_session().await.unwrap();
    PeriodoRepositoryImpl::new(&session)
        .create(&Periodo::new(2023, Some(30), Some(31)))
        .await
        .unwrap();
    session.commit().await.unwrap();

    schema::ensure_schema(data_access.connection()).await.unwrap();
    schema::ensure_schema(data_access.connection()).await.unwrap();

    let rows = list_periods(data_access.connection()).await.unwrap();
    assert_eq!(rows, vec![Periodo::new(2023, Some(30), Some(31))]);
}
