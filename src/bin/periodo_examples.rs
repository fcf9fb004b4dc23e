// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use laive::config::settings::Settings;
use laive::domain::models::periodo::Periodo;
use laive::domain::repositories::periodo_repository::{PeriodoRepository, RepositoryError};
use laive::infrastructure::database::context::DataAccess;
use laive::infrastructure::database::schema;
use laive::infrastructure::repositories::periodo_repo_impl::PeriodoRepositoryImpl;
use laive::utils::telemetry;
use tracing::error;

/// 期间模型使用示例
///
/// 依次演示创建、查询、更新、删除和进阶查询。每个步骤使用独立的会话，
/// 步骤失败时会话被回滚，记录错误后继续执行下一个步骤。
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::new()?;
    telemetry::init_telemetry(&settings.log_level, settings.debug);

    println!("EJEMPLOS DE USO DEL MODELO PERIODO");
    println!("{}", "=".repeat(50));

    let data_access = DataAccess::connect(&settings.database()).await?;

    if let Err(e) = schema::ensure_schema(data_access.connection()).await {
        error!("Failed to create tables: {}", e);
        data_access.close().await?;
        return Err(e.into());
    }
    println!("Tablas creadas/verificadas");

    report("create", create_periodos(&data_access).await);
    report("query", query_periodos(&data_access).await);
    report("update", update_periodo(&data_access).await);
    report("delete", delete_periodo(&data_access).await);
    report("advanced", advanced_queries(&data_access).await);

    data_access.close().await?;
    println!("\n¡Todos los ejemplos completados!");
    Ok(())
}

fn report(step: &str, result: Result<(), RepositoryError>) {
    if let Err(e) = result {
        error!(step, "Example step failed, transaction rolled back: {}", e);
    }
}

fn print_all(periodos: &[Periodo]) {
    for p in periodos {
        println!("   {}", p);
    }
}

async fn create_periodos(data_access: &DataAccess) -> Result<(), RepositoryError> {
    println!("\nCREANDO PERÍODOS");
    println!("{}", "=".repeat(40));

    let session = data_access.acquire_session().await?;
    let repo = PeriodoRepositoryImpl::new(&session);

    let periodos = [
        Periodo::new(2023, Some(30), Some(31)),
        Periodo::new(2024, Some(31), Some(30)),
        Periodo::new(2025, Some(28), Some(29)),
    ];
    for periodo in &periodos {
        println!("   Agregando: {}", periodo);
        repo.create(periodo).await?;
    }

    session.commit().await?;
    println!("{} períodos creados exitosamente", periodos.len());
    Ok(())
}

async fn query_periodos(data_access: &DataAccess) -> Result<(), RepositoryError> {
    println!("\nCONSULTANDO PERÍODOS");
    println!("{}", "=".repeat(40));

    let session = data_access.acquire_session().await?;
    let repo = PeriodoRepositoryImpl::new(&session);

    println!("1. Todos los períodos:");
    print_all(&repo.list_all().await?);

    println!("\n2. Período específico (2024):");
    match repo.find_by_periodo(2024).await? {
        Some(p) => println!("   Encontrado: {}", p),
        None => println!("   Período 2024 no encontrado"),
    }

    println!("\n3. Períodos con más de 30 días:");
    print_all(&repo.list_with_dias_mes_above(30).await?);

    println!(
        "\n4. Total de períodos en la base de datos: {}",
        repo.count().await?
    );
    Ok(())
}

async fn update_periodo(data_access: &DataAccess) -> Result<(), RepositoryError> {
    println!("\nACTUALIZANDO PERÍODO");
    println!("{}", "=".repeat(40));

    let session = data_access.acquire_session().await?;
    let repo = PeriodoRepositoryImpl::new(&session);

    let Some(before) = repo.find_by_periodo(2024).await? else {
        println!("   Período 2024 no encontrado");
        return Ok(());
    };
    println!("   Período antes: {}", before);

    let after = repo
        .update(&Periodo {
            dias_mes: Some(32),
            dias_mes_ico: Some(33),
            ..before
        })
        .await?;

    session.commit().await?;
    println!("   Período después: {}", after);
    Ok(())
}

async fn delete_periodo(data_access: &DataAccess) -> Result<(), RepositoryError> {
    println!("\nELIMINANDO PERÍODO");
    println!("{}", "=".repeat(40));

    let session = data_access.acquire_session().await?;
    let repo = PeriodoRepositoryImpl::new(&session);

    let Some(periodo) = repo.find_by_periodo(2025).await? else {
        println!("   Período 2025 no encontrado");
        return Ok(());
    };
    println!("   Eliminando: {}", periodo);
    repo.delete(periodo.periodo).await?;

    session.commit().await?;
    println!("   Período eliminado exitosamente");
    Ok(())
}

async fn advanced_queries(data_access: &DataAccess) -> Result<(), RepositoryError> {
    println!("\nOPERACIONES AVANZADAS");
    println!("{}", "=".repeat(40));

    let session = data_access.acquire_session().await?;
    let repo = PeriodoRepositoryImpl::new(&session);

    println!("1. Períodos ordenados por año:");
    print_all(&repo.list_latest(None).await?);

    println!("\n2. Últimos 2 períodos:");
    print_all(&repo.list_latest(Some(2)).await?);

    println!("\n3. Estadísticas:");
    let total = repo.count().await?;
    if let Some(average) = repo.average_dias_mes().await? {
        println!("   Total períodos: {}", total);
        println!("   Promedio días: {:.1}", average);
    }
    Ok(())
}
