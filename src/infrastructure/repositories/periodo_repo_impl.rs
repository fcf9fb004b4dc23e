// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::periodo::Periodo;
use crate::domain::repositories::periodo_repository::{PeriodoRepository, RepositoryError};
use crate::infrastructure::database::entities::periodo as periodo_entity;
use async_trait::async_trait;
use sea_orm::*;

/// 查询全部期间
///
/// 对期间表执行一次不带过滤、排序和分页的查询，
/// 每一行都被显式投影为 `Periodo`，空值原样保留。
pub async fn list_periods<C>(session: &C) -> Result<Vec<Periodo>, RepositoryError>
where
    C: ConnectionTrait,
{
    let rows = periodo_entity::Entity::find().all(session).await?;
    Ok(rows.into_iter().map(Periodo::from).collect())
}

/// 期间仓库实现
///
/// 绑定在调用方持有的会话（或连接池句柄）上，自身不管理事务
pub struct PeriodoRepositoryImpl<'s, C> {
    /// 数据库会话
    session: &'s C,
}

impl<'s, C> PeriodoRepositoryImpl<'s, C>
where
    C: ConnectionTrait,
{
    /// 创建绑定到会话的期间仓库
    pub fn new(session: &'s C) -> Self {
        Self { session }
    }
}

#[async_trait]
impl<'s, C> PeriodoRepository for PeriodoRepositoryImpl<'s, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn list_all(&self) -> Result<Vec<Periodo>, RepositoryError> {
        list_periods(self.session).await
    }

    async fn find_by_periodo(&self, periodo: i32) -> Result<Option<Periodo>, RepositoryError> {
        let model = periodo_entity::Entity::find_by_id(periodo)
            .one(self.session)
            .await?;
        Ok(model.map(Periodo::from))
    }

    async fn create(&self, periodo: &Periodo) -> Result<Periodo, RepositoryError> {
        let model = periodo_entity::ActiveModel {
            periodo: Set(periodo.periodo),
            dias_mes: Set(periodo.dias_mes),
            dias_mes_ico: Set(periodo.dias_mes_ico),
        };

        let inserted = model.insert(self.session).await?;
        Ok(inserted.into())
    }

    async fn update(&self, periodo: &Periodo) -> Result<Periodo, RepositoryError> {
        let mut model: periodo_entity::ActiveModel =
            periodo_entity::Entity::find_by_id(periodo.periodo)
                .one(self.session)
                .await?
                .ok_or(RepositoryError::NotFound)?
                .into();

        model.dias_mes = Set(periodo.dias_mes);
        model.dias_mes_ico = Set(periodo.dias_mes_ico);

        let updated = model.update(self.session).await?;
        Ok(updated.into())
    }

    async fn delete(&self, periodo: i32) -> Result<bool, RepositoryError> {
        let result = periodo_entity::Entity::delete_by_id(periodo)
            .exec(self.session)
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn list_latest(&self, limit: Option<u64>) -> Result<Vec<Periodo>, RepositoryError> {
        let mut query =
            periodo_entity::Entity::find().order_by_desc(periodo_entity::Column::Periodo);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let rows = query.all(self.session).await?;
        Ok(rows.into_iter().map(Periodo::from).collect())
    }

    async fn list_with_dias_mes_above(
        &self,
        threshold: i16,
    ) -> Result<Vec<Periodo>, RepositoryError> {
        let rows = periodo_entity::Entity::find()
            .filter(periodo_entity::Column::DiasMes.gt(threshold))
            .all(self.session)
            .await?;
        Ok(rows.into_iter().map(Periodo::from).collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(periodo_entity::Entity::find().count(self.session).await?)
    }

    async fn average_dias_mes(&self) -> Result<Option<f64>, RepositoryError> {
        let values: Vec<i16> = periodo_entity::Entity::find()
            .select_only()
            .column(periodo_entity::Column::DiasMes)
            .filter(periodo_entity::Column::DiasMes.is_not_null())
            .into_tuple()
            .all(self.session)
            .await?;
        Ok(mean(&values))
    }
}

fn mean(values: &[i16]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().map(|&v| f64::from(v)).sum();
    Some(sum / values.len() as f64)
}
