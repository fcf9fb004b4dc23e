// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::periodo::Periodo;
use sea_orm::entity::prelude::*;

/// 期间数据库实体模型
///
/// 对应数据库中的 gpc.periodo 表
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(schema_name = "gpc", table_name = "periodo")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub periodo: i32,
    pub dias_mes: Option<i16>,
    pub dias_mes_ico: Option<i16>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Periodo {
    fn from(m: Model) -> Self {
        Periodo {
            periodo: m.periodo,
            dias_mes: m.dias_mes,
            dias_mes_ico: m.dias_mes_ico,
        }
    }
}
