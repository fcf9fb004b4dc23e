// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 期间记录
///
/// 以年份为键的记录，包含两个可选的天数字段。
/// 这是查询层向外暴露的唯一类型，序列化后即为 `/periodos` 的响应元素。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Periodo {
    /// 年份（主键）
    pub periodo: i32,
    /// 月天数
    pub dias_mes: Option<i16>,
    /// ICO 月天数
    pub dias_mes_ico: Option<i16>,
}

impl Periodo {
    pub fn new(periodo: i32, dias_mes: Option<i16>, dias_mes_ico: Option<i16>) -> Self {
        Self {
            periodo,
            dias_mes,
            dias_mes_ico,
        }
    }
}

impl fmt::Display for Periodo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Período {} - Días: {}, Días ICO: {}",
            self.periodo,
            display_days(self.dias_mes),
            display_days(self.dias_mes_ico)
        )
    }
}

fn display_days(days: Option<i16>) -> String {
    days.map_or_else(|| "None".to_string(), |d| d.to_string())
}
