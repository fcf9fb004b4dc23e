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

use crate::config::settings::DatabaseSettings;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

/// 连接回收周期：连接存活超过该时间后会被关闭并重新建立
pub const POOL_RECYCLE: Duration = Duration::from_secs(300);

/// 根据配置构建连接池选项
///
/// 连接池容量为 `pool_size + max_overflow`，不预先建立连接；
/// 每次取出连接前做存活检查，失效连接会被丢弃并替换。
pub fn connect_options(settings: &DatabaseSettings) -> ConnectOptions {
    let mut opt = ConnectOptions::new(settings.url.to_owned());
    let timeout = Duration::from_secs(settings.pool_timeout);

    opt.max_connections(settings.max_connections())
        .min_connections(0)
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .idle_timeout(POOL_RECYCLE)
        .max_lifetime(POOL_RECYCLE)
        .test_before_acquire(true)
        .connect_lazy(true)
        .sqlx_logging(settings.echo);

    opt
}

/// 创建数据库连接池
///
/// 连接池是惰性的，此函数不会访问网络；首次获取连接时才会真正建立连接。
///
/// # 参数
///
/// * `settings` - 数据库配置
///
/// # 返回值
///
/// * `Ok(DatabaseConnection)` - 数据库连接池
/// * `Err(DbErr)` - 连接URL无效等配置错误
pub async fn create_pool(settings: &DatabaseSettings) -> Result<DatabaseConnection, DbErr> {
    Database::connect(connect_options(settings)).await
}
