// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库模块
///
/// 提供连接池配置、数据访问上下文与会话、实体定义、
/// 模式初始化以及连通性检查
pub mod connection;
pub mod context;
pub mod entities;
pub mod health;
pub mod schema;
