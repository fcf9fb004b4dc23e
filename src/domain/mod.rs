// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务定义，包括：
/// - 领域模型（models）：与存储无关的纯数据记录
/// - 仓库接口（repositories）：数据持久化抽象接口及其错误分类
///
/// 领域层不依赖具体的数据库驱动，ORM 类型不会越过仓库实现层。
pub mod models;
pub mod repositories;
