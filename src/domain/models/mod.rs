// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 定义系统的核心业务实体：
/// - 期间（periodo）：以年份为键、带可选天数字段的记录
pub mod periodo;
