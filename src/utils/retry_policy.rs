// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// 重试策略配置
///
/// 固定间隔重试：每次失败后等待 `backoff`，最后一次失败后不再等待
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// 最大尝试次数（包含第一次）
    pub max_attempts: u32,
    /// 两次尝试之间的等待时间
    pub backoff: Duration,
}

/// 重试耗尽错误
#[derive(Debug, Error)]
#[error("gave up after {attempts} attempts: {last_error}")]
pub struct RetryExhausted<E> {
    /// 实际尝试次数
    pub attempts: u32,
    /// 最后一次失败的错误
    pub last_error: E,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::connectivity_check()
    }
}

impl RetryPolicy {
    /// 创建固定间隔重试策略
    pub fn fixed(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// 数据库连通性检查策略：每 2 秒一次，最多 30 次
    pub fn connectivity_check() -> Self {
        Self::fixed(30, Duration::from_secs(2))
    }

    /// 第 `attempt` 次尝试失败后是否还应该重试
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// 按策略执行操作直到成功或次数耗尽
    ///
    /// `op` 接收从 1 开始的尝试序号
    pub async fn retry<T, E, F, Fut>(&self, mut op: F) -> Result<T, RetryExhausted<E>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    warn!("Attempt {}/{} failed: {}", attempt, self.max_attempts, e);
                    if !self.should_retry(attempt) {
                        return Err(RetryExhausted {
                            attempts: attempt,
                            last_error: e,
                        });
                    }
                    tokio::time::sleep(self.backoff).await;
                }
            }
        }
    }
}
