use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// 判断错误是否值得重试
pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

/// 指数退避重试策略
///
/// 第 n 次失败后等待 `base_delay * multiplier^(n-1)`，并以 `max_delay` 封顶。
/// `max_attempts` 为 `None` 时无限重试，直到成功或遇到不可重试的错误。
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: Option<u32>,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub multiplier: u32,
}

/// 默认最大尝试次数
pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
            multiplier: 2,
        }
    }
}

impl RetryPolicy {
    /// 不限制尝试次数的策略
    pub fn unbounded() -> Self {
        Self {
            max_attempts: None,
            ..Self::default()
        }
    }

    /// 第 `failures` 次失败之后的等待时间（`failures` 从 1 开始）。
    pub fn delay_for(&self, failures: u32) -> Duration {
        let exponent = failures.saturating_sub(1);
        let factor = self.multiplier.checked_pow(exponent).unwrap_or(u32::MAX);
        self.base_delay
            .checked_mul(factor)
            .map_or(self.max_delay, |delay| delay.min(self.max_delay))
    }

    /// 执行操作，遇到可重试的错误时按退避策略重试。
    ///
    /// # 参数
    ///
    /// * `operation` - 操作名称，仅用于日志。
    /// * `f` - 每次尝试都会重新调用的异步操作。
    ///
    /// # Errors
    ///
    /// 返回第一个不可重试的错误；达到 `max_attempts` 时返回最后一次的错误。
    pub async fn run<T, E, F, Fut>(&self, operation: &str, mut f: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Retryable + Display,
    {
        let mut failures = 0;

        loop {
            match f().await {
                Ok(value) => return Ok(value),
                Err(err) if !err.is_retryable() => return Err(err),
                Err(err) => {
                    failures += 1;

                    if self.max_attempts.is_some_and(|max| failures >= max) {
                        warn!(operation, attempts = failures, error = %err, "重试次数已用尽");
                        return Err(err);
                    }

                    let delay = self.delay_for(failures);
                    warn!(
                        operation,
                        attempt = failures,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "操作失败，等待后重试"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
