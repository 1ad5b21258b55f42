//! # 结果构造模块
//!
//! 每次编解码调用都返回一个 [`Timed`]：成功或失败的结构化结果，
//! 加上该次调用本身的墙钟耗时。计时从调用开始，不包含文件读取
//! 或任何界面交互。结果在构造后不再被修改，由调用方独占持有。

use crate::error::StegoError;
use std::time::{Duration, Instant};

/// 带耗时的统一操作结果。无论成败，`elapsed` 总是被填充。
#[derive(Debug)]
pub struct Timed<T> {
    pub outcome: Result<T, StegoError>,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// 执行 `op` 并记录其耗时。
    pub fn run<F>(op: F) -> Self
    where
        F: FnOnce() -> Result<T, StegoError>,
    {
        let start = Instant::now();
        let outcome = op();
        Timed {
            outcome,
            elapsed: start.elapsed(),
        }
    }

    /// 拆出内部结果，保留耗时。
    pub fn into_parts(self) -> (Result<T, StegoError>, Duration) {
        (self.outcome, self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_captures_success() {
        let timed = Timed::run(|| Ok(7));
        assert_eq!(timed.outcome, Ok(7));
    }

    #[test]
    fn test_run_captures_failure_with_elapsed() {
        let timed: Timed<()> = Timed::run(|| Err(StegoError::InvalidQuality(2.0)));
        assert!(timed.outcome.is_err());
        // 失败路径同样带有耗时
        let (_, elapsed) = timed.into_parts();
        assert!(elapsed <= Duration::from_secs(1));
    }
}
