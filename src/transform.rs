//! # 体积变换模块
//!
//! 一个占位性质的体积缩减/还原变换：`shrink` 按质量系数截断字节，
//! `expand` 按固定系数补零。它不是真正的压缩编解码器，没有可逆性，
//! 仅用于演示统一的结果形态。

use crate::error::StegoError;
use crate::outcome::Timed;

/// `expand` 使用的固定扩张系数。
const EXPANSION_FACTOR: f64 = 1.2;

/// 变换后的字节与尺寸信息。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeReport {
    pub data: Vec<u8>,
    pub original_size: usize,
}

impl SizeReport {
    /// 尺寸变化的百分比：缩减为正，扩张为负。
    pub fn ratio(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (self.original_size as f64 - self.data.len() as f64) / self.original_size as f64 * 100.0
    }
}

pub fn shrink(data: &[u8], quality: f32) -> Timed<SizeReport> {
    Timed::run(|| {
        if !(quality > 0.0 && quality <= 1.0) {
            return Err(StegoError::InvalidQuality(quality));
        }

        let target = (data.len() as f64 * quality as f64).floor() as usize;
        Ok(SizeReport {
            data: data[..target].to_vec(),
            original_size: data.len(),
        })
    })
}

pub fn expand(data: &[u8]) -> Timed<SizeReport> {
    Timed::run(|| {
        let target = (data.len() as f64 * EXPANSION_FACTOR).floor() as usize;
        let mut expanded = data.to_vec();
        expanded.resize(target, 0);
        Ok(SizeReport {
            data: expanded,
            original_size: data.len(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shrink_truncates_by_quality() {
        let data: Vec<u8> = (0..100).collect();
        let report = shrink(&data, 0.8).outcome.unwrap();
        assert_eq!(report.data.len(), 80);
        assert_eq!(report.data, &data[..80]);
        assert_eq!(report.original_size, 100);
        assert!((report.ratio() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_shrink_rejects_invalid_quality() {
        let data = vec![0u8; 10];
        assert_eq!(
            shrink(&data, 0.0).outcome,
            Err(StegoError::InvalidQuality(0.0))
        );
        assert_eq!(
            shrink(&data, 1.5).outcome,
            Err(StegoError::InvalidQuality(1.5))
        );
    }

    #[test]
    fn test_expand_zero_pads() {
        let data: Vec<u8> = (1..=10).collect();
        let report = expand(&data).outcome.unwrap();
        assert_eq!(report.data.len(), 12);
        assert_eq!(&report.data[..10], &data[..]);
        assert_eq!(&report.data[10..], &[0, 0]);
        // 扩张时比率为负
        assert!(report.ratio() < 0.0);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(shrink(&[], 0.5).outcome.unwrap().data.len(), 0);
        let report = expand(&[]).outcome.unwrap();
        assert_eq!(report.data.len(), 0);
        assert_eq!(report.ratio(), 0.0);
    }
}
