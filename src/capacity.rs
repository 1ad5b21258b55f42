//! # 容量校验模块
//!
//! 载体能容纳的比特数取决于其可用单元数：图像为每像素 1 bit (仅红色通道)，
//! 音频为头部之后每字节 1 bit。校验必须在任何载体写入之前完成，
//! 失败时载体保持逐字节不变。

use crate::constants::{BYTES_PER_PIXEL, WAV_HEADER_SIZE};
use crate::error::StegoError;

/// 像素缓冲区的容量：每个像素承载 1 bit。
pub fn image_capacity(pixel_buffer_len: usize) -> usize {
    pixel_buffer_len / BYTES_PER_PIXEL
}

/// 音频缓冲区的容量：头部之后每个字节承载 1 bit。
/// 短于头部的缓冲区容量为 0。
pub fn audio_capacity(sample_buffer_len: usize) -> usize {
    sample_buffer_len.saturating_sub(WAV_HEADER_SIZE)
}

pub fn check(required_bits: usize, capacity: usize) -> Result<(), StegoError> {
    if required_bits > capacity {
        return Err(StegoError::MessageTooLarge {
            required: required_bits,
            available: capacity,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_capacity_is_one_bit_per_pixel() {
        // 10x10 RGBA = 400 字节 = 100 像素
        assert_eq!(image_capacity(400), 100);
    }

    #[test]
    fn test_audio_capacity_skips_header() {
        assert_eq!(audio_capacity(100), 56);
        assert_eq!(audio_capacity(44), 0);
        assert_eq!(audio_capacity(10), 0);
    }

    #[test]
    fn test_check_boundary() {
        assert!(check(100, 100).is_ok());
        assert_eq!(
            check(101, 100),
            Err(StegoError::MessageTooLarge {
                required: 101,
                available: 100
            })
        );
    }
}
