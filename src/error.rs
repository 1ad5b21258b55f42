//! # 错误类型模块
//!
//! 定义核心编解码路径产生的所有结构化错误。
//! 载体解码失败 (如损坏的图像文件) 属于外部协作者的错误，
//! 由 `handler` 层通过 `anyhow` 上下文报告，不在此枚举之列。

use std::fmt;

/// 核心隐写/变换操作产生的错误。
#[derive(Debug, Clone, PartialEq)]
pub enum StegoError {
    /// 比特流长度超过载体容量。载体保持原样，未发生任何写入。
    MessageTooLarge { required: usize, available: usize },
    /// 消息中包含码点大于 255 的字符，无法编码为单字节。
    NonLatin1Character(char),
    /// 像素缓冲区长度与声明的宽高不符。
    PixelBufferMismatch { expected: usize, actual: usize },
    /// 质量参数超出 (0.0, 1.0] 的有效范围。
    InvalidQuality(f32),
    /// 载体文件的扩展名没有对应的编解码路径。
    UnsupportedMediaType(String),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StegoError::MessageTooLarge {
                required,
                available,
            } => {
                write!(
                    f,
                    "Message too large for this carrier. Required: {} bits, Available: {} bits",
                    required, available
                )
            }
            StegoError::NonLatin1Character(c) => {
                write!(
                    f,
                    "Character {:?} (U+{:04X}) cannot be encoded as a single byte",
                    c, *c as u32
                )
            }
            StegoError::PixelBufferMismatch { expected, actual } => {
                write!(
                    f,
                    "Pixel buffer length {} does not match the declared dimensions (expected {})",
                    actual, expected
                )
            }
            StegoError::InvalidQuality(q) => {
                write!(f, "Quality must lie in (0.0, 1.0], got {}", q)
            }
            StegoError::UnsupportedMediaType(ext) => {
                write!(f, "Unsupported media type: {:?}", ext)
            }
        }
    }
}

impl std::error::Error for StegoError {}
