//! # lsb_media 库
//!
//! 本库包含 LSB 媒体隐写工具的核心逻辑：比特打包/解包协议、
//! 容量校验、图像与音频两条载体编解码路径，以及一个占位的体积缩减变换。

// 声明库包含的所有模块。

pub mod bits;
pub mod capacity;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod outcome;
pub mod steganography;
pub mod transform;
