//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP)
/// 或 WAV 音频中隐藏、提取文本，并附带一个演示性质的体积变换。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 或 WAV 音频中隐藏、提取文本。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏)、reveal (提取)、shrink (缩减)、expand (还原)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在图像或 WAV 音频载体中隐藏文本文件内容。
    Hide(HideArgs),

    /// 从经过隐写的载体中提取隐藏的文本。
    Reveal(RevealArgs),

    /// 按质量系数截断媒体文件 (演示用，不是真正的压缩)。
    Shrink(ShrinkArgs),

    /// 按固定系数补零扩张媒体文件 (演示用)。
    Expand(ExpandArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用作载体的媒体文件路径 (PNG, BMP, TIFF, WebP, QOI 或 WAV)。
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// 要隐藏的文本内容的文件路径。
    #[arg(short, long)]
    pub text: PathBuf,

    /// 隐写完成后，保存结果载体的输出路径。
    /// 省略时默认写到载体同目录下的 `doctored_<原文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'reveal' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RevealArgs {
    /// 已隐藏文本数据的载体文件路径。
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// 提取文本后，保存文本内容的输出路径。
    /// 省略时默认写到载体同目录下的 `recovered_<原文件名主干>.txt`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'shrink' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ShrinkArgs {
    /// 要缩减的媒体文件路径。
    #[arg(short, long)]
    pub input: PathBuf,

    /// 质量系数，取值范围 (0.0, 1.0]。
    #[arg(short, long, default_value_t = 0.8)]
    pub quality: f32,

    /// 保存缩减结果的输出路径。省略时默认为 `shrunk_<原文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'expand' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ExpandArgs {
    /// 要扩张的媒体文件路径。
    #[arg(short, long)]
    pub input: PathBuf,

    /// 保存扩张结果的输出路径。省略时默认为 `expanded_<原文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}
