//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`reveal`、`shrink` 和 `expand` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、按扩展名选择编解码路径、调用核心隐写算法
//! 以及向用户报告结果 (含每次核心调用的耗时)。

use crate::bits::Extraction;
use crate::cli::{ExpandArgs, HideArgs, RevealArgs, ShrinkArgs};
use crate::error::StegoError;
use crate::steganography::{
    embed_in_audio, embed_in_image, extract_from_audio, extract_from_image,
};
use crate::transform::{expand, shrink};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 载体的媒体类型，由文件扩展名推断。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Audio,
}

/// 根据扩展名推断载体的媒体类型。
///
/// 无损图像格式走像素通道路径，WAV 走采样字节路径；
/// 其余扩展名在访问任何文件内容之前即被拒绝。
pub fn media_type_of(path: &Path) -> Result<MediaType, StegoError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" | "bmp" | "tiff" | "webp" | "qoi" => Ok(MediaType::Image),
        "wav" => Ok(MediaType::Audio),
        _ => Err(StegoError::UnsupportedMediaType(ext)),
    }
}

/// 在输入文件同目录下生成带前缀的默认输出路径。
fn default_sibling(path: &Path, prefix: &str) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!("{prefix}{name}"))
}

/// 覆盖保护：输出文件已存在且未指定 `--force` 时拒绝写入。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取载体和文本文件、按媒体类型调用对应的嵌入函数，
/// 最后将结果写入目标载体文件。容量不足时载体不会被写入任何内容。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 载体扩展名没有对应的编解码路径。
/// * 无法读取输入的载体或文本文件，或无法解码图像。
/// * 消息超出载体容量，或包含无法单字节编码的字符。
/// * 输出文件已存在且未指定 `--force`，或无法写入目标文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let media = media_type_of(&args.carrier)?;

    let message = fs::read_to_string(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let dest = args
        .dest
        .unwrap_or_else(|| default_sibling(&args.carrier, "doctored_"));
    ensure_writable(&dest, args.force)?;

    let elapsed = match media {
        MediaType::Image => {
            let carrier = image::open(&args.carrier).with_context(|| {
                format!(
                    "Unable to decode image file: {}",
                    args.carrier.to_string_lossy().red().bold()
                )
            })?;
            let rgba = carrier.to_rgba8();
            let (width, height) = rgba.dimensions();

            let (outcome, elapsed) = embed_in_image(rgba.as_raw(), width, height, &message)
                .into_parts();
            let doctored = outcome.with_context(|| {
                format!(
                    "Failed to hide the message in image {}.",
                    args.carrier.to_string_lossy().red().bold()
                )
            })?;

            let doctored_image = image::RgbaImage::from_raw(width, height, doctored)
                .context("Doctored pixel buffer no longer matches the image dimensions.")?;
            doctored_image.save(&dest).with_context(|| {
                format!(
                    "Unable to write to target image file: {}",
                    dest.to_string_lossy().red().bold()
                )
            })?;
            elapsed
        }
        MediaType::Audio => {
            let carrier = fs::read(&args.carrier).with_context(|| {
                format!(
                    "Unable to read audio file: {}",
                    args.carrier.to_string_lossy().red().bold()
                )
            })?;

            let (outcome, elapsed) = embed_in_audio(&carrier, &message).into_parts();
            let doctored = outcome.with_context(|| {
                format!(
                    "Failed to hide the message in audio {}.",
                    args.carrier.to_string_lossy().red().bold()
                )
            })?;

            fs::write(&dest, doctored).with_context(|| {
                format!(
                    "Unable to write to target audio file: {}",
                    dest.to_string_lossy().red().bold()
                )
            })?;
            elapsed
        }
    };

    println!(
        "The text has been successfully hidden and saved: {} ({:?})",
        dest.to_string_lossy().green().bold(),
        elapsed
    );

    Ok(())
}

/// 处理 'Reveal' 命令的执行逻辑。
///
/// 负责读取经过隐写的载体文件、调用对应的提取函数，并根据三种提取
/// 状态分别处理：完整消息写入目标文本文件；未发现消息时报告哨兵信息
/// (这是成功结果，不是错误)；消息被截断时发出警告并保存已恢复的部分。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `RevealArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 载体扩展名没有对应的编解码路径。
/// * 无法读取或解码输入的载体文件。
/// * 输出文件已存在且未指定 `--force`，或无法写入目标文本文件。
pub fn handle_reveal(args: RevealArgs) -> Result<()> {
    let media = media_type_of(&args.carrier)?;

    let (extraction, elapsed) = match media {
        MediaType::Image => {
            let carrier = image::open(&args.carrier).with_context(|| {
                format!(
                    "Unable to decode image file: {}",
                    args.carrier.to_string_lossy().red().bold()
                )
            })?;
            let rgba = carrier.to_rgba8();
            let (width, height) = rgba.dimensions();

            let (outcome, elapsed) = extract_from_image(rgba.as_raw(), width, height)
                .into_parts();
            (outcome?, elapsed)
        }
        MediaType::Audio => {
            let carrier = fs::read(&args.carrier).with_context(|| {
                format!(
                    "Unable to read audio file: {}",
                    args.carrier.to_string_lossy().red().bold()
                )
            })?;

            let (outcome, elapsed) = extract_from_audio(&carrier).into_parts();
            (outcome?, elapsed)
        }
    };

    let (message, truncated) = match extraction {
        Extraction::Found(message) if message.is_empty() => {
            println!(
                "{} ({:?})",
                "The carrier holds an empty hidden message.".yellow(),
                elapsed
            );
            return Ok(());
        }
        Extraction::Found(message) => (message, false),
        Extraction::NotFound => {
            println!("{} ({:?})", "No hidden message found".yellow(), elapsed);
            return Ok(());
        }
        Extraction::Truncated(partial) => {
            println!(
                "{}",
                "Warning: the carrier ended before the end marker; the message is incomplete."
                    .yellow()
                    .bold()
            );
            (partial, true)
        }
    };

    let text_path = args.text.unwrap_or_else(|| {
        let stem = args
            .carrier
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "carrier".to_string());
        args.carrier.with_file_name(format!("recovered_{stem}.txt"))
    });
    ensure_writable(&text_path, args.force)?;

    fs::write(&text_path, &message).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            text_path.to_string_lossy().red().bold()
        )
    })?;

    if truncated {
        println!(
            "The partial text has been saved: {} ({:?})",
            text_path.to_string_lossy().yellow().bold(),
            elapsed
        );
    } else {
        println!(
            "The text has been successfully revealed and saved: {} ({:?})",
            text_path.to_string_lossy().green().bold(),
            elapsed
        );
    }
    Ok(())
}

/// 处理 'Shrink' 命令的执行逻辑。
///
/// 按质量系数截断输入文件的字节并写入输出路径。
/// 这是一个演示性质的变换，截断后的媒体文件通常不再可播放/可显示。
///
/// # Errors
///
/// 质量系数越界、文件读写失败或输出文件已存在且未指定 `--force` 时返回错误。
pub fn handle_shrink(args: ShrinkArgs) -> Result<()> {
    let data = fs::read(&args.input).with_context(|| {
        format!(
            "Unable to read input file: {}",
            args.input.to_string_lossy().red().bold()
        )
    })?;

    let dest = args
        .dest
        .unwrap_or_else(|| default_sibling(&args.input, "shrunk_"));
    ensure_writable(&dest, args.force)?;

    let (outcome, elapsed) = shrink(&data, args.quality).into_parts();
    let report = outcome?;

    fs::write(&dest, &report.data).with_context(|| {
        format!(
            "Unable to write to target file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "Shrunk {} -> {} bytes ({:.1}% smaller), saved: {} ({:?})",
        report.original_size,
        report.data.len(),
        report.ratio(),
        dest.to_string_lossy().green().bold(),
        elapsed
    );
    Ok(())
}

/// 处理 'Expand' 命令的执行逻辑。
///
/// 按固定系数对输入文件补零扩张并写入输出路径。与 `shrink` 一样是演示变换，
/// 并不会恢复被截断的内容。
///
/// # Errors
///
/// 文件读写失败或输出文件已存在且未指定 `--force` 时返回错误。
pub fn handle_expand(args: ExpandArgs) -> Result<()> {
    let data = fs::read(&args.input).with_context(|| {
        format!(
            "Unable to read input file: {}",
            args.input.to_string_lossy().red().bold()
        )
    })?;

    let dest = args
        .dest
        .unwrap_or_else(|| default_sibling(&args.input, "expanded_"));
    ensure_writable(&dest, args.force)?;

    let (outcome, elapsed) = expand(&data).into_parts();
    let report = outcome?;

    fs::write(&dest, &report.data).with_context(|| {
        format!(
            "Unable to write to target file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "Expanded {} -> {} bytes, saved: {} ({:?})",
        report.original_size,
        report.data.len(),
        dest.to_string_lossy().green().bold(),
        elapsed
    );
    Ok(())
}
