/// 终止标记：16 bits 的固定模式 `1111111111111110`。
/// 打包时追加在消息比特之后，提取时用于识别消息结束位置。
pub const TERMINATOR: u16 = 0b1111_1111_1111_1110;

/// 终止标记占用的比特数。
pub const TERMINATOR_BITS: usize = 16;

/// 每个消息字符占用的比特数。
/// 字符按其码点 (必须 <= 255) 编码为 8 bits，高位在前。
pub const BITS_PER_CHAR: usize = 8;

/// RGBA 像素缓冲区中每个像素占用的字节数。
/// 每个像素只有红色通道 (第一个字节) 的最低位会被改写。
pub const BYTES_PER_PIXEL: usize = 4;

/// WAV 文件的标准头部大小 (字节)。
/// 隐写操作将跳过这个头部，从采样数据开始。
pub const WAV_HEADER_SIZE: usize = 44;
