use crate::constants::{BITS_PER_CHAR, TERMINATOR, TERMINATOR_BITS};
use crate::error::StegoError;

/// 提取阶段的三种结果状态。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// 找到终止标记，内含标记之前解码出的消息 (可能为空串)。
    Found(String),
    /// 载体耗尽且没有累积出任何完整字节。
    NotFound,
    /// 载体耗尽前未出现终止标记，内含已累积的部分消息。
    Truncated(String),
}

pub fn pack_message(message: &str) -> Result<Vec<u8>, StegoError> {
    let mut bits = Vec::with_capacity(message.chars().count() * BITS_PER_CHAR + TERMINATOR_BITS);

    for c in message.chars() {
        let code = c as u32;
        if code > 0xFF {
            return Err(StegoError::NonLatin1Character(c));
        }
        for shift in (0..BITS_PER_CHAR).rev() {
            bits.push(((code >> shift) & 1) as u8);
        }
    }

    for shift in (0..TERMINATOR_BITS).rev() {
        bits.push(((TERMINATOR as u32 >> shift) & 1) as u8);
    }

    Ok(bits)
}

#[derive(Debug, Default)]
pub struct BitUnpacker {
    bits: Vec<u8>,
    window: u16,
    found: bool,
}

impl BitUnpacker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个比特，返回是否刚好匹配到终止标记。
    /// 匹配成功后不应再继续追加。
    pub fn push(&mut self, bit: u8) -> bool {
        debug_assert!(bit <= 1);
        self.window = (self.window << 1) | bit as u16;
        self.bits.push(bit);
        if self.bits.len() >= TERMINATOR_BITS && self.window == TERMINATOR {
            self.found = true;
        }
        self.found
    }

    pub fn finish(self) -> Extraction {
        let payload = if self.found {
            &self.bits[..self.bits.len() - TERMINATOR_BITS]
        } else {
            &self.bits[..]
        };

        let message: String = payload
            .chunks_exact(BITS_PER_CHAR)
            .map(|chunk| {
                let byte = chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit);
                char::from(byte)
            })
            .collect();

        if self.found {
            Extraction::Found(message)
        } else if message.is_empty() {
            Extraction::NotFound
        } else {
            Extraction::Truncated(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 将打包结果重新喂给解包器，模拟一次无损的载体读取
    fn roundtrip(message: &str) -> Extraction {
        let bits = pack_message(message).unwrap();
        let mut unpacker = BitUnpacker::new();
        for bit in bits {
            if unpacker.push(bit) {
                break;
            }
        }
        unpacker.finish()
    }

    #[test]
    fn test_pack_length_invariant() {
        let bits = pack_message("hello").unwrap();
        assert_eq!(bits.len(), 8 * 5 + 16);
        assert!(bits.iter().all(|&b| b <= 1));
    }

    #[test]
    fn test_pack_empty_message_is_terminator_only() {
        let bits = pack_message("").unwrap();
        let expected: Vec<u8> = (0..16).map(|i| if i < 15 { 1 } else { 0 }).collect();
        assert_eq!(bits, expected);
    }

    #[test]
    fn test_pack_msb_first() {
        // 'A' = 0x41 = 01000001
        let bits = pack_message("A").unwrap();
        assert_eq!(&bits[..8], &[0, 1, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_pack_rejects_non_latin1() {
        assert_eq!(
            pack_message("隐写"),
            Err(StegoError::NonLatin1Character('隐'))
        );
    }

    #[test]
    fn test_pack_accepts_latin1_extended() {
        // é = U+00E9，恰好能放进一个字节
        assert!(pack_message("café").is_ok());
    }

    #[test]
    fn test_unpack_roundtrip() {
        assert_eq!(roundtrip("hi"), Extraction::Found("hi".to_string()));
    }

    #[test]
    fn test_unpack_empty_message() {
        assert_eq!(roundtrip(""), Extraction::Found(String::new()));
    }

    #[test]
    fn test_unpack_no_bits_is_not_found() {
        assert_eq!(BitUnpacker::new().finish(), Extraction::NotFound);
    }

    #[test]
    fn test_unpack_without_terminator_is_truncated() {
        // 只有消息比特，终止标记被"裁掉"
        let bits = pack_message("ab").unwrap();
        let mut unpacker = BitUnpacker::new();
        for &bit in &bits[..16] {
            unpacker.push(bit);
        }
        assert_eq!(unpacker.finish(), Extraction::Truncated("ab".to_string()));
    }

    #[test]
    fn test_unpack_discards_partial_trailing_chunk() {
        let bits = pack_message("ab").unwrap();
        let mut unpacker = BitUnpacker::new();
        // 第二个字符只剩 3 bits，应被丢弃
        for &bit in &bits[..11] {
            unpacker.push(bit);
        }
        assert_eq!(unpacker.finish(), Extraction::Truncated("a".to_string()));
    }

    #[test]
    fn test_terminator_not_matched_across_short_prefix() {
        // 前 15 个 1 加 1 个 0 正好是标记本身；不足 16 bits 时绝不能误报
        let mut unpacker = BitUnpacker::new();
        for _ in 0..15 {
            assert!(!unpacker.push(1));
        }
        assert!(unpacker.push(0));
    }
}
