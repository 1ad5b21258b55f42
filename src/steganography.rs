use crate::bits::{BitUnpacker, Extraction, pack_message};
use crate::capacity::{audio_capacity, check, image_capacity};
use crate::constants::{BYTES_PER_PIXEL, WAV_HEADER_SIZE};
use crate::error::StegoError;
use crate::outcome::Timed;

pub fn embed_in_image(pixels: &[u8], width: u32, height: u32, message: &str) -> Timed<Vec<u8>> {
    Timed::run(|| {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(StegoError::PixelBufferMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let bits = pack_message(message)?;
        check(bits.len(), image_capacity(pixels.len()))?;

        let mut doctored = pixels.to_vec();
        for (i, &bit) in bits.iter().enumerate() {
            let red = i * BYTES_PER_PIXEL;
            doctored[red] = (doctored[red] & 0xFE) | bit;
        }

        Ok(doctored)
    })
}

pub fn extract_from_image(pixels: &[u8], width: u32, height: u32) -> Timed<Extraction> {
    Timed::run(|| {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(StegoError::PixelBufferMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let mut unpacker = BitUnpacker::new();
        for red in pixels.iter().step_by(BYTES_PER_PIXEL) {
            if unpacker.push(red & 1) {
                break;
            }
        }

        Ok(unpacker.finish())
    })
}

pub fn embed_in_audio(samples: &[u8], message: &str) -> Timed<Vec<u8>> {
    Timed::run(|| {
        let bits = pack_message(message)?;
        check(bits.len(), audio_capacity(samples.len()))?;

        let mut doctored = samples.to_vec();
        for (i, &bit) in bits.iter().enumerate() {
            let index = WAV_HEADER_SIZE + i;
            doctored[index] = (doctored[index] & 0xFE) | bit;
        }

        Ok(doctored)
    })
}

pub fn extract_from_audio(samples: &[u8]) -> Timed<Extraction> {
    Timed::run(|| {
        let mut unpacker = BitUnpacker::new();
        for byte in samples.iter().skip(WAV_HEADER_SIZE) {
            if unpacker.push(byte & 1) {
                break;
            }
        }

        Ok(unpacker.finish())
    })
}
