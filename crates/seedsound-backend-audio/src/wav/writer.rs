//! RIFF/WAVE chunk writer.

use std::io::{self, Write};

use super::format::WavFormat;

/// One `LIST/INFO` entry: a four-character id and its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoTag<'a> {
    pub id: [u8; 4],
    pub value: &'a str,
}

impl<'a> InfoTag<'a> {
    pub fn new(id: &[u8; 4], value: &'a str) -> Self {
        Self { id: *id, value }
    }

    /// Payload size: text plus NUL terminator.
    fn payload_len(&self) -> usize {
        self.value.len() + 1
    }

    /// Sub-chunk size including header and pad byte.
    fn chunk_len(&self) -> usize {
        8 + padded(self.payload_len())
    }
}

fn padded(len: usize) -> usize {
    len + (len & 1)
}

fn chunk_size(len: usize) -> io::Result<u32> {
    u32::try_from(len).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("chunk of {len} bytes exceeds the RIFF size limit"),
        )
    })
}

/// Writes a complete WAV file to a writer.
///
/// Layout: `RIFF` header, `fmt ` chunk, optional `LIST/INFO` chunk (empty
/// tags are skipped), `data` chunk.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw little-endian PCM samples
/// * `tags` - INFO entries, written in order
pub fn write_wav<W: Write>(
    writer: &mut W,
    format: &WavFormat,
    pcm_data: &[u8],
    tags: &[InfoTag<'_>],
) -> io::Result<()> {
    let tags: Vec<&InfoTag<'_>> = tags.iter().filter(|t| !t.value.is_empty()).collect();
    let info_len: usize = tags.iter().map(|t| t.chunk_len()).sum();
    let list_len = if tags.is_empty() { 0 } else { 8 + 4 + info_len };

    let data_size = chunk_size(pcm_data.len())?;
    // "WAVE" + fmt chunk + LIST chunk + data chunk
    let riff_size = chunk_size(4 + (8 + 16) + list_len + 8 + padded(pcm_data.len()))?;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // LIST/INFO chunk
    if !tags.is_empty() {
        writer.write_all(b"LIST")?;
        writer.write_all(&chunk_size(4 + info_len)?.to_le_bytes())?;
        writer.write_all(b"INFO")?;
        for tag in tags {
            writer.write_all(&tag.id)?;
            writer.write_all(&chunk_size(tag.payload_len())?.to_le_bytes())?;
            writer.write_all(tag.value.as_bytes())?;
            writer.write_all(&[0])?;
            if tag.payload_len() % 2 == 1 {
                writer.write_all(&[0])?;
            }
        }
    }

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;
    if pcm_data.len() % 2 == 1 {
        writer.write_all(&[0])?;
    }

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(
    format: &WavFormat,
    pcm_data: &[u8],
    tags: &[InfoTag<'_>],
) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data, tags)?;
    Ok(buffer)
}

/// Extracts PCM data from a WAV file buffer.
///
/// Used for comparing WAV files by their audio content only.
///
/// # Returns
/// PCM data if found, or None if the format is invalid
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 12 {
        return None;
    }

    // Verify RIFF header
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    // Find data chunk
    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start + chunk_size;
            return wav_data.get(data_start..data_end);
        }

        pos += 8 + padded(chunk_size);
    }

    None
}
