//! NRO metadata decoder: bounds-checked extraction of the embedded
//! display name and version from an overlay package file.
//!
//! # On-disk layout
//! An `.ovl` package is an NRO image with an asset region appended.  Three
//! fixed-size records are chased, each one supplying the offset of the next:
//!
//! | Record       | Offset                    | Size     | Field used                  |
//! |--------------|---------------------------|----------|-----------------------------|
//! | NRO header   | `0x10` (after NRO start)  | `0x70`   | `size` (u32 at `+0x8`)      |
//! | Asset header | `size`                    | `0x38`   | `nacp.offset` (u64 at `+0x18`) |
//! | NACP         | `size + nacp.offset`      | `0x4000` | `lang[0].name`, `display_version` |
//!
//! All fields are little-endian; the layout is the producing toolchain's
//! frozen struct layout and is non-negotiable.
//!
//! # Safety discipline
//! Offsets taken from the file are untrusted.  Every record is validated
//! against the true file length before any seek, so a corrupt or adversarial
//! `size`/`nacp.offset` yields [`DecodeError::OutOfRange`] or
//! [`DecodeError::Truncated`] rather than a wild read.  The file is opened
//! read-only and the handle is dropped on every exit path.

use byteorder::{LittleEndian, ReadBytesExt};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use thiserror::Error;

/// Size of the NRO start block preceding the header.
pub const NRO_START_SIZE: u64 = 0x10;
/// Size of the NRO header record.
pub const NRO_HEADER_SIZE: u64 = 0x70;
/// Size of the asset header record.
pub const ASSET_HEADER_SIZE: u64 = 0x38;
/// Size of the full NACP record.
pub const NACP_SIZE: u64 = 0x4000;

// Field positions inside their records.
const NRO_SIZE_FIELD: u64 = 0x8;
const ASSET_NACP_OFFSET_FIELD: u64 = 0x18;
const NACP_NAME_LEN: usize = 0x200;
const NACP_VERSION_FIELD: u64 = 0x3060;
const NACP_VERSION_LEN: usize = 0x10;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("file ends {missing} byte(s) short of the {record} record")]
    Truncated { record: &'static str, missing: u64 },
    #[error("{record} record offset {offset:#x} is beyond file length {len:#x}")]
    OutOfRange {
        record: &'static str,
        offset: u64,
        len: u64,
    },
    #[error("IO error: {0}")]
    Unreadable(#[from] io::Error),
}

/// Display metadata decoded from one package file.
///
/// Only constructed on a fully successful decode; a failure never yields a
/// partial instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    /// First language slot of the NACP title table.
    pub name: String,
    /// May be empty when the producer left the field blank.
    pub version: String,
}

/// Decode the display name and version embedded in the package at `path`.
pub fn decode(path: &Path) -> Result<PackageMetadata, DecodeError> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();

    // NRO header sits at a fixed offset; a file too short for it is truncated.
    require(len, NRO_START_SIZE, NRO_HEADER_SIZE, "NRO header")?;
    file.seek(SeekFrom::Start(NRO_START_SIZE + NRO_SIZE_FIELD))?;
    let image_size = file.read_u32::<LittleEndian>()? as u64;

    bounds(len, image_size, ASSET_HEADER_SIZE, "asset header")?;
    file.seek(SeekFrom::Start(image_size + ASSET_NACP_OFFSET_FIELD))?;
    let nacp_offset = file.read_u64::<LittleEndian>()?;

    let nacp_start = image_size
        .checked_add(nacp_offset)
        .ok_or(DecodeError::OutOfRange {
            record: "NACP",
            offset: nacp_offset,
            len,
        })?;
    bounds(len, nacp_start, NACP_SIZE, "NACP")?;

    file.seek(SeekFrom::Start(nacp_start))?;
    let mut name = [0u8; NACP_NAME_LEN];
    file.read_exact(&mut name)?;

    file.seek(SeekFrom::Start(nacp_start + NACP_VERSION_FIELD))?;
    let mut version = [0u8; NACP_VERSION_LEN];
    file.read_exact(&mut version)?;

    Ok(PackageMetadata {
        name: nul_terminated(&name),
        version: nul_terminated(&version),
    })
}

/// A fixed record start: too little room is `Truncated`.
fn require(len: u64, offset: u64, size: u64, record: &'static str) -> Result<(), DecodeError> {
    let need = offset + size;
    if len < need {
        return Err(DecodeError::Truncated {
            record,
            missing: need - len,
        });
    }
    Ok(())
}

/// A file-derived record start: an offset past EOF is `OutOfRange`,
/// an in-bounds offset with too few bytes left is `Truncated`.
fn bounds(len: u64, offset: u64, size: u64, record: &'static str) -> Result<(), DecodeError> {
    if offset > len {
        return Err(DecodeError::OutOfRange {
            record,
            offset,
            len,
        });
    }
    if len - offset < size {
        return Err(DecodeError::Truncated {
            record,
            missing: size - (len - offset),
        });
    }
    Ok(())
}

/// Bytes up to the first NUL; an absent NUL means the field is fully
/// populated.  Lossy conversion — package contents are arbitrary.
fn nul_terminated(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}
