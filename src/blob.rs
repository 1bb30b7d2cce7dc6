use byteorder::ByteOrder;
use byteorder::LittleEndian;

use crate::error::LoadError;

/// сигнатура файла данных
pub const MAGIC: [u8; 4] = *b"UCPB";
/// поддерживаемая версия формата
pub const VERSION: u16 = 1;

/// размер заголовка: сигнатура + версия + число секций
pub const HEADER_LEN: usize = 8;
/// размер записи каталога: тег + смещение + длина
pub const DIRECTORY_ENTRY_LEN: usize = 12;

/// теги секций
pub const TAG_CTYPE: u32 = 1;
pub const TAG_CASE: u32 = 2;
pub const TAG_DECOMP: u32 = 3;
pub const TAG_COMPOSE: u32 = 4;
pub const TAG_COMBINING: u32 = 5;
pub const TAG_NUMBER: u32 = 6;

const TAG_MAX: u32 = TAG_NUMBER;

/// запись каталога секций
#[derive(Debug, Clone, Copy)]
pub struct Section
{
    pub tag: u32,
    pub offset: u32,
    pub len: u32,
}

/// разбор заголовка и каталога секций
///
/// проверяются сигнатура, версия и границы каждой секции; содержимое секций
/// на этом этапе не интерпретируется
pub fn parse_directory(bytes: &[u8]) -> Result<Vec<Section>, LoadError>
{
    if bytes.len() < HEADER_LEN {
        return Err(LoadError::Truncated {
            needed: HEADER_LEN,
            got: bytes.len(),
        });
    }

    if bytes[0 .. 4] != MAGIC {
        return Err(LoadError::MalformedHeader("bad magic"));
    }

    let version = LittleEndian::read_u16(&bytes[4 .. 6]);

    if version != VERSION {
        return Err(LoadError::VersionMismatch {
            found: version,
            expected: VERSION,
        });
    }

    let count = LittleEndian::read_u16(&bytes[6 .. 8]) as usize;

    if count == 0 || count > TAG_MAX as usize {
        return Err(LoadError::MalformedHeader("bad section count"));
    }

    let directory_end = HEADER_LEN + count * DIRECTORY_ENTRY_LEN;

    if bytes.len() < directory_end {
        return Err(LoadError::Truncated {
            needed: directory_end,
            got: bytes.len(),
        });
    }

    let mut sections = Vec::with_capacity(count);
    let mut seen: u32 = 0;

    for i in 0 .. count {
        let entry = &bytes[HEADER_LEN + i * DIRECTORY_ENTRY_LEN ..];

        let section = Section {
            tag: LittleEndian::read_u32(&entry[0 .. 4]),
            offset: LittleEndian::read_u32(&entry[4 .. 8]),
            len: LittleEndian::read_u32(&entry[8 .. 12]),
        };

        if section.tag == 0 || section.tag > TAG_MAX {
            return Err(LoadError::MalformedHeader("unknown section tag"));
        }

        if seen & (1 << section.tag) != 0 {
            return Err(LoadError::MalformedHeader("duplicate section tag"));
        }

        seen |= 1 << section.tag;

        if (section.offset as usize) < directory_end || section.len % 4 != 0 {
            return Err(LoadError::MalformedHeader("bad section bounds"));
        }

        let section_end = section.offset as usize + section.len as usize;

        if bytes.len() < section_end {
            return Err(LoadError::Truncated {
                needed: section_end,
                got: bytes.len(),
            });
        }

        sections.push(section);
    }

    Ok(sections)
}

/// содержимое секции в виде массива u32
pub fn section_words(bytes: &[u8], section: &Section) -> Vec<u32>
{
    let from = section.offset as usize;
    let to = from + section.len as usize;

    let mut words = vec![0u32; section.len as usize / 4];

    LittleEndian::read_u32_into(&bytes[from .. to], &mut words);

    words
}
