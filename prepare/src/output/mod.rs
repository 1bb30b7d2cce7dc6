use byteorder::LittleEndian;
use byteorder::WriteBytesExt;

use unicode_properties::blob;
use unicode_properties_source::UnicodeData;

use crate::tables;

/// собрать файл данных: заголовок, каталог секций, секции
///
/// формат описан в модуле blob библиотеки; все секции пишутся всегда -
/// выбор нужных происходит на стороне загрузчика
pub fn assemble(unicode: &UnicodeData, exclusions: &[u32]) -> Vec<u8>
{
    let sections: Vec<(u32, Vec<u32>)> = vec![
        (blob::TAG_CTYPE, tables::ctype::build(unicode)),
        (blob::TAG_CASE, tables::case::build(unicode)),
        (blob::TAG_DECOMP, tables::decomposition::build(unicode)),
        (
            blob::TAG_COMPOSE,
            tables::composition::build(unicode, exclusions),
        ),
        (blob::TAG_COMBINING, tables::combining::build(unicode)),
        (blob::TAG_NUMBER, tables::numeric::build(unicode)),
    ];

    let mut bytes: Vec<u8> = Vec::new();

    bytes.extend_from_slice(&blob::MAGIC);
    bytes.write_u16::<LittleEndian>(blob::VERSION).unwrap();
    bytes.write_u16::<LittleEndian>(sections.len() as u16).unwrap();

    let mut offset = blob::HEADER_LEN + sections.len() * blob::DIRECTORY_ENTRY_LEN;

    for (tag, words) in &sections {
        bytes.write_u32::<LittleEndian>(*tag).unwrap();
        bytes.write_u32::<LittleEndian>(offset as u32).unwrap();
        bytes.write_u32::<LittleEndian>(words.len() as u32 * 4).unwrap();

        offset += words.len() * 4;
    }

    for (_, words) in &sections {
        for word in words {
            bytes.write_u32::<LittleEndian>(*word).unwrap();
        }
    }

    log::debug!("файл данных собран: {} байт", bytes.len());

    bytes
}
