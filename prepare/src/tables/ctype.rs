use unicode_properties::CategoryFlags;
use unicode_properties_source::properties::GeneralCategory;
use unicode_properties_source::UnicodeData;

/// граница плотной части индекса: кодпоинты ниже нее ищутся по прямому
/// индексу, остальные - по сжатым диапазонам
pub const DENSE_LIMIT: u32 = 0x2000;

/// метка "запись отсутствует" в плотной части
const NO_RECORD: u16 = 0xFFFF;

/// битсет категорий для основной категории UCD
/// Cn не хранится: неназначенный кодпоинт не имеет записи вовсе
fn category_flags(gc: GeneralCategory) -> CategoryFlags
{
    match gc {
        GeneralCategory::Unassigned => CategoryFlags::empty(),
        GeneralCategory::UppercaseLetter => CategoryFlags::UPPERCASE_LETTER,
        GeneralCategory::LowercaseLetter => CategoryFlags::LOWERCASE_LETTER,
        GeneralCategory::TitlecaseLetter => CategoryFlags::TITLECASE_LETTER,
        GeneralCategory::ModifierLetter => CategoryFlags::MODIFIER_LETTER,
        GeneralCategory::OtherLetter => CategoryFlags::OTHER_LETTER,
        GeneralCategory::NonspacingMark => CategoryFlags::NONSPACING_MARK,
        GeneralCategory::SpacingMark => CategoryFlags::SPACING_MARK,
        GeneralCategory::EnclosingMark => CategoryFlags::ENCLOSING_MARK,
        GeneralCategory::DecimalNumber => CategoryFlags::DECIMAL_NUMBER,
        GeneralCategory::LetterNumber => CategoryFlags::LETTER_NUMBER,
        GeneralCategory::OtherNumber => CategoryFlags::OTHER_NUMBER,
        GeneralCategory::SpaceSeparator => CategoryFlags::SPACE_SEPARATOR,
        GeneralCategory::LineSeparator => CategoryFlags::LINE_SEPARATOR,
        GeneralCategory::ParagraphSeparator => CategoryFlags::PARAGRAPH_SEPARATOR,
        GeneralCategory::Control => CategoryFlags::CONTROL,
        GeneralCategory::Format => CategoryFlags::FORMAT,
        GeneralCategory::Surrogate => CategoryFlags::SURROGATE,
        GeneralCategory::PrivateUse => CategoryFlags::PRIVATE_USE,
        GeneralCategory::ConnectorPunctuation => CategoryFlags::CONNECTOR_PUNCTUATION,
        GeneralCategory::DashPunctuation => CategoryFlags::DASH_PUNCTUATION,
        GeneralCategory::OpenPunctuation => CategoryFlags::OPEN_PUNCTUATION,
        GeneralCategory::ClosePunctuation => CategoryFlags::CLOSE_PUNCTUATION,
        GeneralCategory::InitialPunctuation => CategoryFlags::INITIAL_PUNCTUATION,
        GeneralCategory::FinalPunctuation => CategoryFlags::FINAL_PUNCTUATION,
        GeneralCategory::OtherPunctuation => CategoryFlags::OTHER_PUNCTUATION,
        GeneralCategory::MathSymbol => CategoryFlags::MATH_SYMBOL,
        GeneralCategory::CurrencySymbol => CategoryFlags::CURRENCY_SYMBOL,
        GeneralCategory::ModifierSymbol => CategoryFlags::MODIFIER_SYMBOL,
        GeneralCategory::OtherSymbol => CategoryFlags::OTHER_SYMBOL,
    }
}

/// секция CTYPE: dense_limit, число диапазонов, число записей,
/// плотный индекс (u16, по два на слово), диапазоны (начало, конец, запись),
/// уникальные битсеты
pub fn build(unicode: &UnicodeData) -> Vec<u32>
{
    let mut records: Vec<u32> = Vec::new();
    let mut dense = vec![NO_RECORD; DENSE_LIMIT as usize];
    let mut ranges: Vec<(u32, u32, u32)> = Vec::new();

    for codepoint in unicode.iter() {
        let flags = category_flags(codepoint.gc);

        if flags.is_empty() {
            continue;
        }

        let record = record_index(&mut records, flags.bits());

        match codepoint.code < DENSE_LIMIT {
            true => dense[codepoint.code as usize] = record,
            false => push_range(&mut ranges, codepoint.code, record as u32),
        }
    }

    log::debug!(
        "ctype: {} записей, {} диапазонов",
        records.len(),
        ranges.len()
    );

    let mut words = vec![DENSE_LIMIT, ranges.len() as u32, records.len() as u32];

    for pair in dense.chunks(2) {
        words.push(pair[0] as u32 | (pair[1] as u32) << 16);
    }

    for (start, end, record) in ranges {
        words.push(start);
        words.push(end);
        words.push(record);
    }

    words.extend(records);

    words
}

/// добавить кодпоинт в диапазонную часть;
/// соседние кодпоинты с одинаковой записью сливаются в один диапазон
fn push_range(ranges: &mut Vec<(u32, u32, u32)>, code: u32, record: u32)
{
    if let Some(last) = ranges.last_mut() {
        if last.1 + 1 == code && last.2 == record {
            last.1 = code;

            return;
        }
    }

    ranges.push((code, code, record));
}

/// номер записи с данным битсетом; одинаковые битсеты хранятся один раз
fn record_index(records: &mut Vec<u32>, flags: u32) -> u16
{
    let index = match records.iter().position(|&bits| bits == flags) {
        Some(index) => index,
        None => {
            records.push(flags);
            records.len() - 1
        }
    };

    assert!(index < NO_RECORD as usize);

    index as u16
}
