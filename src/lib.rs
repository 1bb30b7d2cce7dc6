pub use error::LoadError;
pub use provider::BlobSource;
pub use provider::BytesSource;
pub use provider::FileSource;
pub use record::CategoryFlags;
pub use record::Decomposition;
pub use record::DecompositionKind;
pub use record::NumericValue;
pub use record::PropertyRecord;
pub use selector::TableSelector;

pub mod blob;
pub mod hangul;

mod error;
mod provider;
mod record;
mod selector;
mod tables;

use tables::CaseTable;
use tables::CategoryTable;
use tables::CombiningClassTable;
use tables::CompositionTable;
use tables::DecompositionTable;
use tables::NumericTable;

/// база свойств символов Unicode
///
/// строится загрузчиком один раз и далее неизменна; все запросы - только
/// чтение, поэтому базу можно разделять между потоками без блокировок.
/// несколько баз (например, с разными версиями Unicode) могут
/// сосуществовать независимо
#[derive(Debug, Default)]
pub struct UnicodeProperties
{
    categories: CategoryTable,
    case: CaseTable,
    decompositions: DecompositionTable,
    compositions: CompositionTable,
    combining: CombiningClassTable,
    numerics: NumericTable,
}

impl UnicodeProperties
{
    /// загрузка базы из источника байтов
    ///
    /// селектор выбирает материализуемые таблицы; запросы к невыбранным
    /// сообщают об отсутствии значения
    pub fn load(
        source: &impl BlobSource,
        selector: TableSelector,
    ) -> Result<Self, LoadError>
    {
        let bytes = source.fetch()?;

        Self::from_bytes(&bytes, selector)
    }

    /// загрузка базы из буфера
    pub fn from_bytes(bytes: &[u8], selector: TableSelector) -> Result<Self, LoadError>
    {
        let sections = blob::parse_directory(bytes)?;

        let mut properties = Self::default();
        let mut loaded = 0;

        for section in &sections {
            if !selected(selector, section.tag) {
                continue;
            }

            let words = blob::section_words(bytes, section);

            match section.tag {
                blob::TAG_CTYPE => properties.categories = CategoryTable::from_words(words)?,
                blob::TAG_CASE => properties.case = CaseTable::from_words(words)?,
                blob::TAG_DECOMP => {
                    properties.decompositions = DecompositionTable::from_words(words)?
                }
                blob::TAG_COMPOSE => {
                    properties.compositions = CompositionTable::from_words(words)?
                }
                blob::TAG_COMBINING => {
                    properties.combining = CombiningClassTable::from_words(words)?
                }
                blob::TAG_NUMBER => properties.numerics = NumericTable::from_words(words)?,
                _ => (),
            }

            loaded += 1;
        }

        log::debug!(
            "unicode properties: loaded {} of {} sections",
            loaded,
            sections.len()
        );

        Ok(properties)
    }

    /// все свойства кодпоинта одной записью
    /// None - ни одна из загруженных таблиц ничего не знает о кодпоинте
    pub fn find(&self, code: u32) -> Option<PropertyRecord<'_>>
    {
        let record = PropertyRecord {
            code,
            category: self.category(code),
            combining_class: self.combining_class(code),
            lower: self.lower_mapping(code),
            upper: self.upper_mapping(code),
            title: self.title_mapping(code),
            decomposition: self.decompose(code),
            numeric: self.number_lookup(code),
        };

        match record.is_empty() {
            true => None,
            false => Some(record),
        }
    }

    /// битсет категорий; пустой - кодпоинт не назначен, вне диапазона
    /// Unicode или таблица категорий не загружена
    #[inline]
    pub fn category(&self, code: u32) -> CategoryFlags
    {
        match self.categories.lookup(code) {
            Some(bits) => CategoryFlags::from_bits_truncate(bits),
            None => CategoryFlags::empty(),
        }
    }

    /// буква?
    #[inline]
    pub fn is_alpha(&self, code: u32) -> bool
    {
        self.category(code).intersects(CategoryFlags::ALPHA)
    }

    /// буква, имеющая регистр?
    #[inline]
    pub fn has_case(&self, code: u32) -> bool
    {
        self.category(code).intersects(CategoryFlags::CASED)
    }

    /// прописная буква?
    #[inline]
    pub fn is_upper(&self, code: u32) -> bool
    {
        self.category(code).intersects(CategoryFlags::UPPERCASE_LETTER)
    }

    /// строчная буква?
    #[inline]
    pub fn is_lower(&self, code: u32) -> bool
    {
        self.category(code).intersects(CategoryFlags::LOWERCASE_LETTER)
    }

    /// заглавный диграф?
    #[inline]
    pub fn is_title(&self, code: u32) -> bool
    {
        self.category(code).intersects(CategoryFlags::TITLECASE_LETTER)
    }

    /// десятичная цифра?
    #[inline]
    pub fn is_digit(&self, code: u32) -> bool
    {
        self.category(code).intersects(CategoryFlags::DIGIT)
    }

    /// цифра или числовой символ?
    #[inline]
    pub fn is_number(&self, code: u32) -> bool
    {
        self.category(code).intersects(CategoryFlags::NUMBER)
    }

    /// комбинирующий символ?
    #[inline]
    pub fn is_mark(&self, code: u32) -> bool
    {
        self.category(code).intersects(CategoryFlags::MARK)
    }

    /// разделитель?
    #[inline]
    pub fn is_separator(&self, code: u32) -> bool
    {
        self.category(code).intersects(CategoryFlags::SEPARATOR)
    }

    /// знак препинания?
    #[inline]
    pub fn is_punctuation(&self, code: u32) -> bool
    {
        self.category(code).intersects(CategoryFlags::PUNCTUATION)
    }

    /// символ (математический, валюты и т.д.)?
    #[inline]
    pub fn is_symbol(&self, code: u32) -> bool
    {
        self.category(code).intersects(CategoryFlags::SYMBOL)
    }

    /// строчная буква для кодпоинта; без отображения - сам кодпоинт
    #[inline]
    pub fn to_lower(&self, code: u32) -> u32
    {
        match self.case.lower(code) {
            Some(mapped) => mapped,
            None => code,
        }
    }

    /// прописная буква для кодпоинта; без отображения - сам кодпоинт
    #[inline]
    pub fn to_upper(&self, code: u32) -> u32
    {
        match self.case.upper(code) {
            Some(mapped) => mapped,
            None => code,
        }
    }

    /// заглавная буква для кодпоинта; без отображения - сам кодпоинт
    /// у диграфов отличается от прописной
    #[inline]
    pub fn to_title(&self, code: u32) -> u32
    {
        match self.case.title(code) {
            Some(mapped) => mapped,
            None => code,
        }
    }

    /// отображение в строчную букву, если есть
    #[inline]
    pub fn lower_mapping(&self, code: u32) -> Option<u32>
    {
        self.case.lower(code)
    }

    /// отображение в прописную букву, если есть
    #[inline]
    pub fn upper_mapping(&self, code: u32) -> Option<u32>
    {
        self.case.upper(code)
    }

    /// отображение в заглавную букву, если есть
    #[inline]
    pub fn title_mapping(&self, code: u32) -> Option<u32>
    {
        self.case.title(code)
    }

    /// декомпозиция кодпоинта: один уровень, без рекурсивного разворачивания
    #[inline]
    pub fn decompose(&self, code: u32) -> Option<Decomposition<'_>>
    {
        self.decompositions.decompose(code)
    }

    /// каноническая композиция пары: стартер + комбинируемый кодпоинт
    /// некомпозируемые пары (в том числе исключения композиции
    /// и переставленные аргументы) дают None
    #[inline]
    pub fn compose(&self, first: u32, second: u32) -> Option<u32>
    {
        self.compositions.compose(first, second)
    }

    /// класс канонического комбинирования, 0 - некомбинирующий
    #[inline]
    pub fn combining_class(&self, code: u32) -> u8
    {
        self.combining.combining_class(code)
    }

    /// числовое значение - цифра, целое или дробь
    #[inline]
    pub fn number_lookup(&self, code: u32) -> Option<NumericValue>
    {
        self.numerics.number(code)
    }

    /// значение десятичной цифры; для дробей - None,
    /// даже если number_lookup() их находит
    #[inline]
    pub fn digit_lookup(&self, code: u32) -> Option<i32>
    {
        self.numerics.digit(code)
    }
}

/// выбрана ли секция с данным тегом
fn selected(selector: TableSelector, tag: u32) -> bool
{
    match tag {
        blob::TAG_CTYPE => selector.contains(TableSelector::CTYPE),
        blob::TAG_CASE => selector.contains(TableSelector::CASE),
        blob::TAG_DECOMP => selector.contains(TableSelector::DECOMP),
        blob::TAG_COMPOSE => selector.contains(TableSelector::COMPOSE),
        blob::TAG_COMBINING => selector.contains(TableSelector::COMBINING),
        blob::TAG_NUMBER => selector.contains(TableSelector::NUMBER),
        _ => false,
    }
}
