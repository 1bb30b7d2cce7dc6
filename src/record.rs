use bitflags::bitflags;

bitflags! {
    /// битсет категорий кодпоинта
    ///
    /// младшие биты - по одному на основную категорию UCD (Cn не хранится:
    /// неназначенный кодпоинт не имеет записи вовсе); именованные маски
    /// объединяют категории в группы
    pub struct CategoryFlags: u32 {
        /// Lu
        const UPPERCASE_LETTER = 1 << 0;
        /// Ll
        const LOWERCASE_LETTER = 1 << 1;
        /// Lt
        const TITLECASE_LETTER = 1 << 2;
        /// Lm
        const MODIFIER_LETTER = 1 << 3;
        /// Lo
        const OTHER_LETTER = 1 << 4;
        /// Mn
        const NONSPACING_MARK = 1 << 5;
        /// Mc
        const SPACING_MARK = 1 << 6;
        /// Me
        const ENCLOSING_MARK = 1 << 7;
        /// Nd
        const DECIMAL_NUMBER = 1 << 8;
        /// Nl
        const LETTER_NUMBER = 1 << 9;
        /// No
        const OTHER_NUMBER = 1 << 10;
        /// Zs
        const SPACE_SEPARATOR = 1 << 11;
        /// Zl
        const LINE_SEPARATOR = 1 << 12;
        /// Zp
        const PARAGRAPH_SEPARATOR = 1 << 13;
        /// Cc
        const CONTROL = 1 << 14;
        /// Cf
        const FORMAT = 1 << 15;
        /// Cs
        const SURROGATE = 1 << 16;
        /// Co
        const PRIVATE_USE = 1 << 17;
        /// Pc
        const CONNECTOR_PUNCTUATION = 1 << 18;
        /// Pd
        const DASH_PUNCTUATION = 1 << 19;
        /// Ps
        const OPEN_PUNCTUATION = 1 << 20;
        /// Pe
        const CLOSE_PUNCTUATION = 1 << 21;
        /// Pi
        const INITIAL_PUNCTUATION = 1 << 22;
        /// Pf
        const FINAL_PUNCTUATION = 1 << 23;
        /// Po
        const OTHER_PUNCTUATION = 1 << 24;
        /// Sm
        const MATH_SYMBOL = 1 << 25;
        /// Sc
        const CURRENCY_SYMBOL = 1 << 26;
        /// Sk
        const MODIFIER_SYMBOL = 1 << 27;
        /// So
        const OTHER_SYMBOL = 1 << 28;

        /// LC - буквы, имеющие регистр
        const CASED = Self::UPPERCASE_LETTER.bits
            | Self::LOWERCASE_LETTER.bits
            | Self::TITLECASE_LETTER.bits;
        /// L - буквы
        const ALPHA = Self::CASED.bits
            | Self::MODIFIER_LETTER.bits
            | Self::OTHER_LETTER.bits;
        /// M - комбинирующие символы
        const MARK = Self::NONSPACING_MARK.bits
            | Self::SPACING_MARK.bits
            | Self::ENCLOSING_MARK.bits;
        /// Nd - десятичные цифры
        const DIGIT = Self::DECIMAL_NUMBER.bits;
        /// N - цифры и числовые символы
        const NUMBER = Self::DECIMAL_NUMBER.bits
            | Self::LETTER_NUMBER.bits
            | Self::OTHER_NUMBER.bits;
        /// Z - разделители
        const SEPARATOR = Self::SPACE_SEPARATOR.bits
            | Self::LINE_SEPARATOR.bits
            | Self::PARAGRAPH_SEPARATOR.bits;
        /// P - знаки препинания
        const PUNCTUATION = Self::CONNECTOR_PUNCTUATION.bits
            | Self::DASH_PUNCTUATION.bits
            | Self::OPEN_PUNCTUATION.bits
            | Self::CLOSE_PUNCTUATION.bits
            | Self::INITIAL_PUNCTUATION.bits
            | Self::FINAL_PUNCTUATION.bits
            | Self::OTHER_PUNCTUATION.bits;
        /// S - математические символы, валюты и т.д.
        const SYMBOL = Self::MATH_SYMBOL.bits
            | Self::CURRENCY_SYMBOL.bits
            | Self::MODIFIER_SYMBOL.bits
            | Self::OTHER_SYMBOL.bits;
        /// C - управляющие, форматирующие, суррогаты, приватные
        const OTHER = Self::CONTROL.bits
            | Self::FORMAT.bits
            | Self::SURROGATE.bits
            | Self::PRIVATE_USE.bits;
    }
}

/// вид декомпозиции
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompositionKind
{
    /// каноническая - последовательность канонически эквивалентна исходному кодпоинту
    Canonical,
    /// совместимости - в UCD помечена тегом (<compat>, <font>, ...)
    Compatibility,
}

/// декомпозиция кодпоинта: один уровень, как записано в данных
///
/// рекурсивное разворачивание остается за вызывающей стороной - так она
/// сама выбирает, следовать только каноническим декомпозициям или
/// декомпозициям совместимости тоже
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposition<'a>
{
    pub kind: DecompositionKind,
    pub codes: &'a [u32],
}

impl<'a> Decomposition<'a>
{
    #[inline]
    pub fn is_canonical(&self) -> bool
    {
        self.kind == DecompositionKind::Canonical
    }
}

/// числовое значение кодпоинта
///
/// у десятичных цифр числитель равен знаменателю; дроби хранят
/// несовпадающие значения, числитель может быть отрицательным
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericValue
{
    pub numerator: i32,
    pub denominator: i32,
}

impl NumericValue
{
    /// значение с семантикой обычной цифры?
    #[inline]
    pub fn is_digit(&self) -> bool
    {
        self.numerator == self.denominator
    }
}

/// собранные воедино свойства кодпоинта
///
/// собирается из загруженных таблиц; поля, относящиеся к невыбранным
/// при загрузке таблицам, пусты
#[derive(Debug, Clone, Copy)]
pub struct PropertyRecord<'a>
{
    pub code: u32,
    /// категории; пустой битсет - кодпоинт не назначен или таблица не загружена
    pub category: CategoryFlags,
    /// класс канонического комбинирования, 0 - некомбинирующий
    pub combining_class: u8,
    /// простые отображения регистра; None - отображение отсутствует
    pub lower: Option<u32>,
    pub upper: Option<u32>,
    pub title: Option<u32>,
    /// декомпозиция (один уровень)
    pub decomposition: Option<Decomposition<'a>>,
    /// числовое значение
    pub numeric: Option<NumericValue>,
}

impl<'a> PropertyRecord<'a>
{
    /// ни одна из таблиц ничего не знает о кодпоинте?
    pub(crate) fn is_empty(&self) -> bool
    {
        self.category.is_empty()
            && self.combining_class == 0
            && self.lower.is_none()
            && self.upper.is_none()
            && self.title.is_none()
            && self.decomposition.is_none()
            && self.numeric.is_none()
    }
}
