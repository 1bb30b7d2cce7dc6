mod canonical_combining_class;
mod decomposition;
mod general_category;
mod numeric_type;
mod simple_case_mapping;

pub use canonical_combining_class::CanonicalCombiningClass;
pub use decomposition::Decomposition;
pub use decomposition::DecompositionTag;
pub use general_category::GeneralCategory;
pub use numeric_type::NumericType;
pub use simple_case_mapping::SimpleCaseMapping;

/// кодпоинт Unicode
/// источник - UCD, UnicodeData.txt
#[derive(Debug, Clone)]
pub struct Codepoint
{
    /// код символа
    pub code: u32,
    /// название
    pub name: String,
    /// категория символа (general category)
    pub gc: GeneralCategory,
    /// класс канонического комбинирования (canonical combining class)
    pub ccc: CanonicalCombiningClass,
    /// числовое значение
    pub numeric: NumericType,
    /// соответствующая прописная буква
    pub simple_uppercase_mapping: SimpleCaseMapping,
    /// соответствующая строчная буква
    pub simple_lowercase_mapping: SimpleCaseMapping,
    /// соответствующая заглавная буква
    pub simple_titlecase_mapping: SimpleCaseMapping,
    /// тег декомпозиции
    pub decomposition_tag: Option<DecompositionTag>,
    /// декомпозиция (один уровень, как записано в UCD)
    pub decomposition: Vec<u32>,
}

impl Codepoint
{
    /// стартер? (CCC = 0)
    #[inline]
    pub fn is_starter(&self) -> bool
    {
        self.ccc.is_starter()
    }

    /// нестартер? (CCC != 0)
    #[inline]
    pub fn is_nonstarter(&self) -> bool
    {
        self.ccc.is_non_starter()
    }

    /// каноническая декомпозиция? (есть декомпозиция, нет тега)
    #[inline]
    pub fn has_canonical_decomposition(&self) -> bool
    {
        !self.decomposition.is_empty() && self.decomposition_tag.is_none()
    }

    /// есть хотя бы одно из отображений регистра?
    #[inline]
    pub fn has_case_mapping(&self) -> bool
    {
        self.simple_uppercase_mapping.is_some()
            || self.simple_lowercase_mapping.is_some()
            || self.simple_titlecase_mapping.is_some()
    }
}

#[derive(Debug, PartialEq)]
pub enum PropertiesError
{
    UnknownPropertyValue,
}

impl From<core::num::ParseIntError> for PropertiesError
{
    fn from(_: core::num::ParseIntError) -> Self
    {
        Self::UnknownPropertyValue
    }
}
