use super::PropertiesError;

/// Simple Uppercase/Lowercase/Titlecase Mapping
/// берется из UCD: 12, 13, 14 колонки UnicodeData.txt
///
/// соответствующая символу прописная/строчная/заглавная буква, один символ;
/// пустая колонка - отображение отсутствует
///
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SimpleCaseMapping
{
    None,
    Some(u32),
}

impl SimpleCaseMapping
{
    #[inline]
    pub fn is_some(&self) -> bool
    {
        !matches!(self, Self::None)
    }

    /// код отображения, или код самого символа при отсутствии отображения
    #[inline]
    pub fn or(&self, code: u32) -> u32
    {
        match self {
            Self::Some(mapped) => *mapped,
            Self::None => code,
        }
    }
}

impl TryFrom<&str> for SimpleCaseMapping
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(match value.is_empty() {
            true => Self::None,
            false => match u32::from_str_radix(value, 16) {
                Ok(value) => Self::Some(value),
                Err(_) => return Err(PropertiesError::UnknownPropertyValue),
            },
        })
    }
}
