use super::PropertiesError;

/// класс канонического комбинирования (Canonical Combining Class, CCC)
/// берется из UCD: третья колонка UnicodeData.txt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CanonicalCombiningClass(u8);

impl CanonicalCombiningClass
{
    /// стартер? (CCC = 0)
    #[inline]
    pub fn is_starter(&self) -> bool
    {
        self.0 == 0
    }

    /// нестартер? (CCC != 0)
    #[inline]
    pub fn is_non_starter(&self) -> bool
    {
        self.0 != 0
    }

    /// значение класса
    #[inline]
    pub fn u8(&self) -> u8
    {
        self.0
    }
}

impl From<u8> for CanonicalCombiningClass
{
    #[inline]
    fn from(value: u8) -> Self
    {
        Self(value)
    }
}

impl TryFrom<&str> for CanonicalCombiningClass
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(Self::from(value.parse::<u8>()?))
    }
}
