use super::PropertiesError;

/// основная категория символа (General Category, GC)
/// берется из UCD: вторая колонка UnicodeData.txt
///
/// общие категории:
///     LC (Lu, Ll, Lt) - буквы, имеющие регистр
///     L (Lu, Ll, Lt, Lm, Lo) - буквы
///     M (Mn, Mc, Me) - комбинирующие символы
///     N (Nd, Nl, No) - цифры, числовые символы
///     P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - знаки препинания
///     S (Sm, Sc, Sk, So) - различные символы (математические, валюты и т.д.)
///     Z (Zs, Zl, Zp) - разделители
///     C (Cc, Cf, Cs, Co, Cn) - системные символы
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GeneralCategory
{
    /// Lu - прописная буква
    UppercaseLetter,
    /// Ll - строчная буква
    LowercaseLetter,
    /// Lt - диграфический символ, первая часть - заглавная буква
    TitlecaseLetter,
    /// Lm - буква-модификатор
    ModifierLetter,
    /// Lo - прочие буквы, включая слоги и иероглифы
    OtherLetter,
    /// Mn - неразрывный комбинирующий маркер (не занимающий пространства)
    NonspacingMark,
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark,
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark,
    /// Nd - десятичная цифра
    DecimalNumber,
    /// Nl - буквоподобный числовой символ
    LetterNumber,
    /// No - прочие числовые символы
    OtherNumber,
    /// Zs - разделитель-пробел
    SpaceSeparator,
    /// Zl - разделитель строки
    LineSeparator,
    /// Zp - разделитель параграфов
    ParagraphSeparator,
    /// Cc - управляющий символ, относится к C0 или C1
    Control,
    /// Cf - управляющий символ форматирования
    Format,
    /// Cs - символ-суррогат
    Surrogate,
    /// Co - символ для приватного использования
    PrivateUse,
    /// Cn - место под символ зарезервировано или не назначено
    Unassigned,
    /// Pc - объединяющяя пунктуация, например _
    ConnectorPunctuation,
    /// Pd - тире или дефис как знак препинания
    DashPunctuation,
    /// Ps - открывающий знак пунктуации (из пары)
    OpenPunctuation,
    /// Pe - закрывающий знак пунктуации (из пары)
    ClosePunctuation,
    /// Pi - начальный знак цитаты
    InitialPunctuation,
    /// Pf - конечный знак цитаты
    FinalPunctuation,
    /// Po - знак препинания другого типа
    OtherPunctuation,
    /// Sm - математический символ
    MathSymbol,
    /// Sc - символ валюты
    CurrencySymbol,
    /// Sk - символ модификатора, не похожий на букву
    ModifierSymbol,
    /// So - прочие символы
    OtherSymbol,
}

impl GeneralCategory
{
    /// относится-ли категория к буквам с регистром (LC)
    #[inline]
    pub fn is_cased_letter(&self) -> bool
    {
        matches!(
            self,
            Self::UppercaseLetter | Self::LowercaseLetter | Self::TitlecaseLetter
        )
    }

    /// относится-ли категория к буквам (L)
    #[inline]
    pub fn is_letter(&self) -> bool
    {
        self.is_cased_letter() || matches!(self, Self::ModifierLetter | Self::OtherLetter)
    }

    /// относится-ли категория к комбинирующим символам (M)
    #[inline]
    pub fn is_combining_mark(&self) -> bool
    {
        matches!(
            self,
            Self::NonspacingMark | Self::SpacingMark | Self::EnclosingMark
        )
    }

    /// относится-ли категория к цифрам и числовым символам (N)
    #[inline]
    pub fn is_numeric(&self) -> bool
    {
        matches!(
            self,
            Self::DecimalNumber | Self::LetterNumber | Self::OtherNumber
        )
    }

    /// относится-ли категория к разделителям (Z)
    #[inline]
    pub fn is_separator(&self) -> bool
    {
        matches!(
            self,
            Self::SpaceSeparator | Self::LineSeparator | Self::ParagraphSeparator
        )
    }
}

impl TryFrom<&str> for GeneralCategory
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr {
            "Cn" | "" => Self::Unassigned,
            "Lu" => Self::UppercaseLetter,
            "Ll" => Self::LowercaseLetter,
            "Lt" => Self::TitlecaseLetter,
            "Lm" => Self::ModifierLetter,
            "Lo" => Self::OtherLetter,
            "Mn" => Self::NonspacingMark,
            "Mc" => Self::SpacingMark,
            "Me" => Self::EnclosingMark,
            "Nd" => Self::DecimalNumber,
            "Nl" => Self::LetterNumber,
            "No" => Self::OtherNumber,
            "Zs" => Self::SpaceSeparator,
            "Zl" => Self::LineSeparator,
            "Zp" => Self::ParagraphSeparator,
            "Cc" => Self::Control,
            "Cf" => Self::Format,
            "Cs" => Self::Surrogate,
            "Co" => Self::PrivateUse,
            "Pc" => Self::ConnectorPunctuation,
            "Pd" => Self::DashPunctuation,
            "Ps" => Self::OpenPunctuation,
            "Pe" => Self::ClosePunctuation,
            "Pi" => Self::InitialPunctuation,
            "Pf" => Self::FinalPunctuation,
            "Po" => Self::OtherPunctuation,
            "Sm" => Self::MathSymbol,
            "Sc" => Self::CurrencySymbol,
            "Sk" => Self::ModifierSymbol,
            "So" => Self::OtherSymbol,
            _ => return Err(PropertiesError::UnknownPropertyValue),
        })
    }
}
