use bitflags::bitflags;

bitflags! {
    /// выбор загружаемых таблиц
    ///
    /// невыбранные таблицы не материализуются: запросы к ним сообщают
    /// об отсутствии значения, как для кодпоинтов без свойств
    pub struct TableSelector: u32 {
        /// категории символов
        const CTYPE = 1 << 0;
        /// отображения регистра
        const CASE = 1 << 1;
        /// декомпозиции
        const DECOMP = 1 << 2;
        /// канонические композиции
        const COMPOSE = 1 << 3;
        /// классы канонического комбинирования
        const COMBINING = 1 << 4;
        /// числовые значения
        const NUMBER = 1 << 5;

        const ALL = Self::CTYPE.bits
            | Self::CASE.bits
            | Self::DECOMP.bits
            | Self::COMPOSE.bits
            | Self::COMBINING.bits
            | Self::NUMBER.bits;
    }
}
