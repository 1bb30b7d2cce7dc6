use thiserror::Error;

/// ошибки загрузки бинарных данных
/// возникают только на этапе загрузки; запросы к загруженной базе не возвращают ошибок
#[derive(Debug, Error)]
pub enum LoadError
{
    /// источник данных отсутствует или не может быть прочитан
    #[error("data source unavailable: {0}")]
    NotFound(#[from] std::io::Error),

    /// сигнатура, размер или каталог секций не соответствуют формату
    #[error("malformed header: {0}")]
    MalformedHeader(&'static str),

    /// версия формата не совпадает с поддерживаемой
    #[error("unsupported format version {found}, expected {expected}")]
    VersionMismatch
    {
        found: u16, expected: u16
    },

    /// данные короче, чем заявлено в заголовке
    #[error("truncated data: need {needed} bytes, got {got}")]
    Truncated
    {
        needed: usize, got: usize
    },
}
