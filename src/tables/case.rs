use crate::error::LoadError;

/// таблица отображений регистра
///
/// строки (код, строчная, прописная, заглавная), отсортированы по коду;
/// значение, равное коду - отображения в эту сторону нет. строки полные,
/// поэтому поиск не требует знания категории кодпоинта и работает при
/// загрузке одной этой таблицы
#[derive(Debug, Default)]
pub struct CaseTable
{
    rows: Vec<u32>,
}

/// размер строки таблицы
const ROW: usize = 4;

impl CaseTable
{
    /// секция CASE: число строк, затем сами строки
    pub fn from_words(words: Vec<u32>) -> Result<Self, LoadError>
    {
        if words.is_empty() {
            return Err(LoadError::MalformedHeader("short case section"));
        }

        let n = words[0] as usize;

        if words.len() != 1 + n * ROW {
            return Err(LoadError::MalformedHeader("bad case section size"));
        }

        Ok(Self {
            rows: words[1 ..].to_vec(),
        })
    }

    /// строчная буква, соответствующая кодпоинту
    #[inline]
    pub fn lower(&self, code: u32) -> Option<u32>
    {
        self.field(code, 1)
    }

    /// прописная буква, соответствующая кодпоинту
    #[inline]
    pub fn upper(&self, code: u32) -> Option<u32>
    {
        self.field(code, 2)
    }

    /// заглавная буква, соответствующая кодпоинту
    /// хранится отдельно от прописной: у диграфов они различаются
    #[inline]
    pub fn title(&self, code: u32) -> Option<u32>
    {
        self.field(code, 3)
    }

    fn field(&self, code: u32, field: usize) -> Option<u32>
    {
        let mut l = 0isize;
        let mut r = self.rows.len() as isize / ROW as isize - 1;

        while l <= r {
            let m = (l + r) >> 1;
            let i = m as usize * ROW;

            if code > self.rows[i] {
                l = m + 1;
            } else if code < self.rows[i] {
                r = m - 1;
            } else {
                let value = self.rows[i + field];

                return match value == code {
                    true => None,
                    false => Some(value),
                };
            }
        }

        None
    }
}
