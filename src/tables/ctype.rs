use crate::error::LoadError;

/// метка "запись отсутствует" в плотной части индекса
const NO_RECORD: u16 = 0xFFFF;

/// таблица категорий: гибридный индекс кодпоинт -> битсет категорий
///
/// нижний диапазон кодпоинтов индексируется напрямую, остальные - двоичным
/// поиском по сжатым диапазонам; одинаковые битсеты хранятся одной записью
#[derive(Debug, Default)]
pub struct CategoryTable
{
    /// прямой индекс для кодпоинтов ниже dense_limit; значение - номер записи
    dense: Vec<u16>,
    /// тройки (начало, конец включительно, номер записи), отсортированы по началу
    ranges: Vec<u32>,
    /// уникальные битсеты категорий
    records: Vec<u32>,
}

impl CategoryTable
{
    /// секция CTYPE: dense_limit, число диапазонов, число записей,
    /// плотный индекс (u16, по два на слово), диапазоны, записи
    pub fn from_words(words: Vec<u32>) -> Result<Self, LoadError>
    {
        if words.len() < 3 {
            return Err(LoadError::MalformedHeader("short ctype section"));
        }

        let dense_limit = words[0] as usize;
        let n_ranges = words[1] as usize;
        let n_records = words[2] as usize;

        if dense_limit > 0x11_0000 {
            return Err(LoadError::MalformedHeader("bad ctype dense limit"));
        }

        let dense_words = (dense_limit + 1) / 2;
        let expected = 3 + dense_words + n_ranges * 3 + n_records;

        if words.len() != expected {
            return Err(LoadError::MalformedHeader("bad ctype section size"));
        }

        let mut dense = Vec::with_capacity(dense_limit);

        for word in &words[3 .. 3 + dense_words] {
            dense.push(*word as u16);
            dense.push((*word >> 16) as u16);
        }

        dense.truncate(dense_limit);

        let ranges = words[3 + dense_words .. 3 + dense_words + n_ranges * 3].to_vec();
        let records = words[3 + dense_words + n_ranges * 3 ..].to_vec();

        Ok(Self {
            dense,
            ranges,
            records,
        })
    }

    /// битсет категорий кодпоинта
    #[inline]
    pub fn lookup(&self, code: u32) -> Option<u32>
    {
        if (code as usize) < self.dense.len() {
            let index = self.dense[code as usize];

            return match index == NO_RECORD {
                true => None,
                false => self.records.get(index as usize).copied(),
            };
        }

        let mut l = 0isize;
        let mut r = self.ranges.len() as isize / 3 - 1;

        while l <= r {
            let m = (l + r) >> 1;
            let i = m as usize * 3;

            if code > self.ranges[i + 1] {
                l = m + 1;
            } else if code < self.ranges[i] {
                r = m - 1;
            } else {
                return self.records.get(self.ranges[i + 2] as usize).copied();
            }
        }

        None
    }
}
