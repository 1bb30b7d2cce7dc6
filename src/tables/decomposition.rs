use crate::error::LoadError;
use crate::record::Decomposition;
use crate::record::DecompositionKind;

/// таблица декомпозиций
///
/// узлы (код, info), отсортированные по коду, и общий массив значений;
/// info: смещение в значениях (биты 8..32), длина (биты 1..8),
/// бит 0 - декомпозиция совместимости
#[derive(Debug, Default)]
pub struct DecompositionTable
{
    nodes: Vec<u32>,
    values: Vec<u32>,
}

impl DecompositionTable
{
    /// секция DECOMP: число узлов, число значений, узлы, значения
    pub fn from_words(words: Vec<u32>) -> Result<Self, LoadError>
    {
        if words.len() < 2 {
            return Err(LoadError::MalformedHeader("short decomposition section"));
        }

        let n_nodes = words[0] as usize;
        let n_values = words[1] as usize;

        if words.len() != 2 + n_nodes * 2 + n_values {
            return Err(LoadError::MalformedHeader("bad decomposition section size"));
        }

        Ok(Self {
            nodes: words[2 .. 2 + n_nodes * 2].to_vec(),
            values: words[2 + n_nodes * 2 ..].to_vec(),
        })
    }

    /// декомпозиция кодпоинта: один уровень, без рекурсивного разворачивания
    #[inline]
    pub fn decompose(&self, code: u32) -> Option<Decomposition<'_>>
    {
        let mut l = 0isize;
        let mut r = self.nodes.len() as isize / 2 - 1;

        while l <= r {
            let m = (l + r) >> 1;
            let i = m as usize * 2;

            if code > self.nodes[i] {
                l = m + 1;
            } else if code < self.nodes[i] {
                r = m - 1;
            } else {
                return self.entry(self.nodes[i + 1]);
            }
        }

        None
    }

    fn entry(&self, info: u32) -> Option<Decomposition<'_>>
    {
        let offset = (info >> 8) as usize;
        let len = (info as usize >> 1) & 0x7F;

        let kind = match info & 1 == 0 {
            true => DecompositionKind::Canonical,
            false => DecompositionKind::Compatibility,
        };

        let codes = self.values.get(offset .. offset + len)?;

        Some(Decomposition { kind, codes })
    }
}
