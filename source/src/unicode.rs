use std::collections::BTreeMap;

use crate::properties::*;

/// разобранная таблица Unicode: кодпоинт -> свойства
///
/// диапазоны, заданные в UCD парой строк First/Last (CJK, хангыль, тангутский),
/// развернуты в отдельные записи; суррогаты и Private Use пропущены
#[derive(Debug, Default)]
pub struct UnicodeData
{
    codepoints: BTreeMap<u32, Codepoint>,
}

impl UnicodeData
{
    /// свойства кодпоинта
    #[inline]
    pub fn get(&self, code: u32) -> Option<&Codepoint>
    {
        self.codepoints.get(&code)
    }

    /// все кодпоинты в порядке возрастания кода
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Codepoint>
    {
        self.codepoints.values()
    }

    pub fn len(&self) -> usize
    {
        self.codepoints.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.codepoints.is_empty()
    }
}

/// разбор UnicodeData.txt из UCD
pub fn parse_unicode_data(data: &str) -> Result<UnicodeData, PropertiesError>
{
    let mut map: BTreeMap<u32, Codepoint> = BTreeMap::new();

    // пригодится, когда встретим диапазоны
    let mut range_start: Option<Codepoint> = None;

    for line in data.lines() {
        if line.is_empty() {
            continue;
        }

        let props: Vec<&str> = line.split(';').collect();

        if props.len() != 15 {
            return Err(PropertiesError::UnknownPropertyValue);
        }

        // код и название
        let code = u32::from_str_radix(props[0], 16)
            .map_err(|_| PropertiesError::UnknownPropertyValue)?;
        let name = props[1].to_owned();

        // начинается Private Use
        if code >= 0xF0000 {
            break;
        }

        // категория и CCC
        let gc = GeneralCategory::try_from(props[2])?;
        let ccc = CanonicalCombiningClass::try_from(props[3])?;

        // декомпозиция и тег декомпозиции
        let decomposition = Decomposition::try_from(props[5])?;

        // различные numeric значения
        let numeric = NumericType::try_from((props[6], props[7], props[8]))?;

        // связанные символы в другом регистре (если есть)
        let simple_uppercase_mapping = SimpleCaseMapping::try_from(props[12])?;
        let simple_lowercase_mapping = SimpleCaseMapping::try_from(props[13])?;
        let simple_titlecase_mapping = SimpleCaseMapping::try_from(props[14])?;

        // колонки 4, 9 (bidi), 10, 11 (устаревшие названия) не используются

        let codepoint = Codepoint {
            code,
            name: name.clone(),
            gc,
            ccc,
            numeric,
            simple_uppercase_mapping,
            simple_lowercase_mapping,
            simple_titlecase_mapping,
            decomposition_tag: decomposition.tag,
            decomposition: decomposition.codes,
        };

        // различные блоки, заданные диапазонами: CJK, хангыль, тангутский,
        // а также суррогаты и Private Use
        if name.starts_with('<') && (name != "<control>") {
            // сразу отсекаем Private Use и суррогатные пары
            if name.contains("Private Use") || name.contains("Surrogate") {
                continue;
            }

            if name.ends_with("First>") {
                range_start = Some(codepoint);

                continue;
            }

            if name.ends_with("Last>") && range_start.is_some() {
                let group = range_start.take().unwrap();
                let group_name = &group.name[1 .. group.name.len() - 8];

                // названия символов диапазона для нас не важны
                // при необходимости их можно получить из UCD - extracted/DerivedName.txt

                for i in group.code ..= code {
                    let mut codepoint = group.clone();

                    codepoint.code = i;
                    codepoint.name = format!("{} - {:X}", group_name, i);

                    map.insert(i, codepoint);
                }
            }

            continue;
        }

        map.insert(codepoint.code, codepoint);
    }

    Ok(UnicodeData { codepoints: map })
}
