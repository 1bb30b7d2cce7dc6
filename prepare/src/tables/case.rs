use unicode_properties_source::properties::SimpleCaseMapping;
use unicode_properties_source::UnicodeData;

/// секция CASE: число строк, затем строки (код, строчная, прописная, заглавная)
///
/// строки полные: отсутствующее отображение записывается кодом самого
/// символа, так что поиск не зависит от таблицы категорий
pub fn build(unicode: &UnicodeData) -> Vec<u32>
{
    let mut rows: Vec<u32> = Vec::new();
    let mut count = 0u32;

    for codepoint in unicode.iter() {
        if !codepoint.has_case_mapping() {
            continue;
        }

        let code = codepoint.code;

        // пустая колонка заглавной в UCD означает совпадение с прописной
        let title = match codepoint.simple_titlecase_mapping {
            SimpleCaseMapping::Some(mapped) => mapped,
            SimpleCaseMapping::None => codepoint.simple_uppercase_mapping.or(code),
        };

        rows.push(code);
        rows.push(codepoint.simple_lowercase_mapping.or(code));
        rows.push(codepoint.simple_uppercase_mapping.or(code));
        rows.push(title);

        count += 1;
    }

    log::debug!("case: {} строк", count);

    let mut words = vec![count];
    words.extend(rows);

    words
}
