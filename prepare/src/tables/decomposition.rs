use unicode_properties_source::UnicodeData;

/// секция DECOMP: число узлов, число значений, узлы (код, info), значения
///
/// info: смещение в значениях (биты 8..32), длина (биты 1..8),
/// бит 0 - декомпозиция совместимости
pub fn build(unicode: &UnicodeData) -> Vec<u32>
{
    let mut nodes: Vec<u32> = Vec::new();
    let mut values: Vec<u32> = Vec::new();

    for codepoint in unicode.iter() {
        if codepoint.decomposition.is_empty() {
            continue;
        }

        let offset = values.len();
        let len = codepoint.decomposition.len();

        assert!(offset <= 0xFF_FFFF);
        assert!(len <= 0x7F);

        let compat = u32::from(codepoint.decomposition_tag.is_some());

        nodes.push(codepoint.code);
        nodes.push((offset as u32) << 8 | (len as u32) << 1 | compat);

        values.extend(&codepoint.decomposition);
    }

    log::debug!(
        "decomposition: {} узлов, {} значений",
        nodes.len() / 2,
        values.len()
    );

    let mut words = vec![nodes.len() as u32 / 2, values.len() as u32];
    words.extend(nodes);
    words.extend(values);

    words
}
