use unicode_properties_source::UnicodeData;

/// секция NUMBER: число троек, затем тройки (код, числитель, знаменатель)
///
/// числитель со знаком; у цифр и целых числитель равен знаменателю -
/// по этому признаку digit_lookup отличает цифры от дробей
pub fn build(unicode: &UnicodeData) -> Vec<u32>
{
    let mut rows: Vec<u32> = Vec::new();
    let mut count = 0u32;

    for codepoint in unicode.iter() {
        let (numerator, denominator) = match codepoint.numeric.fraction() {
            Some(fraction) => fraction,
            None => continue,
        };

        rows.push(codepoint.code);
        rows.push(numerator as u32);
        rows.push(denominator as u32);

        count += 1;
    }

    log::debug!("numeric: {} троек", count);

    let mut words = vec![count];
    words.extend(rows);

    words
}
