use unicode_properties_source::UnicodeData;

/// секция COMBINING: число троек, затем тройки (начало, конец, класс)
///
/// соседние кодпоинты с одинаковым классом сливаются в один диапазон;
/// кодпоинты с классом 0 не хранятся
pub fn build(unicode: &UnicodeData) -> Vec<u32>
{
    let mut ranges: Vec<(u32, u32, u32)> = Vec::new();

    for codepoint in unicode.iter() {
        let class = codepoint.ccc.u8() as u32;

        if class == 0 {
            continue;
        }

        push_range(&mut ranges, codepoint.code, class);
    }

    log::debug!("combining: {} диапазонов", ranges.len());

    let mut words = vec![ranges.len() as u32];

    for (start, end, class) in ranges {
        words.push(start);
        words.push(end);
        words.push(class);
    }

    words
}

/// добавить кодпоинт; соседние кодпоинты с одинаковым классом
/// сливаются в один диапазон
fn push_range(ranges: &mut Vec<(u32, u32, u32)>, code: u32, class: u32)
{
    if let Some(last) = ranges.last_mut() {
        if last.1 + 1 == code && last.2 == class {
            last.1 = code;

            return;
        }
    }

    ranges.push((code, code, class));
}
