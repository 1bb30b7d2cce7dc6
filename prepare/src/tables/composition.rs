use unicode_properties_source::UnicodeData;

/// секция COMPOSE: число троек, затем тройки (первый, второй, результат),
/// отсортированные по паре (первый, второй)
///
/// в таблицу попадают только композируемые пары: канонические декомпозиции
/// из двух кодпоинтов, кроме исключений композиции, нестартеров
/// и пар из двух нестартеров
pub fn build(unicode: &UnicodeData, exclusions: &[u32]) -> Vec<u32>
{
    let mut triples: Vec<(u32, u32, u32)> = Vec::new();

    for codepoint in unicode.iter() {
        if codepoint.decomposition.len() != 2 || codepoint.decomposition_tag.is_some() {
            continue;
        }

        if exclusions.contains(&codepoint.code) {
            continue;
        }

        if codepoint.is_nonstarter() {
            continue;
        }

        let first = codepoint.decomposition[0];
        let second = codepoint.decomposition[1];

        let first_is_nonstarter = unicode.get(first).map_or(false, |c| c.is_nonstarter());
        let second_is_nonstarter = unicode.get(second).map_or(false, |c| c.is_nonstarter());

        if first_is_nonstarter && second_is_nonstarter {
            continue;
        }

        triples.push((first, second, codepoint.code));
    }

    triples.sort_unstable();

    // у каждой допустимой пары может быть не более одного результата
    for window in triples.windows(2) {
        assert!(
            (window[0].0, window[0].1) != (window[1].0, window[1].1),
            "неоднозначная композиция пары {:04X} {:04X}",
            window[0].0,
            window[0].1
        );
    }

    log::debug!("composition: {} пар", triples.len());

    let mut words = vec![triples.len() as u32];

    for (first, second, composed) in triples {
        words.push(first);
        words.push(second);
        words.push(composed);
    }

    words
}
