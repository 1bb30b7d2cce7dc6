use crate::data::EXCLUSIONS;
use crate::data::PROPERTIES;
use crate::data::UNICODE;

/// нестартер? (по исходным данным UCD)
fn is_nonstarter(code: u32) -> bool
{
    UNICODE.get(code).map_or(false, |c| c.is_nonstarter())
}

/// композиция - обратная операция к канонической декомпозиции
/// для всех композируемых пар; некомпозируемые пары не находятся
#[test]
fn compose_inverts_canonical_decomposition()
{
    let mut checked = 0;

    for codepoint in UNICODE.iter() {
        if codepoint.decomposition.len() != 2 || codepoint.decomposition_tag.is_some() {
            continue;
        }

        let first = codepoint.decomposition[0];
        let second = codepoint.decomposition[1];

        let composable = !EXCLUSIONS.contains(&codepoint.code)
            && codepoint.is_starter()
            && !(is_nonstarter(first) && is_nonstarter(second));

        let expected = match composable {
            true => Some(codepoint.code),
            false => None,
        };

        assert_eq!(
            PROPERTIES.compose(first, second),
            expected,
            "U+{:04X}",
            codepoint.code
        );

        checked += 1;
    }

    assert!(checked > 10);
}

/// перестановка аргументов композиции - преднамеренное "не найдено"
#[test]
fn swapped_pair_is_not_found()
{
    assert_eq!(PROPERTIES.compose(0x47, 0x301), Some(0x1F4));
    assert_eq!(PROPERTIES.compose(0x301, 0x47), None);

    assert_eq!(PROPERTIES.compose(0x41, 0x300), Some(0xC0));
    assert_eq!(PROPERTIES.compose(0x300, 0x41), None);
}

/// исключение композиции: декомпозиция есть, обратной сборки нет
#[test]
fn exclusions_are_not_composable()
{
    let excluded = PROPERTIES.decompose(0x958).unwrap();

    assert!(excluded.is_canonical());
    assert_eq!(excluded.codes, &[0x915, 0x93C]);

    assert_eq!(PROPERTIES.compose(0x915, 0x93C), None);
}

/// декомпозиция возвращает ровно один уровень, без рекурсии
#[test]
fn decompose_single_level()
{
    // U+01D5 - U+00DC + макрон; U+00DC сам декомпозируется дальше
    assert_eq!(PROPERTIES.decompose(0x1D5).unwrap().codes, &[0xDC, 0x304]);
    assert_eq!(PROPERTIES.decompose(0xDC).unwrap().codes, &[0x55, 0x308]);

    assert!(PROPERTIES.decompose(0x55).is_none());
}

/// приведение к строчной - стабильная неподвижная точка
#[test]
fn lower_is_idempotent()
{
    for codepoint in UNICODE.iter() {
        let lower = PROPERTIES.to_lower(codepoint.code);

        assert_eq!(PROPERTIES.to_lower(lower), lower, "U+{:04X}", codepoint.code);
    }

    // включая кодпоинты без записей
    for code in 0 .. 0x2200u32 {
        let lower = PROPERTIES.to_lower(code);

        assert_eq!(PROPERTIES.to_lower(lower), lower, "U+{:04X}", code);
    }
}

/// любой u32 - допустимый аргумент: ответ или явное отсутствие, без паники
#[test]
fn total_domain_safety()
{
    let edges = [
        0u32,
        0x41,
        0xD800,
        0xFFFF,
        0x10_FFFF,
        0x11_0000,
        0xDEAD_BEEF,
        u32::MAX,
    ];

    for code in edges {
        let _ = PROPERTIES.find(code);
        let _ = PROPERTIES.category(code);
        let _ = PROPERTIES.is_alpha(code);
        let _ = PROPERTIES.has_case(code);
        let _ = PROPERTIES.decompose(code);
        let _ = PROPERTIES.number_lookup(code);
        let _ = PROPERTIES.digit_lookup(code);

        assert_eq!(PROPERTIES.to_lower(code), PROPERTIES.to_lower(code));
        assert_eq!(PROPERTIES.combining_class(code), PROPERTIES.combining_class(code));

        for other in edges {
            let _ = PROPERTIES.compose(code, other);
        }
    }

    // выше максимального кодпоинта - только отсутствие
    for code in [0x11_0000, 0xDEAD_BEEF, u32::MAX] {
        assert!(PROPERTIES.find(code).is_none());
        assert_eq!(PROPERTIES.to_lower(code), code);
        assert_eq!(PROPERTIES.combining_class(code), 0);
        assert!(PROPERTIES.decompose(code).is_none());
        assert!(PROPERTIES.number_lookup(code).is_none());
    }
}
