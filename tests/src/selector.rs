use unicode_properties::TableSelector;
use unicode_properties::UnicodeProperties;

use crate::data::BLOB;

/// при загрузке только таблицы регистра остальные запросы сообщают
/// об отсутствии - даже для кодпоинтов, у которых в полном файле
/// есть декомпозиции, классы и числовые значения
#[test]
fn case_only()
{
    let properties = UnicodeProperties::from_bytes(&BLOB, TableSelector::CASE).unwrap();

    assert_eq!(properties.to_lower(0xC4), 0xE4);
    assert_eq!(properties.to_upper(0x61), 0x41);

    assert!(properties.decompose(0x1D5).is_none());
    assert!(properties.compose(0x47, 0x301).is_none());
    assert!(!properties.is_alpha(0x41));
    assert_eq!(properties.combining_class(0x301), 0);
    assert!(properties.number_lookup(0x30).is_none());
    assert!(properties.digit_lookup(0x30).is_none());
}

/// и наоборот: без таблицы регистра отображения вырождаются в тождество
#[test]
fn decomp_only()
{
    let properties = UnicodeProperties::from_bytes(&BLOB, TableSelector::DECOMP).unwrap();

    assert_eq!(properties.decompose(0x1D5).unwrap().codes, &[0xDC, 0x304]);

    assert_eq!(properties.to_lower(0xC4), 0xC4);
    assert!(properties.lower_mapping(0xC4).is_none());
    assert!(!properties.is_alpha(0x41));
}

/// категории и композиции выбираются независимо друг от друга
#[test]
fn ctype_and_compose()
{
    let properties = UnicodeProperties::from_bytes(
        &BLOB,
        TableSelector::CTYPE | TableSelector::COMPOSE,
    )
    .unwrap();

    assert!(properties.is_alpha(0x41));
    assert_eq!(properties.compose(0x47, 0x301), Some(0x1F4));

    assert!(properties.decompose(0x1D5).is_none());
    assert_eq!(properties.to_lower(0x41), 0x41);
}

/// ALL - объединение всех флагов
#[test]
fn all_is_union()
{
    for flag in [
        TableSelector::CTYPE,
        TableSelector::CASE,
        TableSelector::DECOMP,
        TableSelector::COMPOSE,
        TableSelector::COMBINING,
        TableSelector::NUMBER,
    ] {
        assert!(TableSelector::ALL.contains(flag));
    }
}
