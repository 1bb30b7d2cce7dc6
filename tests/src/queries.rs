use unicode_properties::CategoryFlags;
use unicode_properties::DecompositionKind;
use unicode_properties::NumericValue;

use crate::data::PROPERTIES;

/// U+01D5 - буква с декомпозицией из нескольких кодпоинтов
#[test]
fn alpha_with_decomposition()
{
    assert!(PROPERTIES.is_alpha(0x1D5));
    assert!(PROPERTIES.has_case(0x1D5));

    let decomposition = PROPERTIES.decompose(0x1D5).unwrap();

    assert_eq!(decomposition.kind, DecompositionKind::Canonical);
    assert_eq!(decomposition.codes, &[0xDC, 0x304]);
}

/// U+01F1 (диграф DZ): строчная и заглавная формы - разные кодпоинты,
/// обе отличаются от исходного
#[test]
fn digraph_case_mappings()
{
    let lower = PROPERTIES.to_lower(0x1F1);
    let title = PROPERTIES.to_title(0x1F1);

    assert_eq!(lower, 0x1F3);
    assert_eq!(title, 0x1F2);

    assert_ne!(lower, title);
    assert_ne!(lower, 0x1F1);
    assert_ne!(title, 0x1F1);

    // прописная диграфа - он сам; заглавная хранится отдельно от прописной
    assert_eq!(PROPERTIES.to_upper(0x1F2), 0x1F1);
    assert_eq!(PROPERTIES.to_title(0x1F2), 0x1F2);
}

/// G + комбинирующий акут дает один прекомпозированный кодпоинт
#[test]
fn compose_g_with_acute()
{
    assert_eq!(PROPERTIES.compose(0x47, 0x301), Some(0x1F4));
    assert_eq!(PROPERTIES.compose(0x67, 0x301), Some(0x1F5));
}

/// классы комбинирования: буква - 0, комбинирующие знаки - ненулевые
#[test]
fn combining_classes()
{
    assert_eq!(PROPERTIES.combining_class(0x41), 0);
    assert_eq!(PROPERTIES.combining_class(0xFE23), 230);
    assert_eq!(PROPERTIES.combining_class(0x327), 202);
    assert_eq!(PROPERTIES.combining_class(0x93C), 7);
}

/// у цифры числитель равен знаменателю, у дроби - нет
#[test]
fn digits_and_fractions()
{
    let zero = PROPERTIES.number_lookup(0x30).unwrap();

    assert_eq!(zero.numerator, zero.denominator);

    let quarter = PROPERTIES.number_lookup(0xBC).unwrap();

    assert_ne!(quarter.numerator, quarter.denominator);
    assert_eq!(
        quarter,
        NumericValue {
            numerator: 1,
            denominator: 4
        }
    );
}

/// digit_lookup строже number_lookup: дробь находится только вторым
#[test]
fn digit_lookup_rejects_fractions()
{
    assert_eq!(PROPERTIES.digit_lookup(0x6F9), Some(9));
    assert_eq!(PROPERTIES.digit_lookup(0x30), Some(0));

    assert_eq!(PROPERTIES.digit_lookup(0xBC), None);
    assert!(PROPERTIES.number_lookup(0xBC).is_some());
}

/// отрицательный числитель дроби
#[test]
fn negative_fraction()
{
    let half_zero = PROPERTIES.number_lookup(0xF33).unwrap();

    assert_eq!(half_zero.numerator, -1);
    assert_eq!(half_zero.denominator, 2);
    assert_eq!(PROPERTIES.digit_lookup(0xF33), None);
}

/// предикаты категорий
#[test]
fn category_predicates()
{
    assert!(PROPERTIES.is_alpha(0x41));
    assert!(PROPERTIES.is_alpha(0x4E00));
    assert!(PROPERTIES.is_alpha(0xAC00));
    assert!(!PROPERTIES.is_alpha(0x30));

    assert!(PROPERTIES.is_digit(0x30));
    assert!(PROPERTIES.is_digit(0x660));
    assert!(!PROPERTIES.is_digit(0x2160));
    assert!(PROPERTIES.is_number(0x2160));

    assert!(PROPERTIES.is_mark(0x300));
    assert!(PROPERTIES.is_separator(0x20));
    assert!(PROPERTIES.is_punctuation(0x2C));
    assert!(PROPERTIES.is_symbol(0x2B));

    assert!(PROPERTIES.is_upper(0x41));
    assert!(PROPERTIES.is_lower(0x61));
    assert!(PROPERTIES.is_title(0x1F2));

    assert!(!PROPERTIES.has_case(0x4E00));
}

/// у CJK-иероглифа, заданного диапазоном First/Last, есть категория
/// в любой точке диапазона
#[test]
fn range_codepoints_resolve()
{
    for code in [0x4E00, 0x7777, 0x9FFF] {
        assert_eq!(
            PROPERTIES.category(code),
            CategoryFlags::OTHER_LETTER,
            "U+{:04X}",
            code
        );
    }

    // суррогаты и Private Use в данные не попадают
    assert_eq!(PROPERTIES.category(0xD800), CategoryFlags::empty());
    assert_eq!(PROPERTIES.category(0xE000), CategoryFlags::empty());
}

/// кодпоинт дополнительной плоскости ищется через разреженную часть индекса
#[test]
fn supplementary_plane()
{
    assert!(PROPERTIES.is_digit(0x1D7D8));
    assert_eq!(PROPERTIES.digit_lookup(0x1D7D8), Some(0));

    let decomposition = PROPERTIES.decompose(0x1D7D8).unwrap();

    assert_eq!(decomposition.kind, DecompositionKind::Compatibility);
    assert_eq!(decomposition.codes, &[0x30]);
}

/// find() собирает все свойства кодпоинта в одну запись
#[test]
fn find_assembles_record()
{
    let record = PROPERTIES.find(0x1D5).unwrap();

    assert!(record.category.intersects(CategoryFlags::ALPHA));
    assert_eq!(record.combining_class, 0);
    assert_eq!(record.lower, Some(0x1D6));
    assert_eq!(record.upper, None);
    assert_eq!(record.title, None);
    assert_eq!(record.decomposition.unwrap().codes, &[0xDC, 0x304]);
    assert!(record.numeric.is_none());

    let mark = PROPERTIES.find(0x301).unwrap();

    assert_eq!(mark.combining_class, 230);
    assert!(mark.category.intersects(CategoryFlags::MARK));

    assert!(PROPERTIES.find(0x10FFFF).is_none());
}
