use std::env;
use std::fs;
use std::path::Path;
use std::process::exit;

use unicode_properties_source::parse_composition_exclusions;
use unicode_properties_source::parse_unicode_data;

fn main()
{
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("usage: {} <ucd-dir> <out-file>", args[0]);
        exit(1);
    }

    let ucd_dir = Path::new(&args[1]);

    let unicode_data = fs::read_to_string(ucd_dir.join("UnicodeData.txt"))
        .expect("не удалось прочитать UnicodeData.txt");
    let exclusions_data = fs::read_to_string(ucd_dir.join("CompositionExclusions.txt"))
        .expect("не удалось прочитать CompositionExclusions.txt");

    let unicode = parse_unicode_data(&unicode_data).expect("ошибка разбора UnicodeData.txt");
    let exclusions = parse_composition_exclusions(&exclusions_data)
        .expect("ошибка разбора CompositionExclusions.txt");

    let bytes = unicode_properties_prepare::assemble(&unicode, &exclusions);

    fs::write(&args[2], &bytes).expect("не удалось записать файл данных");

    println!(
        "{}: {} кодпоинтов, {} байт",
        args[2],
        unicode.len(),
        bytes.len()
    );
}
