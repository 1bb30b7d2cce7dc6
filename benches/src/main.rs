use std::env;
use std::fs;

/// выведем результаты бенчмарка как CSV: название;время
///
/// на вход - сохраненный вывод cargo bench
fn main()
{
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("использование: {} <имя файла>", args[0]);
        return;
    }

    let contents = match fs::read_to_string(&args[1]) {
        Ok(contents) => contents,
        Err(_) => {
            println!("не удалось прочитать файл");
            return;
        }
    };

    let mut lines = contents.lines();

    while let Some(line) = lines.next() {
        let name = line.trim();

        if !name.starts_with("queries/") && name != "load" {
            continue;
        }

        // следом за названием criterion печатает строку "time: [...]"
        let time = match lines.next() {
            Some(time) if time.trim_start().starts_with("time:") => time,
            _ => continue,
        };

        let parts: Vec<&str> = time.split_whitespace().collect();

        // среднее значение - вторая пара "значение единица" в скобках
        if parts.len() >= 5 {
            println!("{};{} {}", name, parts[3], parts[4]);
        }
    }
}
