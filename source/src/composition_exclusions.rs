use crate::properties::PropertiesError;

/// разбор CompositionExclusions.txt из UCD
/// исключения композиции не могут быть вычислены, этот список составляется
/// консорциумом Unicode в ручном режиме
pub fn parse_composition_exclusions(data: &str) -> Result<Vec<u32>, PropertiesError>
{
    let mut exclusions = vec![];

    for line in data.lines() {
        let code = match line.split_once('#') {
            Some((before, _)) => before,
            None => line,
        };

        let code = code.trim();

        if code.is_empty() {
            continue;
        }

        exclusions.push(
            u32::from_str_radix(code, 16).map_err(|_| PropertiesError::UnknownPropertyValue)?,
        );
    }

    Ok(exclusions)
}
