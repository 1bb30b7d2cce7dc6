pub mod properties;

mod composition_exclusions;
mod unicode;

pub use composition_exclusions::parse_composition_exclusions;
pub use unicode::parse_unicode_data;
pub use unicode::UnicodeData;
