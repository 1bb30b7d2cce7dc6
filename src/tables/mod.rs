mod case;
mod combining;
mod composition;
mod ctype;
mod decomposition;
mod numeric;

pub use case::CaseTable;
pub use combining::CombiningClassTable;
pub use composition::CompositionTable;
pub use ctype::CategoryTable;
pub use decomposition::DecompositionTable;
pub use numeric::NumericTable;
