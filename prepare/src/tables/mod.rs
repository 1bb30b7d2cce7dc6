pub mod case;
pub mod combining;
pub mod composition;
pub mod ctype;
pub mod decomposition;
pub mod numeric;
