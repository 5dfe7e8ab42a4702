pub mod numeric;
pub mod pagination;
