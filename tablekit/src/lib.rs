pub mod column;
pub mod pagination;
pub mod table;
pub mod value;

pub use column::Column;
pub use pagination::{paginate, PaginationState};
pub use table::{SortDir, TableState};
pub use value::{compare, CellValue, Row};
