//! Column descriptors binding display columns to row fields.

use std::fmt;

use crate::value::{CellValue, Row};

/// Describes one table column: which field it reads, how it is labeled,
/// and whether clicking its header sorts the table.
///
/// Built with chained setters:
///
/// ```
/// use tablekit::{CellValue, Column, Row};
///
/// struct Item { price: f64 }
/// impl Row for Item {
///     fn field(&self, key: &str) -> CellValue {
///         match key {
///             "price" => self.price.into(),
///             _ => CellValue::Null,
///         }
///     }
/// }
///
/// let col: Column<Item> = Column::new("price", "Price")
///     .sortable()
///     .accessor(|item: &Item| format!("{:.2} EUR", item.price).into())
///     .width_px(120);
/// ```
pub struct Column<T> {
    key: String,
    header: String,
    sortable: bool,
    accessor: Option<Box<dyn Fn(&T) -> CellValue>>,
    width_px: Option<u16>,
}

impl<T> Column<T> {
    /// Create a column reading the field named `key`.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            accessor: None,
            width_px: None,
        }
    }

    /// Allow sorting by this column.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Derive the displayed/filtered value from the row instead of the
    /// raw field. Sorting still reads the raw field by key.
    pub fn accessor(mut self, f: impl Fn(&T) -> CellValue + 'static) -> Self {
        self.accessor = Some(Box::new(f));
        self
    }

    /// Layout hint for renderers; the engine ignores it.
    pub fn width_px(mut self, px: u16) -> Self {
        self.width_px = Some(px);
        self
    }

    /// The column key (field name and sort key).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The display label.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Whether sort requests on this column are honored.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// The layout width hint, if any.
    pub fn width_hint(&self) -> Option<u16> {
        self.width_px
    }
}

impl<T: Row> Column<T> {
    /// The effective cell value: the accessor result when one is set,
    /// otherwise the raw field lookup. Used for filtering and display.
    pub fn value_of(&self, row: &T) -> CellValue {
        match &self.accessor {
            Some(f) => f(row),
            None => row.field(&self.key),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("accessor", &self.accessor.is_some())
            .field("width_px", &self.width_px)
            .finish()
    }
}
