//! Data table column definitions.

use serde::Serialize;

/// Column definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    /// Accessor key of the row field, or a display id for computed columns.
    pub key: &'static str,
    /// Header text; empty for action columns.
    pub header: &'static str,
    pub sortable: bool,
}

impl TableColumn {
    /// Create a non-sortable column.
    #[must_use]
    pub const fn new(key: &'static str, header: &'static str) -> Self {
        Self {
            key,
            header,
            sortable: false,
        }
    }

    /// Create a sortable column.
    #[must_use]
    pub const fn sortable(key: &'static str, header: &'static str) -> Self {
        Self {
            key,
            header,
            sortable: true,
        }
    }
}
