// src/export/model.rs

use serde::Serialize;

/// Substituted for an empty work description in every export format.
pub const DESCRIPTION_PLACEHOLDER: &str = "Sin descripción";

/// Flat, display-ready export row. Timestamps are already formatted in
/// the display offset; `hours` is decimal hours, not the on-screen HH:MM.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ExportRow {
    #[serde(rename = "Técnico")]
    pub technician: String,
    #[serde(rename = "Inicio")]
    pub start: String,
    #[serde(rename = "Fin")]
    pub end: String,
    #[serde(rename = "Descripción")]
    pub description: String,
    #[serde(rename = "Horas Trabajadas")]
    pub hours: f64,
}

/// How a writer should render one column. The transform attaches these
/// hints but never interprets them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnFormat {
    Text,
    /// Excel date serial with the given number format.
    DateTime(&'static str),
    /// Two-decimal numeric.
    Hours(&'static str),
}

#[derive(Clone, Copy, Debug)]
pub struct ColumnSpec {
    pub header: &'static str,
    pub width: f64,
    pub format: ColumnFormat,
}

pub(crate) fn columns() -> [ColumnSpec; 5] {
    [
        ColumnSpec {
            header: "Técnico",
            width: 25.0,
            format: ColumnFormat::Text,
        },
        ColumnSpec {
            header: "Inicio",
            width: 20.0,
            format: ColumnFormat::DateTime("yyyy-mm-dd hh:mm"),
        },
        ColumnSpec {
            header: "Fin",
            width: 20.0,
            format: ColumnFormat::DateTime("yyyy-mm-dd hh:mm"),
        },
        ColumnSpec {
            header: "Descripción",
            width: 40.0,
            format: ColumnFormat::Text,
        },
        ColumnSpec {
            header: "Horas Trabajadas",
            width: 15.0,
            format: ColumnFormat::Hours("0.00"),
        },
    ]
}

/// Cell values in column order (text form, for width accounting).
pub(crate) fn row_to_cells(row: &ExportRow) -> [String; 5] {
    [
        row.technician.clone(),
        row.start.clone(),
        row.end.clone(),
        row.description.clone(),
        format!("{:.2}", row.hours),
    ]
}
