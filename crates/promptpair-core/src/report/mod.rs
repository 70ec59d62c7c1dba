//! Renderers over the serialized `EvaluationRun`: JSON artifact I/O, the
//! HTML comparison dashboard, the CSV spreadsheet, and the stderr summary.
//! All renderers are pure transforms; records carrying errors are rendered
//! with explicit markers, never dropped.

pub mod console;
pub mod html;
pub mod json;
pub mod sheet;
