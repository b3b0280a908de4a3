// Library root
// -----------
// This crate exposes the pieces of the weekly search as a library. The
// binary (`main.rs`) reads the configuration and hands it to `ui`.
//
// Module responsibilities:
// - `config`: token and API base URL lookup (environment, token file).
// - `dates`: the seven day ranges ending at a reference date.
// - `api`: the blocking search client and the article record it decodes.
// - `format`: turns records into table rows with wrapped titles.
// - `table`: bordered text table with merged cells and row rules.
// - `ui`: the day-by-day loop tying the others together.
pub mod api;
pub mod config;
pub mod dates;
pub mod format;
pub mod table;
pub mod ui;
