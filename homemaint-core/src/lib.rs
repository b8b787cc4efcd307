//! homemaint-core: catalog, date math, and CSV store for the home
//! maintenance reminder.

pub mod catalog;
pub mod dates;
pub mod record;
pub mod store;

pub use catalog::{CATALOG, CatalogEntry, TaskKind, catalog_entry};
pub use dates::{due_after_months, format_service_date, parse_service_date};
pub use record::{TaskRecord, default_records};
pub use store::{load, save};
