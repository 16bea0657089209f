pub mod amount;
pub mod basis;
pub mod batch;
pub mod convert;
pub mod form;

// Flat public surface for domain types and functions.
pub use amount::format_grouped;
pub use basis::PayBasis;
pub use batch::{BatchEntry, BatchInput, BatchRecord};
pub use convert::{convert_value, Mode};
pub use form::{SalaryForm, SalarySummary};
#[allow(unused_imports)]
pub use amount::{parse_amount, round_whole};
#[allow(unused_imports)]
pub use batch::{BatchError, CsvField};
#[allow(unused_imports)]
pub use convert::{convert, NET_FACTOR, TAX_RATE};
