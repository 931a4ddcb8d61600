pub mod history;
pub mod suggest;

use platewise_shared::parse_date;
use time::Date;

/// clap value parser for YYYY-MM-DD arguments
pub(crate) fn date_arg(value: &str) -> Result<Date, String> {
    parse_date(value).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
