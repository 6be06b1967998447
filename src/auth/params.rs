use indexmap::IndexMap;
use tracing::{event, Level};

use super::error::InvalidArgument;

pub fn check_not_null<T>(value: Option<T>, field: &'static str) -> Result<T, InvalidArgument> {
    value.ok_or(InvalidArgument::Missing(field))
}

/// Rejects strings that are empty once surrounding whitespace is removed.
/// The value is returned untrimmed.
pub fn check_not_empty(value: String, field: &'static str) -> Result<String, InvalidArgument> {
    if value.trim().is_empty() {
        Err(InvalidArgument::Empty(field))
    } else {
        Ok(value)
    }
}

pub fn check_additional_params<I, K, V>(
    params: I,
    reserved: &[&str],
) -> Result<IndexMap<String, String>, InvalidArgument>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut checked = IndexMap::new();
    for (key, value) in params {
        let key = key.into();
        if reserved.contains(&key.as_str()) {
            event!(Level::WARN, parameter = %key, "Rejected reserved additional parameter");
            return Err(InvalidArgument::ReservedParameter(key));
        }
        checked.insert(key, value.into());
    }
    Ok(checked)
}
