use cvscore_core::error::ScreeningError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), ScreeningError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
