//! Summaries of a short weather forecast stored as `date,min,max` CSV rows,
//! temperatures in Fahrenheit.
//!
//! ```no_run
//! let forecast = forecast_summary::load_data_from_csv("forecast_5days.csv")?;
//! print!("{}", forecast_summary::generate_summary(&forecast)?);
//! print!("{}", forecast_summary::generate_daily_summary(&forecast)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod date;
mod error;
mod load;
mod numeric;
mod report;
mod stats;
mod units;

pub use date::{convert_date, convert_date_in, parse_iso_date, Locale};
pub use error::{LoadError, ValueError};
pub use load::{load_data_from_csv, Dataset, WeatherRecord};
pub use numeric::{parse_float, parse_integer, Numeric};
pub use report::{
    generate_daily_summary, generate_summary, DailySummary, DatedTemperature, Overview,
};
pub use stats::{calculate_mean, find_max, find_min, Extremum};
pub use units::{convert_f_to_c, format_temperature, Celsius, Fahrenheit, DEGREE_SYMBOL};
