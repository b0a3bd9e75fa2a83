use std::fmt;

use log::trace;

use crate::{
    date::{convert_date_in, Locale},
    error::ValueError,
    load::{Dataset, WeatherRecord},
    stats::{calculate_mean, find_max, find_min, Extremum},
    units::{convert_f_to_c, format_temperature, Celsius},
};

/// A temperature in Celsius together with the day it happens on.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedTemperature {
    pub celsius: f64,
    pub date: String,
}

/// Extremes and averages over the whole forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub days: usize,
    pub lowest: DatedTemperature,
    pub highest: DatedTemperature,
    pub mean_low: f64,
    pub mean_high: f64,
}

impl Overview {
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, ValueError> {
        Self::from_dataset_in(dataset, Locale::default())
    }

    pub fn from_dataset_in(dataset: &Dataset, locale: Locale) -> Result<Self, ValueError> {
        let lows = dataset.lows();
        let highs = dataset.highs();

        let lowest = find_min(&lows)?.ok_or(ValueError::EmptySequence)?;
        let highest = find_max(&highs)?.ok_or(ValueError::EmptySequence)?;

        Ok(Self {
            days: dataset.len(),
            lowest: dated(dataset, lowest, locale)?,
            highest: dated(dataset, highest, locale)?,
            mean_low: convert_f_to_c(calculate_mean(&lows)?)?,
            mean_high: convert_f_to_c(calculate_mean(&highs)?)?,
        })
    }
}

fn dated(
    dataset: &Dataset,
    extremum: Extremum,
    locale: Locale,
) -> Result<DatedTemperature, ValueError> {
    // The index comes from a projection of this very dataset.
    let record = dataset
        .get(extremum.index)
        .ok_or(ValueError::EmptySequence)?;
    Ok(DatedTemperature {
        celsius: convert_f_to_c(extremum.value)?,
        date: convert_date_in(record.date(), locale)?,
    })
}

impl fmt::Display for Overview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Day Overview", self.days)?;
        writeln!(
            f,
            "  The lowest temperature will be {}, and will occur on {}.",
            format_temperature(Celsius(self.lowest.celsius)),
            self.lowest.date
        )?;
        writeln!(
            f,
            "  The highest temperature will be {}, and will occur on {}.",
            format_temperature(Celsius(self.highest.celsius)),
            self.highest.date
        )?;
        writeln!(
            f,
            "  The average low this week is {}.",
            format_temperature(Celsius(self.mean_low))
        )?;
        writeln!(
            f,
            "  The average high this week is {}.",
            format_temperature(Celsius(self.mean_high))
        )
    }
}

/// One day of the per-day report, already converted to Celsius.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: String,
    pub low: f64,
    pub high: f64,
}

impl DailySummary {
    pub fn from_record(record: &WeatherRecord, locale: Locale) -> Result<Self, ValueError> {
        Ok(Self {
            date: convert_date_in(record.date(), locale)?,
            low: convert_f_to_c(record.low())?,
            high: convert_f_to_c(record.high())?,
        })
    }
}

impl fmt::Display for DailySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- {} ----", self.date)?;
        writeln!(
            f,
            "  Minimum Temperature: {}",
            format_temperature(Celsius(self.low))
        )?;
        writeln!(
            f,
            "  Maximum Temperature: {}",
            format_temperature(Celsius(self.high))
        )?;
        writeln!(f)
    }
}

/// The whole-forecast overview. An empty dataset has no extremes and is an
/// [`ValueError::EmptySequence`].
pub fn generate_summary(dataset: &Dataset) -> Result<String, ValueError> {
    let overview = Overview::from_dataset(dataset)?;
    trace!("overview over {} days", overview.days);
    Ok(overview.to_string())
}

/// One block per day, in dataset order. Empty dataset, empty string.
pub fn generate_daily_summary(dataset: &Dataset) -> Result<String, ValueError> {
    let mut report = String::new();
    for record in dataset {
        let day = DailySummary::from_record(record, Locale::default())?;
        report.push_str(&day.to_string());
    }
    trace!("daily summary over {} days", dataset.len());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week() -> Dataset {
        Dataset::from(vec![
            WeatherRecord::new("2021-07-06", 39, 47),
            WeatherRecord::new("2021-07-07", 41, 50),
            WeatherRecord::new("2021-07-08", 36, 45),
        ])
    }

    #[test]
    fn overview_values() {
        let overview = Overview::from_dataset(&week()).unwrap();
        assert_eq!(
            overview,
            Overview {
                days: 3,
                lowest: DatedTemperature {
                    celsius: 2.2,
                    date: String::from("Thursday 08 July 2021"),
                },
                highest: DatedTemperature {
                    celsius: 10.0,
                    date: String::from("Wednesday 07 July 2021"),
                },
                mean_low: 3.7,
                mean_high: 8.5,
            }
        );
    }

    #[test]
    fn overview_text() {
        assert_eq!(
            generate_summary(&week()).unwrap(),
            "3 Day Overview\n  \
             The lowest temperature will be 2.2°C, and will occur on Thursday 08 July 2021.\n  \
             The highest temperature will be 10.0°C, and will occur on Wednesday 07 July 2021.\n  \
             The average low this week is 3.7°C.\n  \
             The average high this week is 8.5°C.\n"
        );
    }

    #[test]
    fn ties_pick_the_last_day() {
        let dataset = Dataset::from(vec![
            WeatherRecord::new("2021-07-06", 36, 50),
            WeatherRecord::new("2021-07-07", 36, 50),
        ]);
        let overview = Overview::from_dataset(&dataset).unwrap();
        assert_eq!(overview.lowest.date, "Wednesday 07 July 2021");
        assert_eq!(overview.highest.date, "Wednesday 07 July 2021");
    }

    #[test]
    fn empty_overview() {
        assert!(matches!(
            generate_summary(&Dataset::default()),
            Err(ValueError::EmptySequence)
        ));
    }

    #[test]
    fn bad_date_fails_the_report() {
        let dataset = Dataset::from(vec![WeatherRecord::new("yesterday", 30, 40)]);
        assert!(matches!(
            generate_summary(&dataset),
            Err(ValueError::InvalidDate { .. })
        ));
        assert!(matches!(
            generate_daily_summary(&dataset),
            Err(ValueError::InvalidDate { .. })
        ));
    }

    #[test]
    fn daily_text() {
        assert_eq!(
            generate_daily_summary(&week()).unwrap(),
            "---- Tuesday 06 July 2021 ----\n  \
             Minimum Temperature: 3.9°C\n  \
             Maximum Temperature: 8.3°C\n\n\
             ---- Wednesday 07 July 2021 ----\n  \
             Minimum Temperature: 5.0°C\n  \
             Maximum Temperature: 10.0°C\n\n\
             ---- Thursday 08 July 2021 ----\n  \
             Minimum Temperature: 2.2°C\n  \
             Maximum Temperature: 7.2°C\n\n"
        );
    }

    #[test]
    fn empty_daily() {
        assert_eq!(generate_daily_summary(&Dataset::default()).unwrap(), "");
    }
}
