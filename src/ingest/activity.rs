//! Daily activity summary ingestion.
//!
//! Parses a health-export CSV of daily activity records (one row per day)
//! into typed [`ActivityRecord`]s and provides the slicing the analysis
//! needs: half-open date filtering, numeric column extraction, weekly mean
//! resampling, and max-normalization for the discrepancy engine's [0, 1]
//! precondition.

use crate::error::{HealthtraceError, Result};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;
use std::path::Path;

/// Columns of a daily activity export.
///
/// A closed catalog of typed identifiers instead of free-form header
/// strings, so a typo in a column name is a compile error rather than an
/// empty selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityColumn {
    /// Calendar date of the record.
    Date,
    /// Active energy burned (kcal).
    EnergyBurned,
    /// Daily energy goal (kcal).
    EnergyBurnedGoal,
    /// Unit string for the energy columns.
    EnergyBurnedUnit,
    /// Exercise minutes.
    ExerciseTime,
    /// Daily exercise goal (minutes).
    ExerciseTimeGoal,
    /// Hours with a stand event.
    StandHours,
    /// Daily stand-hours goal.
    StandHoursGoal,
    /// Day of week derived from [`ActivityColumn::Date`] (Monday = 0).
    Weekday,
}

impl ActivityColumn {
    /// Physical columns expected in the CSV header, in no particular order.
    /// `Weekday` is derived, never read from the file.
    pub const PHYSICAL: [ActivityColumn; 8] = [
        ActivityColumn::Date,
        ActivityColumn::EnergyBurned,
        ActivityColumn::EnergyBurnedGoal,
        ActivityColumn::EnergyBurnedUnit,
        ActivityColumn::ExerciseTime,
        ActivityColumn::ExerciseTimeGoal,
        ActivityColumn::StandHours,
        ActivityColumn::StandHoursGoal,
    ];

    /// Header name as it appears in the export file.
    pub const fn header(&self) -> &'static str {
        match self {
            ActivityColumn::Date => "dateComponents",
            ActivityColumn::EnergyBurned => "activeEnergyBurned",
            ActivityColumn::EnergyBurnedGoal => "activeEnergyBurnedGoal",
            ActivityColumn::EnergyBurnedUnit => "activeEnergyBurnedUnit",
            ActivityColumn::ExerciseTime => "appleExerciseTime",
            ActivityColumn::ExerciseTimeGoal => "activeExerciseTimeGoal",
            ActivityColumn::StandHours => "activeStandHours",
            ActivityColumn::StandHoursGoal => "appleStandHoursGoal",
            ActivityColumn::Weekday => "Weekday",
        }
    }
}

/// One day of activity data.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub date: NaiveDate,
    pub energy_burned: f64,
    pub energy_burned_goal: f64,
    pub energy_burned_unit: String,
    pub exercise_time: f64,
    pub exercise_time_goal: f64,
    pub stand_hours: f64,
    pub stand_hours_goal: f64,
}

impl ActivityRecord {
    /// Day of week with Monday = 0 through Sunday = 6.
    pub fn weekday_index(&self) -> u32 {
        self.date.weekday().num_days_from_monday()
    }

    /// Numeric value of a column, or `None` for the non-numeric ones
    /// (date, unit string).
    pub fn value_of(&self, column: ActivityColumn) -> Option<f64> {
        match column {
            ActivityColumn::EnergyBurned => Some(self.energy_burned),
            ActivityColumn::EnergyBurnedGoal => Some(self.energy_burned_goal),
            ActivityColumn::ExerciseTime => Some(self.exercise_time),
            ActivityColumn::ExerciseTimeGoal => Some(self.exercise_time_goal),
            ActivityColumn::StandHours => Some(self.stand_hours),
            ActivityColumn::StandHoursGoal => Some(self.stand_hours_goal),
            ActivityColumn::Weekday => Some(self.weekday_index() as f64),
            ActivityColumn::Date | ActivityColumn::EnergyBurnedUnit => None,
        }
    }
}

/// An ordered collection of daily activity records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityLog {
    records: Vec<ActivityRecord>,
}

impl ActivityLog {
    /// Load an activity CSV from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(HealthtraceError::io)?;
        Self::parse(&text)
    }

    /// Parse activity CSV text: a header line naming the physical columns
    /// (in any order) followed by one record per line.
    ///
    /// Empty numeric fields become NaN, matching how absent measurements
    /// behave downstream (they are skipped by [`ActivityLog::weekly_mean`]
    /// and propagate through the discrepancy kernel).
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

        let (_, header) = lines.next().ok_or(HealthtraceError::EmptyData)?;
        let names: Vec<&str> = header.split(',').map(str::trim).collect();
        let mut positions = [0usize; ActivityColumn::PHYSICAL.len()];
        for (slot, column) in ActivityColumn::PHYSICAL.iter().enumerate() {
            let pos = names
                .iter()
                .position(|n| *n == column.header())
                .ok_or_else(|| HealthtraceError::MissingColumn(column.header().to_string()))?;
            positions[slot] = pos;
        }

        let mut records = Vec::new();
        for (index, line) in lines {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() < names.len() {
                return Err(HealthtraceError::MalformedRecord {
                    line: index + 1,
                    reason: format!("expected {} fields, got {}", names.len(), fields.len()),
                });
            }
            let field = |slot: usize| fields[positions[slot]];

            records.push(ActivityRecord {
                date: parse_date(field(0), index + 1)?,
                energy_burned: parse_number(field(1), index + 1)?,
                energy_burned_goal: parse_number(field(2), index + 1)?,
                energy_burned_unit: field(3).to_string(),
                exercise_time: parse_number(field(4), index + 1)?,
                exercise_time_goal: parse_number(field(5), index + 1)?,
                stand_hours: parse_number(field(6), index + 1)?,
                stand_hours_goal: parse_number(field(7), index + 1)?,
            });
        }

        if records.is_empty() {
            return Err(HealthtraceError::EmptyData);
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    /// Records with date in the half-open range `[from, to)`. Either bound
    /// may be omitted to leave that side open.
    pub fn between(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> ActivityLog {
        let records = self
            .records
            .iter()
            .filter(|r| from.map_or(true, |f| r.date >= f) && to.map_or(true, |t| r.date < t))
            .cloned()
            .collect();
        ActivityLog { records }
    }

    /// Values of a numeric column, in record order.
    pub fn values_of(&self, column: ActivityColumn) -> Result<Vec<f64>> {
        self.records
            .iter()
            .map(|r| {
                r.value_of(column)
                    .ok_or_else(|| HealthtraceError::NonNumericColumn(column.header().to_string()))
            })
            .collect()
    }

    /// Weekly means of a numeric column, weeks ending (and labeled by)
    /// Sunday. Non-finite samples are skipped; a week with no finite
    /// samples averages to NaN.
    pub fn weekly_mean(&self, column: ActivityColumn) -> Result<Vec<(NaiveDate, f64)>> {
        let mut weeks: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
        for record in &self.records {
            let value = record
                .value_of(column)
                .ok_or_else(|| HealthtraceError::NonNumericColumn(column.header().to_string()))?;
            let label = week_ending_sunday(record.date);
            let entry = weeks.entry(label).or_insert((0.0, 0));
            if value.is_finite() {
                entry.0 += value;
                entry.1 += 1;
            }
        }
        Ok(weeks
            .into_iter()
            .map(|(label, (sum, count))| {
                let mean = if count > 0 { sum / count as f64 } else { f64::NAN };
                (label, mean)
            })
            .collect())
    }
}

/// Scale a signal by its maximum so the largest finite value becomes 1.
///
/// This is the documented precondition for feeding raw activity magnitudes
/// to the discrepancy engine, whose default bandwidth assumes values
/// roughly in [0, 1]. Fails on empty input and when the maximum is not a
/// positive finite number.
pub fn normalize_by_max(values: &[f64]) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(HealthtraceError::EmptyData);
    }
    let max = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() || max <= 0.0 {
        return Err(HealthtraceError::InvalidParameter(
            "maximum must be a positive finite number to normalize".to_string(),
        ));
    }
    Ok(values.iter().map(|v| v / max).collect())
}

/// The Sunday on or after `date` (pandas weekly-resample labeling).
fn week_ending_sunday(date: NaiveDate) -> NaiveDate {
    let to_sunday = 6 - date.weekday().num_days_from_monday() as i64;
    date + Duration::days(to_sunday)
}

fn parse_date(field: &str, line: usize) -> Result<NaiveDate> {
    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(field, format) {
            return Ok(date);
        }
    }
    Err(HealthtraceError::MalformedRecord {
        line,
        reason: format!("unparseable date: {field:?}"),
    })
}

fn parse_number(field: &str, line: usize) -> Result<f64> {
    if field.is_empty() {
        return Ok(f64::NAN);
    }
    field.parse().map_err(|_| HealthtraceError::MalformedRecord {
        line,
        reason: format!("unparseable number: {field:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const CSV: &str = "\
dateComponents,activeEnergyBurned,activeEnergyBurnedGoal,activeEnergyBurnedUnit,appleExerciseTime,activeExerciseTimeGoal,activeStandHours,appleStandHoursGoal
2024-01-01,520.5,600,kcal,35,30,10,12
2024-01-02,610.0,600,kcal,42,30,11,12
2024-01-03,480.25,600,kcal,28,30,9,12
2024-01-07,700.0,600,kcal,55,30,12,12
2024-01-08,300.0,600,kcal,15,30,6,12
";

    #[test]
    fn parses_records_and_derives_weekday() {
        let log = ActivityLog::parse(CSV).unwrap();
        assert_eq!(log.len(), 5);

        let first = &log.records()[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_relative_eq!(first.energy_burned, 520.5);
        assert_eq!(first.energy_burned_unit, "kcal");
        // 2024-01-01 was a Monday
        assert_eq!(first.weekday_index(), 0);
        // 2024-01-07 was a Sunday
        assert_eq!(log.records()[3].weekday_index(), 6);
    }

    #[test]
    fn header_order_does_not_matter() {
        let csv = "\
activeEnergyBurned,dateComponents,activeEnergyBurnedGoal,activeEnergyBurnedUnit,appleExerciseTime,activeExerciseTimeGoal,activeStandHours,appleStandHoursGoal
520.5,2024-01-01,600,kcal,35,30,10,12
";
        let log = ActivityLog::parse(csv).unwrap();
        assert_relative_eq!(log.records()[0].energy_burned, 520.5);
        assert_eq!(
            log.records()[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "dateComponents,activeEnergyBurned\n2024-01-01,520.5\n";
        assert_eq!(
            ActivityLog::parse(csv),
            Err(HealthtraceError::MissingColumn(
                "activeEnergyBurnedGoal".to_string()
            ))
        );
    }

    #[test]
    fn malformed_row_is_reported_with_line_number() {
        let csv = "\
dateComponents,activeEnergyBurned,activeEnergyBurnedGoal,activeEnergyBurnedUnit,appleExerciseTime,activeExerciseTimeGoal,activeStandHours,appleStandHoursGoal
2024-01-01,not-a-number,600,kcal,35,30,10,12
";
        match ActivityLog::parse(csv) {
            Err(HealthtraceError::MalformedRecord { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn empty_numeric_field_becomes_nan() {
        let csv = "\
dateComponents,activeEnergyBurned,activeEnergyBurnedGoal,activeEnergyBurnedUnit,appleExerciseTime,activeExerciseTimeGoal,activeStandHours,appleStandHoursGoal
2024-01-01,,600,kcal,35,30,10,12
";
        let log = ActivityLog::parse(csv).unwrap();
        assert!(log.records()[0].energy_burned.is_nan());
    }

    #[test]
    fn between_is_half_open() {
        let log = ActivityLog::parse(CSV).unwrap();
        let from = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();

        let filtered = log.between(Some(from), Some(to));
        let dates = filtered.dates();
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0], from);
        // 2024-01-07 excluded by the open upper bound
        assert!(dates.iter().all(|d| *d < to));

        // Open bounds keep everything on that side
        assert_eq!(log.between(None, Some(to)).len(), 3);
        assert_eq!(log.between(Some(from), None).len(), 4);
        assert_eq!(log.between(None, None).len(), 5);
    }

    #[test]
    fn values_of_rejects_non_numeric_columns() {
        let log = ActivityLog::parse(CSV).unwrap();
        assert!(log.values_of(ActivityColumn::EnergyBurned).is_ok());
        assert_eq!(
            log.values_of(ActivityColumn::Date),
            Err(HealthtraceError::NonNumericColumn("dateComponents".to_string()))
        );
    }

    #[test]
    fn weekday_column_is_numeric() {
        let log = ActivityLog::parse(CSV).unwrap();
        let weekdays = log.values_of(ActivityColumn::Weekday).unwrap();
        assert_eq!(weekdays, vec![0.0, 1.0, 2.0, 6.0, 0.0]);
    }

    #[test]
    fn weekly_mean_groups_by_week_ending_sunday() {
        let log = ActivityLog::parse(CSV).unwrap();
        let weekly = log.weekly_mean(ActivityColumn::EnergyBurned).unwrap();

        // Jan 1-7 2024 all land in the week ending Sunday Jan 7; Jan 8 in
        // the week ending Jan 14.
        assert_eq!(weekly.len(), 2);
        assert_eq!(weekly[0].0, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
        assert_relative_eq!(weekly[0].1, (520.5 + 610.0 + 480.25 + 700.0) / 4.0);
        assert_eq!(weekly[1].0, NaiveDate::from_ymd_opt(2024, 1, 14).unwrap());
        assert_relative_eq!(weekly[1].1, 300.0);
    }

    #[test]
    fn weekly_mean_skips_nan_samples() {
        let csv = "\
dateComponents,activeEnergyBurned,activeEnergyBurnedGoal,activeEnergyBurnedUnit,appleExerciseTime,activeExerciseTimeGoal,activeStandHours,appleStandHoursGoal
2024-01-01,,600,kcal,35,30,10,12
2024-01-02,400.0,600,kcal,42,30,11,12
";
        let log = ActivityLog::parse(csv).unwrap();
        let weekly = log.weekly_mean(ActivityColumn::EnergyBurned).unwrap();
        assert_eq!(weekly.len(), 1);
        assert_relative_eq!(weekly[0].1, 400.0);
    }

    #[test]
    fn normalize_by_max_scales_to_unit_maximum() {
        let normalized = normalize_by_max(&[100.0, 250.0, 500.0]).unwrap();
        assert_eq!(normalized, vec![0.2, 0.5, 1.0]);
    }

    #[test]
    fn normalize_by_max_rejects_degenerate_input() {
        assert_eq!(normalize_by_max(&[]), Err(HealthtraceError::EmptyData));
        assert!(matches!(
            normalize_by_max(&[0.0, 0.0]),
            Err(HealthtraceError::InvalidParameter(_))
        ));
        assert!(matches!(
            normalize_by_max(&[f64::NAN, f64::NAN]),
            Err(HealthtraceError::InvalidParameter(_))
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        match ActivityLog::load("/definitely/not/here.csv") {
            Err(HealthtraceError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
