//! Presentation helpers for hydrated bundling menus.

use std::collections::BTreeMap;

use serde::Serialize;

use super::BundlingMenu;

#[derive(Debug, Clone, Serialize)]
pub struct DayGroup {
    pub day: String,
    #[serde(skip)]
    pub day_number: i64,
    pub menu: Vec<BundlingMenu>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekGroup {
    pub week: String,
    #[serde(skip)]
    pub week_number: i64,
    pub days: Vec<DayGroup>,
}

pub fn week_of(day_number: i64) -> i64 {
    (day_number - 1) / 7 + 1
}

/// Groups rows by day, days ascending. Rows keep their relative order.
pub fn group_by_day(rows: Vec<BundlingMenu>) -> Vec<DayGroup> {
    let mut days = BTreeMap::<i64, Vec<BundlingMenu>>::new();
    for row in rows {
        days.entry(row.day_number).or_default().push(row);
    }

    days.into_iter()
        .map(|(day_number, menu)| DayGroup {
            day: format!("Day {day_number}"),
            day_number,
            menu,
        })
        .collect()
}

/// Groups rows by week then by day, both ascending.
pub fn group_by_week(rows: Vec<BundlingMenu>) -> Vec<WeekGroup> {
    let mut weeks = BTreeMap::<i64, Vec<BundlingMenu>>::new();
    for row in rows {
        weeks.entry(week_of(row.day_number)).or_default().push(row);
    }

    weeks
        .into_iter()
        .map(|(week_number, rows)| WeekGroup {
            week: format!("Week {week_number}"),
            week_number,
            days: group_by_day(rows),
        })
        .collect()
}
