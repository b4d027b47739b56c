//! Featured "weekend picks": up to four matches, prime-time throw-ins first.

use std::collections::HashSet;

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dates::{add_days, is_between_noon_and_five, iso, next_weekend_boundaries, previous_weekend_boundaries};
use crate::filter::is_date_in_window;
use crate::model::record::Record;

pub const PICKS_TARGET: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PicksMode {
    /// Coming weekend, drawn from fixtures.
    Upcoming,
    /// Last weekend, drawn from results.
    Recent,
}

/// Friday before the weekend through Sunday, as ISO strings.
pub fn weekend_range(mode: PicksMode, today: NaiveDate) -> (String, String) {
    let (sat, sun) = match mode {
        PicksMode::Upcoming => next_weekend_boundaries(today),
        PicksMode::Recent => previous_weekend_boundaries(today),
    };
    (iso(add_days(sat, -1)), iso(sun))
}

/// Random weekend picks using the thread RNG.
pub fn weekend_picks(records: &[Record], mode: PicksMode, today: NaiveDate) -> Vec<Record> {
    let mut rng = rand::thread_rng();
    weekend_picks_with(records, mode, today, |items| items.shuffle(&mut rng))
}

/// Weekend picks with a caller-supplied shuffle.
///
/// Stages, each filling only what the previous left open:
/// prime-time matches in the weekend range, other matches in the range,
/// then anything eligible (every record for fixtures, FT records for results).
pub fn weekend_picks_with<F>(records: &[Record], mode: PicksMode, today: NaiveDate, mut shuffle: F) -> Vec<Record>
where
    F: FnMut(&mut Vec<&Record>),
{
    let (start, end) = weekend_range(mode, today);
    let (prime, other): (Vec<&Record>, Vec<&Record>) = records
        .iter()
        .filter(|r| is_date_in_window(&r.date, &start, &end))
        .partition(|r| is_between_noon_and_five(&r.time));
    let eligible: Vec<&Record> = records
        .iter()
        .filter(|r| mode == PicksMode::Upcoming || r.is_full_time())
        .collect();

    let mut picked: Vec<Record> = Vec::with_capacity(PICKS_TARGET);
    let mut ids: HashSet<String> = HashSet::new();
    for (stage, pool) in [("prime", prime), ("other", other), ("eligible", eligible)] {
        if picked.len() >= PICKS_TARGET {
            break;
        }
        let mut pool: Vec<&Record> = pool.into_iter().filter(|r| !ids.contains(&r.id)).collect();
        shuffle(&mut pool);
        for r in pool {
            if picked.len() >= PICKS_TARGET {
                break;
            }
            if ids.insert(r.id.clone()) {
                picked.push(r.clone());
            }
        }
        debug!(stage, picked = picked.len(), "Weekend picks stage done");
    }
    picked
}
