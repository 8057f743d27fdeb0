use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tally of what one daily pass did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub ran_at: DateTime<Utc>,
    /// `EnableMod` was off, nothing was evaluated.
    pub skipped: bool,
    pub locations_visited: usize,
    pub sprinklers_evaluated: usize,
    /// Watering events; a pot under two sprinklers counts twice.
    pub pot_waterings: usize,
    pub pots_fertilized: usize,
    pub bowls_watered: usize,
    /// Units drawn from Enrichers, keyed by qualified item id.
    pub fertilizer_used: BTreeMap<String, u32>,
}

impl DailyReport {
    pub fn new() -> Self {
        Self {
            ran_at: Utc::now(),
            skipped: false,
            locations_visited: 0,
            sprinklers_evaluated: 0,
            pot_waterings: 0,
            pots_fertilized: 0,
            bowls_watered: 0,
            fertilizer_used: BTreeMap::new(),
        }
    }

    pub fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::new()
        }
    }

    pub fn record_fertilizer(&mut self, item_id: &str) {
        self.pots_fertilized += 1;
        *self.fertilizer_used.entry(item_id.to_string()).or_insert(0) += 1;
    }

    pub fn summary(&self) -> String {
        if self.skipped {
            return "Sprinkler pass skipped (EnableMod is off)".to_string();
        }

        let mut parts = vec![
            format!("{} locations", self.locations_visited),
            format!("{} sprinklers", self.sprinklers_evaluated),
            format!("{} pot waterings", self.pot_waterings),
            format!("{} pots fertilized", self.pots_fertilized),
            format!("{} bowls watered", self.bowls_watered),
        ];
        if !self.fertilizer_used.is_empty() {
            let used: Vec<String> = self
                .fertilizer_used
                .iter()
                .map(|(id, count)| format!("{} x{}", id, count))
                .collect();
            parts.push(format!("used {}", used.join(", ")));
        }
        parts.join(" | ")
    }
}

impl Default for DailyReport {
    fn default() -> Self {
        Self::new()
    }
}
