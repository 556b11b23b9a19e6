//! Simulation report generation.

use super::runner::{RunOutcome, RunStats};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_defeated: u32,
    pub runs_survived: u32,
    pub runs_timed_out: u32,

    // Aggregated stats
    pub avg_final_level: f64,
    pub avg_battles_won: f64,
    pub avg_final_gold: f64,
    pub avg_recuperations: f64,
    pub avg_ticks_per_battle: f64,

    // Distribution data
    pub level_distribution: BTreeMap<u32, u32>,
    pub battles_won_distribution: Vec<u32>,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let count = |outcome: RunOutcome| runs.iter().filter(|r| r.outcome == outcome).count() as u32;
        let runs_defeated = count(RunOutcome::Defeated);
        let runs_survived = count(RunOutcome::Survived);
        let runs_timed_out = count(RunOutcome::TimedOut);

        let divisor = num_runs.max(1) as f64;
        let avg_final_level = runs.iter().map(|r| r.final_level as f64).sum::<f64>() / divisor;
        let avg_battles_won = runs.iter().map(|r| r.battles_won as f64).sum::<f64>() / divisor;
        let avg_final_gold = runs.iter().map(|r| r.final_gold as f64).sum::<f64>() / divisor;
        let avg_recuperations =
            runs.iter().map(|r| r.recuperations as f64).sum::<f64>() / divisor;

        let total_battles: usize = runs.iter().map(|r| r.battle_ticks.len()).sum();
        let total_ticks: u64 = runs.iter().map(|r| r.total_ticks).sum();
        let avg_ticks_per_battle = total_ticks as f64 / total_battles.max(1) as f64;

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
        }

        let battles_won_distribution = runs.iter().map(|r| r.battles_won).collect();

        Self {
            num_runs,
            runs_defeated,
            runs_survived,
            runs_timed_out,
            avg_final_level,
            avg_battles_won,
            avg_final_gold,
            avg_recuperations,
            avg_ticks_per_battle,
            level_distribution,
            battles_won_distribution,
            run_stats: runs,
        }
    }

    /// Share of runs that reached the battle cap, as a percentage.
    pub fn survival_rate(&self) -> f64 {
        if self.num_runs == 0 {
            return 0.0;
        }
        self.runs_survived as f64 / self.num_runs as f64 * 100.0
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  ARENA SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} defeated, {} survived, {} timed out\n\n",
            self.num_runs, self.runs_defeated, self.runs_survived, self.runs_timed_out
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Level:     {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Battles Won:     {:.1}\n", self.avg_battles_won));
        report.push_str(&format!("  Avg Final Gold:      {:.0}\n", self.avg_final_gold));
        report.push_str(&format!("  Avg Recuperations:   {:.1}\n", self.avg_recuperations));
        report.push_str(&format!(
            "  Avg Ticks/Battle:    {:.0}\n\n",
            self.avg_ticks_per_battle
        ));

        report.push_str("── FINAL LEVELS ─────────────────────────────────────────────────\n");
        for (level, runs) in &self.level_distribution {
            let pct = *runs as f64 / self.num_runs.max(1) as f64 * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Level {:3}: {:>5.1}% {}\n", level, pct, bar));
        }
        report.push('\n');

        report.push_str("── BATTLES WON ──────────────────────────────────────────────────\n");
        let min_won = self.battles_won_distribution.iter().min().unwrap_or(&0);
        let max_won = self.battles_won_distribution.iter().max().unwrap_or(&0);
        let median_won = {
            let mut sorted = self.battles_won_distribution.clone();
            sorted.sort();
            sorted.get(sorted.len() / 2).copied().unwrap_or(0)
        };
        report.push_str(&format!("  Min:    {}\n", min_won));
        report.push_str(&format!("  Median: {}\n", median_won));
        report.push_str(&format!("  Max:    {}\n\n", max_won));

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let rating = if self.avg_battles_won < 1.0 {
            "TOO HARD - Most characters lose their first fight"
        } else if self.avg_battles_won < 3.0 {
            "HARD - Short careers"
        } else if self.survival_rate() < 50.0 {
            "GOOD - Challenging but fair"
        } else {
            "TOO EASY - Most characters never lose"
        };
        report.push_str(&format!("  Survival Rate: {:.1}%\n", self.survival_rate()));
        report.push_str(&format!("  Rating:        {}\n", rating));

        if self.runs_timed_out > 0 {
            report.push_str(&format!(
                "  ⚠️  {} runs hit the tick limit - stalemate between policies?\n",
                self.runs_timed_out
            ));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
