//! Value objects produced by the generators
//!
//! Nothing here carries identity or outlives a refresh cycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::kpi::TargetStatus;
use crate::time_of_day::LoadProfile;
use crate::QUEUE_ALERT_THRESHOLD;

/// Live operations counters for one refresh tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub active_calls: u32,
    pub calls_today: u32,
    pub calls_queue: u32,
    /// Percent of agent capacity in use, 0..=100
    pub capacity_utilization: f64,
    pub avg_wait_time_secs: f64,
    pub calls_per_hour: u32,
    pub load_profile: LoadProfile,
}

impl MetricsSnapshot {
    pub fn queue_alert(&self) -> bool {
        self.calls_queue > QUEUE_ALERT_THRESHOLD
    }
}

/// Change indicators shown next to the live counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveDeltas {
    pub active_calls: i32,
    pub calls_today: i32,
    /// Inverted sense: a negative queue delta is an improvement
    pub calls_queue: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Telugu,
    Hindi,
    English,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Telugu, Language::Hindi, Language::English];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Telugu => "Telugu",
            Self::Hindi => "Hindi",
            Self::English => "English",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub language: Language,
    pub percentage: f64,
    pub calls: u32,
}

/// Language mix; percentages add up to 100
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageDistribution {
    pub shares: Vec<LanguageShare>,
}

impl LanguageDistribution {
    pub fn total_percentage(&self) -> f64 {
        self.shares.iter().map(|s| s.percentage).sum()
    }

    pub fn share(&self, language: Language) -> Option<&LanguageShare> {
        self.shares.iter().find(|s| s.language == language)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    #[serde(rename = "Bill Inquiry")]
    BillInquiry,
    #[serde(rename = "Outage Status")]
    OutageStatus,
    #[serde(rename = "Payment Confirmation")]
    PaymentConfirmation,
    #[serde(rename = "Complaint Status")]
    ComplaintStatus,
    #[serde(rename = "New Connection")]
    NewConnection,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Self::BillInquiry => "Bill Inquiry",
            Self::OutageStatus => "Outage Status",
            Self::PaymentConfirmation => "Payment Confirmation",
            Self::ComplaintStatus => "Complaint Status",
            Self::NewConnection => "New Connection",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentCount {
    pub intent: Intent,
    pub count: u32,
}

/// Customer intents ranked by count, highest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentFrequency {
    pub intents: Vec<IntentCount>,
}

impl IntentFrequency {
    pub fn top(&self, n: usize) -> &[IntentCount] {
        &self.intents[..n.min(self.intents.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionCategory {
    #[serde(rename = "AI Resolved")]
    AiResolved,
    #[serde(rename = "Human Escalation")]
    HumanEscalation,
    Abandoned,
    Transferred,
}

impl ResolutionCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AiResolved => "AI Resolved",
            Self::HumanEscalation => "Human Escalation",
            Self::Abandoned => "Abandoned",
            Self::Transferred => "Transferred",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionEntry {
    pub category: ResolutionCategory,
    pub count: u32,
}

/// How the day's interactions ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionBreakdown {
    pub entries: Vec<ResolutionEntry>,
}

impl ResolutionBreakdown {
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.count)).sum()
    }

    pub fn count(&self, category: ResolutionCategory) -> u32 {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.count)
            .unwrap_or(0)
    }
}

/// Fixed performance goals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiTargets {
    pub containment_rate: f64,
    pub fcr_rate: f64,
    /// Upper bound in minutes; lower handle time is better
    pub avg_handle_time: f64,
}

impl KpiTargets {
    pub const STANDARD: KpiTargets = KpiTargets {
        containment_rate: 70.0,
        fcr_rate: 70.0,
        avg_handle_time: 8.0,
    };
}

impl Default for KpiTargets {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Today's KPIs with yesterday's baselines alongside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceKpis {
    pub containment_rate: f64,
    pub fcr_rate: f64,
    /// Minutes
    pub avg_handle_time: f64,
    pub calls_today: u32,
    pub calls_yesterday: u32,
    pub containment_yesterday: f64,
    pub fcr_yesterday: f64,
    pub aht_yesterday: f64,
    pub targets: KpiTargets,
}

/// Day-over-day movement; positive is always an improvement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiDeltas {
    pub containment_rate: f64,
    pub fcr_rate: f64,
    pub avg_handle_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiStatus {
    pub containment_rate: TargetStatus,
    pub fcr_rate: TargetStatus,
    pub avg_handle_time: TargetStatus,
}

/// One today-vs-yesterday tile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub today: u64,
    pub yesterday: u64,
    pub change_pct: f64,
    pub higher_is_better: bool,
}

impl ComparisonRow {
    pub fn improved(&self) -> bool {
        if self.higher_is_better {
            self.change_pct >= 0.0
        } else {
            self.change_pct < 0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiComparison {
    pub total_calls: ComparisonRow,
    pub ai_resolved: ComparisonRow,
    pub escalated: ComparisonRow,
    pub cost_savings: ComparisonRow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyPoint {
    pub hour: u32,
    /// "HH:00"
    pub label: String,
    pub calls: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyVolume {
    pub points: Vec<HourlyPoint>,
}

impl HourlyVolume {
    pub fn total(&self) -> u64 {
        self.points.iter().map(|p| u64::from(p.calls)).sum()
    }
}

/// One day of the call volume trend; `ai_resolved + escalated == total_calls`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTrendPoint {
    pub date: NaiveDate,
    pub total_calls: u32,
    pub ai_resolved: u32,
    pub escalated: u32,
    pub containment_rate: f64,
}
