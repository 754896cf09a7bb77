//! Project status axes.
//!
//! 项目状态的两条独立轴（发布生命周期 / 编辑审核）以及合并后的统一状态。
//!
//! Wire values arrive as free-form strings. They are parsed here, once, into
//! closed enums; anything unrecognized falls back to `DRAFT` on both axes.

use serde::{Deserialize, Serialize};

/// Publication lifecycle axis.
///
/// 发布生命周期状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleStatus {
    None,
    Draft,
    Scheduled,
    Live,
    Ended,
}

impl LifecycleStatus {
    pub const ALL: [LifecycleStatus; 5] = [
        LifecycleStatus::None,
        LifecycleStatus::Draft,
        LifecycleStatus::Scheduled,
        LifecycleStatus::Live,
        LifecycleStatus::Ended,
    ];

    pub fn as_wire(&self) -> &'static str {
        match self {
            LifecycleStatus::None => "NONE",
            LifecycleStatus::Draft => "DRAFT",
            LifecycleStatus::Scheduled => "SCHEDULED",
            LifecycleStatus::Live => "LIVE",
            LifecycleStatus::Ended => "ENDED",
        }
    }

    /// Strict parse of a wire value. Case-insensitive, surrounding whitespace ignored.
    pub fn parse_wire(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_wire().eq_ignore_ascii_case(raw))
    }

    /// Lenient parse: unrecognized or empty values become [`LifecycleStatus::Draft`].
    ///
    /// 无法识别的值回退为 `DRAFT`。
    pub fn from_wire(raw: &str) -> Self {
        Self::parse_wire(raw).unwrap_or(LifecycleStatus::Draft)
    }
}

/// Editorial review axis.
///
/// 编辑审核状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    None,
    Draft,
    Review,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub const ALL: [ReviewStatus; 5] = [
        ReviewStatus::None,
        ReviewStatus::Draft,
        ReviewStatus::Review,
        ReviewStatus::Approved,
        ReviewStatus::Rejected,
    ];

    pub fn as_wire(&self) -> &'static str {
        match self {
            ReviewStatus::None => "NONE",
            ReviewStatus::Draft => "DRAFT",
            ReviewStatus::Review => "REVIEW",
            ReviewStatus::Approved => "APPROVED",
            ReviewStatus::Rejected => "REJECTED",
        }
    }

    pub fn parse_wire(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_wire().eq_ignore_ascii_case(raw))
    }

    /// Lenient parse: unrecognized or empty values become [`ReviewStatus::Draft`].
    pub fn from_wire(raw: &str) -> Self {
        Self::parse_wire(raw).unwrap_or(ReviewStatus::Draft)
    }
}

/// Unified status used for display, routing and action eligibility.
///
/// 统一状态：用于展示、路由以及操作权限判断。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnifiedStatus {
    Draft,
    Review,
    Approved,
    Scheduled,
    Live,
    Ended,
    Rejected,
}

impl UnifiedStatus {
    /// Display order of the status tabs.
    pub const ALL: [UnifiedStatus; 7] = [
        UnifiedStatus::Draft,
        UnifiedStatus::Review,
        UnifiedStatus::Approved,
        UnifiedStatus::Scheduled,
        UnifiedStatus::Live,
        UnifiedStatus::Ended,
        UnifiedStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnifiedStatus::Draft => "DRAFT",
            UnifiedStatus::Review => "REVIEW",
            UnifiedStatus::Approved => "APPROVED",
            UnifiedStatus::Scheduled => "SCHEDULED",
            UnifiedStatus::Live => "LIVE",
            UnifiedStatus::Ended => "ENDED",
            UnifiedStatus::Rejected => "REJECTED",
        }
    }

    /// Path segment used by the dashboard router, e.g. `/maker/projects/review`.
    pub fn route_segment(&self) -> &'static str {
        match self {
            UnifiedStatus::Draft => "draft",
            UnifiedStatus::Review => "review",
            UnifiedStatus::Approved => "approved",
            UnifiedStatus::Scheduled => "scheduled",
            UnifiedStatus::Live => "live",
            UnifiedStatus::Ended => "ended",
            UnifiedStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UnifiedStatus::Draft => "Draft",
            UnifiedStatus::Review => "In review",
            UnifiedStatus::Approved => "Approved",
            UnifiedStatus::Scheduled => "Scheduled",
            UnifiedStatus::Live => "Live",
            UnifiedStatus::Ended => "Ended",
            UnifiedStatus::Rejected => "Rejected",
        }
    }

    pub fn from_route(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.route_segment() == segment)
    }

    /// Strict, case-insensitive parse. Used for aggregate count keys where an
    /// unknown key must be dropped rather than folded into another bucket.
    pub fn parse_wire(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw))
    }

    /// A `(lifecycle, review)` pair that resolves back to this status.
    ///
    /// Local drafts only know their unified status; this pair lets them flow
    /// through the same derivation as remote items.
    pub fn canonical_pair(&self) -> (LifecycleStatus, ReviewStatus) {
        match self {
            UnifiedStatus::Draft => (LifecycleStatus::Draft, ReviewStatus::Draft),
            UnifiedStatus::Review => (LifecycleStatus::Draft, ReviewStatus::Review),
            UnifiedStatus::Approved => (LifecycleStatus::Draft, ReviewStatus::Approved),
            UnifiedStatus::Scheduled => (LifecycleStatus::Scheduled, ReviewStatus::Approved),
            UnifiedStatus::Live => (LifecycleStatus::Live, ReviewStatus::Approved),
            UnifiedStatus::Ended => (LifecycleStatus::Ended, ReviewStatus::Approved),
            UnifiedStatus::Rejected => (LifecycleStatus::None, ReviewStatus::Rejected),
        }
    }
}

impl std::fmt::Display for UnifiedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
