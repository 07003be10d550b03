//! Duty-status enum shared by every crate that touches the timeline.

/// The four ELD duty statuses.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDutyNotDriving,
}

impl DutyStatus {
    /// `true` for driving and on-duty-not-driving.
    #[inline]
    pub fn is_on_duty(self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDutyNotDriving)
    }

    /// `true` for off-duty and sleeper-berth (both count towards rest).
    #[inline]
    pub fn is_rest(self) -> bool {
        !self.is_on_duty()
    }

    /// The short code printed on a log graph grid.
    pub fn code(self) -> &'static str {
        match self {
            DutyStatus::OffDuty          => "OFF",
            DutyStatus::SleeperBerth     => "SB",
            DutyStatus::Driving          => "D",
            DutyStatus::OnDutyNotDriving => "ON",
        }
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            DutyStatus::OffDuty          => "off duty",
            DutyStatus::SleeperBerth     => "sleeper berth",
            DutyStatus::Driving          => "driving",
            DutyStatus::OnDutyNotDriving => "on duty (not driving)",
        }
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
