//! Typed batted-ball events and the date range shown in page titles.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Handedness of the batter facing the pitcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatterSide {
    Right,
    Left,
}

impl BatterSide {
    /// Order in which a pitcher's pages are emitted.
    pub const PAGE_ORDER: [BatterSide; 2] = [BatterSide::Right, BatterSide::Left];

    pub fn label(self) -> &'static str {
        match self {
            BatterSide::Right => "Right-Handed",
            BatterSide::Left => "Left-Handed",
        }
    }
}

impl FromStr for BatterSide {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Right" => Ok(BatterSide::Right),
            "Left" => Ok(BatterSide::Left),
            _ => Err(()),
        }
    }
}

/// Categorical outcome of a ball in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayResult {
    Single,
    Double,
    Triple,
    HomeRun,
    Out,
    Error,
    FieldersChoice,
}

impl PlayResult {
    /// Hits first, then outs; this is also the legend order.
    pub const ALL: [PlayResult; 7] = [
        PlayResult::Single,
        PlayResult::Double,
        PlayResult::Triple,
        PlayResult::HomeRun,
        PlayResult::Out,
        PlayResult::Error,
        PlayResult::FieldersChoice,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlayResult::Single => "Single",
            PlayResult::Double => "Double",
            PlayResult::Triple => "Triple",
            PlayResult::HomeRun => "HomeRun",
            PlayResult::Out => "Out",
            PlayResult::Error => "Error",
            PlayResult::FieldersChoice => "FieldersChoice",
        }
    }

    pub fn is_hit(self) -> bool {
        matches!(
            self,
            PlayResult::Single | PlayResult::Double | PlayResult::Triple | PlayResult::HomeRun
        )
    }
}

impl FromStr for PlayResult {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayResult::ALL
            .into_iter()
            .find(|result| result.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for PlayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One batted-ball event. Every field is optional because the source data
/// is not validated; rows with missing values simply drop out of the
/// groupings that need them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BattedBall {
    pub date: Option<NaiveDate>,
    pub pitcher: Option<String>,
    pub pitcher_team: Option<String>,
    pub batter_side: Option<BatterSide>,
    pub play_result: Option<PlayResult>,
    /// Horizontal launch angle in degrees, 0 is straight to centre field.
    pub bearing: Option<f64>,
    pub distance: Option<f64>,
}

/// First and last valid date of the loaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl DateRange {
    pub const FORMAT: &'static str = "%m-%d-%Y";

    pub fn first_label(&self) -> String {
        self.first.format(Self::FORMAT).to_string()
    }

    pub fn last_label(&self) -> String {
        self.last.format(Self::FORMAT).to_string()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.first_label(), self.last_label())
    }
}

/// The team-filtered events of one file, in file order.
#[derive(Debug, Clone)]
pub struct EventTable {
    pub events: Vec<BattedBall>,
    pub date_range: DateRange,
}
