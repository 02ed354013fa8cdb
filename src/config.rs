use crate::festival::{CalendarDate, FestivalWindow};
use crate::links::JumpPosition;
use crate::motion::DEFAULT_PARALLAX_FACTOR;
use crate::telemetry::{LogLevel, DEFAULT_LOG_LEVEL};
use crate::viewport::DEFAULT_MAP_BREAKPOINT;

pub const DEFAULT_JUMP_POSITION: JumpPosition = JumpPosition::new(-62, -61);

pub const JUMP_POSITION_ATTRIBUTE: &str = "data-jump-position";
pub const PARALLAX_FACTOR_ATTRIBUTE: &str = "data-parallax-factor";
pub const MAP_BREAKPOINT_ATTRIBUTE: &str = "data-map-breakpoint";
pub const FESTIVAL_START_ATTRIBUTE: &str = "data-festival-start";
pub const FESTIVAL_END_ATTRIBUTE: &str = "data-festival-end";
pub const LOG_LEVEL_ATTRIBUTE: &str = "data-log-level";

const JUMP_COORDINATE_BOUNDS: (i64, i64) = (-150, 150);
const PARALLAX_FACTOR_BOUNDS: (f64, f64) = (0.0, 1.0);
const MAP_BREAKPOINT_BOUNDS: (f64, f64) = (320.0, 2_560.0);

/// Site-wide settings, built once at startup and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub jump_position: JumpPosition,
    pub parallax_factor: f64,
    pub map_breakpoint: f64,
    pub festival: FestivalWindow,
    pub log_level: LogLevel,
    /// Attributes that were present but could not be used.
    pub ignored_overrides: Vec<&'static str>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            jump_position: DEFAULT_JUMP_POSITION,
            parallax_factor: DEFAULT_PARALLAX_FACTOR,
            map_breakpoint: DEFAULT_MAP_BREAKPOINT,
            festival: FestivalWindow::default(),
            log_level: DEFAULT_LOG_LEVEL,
            ignored_overrides: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Applies overrides found through `lookup`, typically the mount
    /// element's `data-*` attributes. Unusable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut ignored = Vec::new();

        let jump_position = parse_override(
            &lookup,
            &mut ignored,
            JUMP_POSITION_ATTRIBUTE,
            defaults.jump_position,
            parse_jump_position,
        );
        let parallax_factor = parse_override(
            &lookup,
            &mut ignored,
            PARALLAX_FACTOR_ATTRIBUTE,
            defaults.parallax_factor,
            |raw| parse_f64_with_bounds(raw, PARALLAX_FACTOR_BOUNDS),
        );
        let map_breakpoint = parse_override(
            &lookup,
            &mut ignored,
            MAP_BREAKPOINT_ATTRIBUTE,
            defaults.map_breakpoint,
            |raw| parse_f64_with_bounds(raw, MAP_BREAKPOINT_BOUNDS),
        );
        let start = parse_override(
            &lookup,
            &mut ignored,
            FESTIVAL_START_ATTRIBUTE,
            defaults.festival.start,
            CalendarDate::parse,
        );
        let mut end = parse_override(
            &lookup,
            &mut ignored,
            FESTIVAL_END_ATTRIBUTE,
            defaults.festival.end,
            CalendarDate::parse,
        );
        if end < start {
            if !ignored.contains(&FESTIVAL_END_ATTRIBUTE) {
                ignored.push(FESTIVAL_END_ATTRIBUTE);
            }
            end = start;
        }
        let log_level = parse_override(
            &lookup,
            &mut ignored,
            LOG_LEVEL_ATTRIBUTE,
            defaults.log_level,
            LogLevel::parse,
        );

        Self {
            jump_position,
            parallax_factor,
            map_breakpoint,
            festival: FestivalWindow { start, end },
            log_level,
            ignored_overrides: ignored,
        }
    }
}

fn parse_non_empty_string<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_override<F, T>(
    lookup: &F,
    ignored: &mut Vec<&'static str>,
    name: &'static str,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> T
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = parse_non_empty_string(lookup, name) else {
        return default;
    };

    parse(&raw).unwrap_or_else(|| {
        ignored.push(name);
        default
    })
}

fn parse_f64_with_bounds(raw: &str, bounds: (f64, f64)) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
}

fn parse_jump_position(raw: &str) -> Option<JumpPosition> {
    let (x, y) = raw.split_once(',')?;
    let parse_coordinate = |value: &str| {
        value
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|value| (JUMP_COORDINATE_BOUNDS.0..=JUMP_COORDINATE_BOUNDS.1).contains(value))
    };

    Some(JumpPosition::new(parse_coordinate(x)?, parse_coordinate(y)?))
}
