pub const DEFAULT_PARALLAX_FACTOR: f64 = 0.2;

const STANDARD_EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";
const SOFT_EASING: &str = "ease-out";

/// Scroll offset of the page and the vertical displacement derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxState {
    offset: f64,
    factor: f64,
}

impl ParallaxState {
    pub fn new(factor: f64) -> Self {
        Self {
            offset: 0.0,
            factor,
        }
    }

    /// Every scroll event lands here; the offset is not clamped.
    pub fn on_scroll(self, offset: f64) -> Self {
        Self { offset, ..self }
    }

    pub fn displacement(&self) -> f64 {
        self.offset * self.factor
    }

    pub fn transform_css(&self) -> String {
        format!("transform: translateY({:.2}px);", self.displacement())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timeline {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Timeline {
    pub const fn new(duration_ms: u32, delay_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Standard,
    Soft,
}

impl Easing {
    fn as_css(self) -> &'static str {
        match self {
            Self::Standard => STANDARD_EASING,
            Self::Soft => SOFT_EASING,
        }
    }
}

/// One-shot entrance keyframes defined in `styles.css`.
///
/// The starting point of each movement is passed through a CSS custom
/// property so one keyframe set serves every element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Keyframes {
    Fade,
    Rise { from_px: f64 },
    Slide { from_px: f64 },
    Grow { from_scale: f64 },
    Unblur { from_px: f64 },
}

impl Keyframes {
    fn name(self) -> &'static str {
        match self {
            Self::Fade => "enter-fade",
            Self::Rise { .. } => "enter-rise",
            Self::Slide { .. } => "enter-slide",
            Self::Grow { .. } => "enter-grow",
            Self::Unblur { .. } => "enter-unblur",
        }
    }

    fn start_variable(self) -> Option<String> {
        match self {
            Self::Fade => None,
            Self::Rise { from_px } => Some(format!("--enter-rise: {from_px}px;")),
            Self::Slide { from_px } => Some(format!("--enter-slide: {from_px}px;")),
            Self::Grow { from_scale } => Some(format!("--enter-grow: {from_scale};")),
            Self::Unblur { from_px } => Some(format!("--enter-unblur: {from_px}px;")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub keyframes: Keyframes,
    pub timeline: Timeline,
    pub easing: Easing,
}

impl Entrance {
    pub const fn new(keyframes: Keyframes, timeline: Timeline, easing: Easing) -> Self {
        Self {
            keyframes,
            timeline,
            easing,
        }
    }

    fn animation(&self) -> String {
        format!(
            "{} {}ms {} {}ms both",
            self.keyframes.name(),
            self.timeline.duration_ms,
            self.easing.as_css(),
            self.timeline.delay_ms
        )
    }
}

pub const CHARACTER_ENTRANCE: [Entrance; 3] = [
    Entrance::new(Keyframes::Fade, Timeline::new(1_000, 500), Easing::Soft),
    Entrance::new(Keyframes::Grow { from_scale: 0.9 }, Timeline::new(1_000, 500), Easing::Soft),
    Entrance::new(Keyframes::Rise { from_px: 100.0 }, Timeline::new(1_000, 0), Easing::Soft),
];

pub const LOGO_ENTRANCE: [Entrance; 3] = [
    Entrance::new(Keyframes::Fade, Timeline::new(800, 0), Easing::Standard),
    Entrance::new(Keyframes::Grow { from_scale: 0.9 }, Timeline::new(800, 0), Easing::Standard),
    Entrance::new(Keyframes::Unblur { from_px: 4.0 }, Timeline::new(800, 0), Easing::Standard),
];

pub const BOTTOM_ENTRANCE: [Entrance; 2] = [
    Entrance::new(Keyframes::Fade, Timeline::new(800, 600), Easing::Standard),
    Entrance::new(Keyframes::Rise { from_px: 30.0 }, Timeline::new(800, 600), Easing::Standard),
];

pub const DATE_BADGE_ENTRANCE: [Entrance; 2] = [
    Entrance::new(Keyframes::Fade, Timeline::new(800, 300), Easing::Standard),
    Entrance::new(Keyframes::Slide { from_px: 50.0 }, Timeline::new(800, 300), Easing::Standard),
];

pub const ARROW_ENTRANCE: [Entrance; 1] = [Entrance::new(
    Keyframes::Fade,
    Timeline::new(600, 1_300),
    Easing::Standard,
)];

pub const CAPTION_ENTRANCE: [Entrance; 2] = [
    Entrance::new(Keyframes::Fade, Timeline::new(600, 1_100), Easing::Soft),
    Entrance::new(Keyframes::Rise { from_px: 6.0 }, Timeline::new(600, 1_100), Easing::Soft),
];

/// Inline style that plays `entrances` once when the element mounts.
pub fn entrance_style(entrances: &[Entrance], reduced_motion: bool) -> String {
    if reduced_motion || entrances.is_empty() {
        return "animation: none;".to_string();
    }

    let animations = entrances
        .iter()
        .map(Entrance::animation)
        .collect::<Vec<_>>()
        .join(", ");
    let variables: String = entrances
        .iter()
        .filter_map(|entrance| entrance.keyframes.start_variable())
        .collect();

    format!("animation: {animations};{variables}")
}

/// Style for the hero character: entrance motion plus the scroll parallax.
///
/// The parallax lives on `transform` while the entrance keyframes animate
/// the individual `translate`/`scale` properties, so the two compose.
pub fn character_style(parallax: &ParallaxState, reduced_motion: bool) -> String {
    let transition = CHARACTER_ENTRANCE
        .iter()
        .find(|entrance| matches!(entrance.keyframes, Keyframes::Rise { .. }))
        .map(|entrance| {
            format!(
                "transition: transform {}ms {};",
                entrance.timeline.duration_ms,
                entrance.easing.as_css()
            )
        })
        .unwrap_or_default();

    format!(
        "{}{}{}",
        entrance_style(&CHARACTER_ENTRANCE, reduced_motion),
        parallax.transform_css(),
        transition
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_tracks_every_scroll_event() {
        let mut parallax = ParallaxState::new(DEFAULT_PARALLAX_FACTOR);
        let mut displacements = Vec::new();

        for offset in [0.0, 50.0, 120.0] {
            parallax = parallax.on_scroll(offset);
            displacements.push(parallax.displacement());
        }

        let expected = [0.0, 10.0, 24.0];
        for (actual, expected) in displacements.iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
        }
    }

    #[test]
    fn offset_is_not_clamped() {
        let parallax = ParallaxState::new(DEFAULT_PARALLAX_FACTOR).on_scroll(50_000.0);
        assert!((parallax.displacement() - 10_000.0).abs() < 1e-6);
    }

    #[test]
    fn transform_css_uses_the_displacement() {
        let parallax = ParallaxState::new(DEFAULT_PARALLAX_FACTOR).on_scroll(50.0);
        assert_eq!(parallax.transform_css(), "transform: translateY(10.00px);");
    }

    #[test]
    fn character_entrance_keeps_its_fixed_timelines() {
        let style = entrance_style(&CHARACTER_ENTRANCE, false);
        assert!(style.contains("enter-fade 1000ms ease-out 500ms both"));
        assert!(style.contains("enter-grow 1000ms ease-out 500ms both"));
        assert!(style.contains("enter-rise 1000ms ease-out 0ms both"));
        assert!(style.contains("--enter-grow: 0.9;"));
        assert!(style.contains("--enter-rise: 100px;"));
    }

    #[test]
    fn reduced_motion_disables_entrances() {
        assert_eq!(entrance_style(&LOGO_ENTRANCE, true), "animation: none;");
    }

    #[test]
    fn character_style_combines_entrance_and_parallax() {
        let parallax = ParallaxState::new(DEFAULT_PARALLAX_FACTOR).on_scroll(120.0);
        let style = character_style(&parallax, false);
        assert!(style.starts_with("animation: "));
        assert!(style.contains("transform: translateY(24.00px);"));
        assert!(style.ends_with("transition: transform 1000ms ease-out;"));
    }
}
