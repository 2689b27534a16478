//! DPI math and the view state of the tester panel.

use std::rc::Rc;
use yew::Reducible;

use crate::util::{parse_leading_float, round_half_up};

pub const IDLE_PROMPT: &str = "Click and drag to measure your mouse DPI";
pub const MEASURING_PROMPT: &str = "Move your mouse the specified distance and release";
pub const MEASURING_CLASS: &str = "testing";

pub const CM_PER_INCH: f64 = 2.54;
pub const MM_PER_INCH: f64 = 25.4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Unit {
    #[default]
    Inch,
    Cm,
    Mm,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Inch, Unit::Cm, Unit::Mm];

    /// Maps a `<select>` value; anything unrecognised is inches.
    pub fn from_select_value(value: &str) -> Self {
        match value {
            "cm" => Unit::Cm,
            "mm" => Unit::Mm,
            _ => Unit::Inch,
        }
    }

    pub fn select_value(self) -> &'static str {
        match self {
            Unit::Inch => "inch",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::Inch => "Inches",
            Unit::Cm => "Centimeters",
            Unit::Mm => "Millimeters",
        }
    }

    pub fn to_inches(self, distance: f64) -> f64 {
        match self {
            Unit::Inch => distance,
            Unit::Cm => distance / CM_PER_INCH,
            Unit::Mm => distance / MM_PER_INCH,
        }
    }
}

/// Raw control values, exactly as read from the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DistanceReading {
    pub distance: String,
    pub unit: String,
}

impl DistanceReading {
    #[cfg(test)]
    pub fn new(distance: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            distance: distance.into(),
            unit: unit.into(),
        }
    }
}

/// Estimated DPI for a pointer displacement of `pixels`.
///
/// An empty or non-numeric distance uses `default_distance`. Returns `0.0`
/// when the distance in inches is not strictly positive. The result is not
/// rounded.
pub fn calculate_dpi(pixels: f64, reading: &DistanceReading, default_distance: f64) -> f64 {
    let distance = parse_leading_float(&reading.distance).unwrap_or(default_distance);
    let inches = Unit::from_select_value(&reading.unit).to_inches(distance);
    // NaN compares false, so it lands in the sentinel branch too.
    if !(inches > 0.0) {
        return 0.0;
    }
    pixels / inches
}

/// Rounded readout text, written the way the browser prints a number.
pub fn format_dpi(dpi: f64) -> String {
    if dpi.is_nan() {
        return "NaN".to_string();
    }
    if dpi.is_infinite() {
        return if dpi > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // `+ 0.0` folds `-0` into `0`.
    let rounded = round_half_up(dpi) + 0.0;
    if rounded.abs() >= 1e21 {
        format!("{rounded:e}").replacen('e', "e+", 1)
    } else {
        format!("{rounded:.0}")
    }
}

pub fn advisory_message(dpi: f64) -> String {
    format!(
        "Your mouse DPI is approximately {}. For more accurate results, repeat the test 3-4 times and average the results.",
        format_dpi(dpi)
    )
}

// ---------------- Tester view reducer -----------------

/// What the tester panel currently shows. Driven by the measurer through the
/// display sink.
#[derive(Clone, Debug, PartialEq)]
pub struct TesterView {
    pub measuring: bool,
    pub prompt: String,
    pub readout: String,
    /// Scale applied by the call-to-action pulse.
    pub scale: f64,
}

impl TesterView {
    pub fn new(readout_placeholder: &str) -> Self {
        Self {
            measuring: false,
            prompt: IDLE_PROMPT.to_string(),
            readout: readout_placeholder.to_string(),
            scale: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub enum TesterAction {
    SetMeasuring(bool),
    SetPrompt(String),
    SetReadout(String),
    SetScale(f64),
}

impl Reducible for TesterView {
    type Action = TesterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use TesterAction::*;
        let mut new = (*self).clone();
        match action {
            SetMeasuring(m) => new.measuring = m,
            SetPrompt(p) => new.prompt = p,
            SetReadout(r) => new.readout = r,
            SetScale(s) => new.scale = s,
        }
        if new == *self {
            return self;
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(distance: &str, unit: &str) -> DistanceReading {
        DistanceReading::new(distance, unit)
    }

    #[test]
    fn linear_in_pixels() {
        let r = reading("3", "inch");
        for p in [0.0, 1.0, 37.5, 480.0, 12_345.0] {
            let single = calculate_dpi(p, &r, 5.0);
            let double = calculate_dpi(2.0 * p, &r, 5.0);
            assert!((double - 2.0 * single).abs() < 1e-9, "p={p}");
        }
    }

    #[test]
    fn centimeters_and_millimeters_match_inches() {
        for p in [0.0, 50.0, 800.0, 1600.5] {
            let inch = calculate_dpi(p, &reading("1", "inch"), 5.0);
            let cm = calculate_dpi(p, &reading("2.54", "cm"), 5.0);
            let mm = calculate_dpi(p, &reading("25.4", "mm"), 5.0);
            assert!((cm - inch).abs() < 1e-9);
            assert!((mm - inch).abs() < 1e-9);
        }
    }

    #[test]
    fn missing_distance_uses_default() {
        let expected = calculate_dpi(400.0, &reading("5", "inch"), 5.0);
        assert_eq!(calculate_dpi(400.0, &reading("", "inch"), 5.0), expected);
        assert_eq!(calculate_dpi(400.0, &reading("abc", "inch"), 5.0), expected);
        assert_eq!(calculate_dpi(400.0, &DistanceReading::default(), 5.0), expected);
        assert_eq!(expected, 80.0);
    }

    #[test]
    fn default_applies_before_unit_conversion() {
        // Default is a number in the selected unit, like a typed value would be.
        assert!((calculate_dpi(50.0, &reading("", "cm"), 5.0) - 50.0 / (5.0 / 2.54)).abs() < 1e-9);
    }

    #[test]
    fn non_positive_distance_is_sentinel_zero() {
        for d in ["0", "-1", "-0.5", "0.0"] {
            assert_eq!(calculate_dpi(500.0, &reading(d, "inch"), 5.0), 0.0, "d={d}");
            assert_eq!(calculate_dpi(500.0, &reading(d, "mm"), 5.0), 0.0, "d={d}");
        }
    }

    #[test]
    fn unknown_unit_is_inches() {
        assert_eq!(calculate_dpi(100.0, &reading("2", "furlong"), 5.0), 50.0);
        assert_eq!(Unit::from_select_value(""), Unit::Inch);
    }

    #[test]
    fn no_rounding_inside_calculation() {
        assert!((calculate_dpi(10.0, &reading("3", "inch"), 5.0) - 10.0 / 3.0).abs() < 1e-12);
        assert_eq!(format_dpi(10.0 / 3.0), "3");
        assert_eq!(format_dpi(2.5), "3");
    }

    #[test]
    fn tiny_distance_reads_infinity() {
        let dpi = calculate_dpi(50.0, &reading("1e-320", "inch"), 5.0);
        assert!(dpi.is_infinite());
        assert_eq!(format_dpi(dpi), "Infinity");
        assert_eq!(format_dpi(f64::NAN), "NaN");
    }

    #[test]
    fn huge_readouts_are_not_clamped() {
        assert_eq!(format_dpi(1e20), "100000000000000000000");
        assert_eq!(format_dpi(2.5e22), "2.5e+22");
        assert_eq!(format_dpi(-0.3), "0");
    }

    #[test]
    fn advisory_mentions_rounded_value() {
        assert_eq!(
            advisory_message(799.6),
            "Your mouse DPI is approximately 800. For more accurate results, repeat the test 3-4 times and average the results."
        );
    }

    #[test]
    fn reducer_keeps_identity_on_no_change() {
        let view = Rc::new(TesterView::new("0"));
        let same = view.clone().reduce(TesterAction::SetReadout("0".into()));
        assert!(Rc::ptr_eq(&view, &same));
        let changed = view.reduce(TesterAction::SetMeasuring(true));
        assert!(changed.measuring);
    }
}
