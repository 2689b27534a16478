//! Drag-distance DPI measurer.
//!
//! A two-state machine (`Idle`, `Measuring`). Pointer-down enters
//! `Measuring`, pointer-move updates the live estimate, pointer-up returns to
//! `Idle`. Attaching the document-level move/up listeners is the entry action
//! of `Measuring` and detaching them is its exit action, so once the machine
//! is back in `Idle` no document listeners remain.
//!
//! All page effects go through [`DisplaySink`] and [`ListenerHost`]; the
//! distance controls are read through [`DistanceSource`] on every event.

use crate::config::MeasureConfig;
use crate::model::{
    advisory_message, calculate_dpi, format_dpi, DistanceReading, IDLE_PROMPT, MEASURING_CLASS,
    MEASURING_PROMPT,
};
use crate::state::session::{MeasurementSession, Point};

#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureState {
    Idle,
    Measuring,
}

/// Events delivered by the document-level listeners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerSignal {
    Move(Point),
    Up,
}

pub trait DisplaySink {
    fn set_surface_text(&mut self, text: &str);
    fn set_surface_class(&mut self, class: &str, enabled: bool);
    fn set_readout(&mut self, text: &str);
    fn set_text_selection(&mut self, enabled: bool);
    /// Shows `message` to the user once `delay_ms` has passed.
    fn show_advisory(&mut self, message: String, delay_ms: u32);
}

pub trait ListenerHost {
    fn attach(&mut self);
    fn detach(&mut self);
    fn attached(&self) -> usize;
}

pub trait DistanceSource {
    fn read(&self) -> DistanceReading;
}

pub struct Measurer<D, L, S> {
    session: MeasurementSession,
    sink: D,
    listeners: L,
    source: S,
    default_distance: f64,
    advisory_delay_ms: u32,
}

impl<D, L, S> Measurer<D, L, S>
where
    D: DisplaySink,
    L: ListenerHost,
    S: DistanceSource,
{
    pub fn new(sink: D, listeners: L, source: S, config: &MeasureConfig) -> Self {
        Self {
            session: MeasurementSession::default(),
            sink,
            listeners,
            source,
            default_distance: config.default_distance,
            advisory_delay_ms: config.advisory_delay_ms,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> MeasureState {
        if self.session.active {
            MeasureState::Measuring
        } else {
            MeasureState::Idle
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &MeasurementSession {
        &self.session
    }

    #[cfg(test)]
    pub fn listeners(&self) -> &L {
        &self.listeners
    }

    #[cfg(test)]
    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Current estimate for `pixels`, using whatever the controls hold now.
    pub fn calculate_dpi(&self, pixels: f64) -> f64 {
        calculate_dpi(pixels, &self.source.read(), self.default_distance)
    }

    /// Returns `true` when a gesture started; the caller then suppresses the
    /// event's default action.
    pub fn on_pointer_down(&mut self, position: Point) -> bool {
        if self.session.active {
            return false;
        }
        self.session = MeasurementSession::start(position);
        self.enter_measuring();
        log::debug!("dpi gesture started at ({}, {})", position.x, position.y);
        true
    }

    pub fn on_pointer_move(&mut self, position: Point) {
        if !self.session.active {
            return;
        }
        let pixels = self.session.track(position);
        let dpi = self.calculate_dpi(pixels);
        self.sink.set_readout(&format_dpi(dpi));
    }

    pub fn on_pointer_up(&mut self) {
        if !self.session.active {
            return;
        }
        self.session.active = false;
        self.exit_measuring();
        let dpi = self.calculate_dpi(self.session.displacement);
        self.sink.set_readout(&format_dpi(dpi));
        log::debug!(
            "dpi gesture finished: {:.1}px -> {:.1} dpi",
            self.session.displacement,
            dpi
        );
        if dpi > 0.0 {
            self.sink
                .show_advisory(advisory_message(dpi), self.advisory_delay_ms);
        }
    }

    pub fn handle(&mut self, signal: PointerSignal) {
        match signal {
            PointerSignal::Move(p) => self.on_pointer_move(p),
            PointerSignal::Up => self.on_pointer_up(),
        }
    }

    fn enter_measuring(&mut self) {
        self.sink.set_surface_class(MEASURING_CLASS, true);
        self.sink.set_surface_text(MEASURING_PROMPT);
        self.sink.set_text_selection(false);
        self.listeners.attach();
    }

    fn exit_measuring(&mut self) {
        self.sink.set_surface_class(MEASURING_CLASS, false);
        self.sink.set_surface_text(IDLE_PROMPT);
        self.sink.set_text_selection(true);
        self.listeners.detach();
        debug_assert_eq!(self.listeners.attached(), 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    enum Effect {
        SurfaceText(String),
        SurfaceClass(String, bool),
        Readout(String),
        TextSelection(bool),
        Advisory(String, u32),
    }

    #[derive(Default)]
    struct RecordingSink {
        effects: Vec<Effect>,
    }

    impl RecordingSink {
        fn readouts(&self) -> Vec<&str> {
            self.effects
                .iter()
                .filter_map(|e| match e {
                    Effect::Readout(r) => Some(r.as_str()),
                    _ => None,
                })
                .collect()
        }

        fn advisories(&self) -> usize {
            self.effects
                .iter()
                .filter(|e| matches!(e, Effect::Advisory(..)))
                .count()
        }
    }

    impl DisplaySink for RecordingSink {
        fn set_surface_text(&mut self, text: &str) {
            self.effects.push(Effect::SurfaceText(text.to_string()));
        }
        fn set_surface_class(&mut self, class: &str, enabled: bool) {
            self.effects
                .push(Effect::SurfaceClass(class.to_string(), enabled));
        }
        fn set_readout(&mut self, text: &str) {
            self.effects.push(Effect::Readout(text.to_string()));
        }
        fn set_text_selection(&mut self, enabled: bool) {
            self.effects.push(Effect::TextSelection(enabled));
        }
        fn show_advisory(&mut self, message: String, delay_ms: u32) {
            self.effects.push(Effect::Advisory(message, delay_ms));
        }
    }

    #[derive(Default)]
    struct CountingListeners {
        attached: usize,
        attach_calls: usize,
    }

    impl ListenerHost for CountingListeners {
        fn attach(&mut self) {
            self.attach_calls += 1;
            self.attached = 2;
        }
        fn detach(&mut self) {
            self.attached = 0;
        }
        fn attached(&self) -> usize {
            self.attached
        }
    }

    /// Shared cell so a test can change the controls mid-gesture.
    #[derive(Clone, Default)]
    struct Controls(Rc<RefCell<DistanceReading>>);

    impl Controls {
        fn set(&self, distance: &str, unit: &str) {
            *self.0.borrow_mut() = DistanceReading::new(distance, unit);
        }
    }

    impl DistanceSource for Controls {
        fn read(&self) -> DistanceReading {
            self.0.borrow().clone()
        }
    }

    fn measurer() -> (
        Measurer<RecordingSink, CountingListeners, Controls>,
        Controls,
    ) {
        let controls = Controls::default();
        let m = Measurer::new(
            RecordingSink::default(),
            CountingListeners::default(),
            controls.clone(),
            &MeasureConfig::default(),
        );
        (m, controls)
    }

    #[test]
    fn full_gesture_with_default_distance() {
        let (mut m, _) = measurer();
        assert!(m.on_pointer_down(Point::new(100.0, 100.0)));
        assert_eq!(m.state(), MeasureState::Measuring);
        m.on_pointer_move(Point::new(130.0, 140.0));
        assert_eq!(m.session().displacement, 50.0);
        m.on_pointer_up();
        assert_eq!(m.state(), MeasureState::Idle);
        assert_eq!(m.sink().readouts(), vec!["10", "10"]);
        assert_eq!(
            m.sink().effects.last(),
            Some(&Effect::Advisory(advisory_message(10.0), 100))
        );
    }

    #[test]
    fn down_applies_measuring_visuals_and_attaches() {
        let (mut m, _) = measurer();
        m.on_pointer_down(Point::new(0.0, 0.0));
        assert_eq!(
            m.sink().effects,
            vec![
                Effect::SurfaceClass(MEASURING_CLASS.into(), true),
                Effect::SurfaceText(MEASURING_PROMPT.into()),
                Effect::TextSelection(false),
            ]
        );
        assert_eq!(m.listeners().attached(), 2);
    }

    #[test]
    fn up_restores_visuals() {
        let (mut m, _) = measurer();
        m.on_pointer_down(Point::new(0.0, 0.0));
        m.on_pointer_up();
        let effects = &m.sink().effects[3..];
        assert_eq!(effects[0], Effect::SurfaceClass(MEASURING_CLASS.into(), false));
        assert_eq!(effects[1], Effect::SurfaceText(IDLE_PROMPT.into()));
        assert_eq!(effects[2], Effect::TextSelection(true));
        assert_eq!(effects[3], Effect::Readout("0".into()));
    }

    #[test]
    fn second_down_while_active_is_ignored() {
        let (mut m, _) = measurer();
        m.on_pointer_down(Point::new(10.0, 10.0));
        m.on_pointer_move(Point::new(40.0, 50.0));
        let before = *m.session();
        let effects_before = m.sink().effects.len();
        assert!(!m.on_pointer_down(Point::new(500.0, 500.0)));
        assert_eq!(*m.session(), before);
        assert_eq!(m.session().origin, Point::new(10.0, 10.0));
        assert_eq!(m.session().displacement, 50.0);
        assert_eq!(m.sink().effects.len(), effects_before);
        assert_eq!(m.listeners().attach_calls, 1);
    }

    #[test]
    fn move_and_up_while_idle_are_no_ops() {
        let (mut m, _) = measurer();
        m.on_pointer_move(Point::new(5.0, 5.0));
        m.on_pointer_up();
        m.handle(PointerSignal::Up);
        assert!(m.sink().effects.is_empty());
        assert_eq!(m.listeners().attached(), 0);
    }

    #[test]
    fn no_updates_after_gesture_ends() {
        let (mut m, _) = measurer();
        m.on_pointer_down(Point::new(0.0, 0.0));
        m.handle(PointerSignal::Move(Point::new(30.0, 40.0)));
        m.handle(PointerSignal::Up);
        assert_eq!(m.listeners().attached(), 0);
        let effects = m.sink().effects.len();
        m.handle(PointerSignal::Move(Point::new(300.0, 400.0)));
        assert_eq!(m.sink().effects.len(), effects);
        assert_eq!(m.session().displacement, 50.0);
    }

    #[test]
    fn idle_always_has_zero_listeners() {
        let (mut m, _) = measurer();
        for i in 0..3 {
            m.on_pointer_down(Point::new(i as f64, 0.0));
            assert_eq!(m.listeners().attached(), 2);
            m.on_pointer_up();
            assert_eq!(m.state(), MeasureState::Idle);
            assert_eq!(m.listeners().attached(), 0);
        }
        assert_eq!(m.listeners().attach_calls, 3);
    }

    #[test]
    fn zero_dpi_skips_advisory() {
        let (mut m, controls) = measurer();
        controls.set("0", "inch");
        m.on_pointer_down(Point::new(0.0, 0.0));
        m.on_pointer_move(Point::new(300.0, 0.0));
        m.on_pointer_up();
        assert_eq!(m.sink().readouts(), vec!["0", "0"]);
        assert_eq!(m.sink().advisories(), 0);

        // No movement at all is also zero.
        let (mut m, _) = measurer();
        m.on_pointer_down(Point::new(0.0, 0.0));
        m.on_pointer_up();
        assert_eq!(m.sink().advisories(), 0);
    }

    #[test]
    fn controls_are_read_on_every_event() {
        let (mut m, controls) = measurer();
        controls.set("1", "inch");
        m.on_pointer_down(Point::new(0.0, 0.0));
        m.on_pointer_move(Point::new(400.0, 0.0));
        controls.set("2.54", "cm");
        m.on_pointer_move(Point::new(800.0, 0.0));
        controls.set("10", "inch");
        m.on_pointer_up();
        assert_eq!(m.sink().readouts(), vec!["400", "800", "80"]);
    }

    #[test]
    fn live_readout_is_rounded() {
        let (mut m, controls) = measurer();
        controls.set("3", "inch");
        m.on_pointer_down(Point::new(0.0, 0.0));
        m.on_pointer_move(Point::new(10.0, 0.0));
        assert_eq!(m.sink().readouts(), vec!["3"]);
        assert!((m.calculate_dpi(10.0) - 10.0 / 3.0).abs() < 1e-12);
    }
}
