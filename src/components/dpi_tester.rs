use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, HtmlElement, HtmlInputElement, HtmlSelectElement, MouseEvent,
    ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::config::{CtaConfig, MeasureConfig, SiteConfig};
use crate::dom;
use crate::error::SiteError;
use crate::model::{DistanceReading, TesterAction, TesterView, Unit, MEASURING_CLASS};
use crate::state::{DisplaySink, DistanceSource, ListenerHost, Measurer, Point, PointerSignal};

pub const TEST_AREA_ID: &str = "test-area";
pub const READOUT_ID: &str = "dpi-value";

type WebMeasurer = Measurer<ViewSink, DocumentListeners, ControlsSource>;

/// Pushes measurer output into the tester's reducer, plus the one effect that
/// lives outside the component tree (body text selection).
struct ViewSink {
    view: UseReducerHandle<TesterView>,
    body: HtmlElement,
}

impl DisplaySink for ViewSink {
    fn set_surface_text(&mut self, text: &str) {
        self.view.dispatch(TesterAction::SetPrompt(text.to_string()));
    }

    fn set_surface_class(&mut self, class: &str, enabled: bool) {
        if class == MEASURING_CLASS {
            self.view.dispatch(TesterAction::SetMeasuring(enabled));
        } else {
            log::debug!("test area has no `{class}` state");
        }
    }

    fn set_readout(&mut self, text: &str) {
        self.view.dispatch(TesterAction::SetReadout(text.to_string()));
    }

    fn set_text_selection(&mut self, enabled: bool) {
        let value = if enabled { "" } else { "none" };
        if let Err(e) = self.body.style().set_property("user-select", value) {
            log::warn!("could not toggle text selection: {}", SiteError::from(e));
        }
    }

    fn show_advisory(&mut self, message: String, delay_ms: u32) {
        Timeout::new(delay_ms, move || {
            if let Err(e) = dom::alert(&message) {
                log::warn!("advisory not shown: {e}");
            }
        })
        .forget();
    }
}

/// Document-level `mousemove`/`mouseup` listeners for the running gesture.
/// Dropping a `gloo` listener unregisters it.
struct DocumentListeners {
    document: Document,
    dispatch: Rc<dyn Fn(PointerSignal)>,
    active: Vec<EventListener>,
}

impl ListenerHost for DocumentListeners {
    fn attach(&mut self) {
        if !self.active.is_empty() {
            return;
        }
        let dispatch = self.dispatch.clone();
        let on_move = EventListener::new(&self.document, "mousemove", move |e: &Event| {
            if let Some(e) = e.dyn_ref::<MouseEvent>() {
                dispatch(PointerSignal::Move(client_point(e)));
            }
        });
        let dispatch = self.dispatch.clone();
        let on_up = EventListener::new(&self.document, "mouseup", move |_e: &Event| {
            dispatch(PointerSignal::Up);
        });
        self.active = vec![on_move, on_up];
    }

    fn detach(&mut self) {
        self.active.clear();
    }

    fn attached(&self) -> usize {
        self.active.len()
    }
}

/// Reads the distance input and unit select fresh on every call.
struct ControlsSource {
    distance: NodeRef,
    unit: NodeRef,
}

impl DistanceSource for ControlsSource {
    fn read(&self) -> DistanceReading {
        let distance = self
            .distance
            .cast::<HtmlInputElement>()
            .map(|i| i.value())
            .unwrap_or_default();
        let unit = self
            .unit
            .cast::<HtmlSelectElement>()
            .map(|s| s.value())
            .unwrap_or_default();
        DistanceReading { distance, unit }
    }
}

fn client_point(e: &MouseEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

/// Both the surface and the readout must be mounted before any listener goes in.
fn surface_ready(surface: &NodeRef, readout: &NodeRef) -> Result<(), SiteError> {
    surface
        .cast::<HtmlElement>()
        .ok_or(SiteError::MissingElement(TEST_AREA_ID))?;
    readout
        .cast::<HtmlElement>()
        .ok_or(SiteError::MissingElement(READOUT_ID))?;
    Ok(())
}

/// Builds the measurer once the surface and readout are mounted. The
/// document listeners reach the measurer through a weak handle, so dropping
/// the returned `Rc` tears everything down.
fn install_measurer(
    view: UseReducerHandle<TesterView>,
    surface: &NodeRef,
    readout: &NodeRef,
    controls: ControlsSource,
    config: &MeasureConfig,
) -> Result<Rc<RefCell<WebMeasurer>>, SiteError> {
    surface_ready(surface, readout)?;
    let document = dom::document()?;
    let body = dom::body()?;
    let measurer = Rc::new_cyclic(|weak: &Weak<RefCell<WebMeasurer>>| {
        let weak = weak.clone();
        let dispatch: Rc<dyn Fn(PointerSignal)> = Rc::new(move |signal| {
            if let Some(m) = weak.upgrade() {
                m.borrow_mut().handle(signal);
            }
        });
        let listeners = DocumentListeners {
            document,
            dispatch,
            active: Vec::new(),
        };
        RefCell::new(Measurer::new(ViewSink { view, body }, listeners, controls, config))
    });
    Ok(measurer)
}

/// Scroll the test area into view, then give it a short pulse.
fn focus_test_area(view: &UseReducerHandle<TesterView>, cfg: &CtaConfig) {
    match dom::element_by_id(TEST_AREA_ID) {
        Ok(area) => dom::smooth_scroll(&area, ScrollLogicalPosition::Start),
        Err(e) => {
            log::warn!("start-test button has nothing to scroll to: {e}");
            return;
        }
    }
    let view = view.clone();
    let scale = cfg.pulse_scale;
    let hold = cfg.pulse_hold_ms;
    Timeout::new(cfg.pulse_delay_ms, move || {
        view.dispatch(TesterAction::SetScale(scale));
        Timeout::new(hold, move || view.dispatch(TesterAction::SetScale(1.0))).forget();
    })
    .forget();
}

#[derive(Properties, PartialEq, Clone)]
pub struct DpiTesterProps {
    /// Bumped by the start-test buttons; each new value scrolls here and pulses.
    #[prop_or_default]
    pub pulse: u32,
}

#[function_component(DpiTester)]
pub fn dpi_tester(props: &DpiTesterProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let view = {
        let placeholder = config.measure.readout_placeholder.clone();
        use_reducer(move || TesterView::new(&placeholder))
    };
    let surface_ref = use_node_ref();
    let readout_ref = use_node_ref();
    let distance_ref = use_node_ref();
    let unit_ref = use_node_ref();
    let measurer = use_mut_ref(|| None::<Rc<RefCell<WebMeasurer>>>);

    // Mount: wire the measurer, or leave the surface inert if the page is incomplete.
    {
        let view = view.clone();
        let surface_ref = surface_ref.clone();
        let readout_ref = readout_ref.clone();
        let controls = ControlsSource {
            distance: distance_ref.clone(),
            unit: unit_ref.clone(),
        };
        let measure_cfg = config.measure.clone();
        let slot = measurer.clone();
        use_effect_with((), move |_| {
            match install_measurer(view, &surface_ref, &readout_ref, controls, &measure_cfg) {
                Ok(m) => *slot.borrow_mut() = Some(m),
                Err(e) => log::warn!("dpi tester disabled: {e}"),
            }
            move || {
                slot.borrow_mut().take();
            }
        });
    }

    {
        let view = view.clone();
        let cta = config.cta.clone();
        use_effect_with(props.pulse, move |pulse| {
            if *pulse > 0 {
                focus_test_area(&view, &cta);
            }
            || ()
        });
    }

    let on_down = {
        let measurer = measurer.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(m) = measurer.borrow().clone() else {
                return;
            };
            if m.borrow_mut().on_pointer_down(client_point(&e)) {
                e.prevent_default();
            }
        })
    };

    let view = &*view;
    let surface_class = classes!("test-area", view.measuring.then_some(MEASURING_CLASS));
    let surface_style = format!("transform: scale({});", view.scale);
    let default_distance = config.measure.default_distance.to_string();

    html! {
        <section id="dpi-test" class="dpi-tester">
            <h2>{"Test Your Mouse DPI"}</h2>
            <p class="section-lead">{"Set how far you will move your mouse, then drag across the test area."}</p>
            <div class="test-controls">
                <label for="distance-input">{"Distance"}</label>
                <input id="distance-input" ref={distance_ref} type="number" min="0" step="0.1" value={default_distance} />
                <select id="unit-select" ref={unit_ref}>
                    { for Unit::ALL.iter().map(|u| html! {
                        <option value={u.select_value()} selected={*u == Unit::default()}>{ u.label() }</option>
                    }) }
                </select>
            </div>
            <div id={TEST_AREA_ID} ref={surface_ref} class={surface_class} style={surface_style} onmousedown={on_down}>
                <p>{ view.prompt.clone() }</p>
            </div>
            <div class="dpi-result">
                <span class="dpi-label">{"Estimated DPI"}</span>
                <span id={READOUT_ID} ref={readout_ref}>{ view.readout.clone() }</span>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmounted_surface_disables_the_tester() {
        let err = surface_ready(&NodeRef::default(), &NodeRef::default()).unwrap_err();
        assert!(matches!(err, SiteError::MissingElement("test-area")));
    }
}
