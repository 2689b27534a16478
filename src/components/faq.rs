use web_sys::HtmlElement;
use yew::prelude::*;

use crate::state::{AccordionAction, AccordionState};

const QUESTIONS: &[(&str, &str)] = &[
    (
        "What is mouse DPI?",
        "DPI (dots per inch) is how many pixels the cursor moves for every inch the mouse travels. Higher DPI moves the cursor further for the same hand movement.",
    ),
    (
        "How does the test work?",
        "Pick a distance, hold the mouse button on the test area and move the mouse exactly that far. The pixels travelled divided by the distance is your DPI.",
    ),
    (
        "Why does my result differ from the box?",
        "Pointer acceleration, operating system scaling and small measuring errors all shift the estimate. Disable acceleration and repeat the test 3-4 times.",
    ),
    (
        "Which unit should I use?",
        "Any of them. Inches, centimeters and millimeters are converted before the DPI is calculated.",
    ),
    (
        "Is my data stored anywhere?",
        "No. The test runs entirely in your browser and nothing is saved or sent.",
    ),
];

#[derive(Properties, PartialEq, Clone)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let answer_ref = use_node_ref();
    let onclick = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    // Open height follows the content, measured from the mounted answer.
    let max_height = if props.open {
        answer_ref
            .cast::<HtmlElement>()
            .map(|el| format!("{}px", el.scroll_height()))
            .unwrap_or_else(|| "none".to_string())
    } else {
        "0".to_string()
    };
    html! {
        <div class="faq-item">
            <button class="faq-question" aria-expanded={if props.open { "true" } else { "false" }} {onclick}>
                { props.question.clone() }
            </button>
            <div ref={answer_ref} class={classes!("faq-answer", props.open.then_some("active"))} style={format!("max-height:{max_height};")}>
                <p>{ props.answer.clone() }</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_reducer(AccordionState::default);
    html! {
        <section id="faq" class="faq">
            <h2>{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for QUESTIONS.iter().enumerate().map(|(i, (q, a))| {
                    let on_toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |_| accordion.dispatch(AccordionAction::Toggle(i)))
                    };
                    html! {
                        <FaqItem question={*q} answer={*a} open={accordion.is_open(i)} {on_toggle} />
                    }
                }) }
            </div>
        </section>
    }
}
