pub mod accordion;
pub mod form;
pub mod measurer;
pub mod session;
pub mod toast;

pub use accordion::{AccordionAction, AccordionState};
pub use form::{FormAction, FormState};
pub use measurer::{DisplaySink, DistanceSource, ListenerHost, Measurer, PointerSignal};
pub use session::Point;
pub use toast::{ToastAction, ToastKind, ToastQueue};
