use std::rc::Rc;
use yew::Reducible;

/// FAQ accordion: at most one item is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    pub open: Option<usize>,
}

#[derive(Clone, Debug)]
pub enum AccordionAction {
    Toggle(usize),
}

impl AccordionState {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

impl Reducible for AccordionState {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            AccordionAction::Toggle(i) => new.toggle(i),
        }
        Rc::new(new)
    }
}
