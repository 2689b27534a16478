//! Contact form model: per-field validation and the submit flow.

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    TextArea,
}

impl FieldKind {
    /// Value of the `type` attribute for `<input>` fields.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            _ => "text",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Choices for `Select` fields.
    pub options: &'static [&'static str],
}

pub fn contact_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec {
            name: "name",
            label: "Name",
            kind: FieldKind::Text,
            required: true,
            options: &[],
        },
        FieldSpec {
            name: "email",
            label: "Email",
            kind: FieldKind::Email,
            required: true,
            options: &[],
        },
        FieldSpec {
            name: "phone",
            label: "Phone (optional)",
            kind: FieldKind::Tel,
            required: false,
            options: &[],
        },
        FieldSpec {
            name: "subject",
            label: "Subject",
            kind: FieldKind::Select,
            required: false,
            options: &["General question", "Test results", "Partnership", "Bug report"],
        },
        FieldSpec {
            name: "message",
            label: "Message",
            kind: FieldKind::TextArea,
            required: true,
            options: &[],
        },
    ]
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Needs a dot with at least one character on each side.
    let inner: Vec<char> = domain.chars().collect();
    inner.len() >= 3 && inner[1..inner.len() - 1].contains(&'.')
}

fn is_valid_phone(value: &str) -> bool {
    let stripped: String = value
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
        .collect();
    let digits = stripped.strip_prefix('+').unwrap_or(&stripped);
    let mut chars = digits.chars();
    match chars.next() {
        Some('1'..='9') => {}
        _ => return false,
    }
    let rest = chars.as_str();
    rest.len() <= 15 && rest.chars().all(|c| c.is_ascii_digit())
}

/// Validates one field value. Empty optional fields are always valid.
pub fn validate_field(kind: FieldKind, required: bool, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return !required;
    }
    match kind {
        FieldKind::Email => is_valid_email(value),
        FieldKind::Tel => is_valid_phone(value),
        _ => true,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldState {
    pub value: String,
    pub error: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub specs: Vec<FieldSpec>,
    pub fields: Vec<FieldState>,
    pub sending: bool,
}

#[derive(Clone, Debug)]
pub enum FormAction {
    Input { index: usize, value: String },
    Blur(usize),
    /// Clears every error, validates required fields, starts sending if all pass.
    Submit,
    /// Simulated submission finished: clear values and leave the sending state.
    Finish,
}

impl FormState {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        let fields = vec![FieldState::default(); specs.len()];
        Self {
            specs,
            fields,
            sending: false,
        }
    }

    fn check(&self, index: usize) -> bool {
        let spec = &self.specs[index];
        validate_field(spec.kind, spec.required, &self.fields[index].value)
    }

    pub fn validate(&mut self, index: usize) -> bool {
        if index >= self.fields.len() {
            return true;
        }
        let valid = self.check(index);
        self.fields[index].error = !valid;
        valid
    }

    pub fn input(&mut self, index: usize, value: String) {
        let Some(field) = self.fields.get_mut(index) else {
            return;
        };
        field.value = value;
        if field.error {
            self.validate(index);
        }
    }

    /// First required field that would fail a submit.
    pub fn first_invalid(&self) -> Option<usize> {
        (0..self.specs.len()).find(|&i| self.specs[i].required && !self.check(i))
    }

    pub fn submit(&mut self) -> bool {
        if self.sending {
            return false;
        }
        for field in &mut self.fields {
            field.error = false;
        }
        let mut all_valid = true;
        for i in 0..self.specs.len() {
            if self.specs[i].required && !self.validate(i) {
                all_valid = false;
            }
        }
        self.sending = all_valid;
        all_valid
    }

    pub fn finish(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.sending = false;
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use FormAction::*;
        let mut new = (*self).clone();
        match action {
            Input { index, value } => new.input(index, value),
            Blur(index) => {
                new.validate(index);
            }
            Submit => {
                new.submit();
            }
            Finish => new.finish(),
        }
        Rc::new(new)
    }
}
