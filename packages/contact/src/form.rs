use std::collections::BTreeMap;

pub const ERR_NAME_REQUIRED: &str = "Name is required";
pub const ERR_EMAIL_REQUIRED: &str = "Email is required";
pub const ERR_EMAIL_INVALID: &str = "Please enter a valid email address";
pub const ERR_MESSAGE_REQUIRED: &str = "Message is required";
pub const ERR_PROJECT_TYPE_REQUIRED: &str = "Please select a project type";

/// Values offered by the project-type select. Only membership in "some
/// non-empty value" is validated; the vocabulary is for the input layer.
pub const PROJECT_TYPES: &[&str] = &[
    "web-design",
    "frontend-development",
    "full-stack-development",
    "ecommerce",
    "performance-seo",
    "other",
];

/// Values offered by the (optional) budget select.
pub const BUDGET_RANGES: &[&str] = &["under-10k", "10k-25k", "25k-50k", "50k-100k", "over-100k"];

/// Values offered by the (optional) timeline select.
pub const TIMELINES: &[&str] = &["asap", "1-month", "2-3-months", "3-6-months", "flexible"];

/// One input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Company,
    ProjectType,
    Budget,
    Timeline,
    Message,
    /// Hidden anti-spam input; never rendered for legitimate users.
    Honeypot,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::ProjectType => "projectType",
            Self::Budget => "budget",
            Self::Timeline => "timeline",
            Self::Message => "message",
            Self::Honeypot => "honeypot",
        }
    }
}

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Accepting input. Recorded field errors, if any, belong to the last
    /// failed validation pass.
    #[default]
    Editing,
    /// A submission attempt is in flight; the submit control is disabled.
    Submitting,
    /// Terminal success.
    Submitted { reference_id: String },
}

/// Error-display order: the order the checks run in.
const DISPLAY_ORDER: [Field; 4] = [Field::Name, Field::Email, Field::Message, Field::ProjectType];

/// State of one lead inquiry, owned by the workflow for the duration of a
/// submission attempt and discarded afterwards.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) company: String,
    pub(crate) budget: String,
    pub(crate) timeline: String,
    pub(crate) project_type: String,
    pub(crate) message: String,
    pub(crate) honeypot: String,
    errors: BTreeMap<Field, &'static str>,
    phase: Phase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one field. Clears only that field's recorded error, the
    /// same way typing in an input dismisses its inline message; no
    /// re-validation happens until the next submit.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::ProjectType => self.project_type = value,
            Field::Budget => self.budget = value,
            Field::Timeline => self.timeline = value,
            Field::Message => self.message = value,
            Field::Honeypot => self.honeypot = value,
        }
        self.errors.remove(&field);
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::ProjectType => &self.project_type,
            Field::Budget => &self.budget,
            Field::Timeline => &self.timeline,
            Field::Message => &self.message,
            Field::Honeypot => &self.honeypot,
        }
    }

    /// Run every check and record all failures at once (no
    /// short-circuiting). Returns true when the form may be submitted.
    pub fn validate(&mut self) -> bool {
        let mut errors = BTreeMap::new();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, ERR_NAME_REQUIRED);
        }
        if self.email.trim().is_empty() {
            errors.insert(Field::Email, ERR_EMAIL_REQUIRED);
        } else if !is_valid_email(&self.email) {
            errors.insert(Field::Email, ERR_EMAIL_INVALID);
        }
        if self.message.trim().is_empty() {
            errors.insert(Field::Message, ERR_MESSAGE_REQUIRED);
        }
        if self.project_type.is_empty() {
            errors.insert(Field::ProjectType, ERR_PROJECT_TYPE_REQUIRED);
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<Field, &'static str> {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// The first failing check in validation order, for aggregated
    /// display ("fix this first").
    pub fn first_error(&self) -> Option<(Field, &'static str)> {
        DISPLAY_ORDER
            .iter()
            .find_map(|field| self.errors.get(field).map(|msg| (*field, *msg)))
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Reference identifier of a successful submission, once reached.
    pub fn reference_id(&self) -> Option<&str> {
        match &self.phase {
            Phase::Submitted { reference_id } => Some(reference_id),
            _ => None,
        }
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}

/// Syntactic email check matching the pattern the site has always used,
/// `[^\s@]+@[^\s@]+\.[^\s@]+`: one `@`, no whitespace, and a dot with
/// characters on both sides in the domain part.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let clean = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');
    if !clean(local) || !clean(domain) {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_records_all_failures_at_once() {
        let mut form = ContactForm::new();
        form.set(Field::Email, "x");
        form.set(Field::Message, "hello");
        form.set(Field::ProjectType, "web-design");

        assert!(!form.validate());
        assert_eq!(form.error(Field::Name), Some(ERR_NAME_REQUIRED));
        assert_eq!(form.error(Field::Email), Some(ERR_EMAIL_INVALID));
        assert_eq!(form.error(Field::Message), None);
        assert_eq!(form.error(Field::ProjectType), None);
        assert_eq!(form.errors().len(), 2);
    }

    #[test]
    fn test_empty_form_fails_every_required_check() {
        let mut form = ContactForm::new();
        assert!(!form.validate());
        assert_eq!(form.errors().len(), 4);
        assert_eq!(form.error(Field::Email), Some(ERR_EMAIL_REQUIRED));
        assert_eq!(form.error(Field::Message), Some(ERR_MESSAGE_REQUIRED));
        assert_eq!(form.error(Field::ProjectType), Some(ERR_PROJECT_TYPE_REQUIRED));
        // The aggregated summary leads with the name check.
        assert_eq!(form.first_error(), Some((Field::Name, ERR_NAME_REQUIRED)));
    }

    #[test]
    fn test_first_error_follows_validation_order() {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.validate();
        // Message comes before project type in check order.
        assert_eq!(
            form.first_error(),
            Some((Field::Message, ERR_MESSAGE_REQUIRED))
        );
    }

    #[test]
    fn test_set_clears_only_that_fields_error() {
        let mut form = ContactForm::new();
        form.validate();
        form.set(Field::Name, "A");
        assert_eq!(form.error(Field::Name), None);
        assert_eq!(form.error(Field::Email), Some(ERR_EMAIL_REQUIRED));
        // No re-validation on keystrokes: a bad value clears the error too.
        form.set(Field::Email, "still-not-an-email");
        assert_eq!(form.error(Field::Email), None);
    }

    #[test]
    fn test_whitespace_only_values_are_empty() {
        let mut form = ContactForm::new();
        form.set(Field::Name, "   ");
        form.set(Field::Message, "\t\n");
        form.validate();
        assert_eq!(form.error(Field::Name), Some(ERR_NAME_REQUIRED));
        assert_eq!(form.error(Field::Message), Some(ERR_MESSAGE_REQUIRED));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("x"));
        assert!(!is_valid_email("no-at.example.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("ada@nodot"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada@com."));
    }

    #[test]
    fn test_new_form_starts_editing_without_errors() {
        let form = ContactForm::new();
        assert_eq!(*form.phase(), Phase::Editing);
        assert!(form.errors().is_empty());
        assert!(form.first_error().is_none());
        assert!(form.reference_id().is_none());
    }
}
