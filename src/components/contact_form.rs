use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{error, info, warn};
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::relay::{EmailJsRelay, EnquiryPayload, MailRelay, RelayConfig};

pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to send enquiry. Please try again.";

pub const SERVICE_CATEGORIES: &[&str] = &[
    "Residential Construction",
    "Commercial Projects",
    "Interior Design",
    "Renovation & Remodeling",
    "Project Consultation",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Category,
    Message,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Full name",
            FormField::Phone => "Phone number",
            FormField::Category => "Service",
            FormField::Message => "Project details",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    MissingField(FormField),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub phone: String,
    pub category: String,
    pub message: String,
}

impl FormState {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Phone => self.phone = value,
            FormField::Category => self.category = value,
            FormField::Message => self.message = value,
        }
    }

    /// Name, phone and service are mandatory; the message may be empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            (FormField::Name, &self.name),
            (FormField::Phone, &self.phone),
            (FormField::Category, &self.category),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ValidationError::MissingField(*field)),
            None => Ok(()),
        }
    }

    pub fn payload(&self) -> EnquiryPayload {
        EnquiryPayload {
            name: self.name.clone(),
            phone: self.phone.clone(),
            service: self.category.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Editing,
    Sending,
    Sent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    Edit(FormField, String),
    Submit,
    RelaySucceeded,
    RelayFailed,
}

/// What the page does once the relay call has settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowUp {
    ScheduleReload { after_ms: u32 },
    Alert(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: FormState,
    pub phase: SubmitPhase,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            fields: FormState::default(),
            phase: SubmitPhase::Editing,
        }
    }
}

impl ContactFormState {
    pub fn is_sent(&self) -> bool {
        self.phase == SubmitPhase::Sent
    }

    /// The payload to relay, if the form may be submitted right now.
    pub fn ready_payload(&self) -> Result<Option<EnquiryPayload>, ValidationError> {
        if self.phase != SubmitPhase::Editing {
            return Ok(None);
        }
        self.fields.validate()?;
        Ok(Some(self.fields.payload()))
    }

    /// Returns whether anything changed.
    pub fn apply(&mut self, action: FormAction) -> bool {
        match (self.phase, action) {
            // Inputs stay live while Sending; the payload was captured at Submit
            (SubmitPhase::Editing | SubmitPhase::Sending, FormAction::Edit(field, value)) => {
                self.fields.set(field, value);
                true
            }
            (SubmitPhase::Editing, FormAction::Submit) if self.fields.validate().is_ok() => {
                self.phase = SubmitPhase::Sending;
                true
            }
            (SubmitPhase::Sending, FormAction::RelaySucceeded) => {
                self.phase = SubmitPhase::Sent;
                true
            }
            (SubmitPhase::Sending, FormAction::RelayFailed) => {
                self.phase = SubmitPhase::Editing;
                true
            }
            _ => false,
        }
    }
}

impl Reducible for ContactFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

pub struct SubmitOutcome {
    pub action: FormAction,
    pub follow_up: FollowUp,
}

/// Sends the enquiry and maps the relay's answer onto the form transition
/// and the page-level follow-up. Failures are never retried.
pub async fn submit_enquiry<R: MailRelay>(relay: &R, payload: EnquiryPayload) -> SubmitOutcome {
    match relay.send(&payload).await {
        Ok(()) => {
            info!("Enquiry sent");
            SubmitOutcome {
                action: FormAction::RelaySucceeded,
                follow_up: FollowUp::ScheduleReload {
                    after_ms: config::RELOAD_DELAY_MS,
                },
            }
        }
        Err(e) => {
            error!("Failed to send enquiry: {}", e);
            SubmitOutcome {
                action: FormAction::RelayFailed,
                follow_up: FollowUp::Alert(SUBMIT_FAILED_MESSAGE),
            }
        }
    }
}

fn run_follow_up(follow_up: FollowUp) {
    let Some(window) = web_sys::window() else {
        warn!("No window, skipping {:?}", follow_up);
        return;
    };
    match follow_up {
        FollowUp::ScheduleReload { after_ms } => {
            Timeout::new(after_ms, move || {
                if let Err(err) = window.location().reload() {
                    warn!("Failed to reload page: {:?}", err);
                }
            })
            .forget();
        }
        FollowUp::Alert(message) => {
            if let Err(err) = window.alert_with_message(message) {
                warn!("Failed to show alert: {:?}", err);
            }
        }
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_reducer(ContactFormState::default);
    let relay = use_memo(|_| EmailJsRelay::new(RelayConfig::from_build_env()), ());
    // Guards against a second click landing before the Sending render
    let in_flight = use_mut_ref(|| false);

    let on_submit = {
        let form = form.clone();
        let relay = relay.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *in_flight.borrow() {
                return;
            }
            let payload = match form.ready_payload() {
                Ok(Some(payload)) => payload,
                Ok(None) => return,
                Err(err) => {
                    warn!("Enquiry not submitted: {}", err);
                    return;
                }
            };

            *in_flight.borrow_mut() = true;
            form.dispatch(FormAction::Submit);

            let dispatcher = form.dispatcher();
            let relay = relay.clone();
            let in_flight = in_flight.clone();
            spawn_local(async move {
                let outcome = submit_enquiry(&*relay, payload).await;
                *in_flight.borrow_mut() = false;
                dispatcher.dispatch(outcome.action);
                run_follow_up(outcome.follow_up);
            });
        })
    };

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(FormField::Name, input.value()));
        })
    };
    let on_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(FormField::Phone, input.value()));
        })
    };
    let on_category = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(FormField::Category, select.value()));
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(FormField::Message, textarea.value()));
        })
    };

    let sending = form.phase == SubmitPhase::Sending;

    html! {
        <div class="contact-form-container">
            if form.is_sent() {
                <div class="contact-success">
                    <h3>{"THANK YOU"}</h3>
                    <p>{"Your enquiry has been sent successfully."}</p>
                </div>
            } else {
                <form class="contact-form" onsubmit={on_submit}>
                    <input
                        name="name"
                        placeholder="Full Name"
                        value={form.fields.name.clone()}
                        oninput={on_name}
                        required={true}
                    />
                    <input
                        name="phone"
                        type="tel"
                        placeholder="Phone Number"
                        value={form.fields.phone.clone()}
                        oninput={on_phone}
                        required={true}
                    />
                    <div class="select-wrapper">
                        <select name="type" onchange={on_category} required={true}>
                            <option value="" selected={form.fields.category.is_empty()}>{"Select Service"}</option>
                            { for SERVICE_CATEGORIES.iter().map(|category| html! {
                                <option
                                    value={*category}
                                    selected={form.fields.category == *category}
                                >
                                    {*category}
                                </option>
                            }) }
                        </select>
                        <span class="select-arrow">{"▼"}</span>
                    </div>
                    <textarea
                        name="message"
                        rows="4"
                        placeholder="Project details"
                        value={form.fields.message.clone()}
                        oninput={on_message}
                    />
                    <button type="submit" class="contact-submit" disabled={sending}>
                        { if sending { "SENDING..." } else { "SEND ENQUIRY" } }
                    </button>
                </form>
            }
            <style>
                {r#"
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-form input,
                    .contact-form select,
                    .contact-form textarea {
                        width: 100%;
                        box-sizing: border-box;
                        background: #000;
                        color: #fff;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        padding: 0.75rem 1rem;
                        border-radius: 0.375rem;
                        outline: none;
                        font: inherit;
                        transition: all 0.3s;
                    }
                    .contact-form input:hover,
                    .contact-form input:focus,
                    .contact-form select:hover,
                    .contact-form select:focus,
                    .contact-form textarea:hover,
                    .contact-form textarea:focus {
                        transform: scale(1.02);
                        border-color: #FDB614;
                    }
                    .select-wrapper {
                        position: relative;
                    }
                    .select-wrapper select {
                        appearance: none;
                        cursor: pointer;
                    }
                    .select-arrow {
                        pointer-events: none;
                        position: absolute;
                        right: 1rem;
                        top: 50%;
                        transform: translateY(-50%);
                        color: #FDB614;
                        font-size: 0.875rem;
                    }
                    .contact-submit {
                        width: 100%;
                        background: #FDB614;
                        color: #000;
                        border: none;
                        padding: 0.75rem;
                        border-radius: 0.375rem;
                        letter-spacing: 0.1em;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .contact-submit:hover:not(:disabled) {
                        background: #22c55e;
                        transform: scale(1.05);
                    }
                    .contact-submit:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                    .contact-success {
                        text-align: center;
                        color: #4ade80;
                        animation: pulse 2s ease-in-out infinite;
                    }
                    @keyframes pulse {
                        50% { opacity: 0.5; }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::RelayError;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct ScriptedRelay {
        result: Result<(), RelayError>,
        sent: RefCell<Vec<EnquiryPayload>>,
    }

    impl ScriptedRelay {
        fn succeeding() -> Self {
            Self {
                result: Ok(()),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                result: Err(RelayError::Transport("connection reset".to_string())),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl MailRelay for ScriptedRelay {
        async fn send(&self, payload: &EnquiryPayload) -> Result<(), RelayError> {
            self.sent.borrow_mut().push(payload.clone());
            self.result.clone()
        }
    }

    fn filled_form() -> ContactFormState {
        let mut state = ContactFormState::default();
        state.apply(FormAction::Edit(FormField::Name, "Jane Doe".to_string()));
        state.apply(FormAction::Edit(FormField::Phone, "9995060708".to_string()));
        state.apply(FormAction::Edit(
            FormField::Category,
            "Residential Construction".to_string(),
        ));
        state
    }

    #[test]
    fn successful_submit_relays_payload_and_schedules_reload() {
        let mut state = filled_form();
        let payload = state.ready_payload().unwrap().unwrap();
        assert!(state.apply(FormAction::Submit));

        let relay = ScriptedRelay::succeeding();
        let outcome = block_on(submit_enquiry(&relay, payload));

        assert_eq!(
            relay.sent.borrow().as_slice(),
            &[EnquiryPayload {
                name: "Jane Doe".to_string(),
                phone: "9995060708".to_string(),
                service: "Residential Construction".to_string(),
                message: String::new(),
            }]
        );
        assert_eq!(outcome.follow_up, FollowUp::ScheduleReload { after_ms: 2_500 });

        state.apply(outcome.action);
        assert!(state.is_sent());
    }

    #[test]
    fn failed_submit_alerts_and_keeps_fields() {
        let mut state = filled_form();
        state.apply(FormAction::Edit(FormField::Message, "Two storey house".to_string()));
        let before = state.fields.clone();
        let payload = state.ready_payload().unwrap().unwrap();
        state.apply(FormAction::Submit);

        let relay = ScriptedRelay::failing();
        let outcome = block_on(submit_enquiry(&relay, payload));
        assert_eq!(
            outcome.follow_up,
            FollowUp::Alert("Failed to send enquiry. Please try again.")
        );

        state.apply(outcome.action);
        assert!(!state.is_sent());
        assert_eq!(state.phase, SubmitPhase::Editing);
        assert_eq!(state.fields, before);
    }

    #[test]
    fn missing_required_field_blocks_submit() {
        let mut state = ContactFormState::default();
        state.apply(FormAction::Edit(FormField::Name, "Jane Doe".to_string()));
        state.apply(FormAction::Edit(FormField::Phone, "   ".to_string()));

        assert_eq!(
            state.ready_payload(),
            Err(ValidationError::MissingField(FormField::Phone))
        );
        assert!(!state.apply(FormAction::Submit));
        assert_eq!(state.phase, SubmitPhase::Editing);
    }

    #[test]
    fn message_is_optional() {
        assert!(filled_form().fields.validate().is_ok());
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut state = filled_form();
        state.apply(FormAction::Submit);

        assert_eq!(state.ready_payload(), Ok(None));
        assert!(!state.apply(FormAction::Submit));
        assert_eq!(state.phase, SubmitPhase::Sending);
    }

    #[test]
    fn edits_made_while_sending_survive_a_failed_send() {
        let mut state = filled_form();
        state.apply(FormAction::Submit);
        assert!(state.apply(FormAction::Edit(FormField::Name, "Jane Q. Doe".to_string())));

        state.apply(FormAction::RelayFailed);

        let payload = state.ready_payload().unwrap().unwrap();
        assert_eq!(payload.name, "Jane Q. Doe");
        assert_eq!(payload.phone, "9995060708");
    }

    #[test]
    fn edits_after_sent_are_ignored() {
        let mut state = filled_form();
        state.apply(FormAction::Submit);
        state.apply(FormAction::RelaySucceeded);
        assert!(!state.apply(FormAction::Edit(FormField::Name, "Someone Else".to_string())));
        assert_eq!(state.fields.name, "Jane Doe");
    }

    #[test]
    fn stray_relay_result_is_ignored() {
        let mut state = filled_form();
        assert!(!state.apply(FormAction::RelaySucceeded));
        assert!(!state.is_sent());
    }

    #[test]
    fn validation_error_names_the_field() {
        let err = ValidationError::MissingField(FormField::Category);
        assert_eq!(err.to_string(), "Service is required");
    }
}
