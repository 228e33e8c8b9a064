use std::rc::Rc;

use gloo_timers::callback::Timeout;
use portfolio_shared::{
    contact::{self, ContactForm as ContactFields, SubmissionNotice, ToastKind},
    Settings,
};
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::{components::toast::use_toast, config::CONTACT_FORM_ID, language_context::use_language};

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let settings = use_context::<Rc<Settings>>().unwrap_or_default();
    let language = use_language();
    let toast = use_toast();

    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let subject_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let subject_ref = subject_ref.clone();
        let message_ref = message_ref.clone();
        let lang = language.lang;
        let delay = settings.submit_delay_ms;

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let fields = ContactFields {
                name: input_value(&name_ref),
                email: input_value(&email_ref),
                subject: input_value(&subject_ref),
                message: message_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
            };

            if let Err(err) = contact::validate(&fields) {
                tracing::debug!("contact form rejected: {err}");
                toast.show(err.message(lang), ToastKind::Error);
                return;
            }

            let sending = SubmissionNotice::Sending;
            toast.show(sending.message(lang), sending.kind());

            // 没有后端，模拟一次往返
            let toast = toast.clone();
            let form_ref = form_ref.clone();
            Timeout::new(delay, move || {
                match serde_json::to_string(&fields) {
                    Ok(payload) => tracing::info!("Form submitted: {payload}"),
                    Err(err) => tracing::error!("failed to encode contact form: {err}"),
                }
                let sent = SubmissionNotice::Sent;
                toast.show(sent.message(lang), sent.kind());
                if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                    form.reset();
                }
            })
            .forget();
        })
    };

    html! {
        <form id={CONTACT_FORM_ID} class="contact-form slide-in-right" ref={form_ref} onsubmit={onsubmit} novalidate={true}>
            <div class="form-group">
                <label for="name" data-zh="姓名" data-en="Name">{ "姓名" }</label>
                <input type="text" id="name" name="name" ref={name_ref} />
            </div>
            <div class="form-group">
                <label for="email" data-zh="電子郵件" data-en="Email">{ "電子郵件" }</label>
                <input type="email" id="email" name="email" ref={email_ref} />
            </div>
            <div class="form-group">
                <label for="subject" data-zh="主旨" data-en="Subject">{ "主旨" }</label>
                <input type="text" id="subject" name="subject" ref={subject_ref} />
            </div>
            <div class="form-group">
                <label for="message" data-zh="訊息" data-en="Message">{ "訊息" }</label>
                <textarea id="message" name="message" rows="5" ref={message_ref}></textarea>
            </div>
            <button type="submit" class="btn btn-primary" data-zh="發送訊息" data-en="Send Message">
                { "發送訊息" }
            </button>
        </form>
    }
}
