
use super::pages::{self, reveal_attributes};
use super::routes::Page;
use super::shell::{BUSINESS_EMAIL, BUSINESS_PHONE, BUSINESS_PHONE_HREF};
use crate::contact_form::{FormModel, SubmissionState};
use crate::domain::Interest;
use crate::reveal::{RevealObserver, ToggleActions};
use crate::utils::{escape_attribute, escape_html};

const QUICK_LINKS: [(&str, Page); 4] = [
    ("Programs", Page::Programs),
    ("Curriculum", Page::Curriculum),
    ("For Parents", Page::Parents),
    ("For Schools", Page::Schools),
];

pub fn render(model: &FormModel, observer: &RevealObserver) -> String {
    let content = pages::content(Page::Contact);
    let form = match model.state {
        SubmissionState::Sent => render_confirmation(),
        _ => render_form(model),
    };
    format!(
        r#"{}
            <section {}>
                {form}
            </section>
            <section {}>
                <h2>Get in touch</h2>
                <p>Have questions about our programs? Want to book a free taster? We'd love to hear from you.</p>
                <ul>
                    <li>Email <a href="mailto:{BUSINESS_EMAIL}">{BUSINESS_EMAIL}</a></li>
                    <li>Phone <a href="{BUSINESS_PHONE_HREF}">{BUSINESS_PHONE}</a></li>
                    <li>Hours <span>Mon–Fri, 9am–5pm</span></li>
                </ul>
            </section>
            <section {}>
                <h2>Quick Links</h2>
                <ul>{}</ul>
            </section>"#,
        pages::render_hero(content, observer),
        reveal_attributes("message", ToggleActions::PlayReverse, observer),
        reveal_attributes("get-in-touch", ToggleActions::PlayReverse, observer),
        reveal_attributes("quick-links", ToggleActions::PlayReverse, observer),
        QUICK_LINKS
            .iter()
            .map(|(name, page)| format!(r#"<li><a href="{}">{name}</a></li>"#, page.path()))
            .collect::<String>()
    )
}

fn render_confirmation() -> String {
    r#"<div class="confirmation">
                    <h3>Message Sent!</h3>
                    <p>Thank you for reaching out. We'll get back to you within 24 hours.</p>
                </div>"#
        .to_string()
}

fn text_input(name: &str, label: &str, kind: &str, value: Option<&str>, required: bool) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
                    <input id="{name}" name="{name}" type="{kind}" value="{}"{}>"#,
        escape_attribute(value.unwrap_or_default()),
        if required { " required" } else { "" }
    )
}

fn render_form(model: &FormModel) -> String {
    let sending = model.state == SubmissionState::Sending;
    let input = &model.input;
    let selected = model
        .interest
        .or_else(|| input.interest.as_deref().and_then(|value| Interest::parse(value).ok()));

    let options = Interest::ALL
        .iter()
        .map(|&interest| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                interest.as_str(),
                if selected == Some(interest) { " selected" } else { "" },
                interest.label()
            )
        })
        .collect::<String>();
    let options = format!(r#"<option value="">Select an option</option>{options}"#);

    let error = match model.state {
        SubmissionState::Failed(reason) => {
            format!(r#"<p class="error">{}</p>"#, escape_html(reason.user_message()))
        }
        _ => String::new(),
    };
    let button = if sending {
        r#"<button type="submit" disabled>Sending...</button>"#
    } else {
        r#"<button type="submit">Send message</button>"#
    };

    format!(
        r#"<h2>Send us a message</h2>
                <form action="/contact" method="post">
                    {}
                    {}
                    {}
                    {}
                    <label for="interest">I'm interested in</label>
                    <select id="interest" name="interest">{options}</select>
                    <label for="message">Message</label>
                    <textarea id="message" name="message" rows="4">{}</textarea>
                    {error}
                    {button}
                </form>"#,
        text_input("firstName", "First Name", "text", input.first_name.as_deref(), true),
        text_input("lastName", "Last Name", "text", input.last_name.as_deref(), true),
        text_input("email", "Email", "email", input.email.as_deref(), true),
        text_input("phone", "Phone (optional)", "tel", input.phone.as_deref(), false),
        escape_html(input.message.as_deref().unwrap_or_default()),
    )
}
