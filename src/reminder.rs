use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use url::Url;

/// Escape set matching `encodeURIComponent`: alphanumerics and `-_.!~*'()`
/// pass through, everything else (spaces included) becomes `%XX`. Form
/// encoding would turn spaces into `+` instead.
const MESSAGE_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Serialize)]
pub struct Reminder {
    pub message: String,
    pub url: String,
}

/// Templated WhatsApp reminder. The phone is stripped to digits for the
/// `wa.me` path; the message rides the `text` query parameter,
/// percent-encoded. Opening the link is the shell's side effect.
pub fn compose(name: &str, phone: &str, paid: bool) -> anyhow::Result<Reminder> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let message = format!(
        "Hello {name}, this is a reminder from your tuition. Your payment status is: {}.",
        if paid { "Paid" } else { "Unpaid" }
    );
    let text = utf8_percent_encode(&message, MESSAGE_ESCAPES);
    let url = Url::parse(&format!("https://wa.me/{digits}?text={text}"))?;
    Ok(Reminder {
        message,
        url: url.to_string(),
    })
}
