//! Contact page: static contact affordances and the mailto inquiry
//! handler. No network submission happens anywhere on this page.

use super::RenderEnv;
use crate::content::Site;

/// `tel:` href for a display phone number, non-digits stripped.
fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("tel:{digits}")
}

/// Render the contact fragment: email, optional phone, optional press
/// email, and the inquiry form.
pub fn render_contact(site: &Site, _env: &RenderEnv) -> String {
    let phone = site
        .contact_phone
        .as_deref()
        .map(|phone| {
            format!(
                r#"<p>Call us: <a data-contact-phone href="{href}">{phone}</a></p>"#,
                href = tel_href(phone),
            )
        })
        .unwrap_or_default();
    let press = site
        .press_email
        .as_deref()
        .map(|email| {
            format!(r#"<p>Press: <a data-press-email href="mailto:{email}">{email}</a></p>"#)
        })
        .unwrap_or_default();

    format!(
        r#"
    <div class="section">
      <div class="container split">
        <div>
          <div class="eyebrow">Say hi</div>
          <p>Email: <a data-contact-email href="mailto:{email}">{email}</a></p>
          {phone}
          {press}
        </div>
        <form class="contact-form">
          <input name="name" placeholder="Your name" required>
          <input name="email" type="email" placeholder="Your email" required>
          <textarea name="message" placeholder="What's on your mind?" required></textarea>
          <button class="btn primary" type="submit">Send</button>
        </form>
      </div>
    </div>
  "#,
        email = site.contact_email,
    )
}

/// Build the mailto URL the inquiry form submission navigates to.
///
/// Preconditions: the form supplied name, reply-to email, and message.
/// Effect: the browser opens the user's mail client; nothing is sent
/// over the network by the site itself.
#[allow(dead_code)]
pub fn inquiry_mailto(site: &Site, name: &str, reply_to: &str, message: &str) -> String {
    let subject_raw = format!("{} inquiry from {}", site.brand_name, name);
    let subject = urlencoding::encode(&subject_raw);
    let body_raw = format!("{message}\n\nReply to: {reply_to}");
    let body = urlencoding::encode(&body_raw);
    format!(
        "mailto:{email}?subject={subject}&body={body}",
        email = site.contact_email,
    )
}

// ============================================================================
// Tests
// ============================================================================
