//! Order mail rendering
//!
//! Turns an [`OrderSubmission`] into the subject line and the two bodies of
//! the notification mail. Pure string building, no I/O.
//!
//! The HTML body escapes every client-supplied value; the plain-text body
//! carries them verbatim.

use crate::order::OrderSubmission;

/// Subject and both bodies of an order notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

const HEADING: &str = "Новый заказ на баннер!";
const ACCENT: &str = "#9333ea";

/// Render subject, plain-text and HTML bodies for an order.
pub fn render_order(order: &OrderSubmission) -> RenderedMail {
    RenderedMail {
        subject: format!("🎨 Новый заказ на баннер от {}", order.name),
        text: render_text(order),
        html: render_html(order),
    }
}

fn render_text(order: &OrderSubmission) -> String {
    let email_line = order
        .email
        .as_deref()
        .map(|email| format!("Email: {}\n", email))
        .unwrap_or_default();

    let eyelets_line = if order.eyelets {
        format!("Люверсы: Да (~{} шт)\n", order.eyelets_count)
    } else {
        String::new()
    };

    let comment_block = order
        .comment
        .as_deref()
        .map(|comment| format!("\nКомментарий: {}\n", comment))
        .unwrap_or_default();

    format!(
        "{HEADING}

Контактные данные:
Имя: {name}
Телефон: {phone}
{email_line}
Детали заказа:
Материал: {material}
Размер: {size} ({area} м²)
Количество: {quantity} шт
{eyelets_line}
Стоимость: {price} руб
{comment_block}",
        name = order.name,
        phone = order.phone,
        material = order.material,
        size = order.size,
        area = order.area,
        quantity = order.quantity,
        price = order.total_price.grouped(),
    )
}

fn render_html(order: &OrderSubmission) -> String {
    let email_html = order
        .email
        .as_deref()
        .map(|email| format!("<p><strong>Email:</strong> {}</p>", escape_html(email)))
        .unwrap_or_default();

    let eyelets_html = if order.eyelets {
        format!(
            "<p><strong>Люверсы:</strong> Да (~{} шт)</p>",
            order.eyelets_count
        )
    } else {
        String::new()
    };

    let comment_html = order
        .comment
        .as_deref()
        .map(|comment| {
            format!(
                r#"<div style="background: white; padding: 20px; border-radius: 8px;">
            <h3 style="color: {ACCENT}; margin-top: 0;">Комментарий:</h3>
            <p>{}</p>
          </div>"#,
                escape_html(comment)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<html>
  <body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px; background: linear-gradient(135deg, #f5f3ff 0%, #fce7f3 100%); border-radius: 10px;">
      <h2 style="color: {ACCENT}; margin-bottom: 20px;">{HEADING}</h2>

      <div style="background: white; padding: 20px; border-radius: 8px; margin-bottom: 15px;">
        <h3 style="color: {ACCENT}; margin-top: 0;">Контактные данные:</h3>
        <p><strong>Имя:</strong> {name}</p>
        <p><strong>Телефон:</strong> {phone}</p>
        {email_html}
      </div>

      <div style="background: white; padding: 20px; border-radius: 8px; margin-bottom: 15px;">
        <h3 style="color: {ACCENT}; margin-top: 0;">Детали заказа:</h3>
        <p><strong>Материал:</strong> {material}</p>
        <p><strong>Размер:</strong> {size} ({area} м²)</p>
        <p><strong>Количество:</strong> {quantity} шт</p>
        {eyelets_html}
      </div>

      <div style="background: white; padding: 20px; border-radius: 8px; margin-bottom: 15px;">
        <h3 style="color: {ACCENT}; margin-top: 0;">Стоимость:</h3>
        <p style="font-size: 24px; font-weight: bold; color: {ACCENT}; margin: 0;">{price} руб</p>
      </div>

      {comment_html}
    </div>
  </body>
</html>
"#,
        name = escape_html(&order.name),
        phone = escape_html(&order.phone),
        material = escape_html(&order.material),
        size = escape_html(&order.size),
        area = escape_html(&order.area.to_string()),
        quantity = order.quantity,
        price = order.total_price.grouped(),
    )
}

/// Minimal HTML escaping for text nodes.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
