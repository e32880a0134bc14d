//! Email and SMS rendering
//!
//! Every value a customer typed is HTML-escaped before it is placed in an
//! email body. SMS bodies are plain text.

use std::fmt::Write;

use domain_estimate::{
    Category, ContactInfo, EstimateRecord, EstimateRequest, EstimateResult, ItemSpecification,
};

use crate::message::{EmailMessage, SmsMessage};

const BRAND: &str = "Hauln' Heavy";
const SMS_BRAND: &str = "Haul'n Heavy";
const NOT_SPECIFIED: &str = "Not specified";

/// Escapes text for inclusion in HTML element content or attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Confirmation sent to the customer
pub fn customer_email(
    contact: &ContactInfo,
    request: &EstimateRequest,
    record: &EstimateRecord,
    reply_to: Option<&str>,
) -> EmailMessage {
    let result = &record.result;
    let mut html = String::new();

    html.push_str(&header_html("Your Freight Estimate"));
    let _ = write!(
        html,
        "<h2>Hello {}!</h2>\
         <p>Thank you for requesting an estimate from {}. Here are the details of your freight estimate:</p>",
        escape_html(contact.first_name.trim()),
        BRAND
    );
    html.push_str(&cost_table_html(result));
    html.push_str("<h3>Your Contact Information</h3>");
    html.push_str(&contact_html(contact));
    html.push_str("<h3>Your Request Details</h3>");
    html.push_str(&request_details_html(request));
    let _ = write!(
        html,
        "<div class=\"disclaimer\"><h4>Important Disclaimer</h4><p>{}</p></div>\
         <p>Thank you for choosing {}! Our team will contact you shortly to discuss your freight needs and finalize the details.</p>\
         <p class=\"reference\">Estimate reference: {}</p>",
        escape_html(result.disclaimer()),
        BRAND,
        record.estimate_id
    );
    html.push_str("</div>");

    EmailMessage {
        to: contact.email.trim().to_string(),
        subject: format!("Your {} Estimate - {}", BRAND, result.total_estimate().format_usd()),
        html,
        reply_to: reply_to.map(str::to_string),
    }
}

/// Lead notification sent to the business inbox
pub fn business_email(
    inbox: &str,
    contact: &ContactInfo,
    request: &EstimateRequest,
    record: &EstimateRecord,
) -> EmailMessage {
    let result = &record.result;
    let category = request
        .item
        .as_ref()
        .map(ItemSpecification::category)
        .unwrap_or(Category::Freight);
    let name = escape_html(&contact.full_name());

    let mut html = String::new();
    html.push_str(&header_html("New Estimate Request"));
    html.push_str("<h2>New Estimate Request</h2>");
    html.push_str(&contact_html(contact));
    let _ = write!(
        html,
        "<p><strong>Request Time:</strong> {}</p><p><strong>Estimate:</strong> {}</p>",
        record.created_at.format("%Y-%m-%d %H:%M UTC"),
        record.estimate_id
    );
    html.push_str(&cost_table_html(result));
    html.push_str("<h3>Customer Request Details</h3>");
    html.push_str(&request_details_html(request));
    let _ = write!(
        html,
        "<div class=\"next-steps\"><h4>Next Steps</h4><ul>\
         <li>Contact {} at {} or {}</li>\
         <li>Review estimate details and adjust if needed</li>\
         <li>Confirm pickup/delivery arrangements</li>\
         <li>Send final quote and booking confirmation</li>\
         </ul></div></div>",
        name,
        escape_html(contact.email.trim()),
        escape_html(contact.phone.trim())
    );

    EmailMessage {
        to: inbox.to_string(),
        subject: format!(
            "New Estimate Request - {} - {} - {}",
            category.label(),
            contact.full_name(),
            result.total_estimate().format_usd()
        ),
        html,
        reply_to: Some(contact.email.trim().to_string()),
    }
}

/// Plain-text estimate summary for SMS
pub fn sms_body(request: &EstimateRequest, result: &EstimateResult, support_phone: &str) -> String {
    let item = request
        .item
        .as_ref()
        .map(ItemSpecification::summary_label)
        .unwrap_or_else(|| "Item".to_string());
    let pickup = request.locations.pickup.city().unwrap_or("Pickup Location");
    let dropoff = request.locations.dropoff.city().unwrap_or("Dropoff Location");

    format!(
        "{} Estimate: {}\nItem: {}\nRoute: {} → {}\n*Additional fees may apply\nQuestions? Call {}",
        SMS_BRAND,
        result.total_estimate().format_usd(),
        item,
        pickup,
        dropoff,
        support_phone
    )
}

pub fn sms_message(
    to: &str,
    request: &EstimateRequest,
    record: &EstimateRecord,
    support_phone: &str,
) -> SmsMessage {
    SmsMessage {
        to: to.trim().to_string(),
        body: sms_body(request, &record.result, support_phone),
    }
}

fn header_html(tagline: &str) -> String {
    format!(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">\
         <div style=\"background-color: #fcd001; padding: 20px; text-align: center;\">\
         <h1 style=\"color: #333; margin: 0;\">{}</h1><p>{}</p></div>",
        BRAND, tagline
    )
}

fn cost_table_html(result: &EstimateResult) -> String {
    let rows = [
        ("Base Cost", result.base_cost()),
        ("Fuel Surcharge", result.fuel_surcharge()),
        ("Oversize Fee", result.oversize_fee()),
        ("Hazmat Fee", result.hazmat_fee()),
        ("Additional Fees", result.additional_fees()),
    ];

    let mut html = String::from("<h3>Estimate Summary</h3><table style=\"width: 100%; border-collapse: collapse;\">");
    for (label, amount) in rows {
        let _ = write!(
            html,
            "<tr><td>{}:</td><td style=\"text-align: right;\">{}</td></tr>",
            label,
            amount.format_usd()
        );
    }
    for adjustment in result.adjustments() {
        let _ = write!(
            html,
            "<tr><td style=\"padding-left: 16px;\">{}</td><td style=\"text-align: right;\">{}</td></tr>",
            adjustment.kind.label(),
            adjustment.amount.format_usd()
        );
    }
    let _ = write!(
        html,
        "<tr style=\"background-color: #fcd001; font-weight: bold;\"><td>Total Estimate:</td>\
         <td style=\"text-align: right;\">{}</td></tr></table>",
        result.total_estimate().format_usd()
    );
    html
}

fn contact_html(contact: &ContactInfo) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<p><strong>Name:</strong> {}</p><p><strong>Email:</strong> {}</p>",
        escape_html(&contact.full_name()),
        escape_html(contact.email.trim())
    );
    if let Some(company) = contact.company.as_deref().filter(|c| !c.trim().is_empty()) {
        let _ = write!(html, "<p><strong>Company:</strong> {}</p>", escape_html(company.trim()));
    }
    let _ = write!(html, "<p><strong>Phone:</strong> {}</p>", escape_html(contact.phone.trim()));
    html
}

/// Item, route and handling details as HTML paragraphs
pub fn request_details_html(request: &EstimateRequest) -> String {
    let mut html = String::new();
    let dimensions = |item: &ItemSpecification| {
        item.dimensions()
            .map(|d| d.to_string())
            .unwrap_or_else(|| NOT_SPECIFIED.to_string())
    };

    match &request.item {
        Some(item @ ItemSpecification::Equipment(eq)) => {
            let name = [eq.year.trim(), eq.make.trim(), eq.model.trim()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(
                html,
                "<p><strong>Category:</strong> Equipment &amp; Machinery</p>\
                 <p><strong>Equipment:</strong> {}</p>\
                 <p><strong>Type:</strong> {}</p>\
                 <p><strong>Quantity:</strong> {}</p>\
                 <p><strong>Dimensions:</strong> {}</p>\
                 <p><strong>Weight:</strong> {} lbs</p>",
                escape_html(&name),
                escape_html(non_blank(&eq.equipment_type)),
                eq.quantity,
                escape_html(&dimensions(item)),
                eq.weight_lbs.normalize()
            );
        }
        Some(item @ ItemSpecification::Freight(fr)) => {
            let method = fr
                .transportation_method
                .map(|m| m.as_str())
                .unwrap_or(NOT_SPECIFIED);
            let _ = write!(
                html,
                "<p><strong>Category:</strong> Freight</p>\
                 <p><strong>Item:</strong> {}</p>\
                 <p><strong>Quantity:</strong> {}</p>\
                 <p><strong>Dimensions:</strong> {}</p>\
                 <p><strong>Weight:</strong> {} lbs</p>\
                 <p><strong>Hazmat:</strong> {}</p>\
                 <p><strong>Transport Method:</strong> {}</p>",
                escape_html(non_blank(&fr.shipping_item)),
                fr.quantity,
                escape_html(&dimensions(item)),
                fr.weight_lbs.normalize(),
                if fr.has_hazmat_placards { "Yes" } else { "No" },
                method
            );
        }
        None => {}
    }

    let _ = write!(
        html,
        "<p><strong>Pickup:</strong> {}</p><p><strong>Delivery:</strong> {}</p>",
        escape_html(request.locations.pickup.address_text().unwrap_or(NOT_SPECIFIED)),
        escape_html(request.locations.dropoff.address_text().unwrap_or(NOT_SPECIFIED))
    );

    let extras = &request.additional_info;
    if let Some(instructions) = extras.handling_instructions.as_deref().filter(|s| !s.trim().is_empty()) {
        let _ = write!(
            html,
            "<p><strong>Handling Instructions:</strong> {}</p>",
            escape_html(instructions.trim())
        );
    }
    if let Some(budget) = extras.target_budget.filter(|b| !b.is_zero()) {
        let _ = write!(html, "<p><strong>Target Budget:</strong> ${}</p>", budget.normalize());
    }

    html
}

fn non_blank(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        NOT_SPECIFIED
    } else {
        trimmed
    }
}
