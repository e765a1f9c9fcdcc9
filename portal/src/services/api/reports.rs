//! # Report Endpoints
//!
//! Incident report tickets.

use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder};
use shared::{MessageResponse, Report, ReportCreated, ReportReply, ReportSubmission, ReportsResponse};

use super::client::{read_json, ApiClient};
use crate::core::error::Result;

/// Submit a new report. The backend reads multipart form fields.
#[tracing::instrument(skip(client, report), fields(category = %report.category))]
pub async fn submit_report(client: &ApiClient, report: ReportSubmission) -> Result<ReportCreated> {
    let response = submit_request(client, report).send().await?;
    read_json(response).await
}

/// Form fields in the order the backend declares them.
fn form_fields(report: ReportSubmission) -> [(&'static str, String); 4] {
    [
        ("title", report.title),
        ("description", report.description),
        ("category", report.category),
        ("priority", report.priority),
    ]
}

fn submit_request(client: &ApiClient, report: ReportSubmission) -> RequestBuilder {
    let form = form_fields(report)
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value));
    client.request(Method::POST, "/reports/submit").multipart(form)
}

/// List the authenticated user's reports.
pub async fn get_my_reports(client: &ApiClient) -> Result<Vec<Report>> {
    let response = client.request(Method::GET, "/reports/my-reports").send().await?;
    read_json::<ReportsResponse>(response).await.map(|body| body.reports)
}

/// Append a reply to a report conversation.
pub async fn reply_to_report(client: &ApiClient, reply: ReportReply) -> Result<MessageResponse> {
    let response = reply_request(client, &reply).send().await?;
    read_json(response).await
}

fn reply_request(client: &ApiClient, reply: &ReportReply) -> RequestBuilder {
    client.request(Method::POST, "/reports/reply").json(reply)
}
