//! Notion REST client implementing [`DocumentStore`].
//!
//! All wire-format knowledge lives here: the core only sees the typed
//! models. Requests are blocking with a bounded per-call timeout.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::Config;
use crate::core::period::Period;
use crate::errors::{AppError, AppResult};
use crate::models::summary::TABLE_HEADERS;
use crate::models::{SummaryDocument, SummaryKey, TimeEntry};
use crate::store::{CreatedDocument, DocumentRef, DocumentStore};

const API_BASE: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// API response types (deserialized from Notion JSON)
// ============================================================================

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<PageObject>,
}

#[derive(Debug, Deserialize)]
struct PageObject {
    id: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    properties: Value,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

// ============================================================================
// Client
// ============================================================================

pub struct NotionStore {
    client: Client,
    api_key: String,
    /// Database holding the per-entry time records.
    database_id: String,
    /// Database holding the generated summary pages.
    list_id: String,
}

impl NotionStore {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key: cfg.api_key.clone(),
            database_id: cfg.database_id.clone(),
            list_id: cfg.list_id.clone(),
        })
    }

    fn post(&self, url: &str, body: &Value) -> AppResult<Response> {
        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(body)
            .send()?;
        check_status(resp)
    }

    fn patch(&self, url: &str, body: &Value) -> AppResult<Response> {
        let resp = self
            .client
            .patch(url)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(body)
            .send()?;
        check_status(resp)
    }
}

/// Surface non-2xx responses as store errors carrying Notion's own message.
fn check_status(resp: Response) -> AppResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = resp
        .json::<ApiErrorBody>()
        .map(|e| e.message)
        .unwrap_or_default();
    Err(AppError::Store(format!("{}: {}", status, message)))
}

impl DocumentStore for NotionStore {
    fn query_summaries(&self, key: &SummaryKey) -> AppResult<Vec<DocumentRef>> {
        let body = json!({
            "filter": {"and": [
                {"property": "Company", "select": {"equals": key.company}},
                {"property": "Month", "select": {"equals": key.month_label}},
                {"property": "Year", "number": {"equals": key.year}},
            ]}
        });

        let url = format!("{}/databases/{}/query", API_BASE, self.list_id);
        let resp: QueryResponse = self.post(&url, &body)?.json()?;

        Ok(resp
            .results
            .into_iter()
            .map(|page| DocumentRef { id: page.id })
            .collect())
    }

    fn archive_document(&self, id: &str) -> AppResult<()> {
        let url = format!("{}/pages/{}", API_BASE, id);
        self.patch(&url, &json!({"archived": true}))?;
        Ok(())
    }

    fn query_entries(&self, company: &str, period: &Period) -> AppResult<Vec<TimeEntry>> {
        let body = json!({
            "filter": {"and": [
                {"property": "Company", "select": {"equals": company}},
                {"property": "Date", "date": {"on_or_after": period.start.to_string()}},
                {"property": "Date", "date": {"on_or_before": period.end.to_string()}},
            ]},
            "sorts": [{"property": "Date", "direction": "ascending"}]
        });

        let url = format!("{}/databases/{}/query", API_BASE, self.database_id);
        let resp: QueryResponse = self.post(&url, &body)?.json()?;

        resp.results.iter().map(parse_entry).collect()
    }

    fn create_summary(&self, doc: &SummaryDocument) -> AppResult<CreatedDocument> {
        let url = format!("{}/pages", API_BASE);
        let page: PageObject = self.post(&url, &create_page_body(doc, &self.list_id))?.json()?;
        Ok(CreatedDocument {
            id: page.id,
            url: page.url,
        })
    }
}

// ============================================================================
// Wire translation
// ============================================================================

fn parse_entry(page: &PageObject) -> AppResult<TimeEntry> {
    let date = &page.properties["Date"]["date"];
    let start = date["start"]
        .as_str()
        .ok_or_else(|| AppError::Store(format!("time entry {} has no start date", page.id)))?;
    let end = date["end"]
        .as_str()
        .ok_or_else(|| AppError::Store(format!("time entry {} has no end date", page.id)))?;
    let duration = page.properties["Duration"]["formula"]["number"]
        .as_f64()
        .ok_or_else(|| AppError::Store(format!("time entry {} has no duration", page.id)))?;

    Ok(TimeEntry {
        start: parse_timestamp(start)?,
        end: parse_timestamp(end)?,
        duration,
    })
}

/// Notion date values come as RFC 3339 with offset, sometimes without one,
/// and date-only for all-day records.
fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN));
    }
    Err(AppError::Store(format!("unparseable timestamp: {}", s)))
}

fn table_row(cells: [&str; 4]) -> Value {
    json!({
        "object": "block",
        "type": "table_row",
        "table_row": {
            "cells": cells.map(|c| json!([{"type": "text", "text": {"content": c}}])),
        }
    })
}

fn create_page_body(doc: &SummaryDocument, list_id: &str) -> Value {
    let mut children = vec![table_row(TABLE_HEADERS)];
    for row in &doc.rows {
        children.push(table_row([
            &row.date,
            &row.start_time,
            &row.end_time,
            &row.duration,
        ]));
    }

    json!({
        "parent": {"type": "database_id", "database_id": list_id},
        "properties": {
            "title": {
                "title": [{
                    "type": "text",
                    "text": {"content": doc.title},
                }]
            },
            "Company": {"select": {"name": doc.key.company}},
            "Month": {"select": {"name": doc.key.month_label}},
            "Year": {"number": doc.key.year},
        },
        "children": [
            {
                "object": "block",
                "type": "table",
                "table": {
                    "table_width": 4,
                    "has_column_header": true,
                    "children": children,
                }
            },
            {
                "object": "block",
                "type": "paragraph",
                "paragraph": {
                    "rich_text": [{
                        "type": "text",
                        "text": {"content": doc.total_line()},
                    }]
                }
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_with_offset() {
        let ts = parse_timestamp("2024-03-20T09:00:00.000+01:00").unwrap();
        assert_eq!(ts.to_string(), "2024-03-20 09:00:00");
    }

    #[test]
    fn parses_date_only_as_midnight() {
        let ts = parse_timestamp("2024-03-20").unwrap();
        assert_eq!(ts.to_string(), "2024-03-20 00:00:00");
    }

    #[test]
    fn rejects_garbage_timestamp() {
        assert!(parse_timestamp("gestern").is_err());
    }

    #[test]
    fn create_body_carries_header_and_total() {
        let doc = SummaryDocument {
            title: "Ben Engelhard - acme - April".to_string(),
            key: SummaryKey {
                company: "acme".to_string(),
                month_label: "April".to_string(),
                year: 2024,
            },
            total_hours: 7.5,
            rows: vec![],
        };

        let body = create_page_body(&doc, "list-1");
        assert_eq!(body["parent"]["database_id"], "list-1");
        assert_eq!(body["properties"]["Year"]["number"], 2024);

        let table = &body["children"][0]["table"];
        assert_eq!(table["table_width"], 4);
        let header = &table["children"][0]["table_row"]["cells"];
        assert_eq!(header[0][0]["text"]["content"], "Datum");
        assert_eq!(header[3][0]["text"]["content"], "Dauer");

        let total = &body["children"][1]["paragraph"]["rich_text"][0]["text"]["content"];
        assert_eq!(total, "Insgesamt: 7.5h");
    }
}
