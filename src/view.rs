use crate::models::{Activity, FieldValue};
use crate::panels::Panels;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Failure,
}

impl Tone {
    pub fn color(self) -> &'static str {
        match self {
            Tone::Success => "green",
            Tone::Failure => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub text: String,
    pub tone: Tone,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Success,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Failure,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub id: String,
    pub title: String,
    pub consumption_in_wh: String,
    pub image_path: String,
    pub source: String,
}

impl TableRow {
    /// Cell texts in column order.
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.id,
            &self.title,
            &self.consumption_in_wh,
            &self.image_path,
            &self.source,
        ]
    }
}

fn cell(value: Option<FieldValue>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}

impl From<Activity> for TableRow {
    fn from(activity: Activity) -> Self {
        Self {
            id: cell(activity.id),
            title: cell(activity.title),
            consumption_in_wh: cell(activity.consumption_in_wh),
            image_path: cell(activity.image_path),
            source: cell(activity.source),
        }
    }
}

/// Snapshot of the collection as of the last successful read.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TableView {
    pub rows: Vec<TableRow>,
    pub refreshed_at: Option<DateTime<Local>>,
}

impl TableView {
    pub const HEADERS: [&'static str; 5] = ["id", "title", "consumption_in_wh", "image_path", "source"];

    pub fn from_activities(activities: Vec<Activity>, refreshed_at: DateTime<Local>) -> Self {
        Self {
            rows: activities.into_iter().map(TableRow::from).collect(),
            refreshed_at: Some(refreshed_at),
        }
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

/// Everything the admin page shows. Rendered by [`crate::ui::render_index`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminView {
    pub status: Option<StatusMessage>,
    pub table: TableView,
    pub entry_count: usize,
    pub panels: Panels,
}

impl AdminView {
    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    pub fn replace_table(&mut self, table: TableView) {
        self.entry_count = table.count();
        self.table = table;
    }
}
