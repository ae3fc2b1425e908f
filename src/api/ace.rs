use super::{parse_rows, remote_error, Row};
use crate::libs::config::Credentials;
use crate::libs::dump;
use crate::libs::errors::AceError;
use crate::libs::report::ReportRow;
use crate::libs::week::{week_start, WeekHours};
use crate::msg_debug;
use anyhow::Result;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Serialize;

pub const BASE_URL: &str = "http://api.aceproject.com/";

const FORMAT_DS: &str = "ds";
const FORMAT_XML: &str = "xml";

/// Opaque session credential returned by login, required on every
/// subsequent call. Lives only in memory for the single-shot run; expiry is
/// not handled and surfaces as a downstream request error.
#[derive(Debug, Clone)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: u32,
    pub resume: String,
}

#[derive(Serialize)]
struct LoginQuery<'a> {
    fct: &'static str,
    accountid: &'a str,
    username: &'a str,
    password: &'a str,
    browserinfo: &'static str,
    language: &'static str,
    format: &'static str,
}

#[derive(Serialize)]
struct UsersQuery<'a> {
    fct: &'static str,
    guid: &'a str,
    #[serde(rename = "FilterUserName")]
    filter_user_name: &'a str,
    format: &'static str,
}

#[derive(Serialize)]
struct ProjectsQuery<'a> {
    fct: &'static str,
    guid: &'a str,
    #[serde(rename = "Filterassigneduserid")]
    filter_assigned_user_id: u32,
    #[serde(rename = "Filtercompletedproject")]
    filter_completed_project: &'static str,
    #[serde(rename = "SortOrder")]
    sort_order: &'static str,
    format: &'static str,
}

#[derive(Serialize)]
struct TasksQuery<'a> {
    fct: &'static str,
    guid: &'a str,
    projectid: u32,
    forcombo: &'static str,
    format: &'static str,
}

#[derive(Serialize)]
struct TimeReportQuery<'a> {
    fct: &'static str,
    guid: &'a str,
    #[serde(rename = "View")]
    view: u32,
    #[serde(rename = "FilterMyWorkItems")]
    filter_my_work_items: &'static str,
    #[serde(rename = "FilterTimeCreatorUserId")]
    filter_time_creator_user_id: u32,
    #[serde(rename = "FilterDateFrom")]
    filter_date_from: String,
    #[serde(rename = "FilterDateTo")]
    filter_date_to: String,
    format: &'static str,
}

/// One create-or-update submission for a weekly timesheet line.
///
/// The service's unit of storage is a week, not a day: the request carries
/// `weekstart` plus all seven day-hour slots, and a resubmission for the same
/// week overwrites the stored vector rather than accumulating. `line_id`
/// present turns the call into an update of an existing entry; that is the
/// only thing distinguishing create from update.
#[derive(Debug, Clone)]
pub struct SaveWorkItem {
    pub project_id: u32,
    pub task_id: Option<u32>,
    pub line_id: Option<u64>,
    pub date: NaiveDate,
    pub hours: f64,
    pub comment: String,
}

impl SaveWorkItem {
    /// Wire parameters for the service week containing `date`: only the slot
    /// for `date` carries hours, every other slot is zero.
    pub fn query(&self, token: &SessionToken) -> Vec<(String, String)> {
        let mut params = vec![
            ("fct".to_string(), "saveworkitem".to_string()),
            ("guid".to_string(), token.as_str().to_string()),
            ("weekstart".to_string(), week_start(self.date).format("%Y-%m-%d").to_string()),
            ("projectid".to_string(), self.project_id.to_string()),
            // TODO: resolve the time type through gettimetypes instead of assuming id 1
            ("timetypeid".to_string(), "1".to_string()),
        ];
        params.extend(WeekHours::single(self.date, self.hours).params());
        params.push(("comments".to_string(), self.comment.clone()));
        if let Some(task_id) = self.task_id {
            params.push(("taskid".to_string(), task_id.to_string()));
        }
        if let Some(line_id) = self.line_id {
            params.push(("timesheetlineid".to_string(), line_id.to_string()));
        }
        params.push(("format".to_string(), FORMAT_DS.to_string()));
        params
    }
}

/// Client for the AceProject timesheet API.
///
/// Strictly sequential: one call in flight at a time, no retry, no backoff.
/// Every remote failure is fatal to the run.
pub struct Ace {
    client: Client,
    base_url: String,
    dump_responses: bool,
}

impl Ace {
    pub fn new(dump_responses: bool) -> Self {
        Self::with_base_url(BASE_URL, dump_responses)
    }

    pub fn with_base_url(base_url: &str, dump_responses: bool) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
            dump_responses,
        }
    }

    /// Exchanges credentials for a session token. Any response without a
    /// token (bad credentials, service error) is an authentication failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionToken> {
        let query = LoginQuery {
            fct: "login",
            accountid: &credentials.account,
            username: &credentials.username,
            password: &credentials.password,
            browserinfo: "NULL",
            language: "NULL",
            format: FORMAT_DS,
        };
        let rows = self.request_raw("login", &query).await?;
        let token = rows
            .iter()
            .find_map(|row| row.get("GUID"))
            .ok_or_else(|| AceError::Auth("login response contained no session token".to_string()))?;
        Ok(SessionToken::new(token))
    }

    /// Exact-username lookup. The service returns an empty set for unknown
    /// usernames rather than an error; when several rows match, the first
    /// one wins.
    pub async fn user_id(&self, token: &SessionToken, username: &str) -> Result<u32> {
        let query = UsersQuery {
            fct: "getusers",
            guid: token.as_str(),
            filter_user_name: username,
            format: FORMAT_DS,
        };
        let rows = self.request("getusers", &query).await?;
        let id = rows
            .iter()
            .find_map(|row| row.get("USER_ID"))
            .ok_or_else(|| AceError::NotFound(format!("no user named \"{}\"", username)))?;
        Ok(id
            .parse()
            .map_err(|_| AceError::Transport(format!("unreadable USER_ID \"{}\"", id)))?)
    }

    /// Active (non-completed) projects assigned to a user. An empty listing
    /// is a valid outcome.
    pub async fn projects(&self, token: &SessionToken, user_id: u32) -> Result<Vec<Project>> {
        let query = ProjectsQuery {
            fct: "getprojects",
            guid: token.as_str(),
            filter_assigned_user_id: user_id,
            filter_completed_project: "False",
            sort_order: "PROJECT_ID",
            format: FORMAT_DS,
        };
        let rows = self.request("getprojects", &query).await?;
        Ok(rows
            .iter()
            .filter_map(|row| {
                Some(Project {
                    id: row.get("PROJECT_ID")?.parse().ok()?,
                    name: row.get("PROJECT_NAME").unwrap_or("").to_string(),
                })
            })
            .collect())
    }

    /// Tasks of a project. An empty listing is a valid outcome.
    pub async fn tasks(&self, token: &SessionToken, project_id: u32) -> Result<Vec<TaskRow>> {
        let query = TasksQuery {
            fct: "gettasks",
            guid: token.as_str(),
            projectid: project_id,
            forcombo: "true",
            format: FORMAT_DS,
        };
        let rows = self.request("gettasks", &query).await?;
        Ok(rows
            .iter()
            .filter_map(|row| {
                Some(TaskRow {
                    id: row.get("TASK_ID")?.parse().ok()?,
                    resume: row.get("TASK_RESUME").unwrap_or("").to_string(),
                })
            })
            .collect())
    }

    /// Time entries created by a user inside a date range.
    pub async fn time_report(&self, token: &SessionToken, user_id: u32, from: NaiveDate, to: NaiveDate) -> Result<Vec<ReportRow>> {
        let query = TimeReportQuery {
            fct: "GetTimeReport",
            guid: token.as_str(),
            view: 1,
            filter_my_work_items: "False",
            filter_time_creator_user_id: user_id,
            filter_date_from: from.format("%Y-%m-%d").to_string(),
            filter_date_to: to.format("%Y-%m-%d").to_string(),
            format: FORMAT_XML,
        };
        let rows = self.request("GetTimeReport", &query).await?;
        Ok(rows.iter().filter_map(report_row).collect())
    }

    /// Submits one weekly timesheet line, creating or updating depending on
    /// the presence of a line id.
    pub async fn save_work_item(&self, token: &SessionToken, item: &SaveWorkItem) -> Result<()> {
        let query = item.query(token);
        self.request("saveworkitem", &query).await?;
        Ok(())
    }

    /// One GET, with the embedded-error check every non-login call wants.
    async fn request<Q: Serialize + ?Sized>(&self, fct: &str, query: &Q) -> Result<Vec<Row>> {
        let rows = self.request_raw(fct, query).await?;
        if let Some(description) = remote_error(&rows) {
            return Err(AceError::RemoteValidation(description.to_string()).into());
        }
        Ok(rows)
    }

    /// One GET against the base URL, parsed into rows. Transport-level
    /// failures (network, non-2xx, unparseable body) are fatal.
    async fn request_raw<Q: Serialize + ?Sized>(&self, fct: &str, query: &Q) -> Result<Vec<Row>> {
        msg_debug!(format!("GET {} fct={}", self.base_url, fct));
        let res = self
            .client
            .get(&self.base_url)
            .query(query)
            .send()
            .await
            .map_err(|e| AceError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(AceError::Transport(format!("HTTP {} from fct={}", status, fct)).into());
        }

        let body = res.text().await.map_err(|e| AceError::Transport(e.to_string()))?;
        if self.dump_responses {
            dump::write(fct, &body);
        }
        Ok(parse_rows(&body)?)
    }
}

/// Projects one report row out of the attribute bag. Rows without a readable
/// work date are skipped; display fields default to empty strings.
pub fn report_row(row: &Row) -> Option<ReportRow> {
    let raw_date = row.get("DATE_WORKED")?;
    let date = NaiveDate::parse_from_str(raw_date.get(..10)?, "%Y-%m-%d").ok()?;
    Some(ReportRow {
        line_id: row.get("TIMESHEET_LINE_ID").unwrap_or("").to_string(),
        date,
        client: row.get("CLIENT_NAME").unwrap_or("").to_string(),
        project: row.get("PROJECT_NAME").unwrap_or("").to_string(),
        task: row.get("TASK_RESUME").unwrap_or("").to_string(),
        hours: row.get("TOTAL").and_then(|total| total.parse().ok()).unwrap_or(0.0),
        comment: row.get("COMMENT").unwrap_or("").to_string(),
    })
}
