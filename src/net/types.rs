//! Wire DTOs and response normalization for the admin REST API.
//!
//! DESIGN
//! ======
//! The backend emits several spellings per field (Vietnamese column names,
//! snake_case aliases, bare vs. wrapped collections), so records are not
//! deserialized with rigid serde structs. Instead each resource has one
//! normalizer that walks the loosely-typed payload with an explicit
//! alias-priority list, isolating every panel from backend naming drift.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde_json::Value;

use crate::state::session::Identity;
use crate::util::grades::{letter_from_10, to_rate};

/// First present, non-null value among `keys`.
pub fn pick<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    for key in keys {
        if let Some(found) = value.get(key) {
            if !found.is_null() {
                return Some(found);
            }
        }
    }
    None
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// First present value among `keys`, rendered as a display string.
pub fn pick_string(value: &Value, keys: &[&str]) -> Option<String> {
    pick(value, keys).and_then(value_to_string)
}

/// First present value among `keys`, coerced to a float (numeric strings
/// included — the importer round-trips numbers through spreadsheets).
pub fn pick_f64(value: &Value, keys: &[&str]) -> Option<f64> {
    pick(value, keys).and_then(value_to_f64)
}

/// First present value among `keys`, coerced to an integer.
pub fn pick_i64(value: &Value, keys: &[&str]) -> Option<i64> {
    #[allow(clippy::cast_possible_truncation)]
    pick_f64(value, keys).map(|v| v.round() as i64)
}

/// First present value among `keys` as a bool; JSON `0`/`1` count.
pub fn pick_bool(value: &Value, keys: &[&str]) -> Option<bool> {
    match pick(value, keys)? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => Some(n.as_f64().is_some_and(|v| v != 0.0)),
        Value::String(s) => Some(!s.is_empty() && s != "0" && s != "false"),
        _ => None,
    }
}

/// Unwrap a collection that may arrive as `{items: [...]}`, `{data: [...]}`
/// or a bare array; anything else is an empty list.
pub fn items_of(value: &Value) -> Vec<Value> {
    if let Some(items) = value.get("items").and_then(Value::as_array) {
        return items.clone();
    }
    if let Some(items) = value.get("data").and_then(Value::as_array) {
        return items.clone();
    }
    value.as_array().cloned().unwrap_or_default()
}

/// `—` for absent counts, the number otherwise.
pub fn count_label(value: Option<i64>) -> String {
    value.map_or_else(|| "—".to_owned(), |v| v.to_string())
}

/// A class (cohort) catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassRecord {
    pub code: String,
    pub name: String,
}

impl ClassRecord {
    pub fn from_value(value: &Value) -> Option<Self> {
        let code = pick_string(value, &["MaLop", "code", "ma", "id"])?;
        let name = pick_string(value, &["TenLop", "name"]).unwrap_or_else(|| code.clone());
        Some(Self { code, name })
    }

    pub fn list(data: &Value) -> Vec<Self> {
        items_of(data).iter().filter_map(Self::from_value).collect()
    }

    /// `CODE - Name` label for filter dropdowns.
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

/// A degree-program catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MajorRecord {
    pub code: String,
    pub name: String,
}

impl MajorRecord {
    pub fn from_value(value: &Value) -> Option<Self> {
        let code = pick_string(value, &["MaNganh", "code"])?;
        let name = pick_string(value, &["TenNganh", "name"]).unwrap_or_default();
        Some(Self { code, name })
    }

    pub fn list(data: &Value) -> Vec<Self> {
        items_of(data).iter().filter_map(Self::from_value).collect()
    }
}

/// A course catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseRecord {
    pub code: String,
    pub name: String,
    pub credits: Option<i64>,
    /// Whether the course counts toward the cumulative GPA; defaults on.
    pub counts_toward_gpa: bool,
}

impl CourseRecord {
    pub fn from_value(value: &Value) -> Option<Self> {
        let code = pick_string(value, &["MaHP", "code"])?;
        Some(Self {
            code,
            name: pick_string(value, &["TenHP", "name"]).unwrap_or_default(),
            credits: pick_i64(value, &["SoTinChi"]),
            counts_toward_gpa: pick_bool(value, &["TinhDiemTichLuy"]).unwrap_or(true),
        })
    }

    pub fn list(data: &Value) -> Vec<Self> {
        items_of(data).iter().filter_map(Self::from_value).collect()
    }
}

/// A student row in the admin list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub class_code: String,
    pub email: String,
}

impl StudentRecord {
    pub fn from_value(value: &Value) -> Option<Self> {
        let id = pick_string(value, &["MaSV", "ma", "id"])?;
        Some(Self {
            id,
            name: pick_string(value, &["HoTen", "ten", "name"]).unwrap_or_default(),
            class_code: pick_string(value, &["Lop", "MaLop", "class"]).unwrap_or_default(),
            email: pick_string(value, &["Email", "email"]).unwrap_or_default(),
        })
    }

    pub fn list(data: &Value) -> Vec<Self> {
        items_of(data).iter().filter_map(Self::from_value).collect()
    }
}

/// One transcript line for the student detail dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptRow {
    pub course_code: String,
    pub course_name: String,
    pub credits: String,
    /// 10-point score exactly as the server sent it (may be empty).
    pub score: String,
    /// Letter grade; falls back to the 10-point mapping when absent.
    pub letter: String,
    pub result: String,
}

impl TranscriptRow {
    pub fn from_value(value: &Value) -> Self {
        let score_value = pick_f64(value, &["DiemHe10", "diem10"]);
        let letter = pick_string(value, &["DiemChu", "diem_chu"])
            .unwrap_or_else(|| letter_from_10(score_value).to_owned());
        Self {
            course_code: pick_string(value, &["MaHP"]).unwrap_or_default(),
            course_name: pick_string(value, &["TenHP"]).unwrap_or_default(),
            credits: pick_string(value, &["SoTinChi"]).unwrap_or_default(),
            score: pick_string(value, &["DiemHe10", "diem10"]).unwrap_or_default(),
            letter,
            result: pick_string(value, &["KetQua", "ket_qua"]).unwrap_or_default(),
        }
    }

    pub fn list(data: &Value) -> Vec<Self> {
        items_of(data).iter().map(Self::from_value).collect()
    }
}

/// A console account row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub role: String,
}

impl UserRecord {
    pub fn from_value(value: &Value) -> Self {
        Self {
            username: pick_string(value, &["TenDangNhap", "username"]).unwrap_or_default(),
            email: pick_string(value, &["Email", "email"]).unwrap_or_default(),
            role: pick_string(value, &["TenVaiTro", "role"]).unwrap_or_default(),
        }
    }

    pub fn list(data: &Value) -> Vec<Self> {
        items_of(data).iter().map(Self::from_value).collect()
    }
}

/// An academic-warning rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WarningRuleRecord {
    pub id: String,
    /// Whatever the server calls the rule: code, expression or name.
    pub label: String,
}

impl WarningRuleRecord {
    pub fn from_value(value: &Value) -> Self {
        Self {
            id: pick_string(value, &["Id", "id"]).unwrap_or_default(),
            label: pick_string(value, &["Code", "Expr", "Name", "expr"]).unwrap_or_default(),
        }
    }

    pub fn list(data: &Value) -> Vec<Self> {
        items_of(data).iter().map(Self::from_value).collect()
    }
}

/// A per-student warning occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WarningCaseRecord {
    pub student_id: String,
    /// Rule code driving severity and phrasing; may be empty.
    pub code: String,
    /// Badge text: the code, or the rule name when the code is absent.
    pub display_code: String,
    pub threshold: String,
    pub value: String,
    pub at: String,
}

impl WarningCaseRecord {
    pub fn from_value(value: &Value) -> Self {
        let code = pick_string(value, &["RuleCode"]).unwrap_or_default();
        let display_code = if code.is_empty() {
            pick_string(value, &["RuleName"]).unwrap_or_default()
        } else {
            code.clone()
        };
        Self {
            student_id: pick_string(value, &["MaSV"]).unwrap_or_default(),
            code,
            display_code,
            threshold: pick_string(value, &["Threshold"]).unwrap_or_default(),
            value: pick_string(value, &["Value"]).unwrap_or_default(),
            at: pick_string(value, &["At"]).unwrap_or_default(),
        }
    }

    pub fn list(data: &Value) -> Vec<Self> {
        items_of(data).iter().map(Self::from_value).collect()
    }
}

/// One row of the import audit log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportLogRecord {
    pub at: String,
    pub actor: String,
    pub endpoint: String,
    pub filename: String,
    pub summary: String,
}

impl ImportLogRecord {
    pub fn from_value(value: &Value) -> Self {
        Self {
            at: pick_string(value, &["At", "Time"]).unwrap_or_default(),
            actor: pick_string(value, &["Actor", "User"]).unwrap_or_default(),
            endpoint: pick_string(value, &["Endpoint", "Action"]).unwrap_or_default(),
            filename: pick_string(value, &["Filename"]).unwrap_or_default(),
            summary: pick_string(value, &["Summary", "Note"]).unwrap_or_default(),
        }
    }

    pub fn list(data: &Value) -> Vec<Self> {
        items_of(data).iter().map(Self::from_value).collect()
    }
}

/// Dashboard headline numbers, normalized from the `kpi` wrapper or a flat
/// payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardKpis {
    pub total_students: i64,
    pub total_courses: i64,
    /// Pass rate as a 0..=1 fraction.
    pub pass_rate: f64,
}

impl DashboardKpis {
    pub fn from_value(data: &Value) -> Self {
        let kpi = data.get("kpi").filter(|v| v.is_object()).unwrap_or(data);
        Self {
            total_students: pick_i64(kpi, &["total_students", "TongSinhVien"]).unwrap_or(0),
            total_courses: pick_i64(kpi, &["total_courses", "TongHocPhan"]).unwrap_or(0),
            pass_rate: to_rate(pick_f64(kpi, &["pass_rate", "TyLeQua"])),
        }
    }
}

/// Outcome counters reported by an import run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub total_rows: Option<i64>,
    pub created: Option<i64>,
    pub updated: Option<i64>,
    pub skipped: Option<i64>,
    pub warning_count: usize,
}

impl ImportSummary {
    pub fn from_value(data: &Value) -> Self {
        let summary = pick(data, &["summary", "Summary"]).unwrap_or(data);
        let warning_count = summary
            .get("warnings")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        Self {
            total_rows: pick_i64(summary, &["total_rows"]),
            created: pick_i64(summary, &["created"]),
            updated: pick_i64(summary, &["updated"]),
            skipped: pick_i64(summary, &["skipped"]),
            warning_count,
        }
    }
}

/// Full import response: summary counters, bounded preview rows, warnings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportReport {
    pub summary: ImportSummary,
    /// Raw preview records; columns are derived from the first row.
    pub preview: Vec<Value>,
    pub warnings: Vec<String>,
}

impl ImportReport {
    pub fn from_value(data: &Value) -> Self {
        let preview = pick(data, &["preview", "rows", "Records"])
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let warnings = data
            .get("warnings")
            .and_then(Value::as_array)
            .map(|list| list.iter().filter_map(value_to_string).collect())
            .unwrap_or_default();
        Self {
            summary: ImportSummary::from_value(data),
            preview,
            warnings,
        }
    }
}

/// Column headers for the preview table: the first record's keys, in the
/// order the server sent them.
pub fn preview_columns(rows: &[Value]) -> Vec<String> {
    rows.first()
        .and_then(Value::as_object)
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default()
}

/// Cell text for a preview row; absent and null values render empty.
pub fn preview_cell(row: &Value, column: &str) -> String {
    match row.get(column) {
        None | Some(Value::Null) => String::new(),
        Some(v) => value_to_string(v).unwrap_or_else(|| v.to_string()),
    }
}

/// One editable configuration entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub description: String,
    pub value: String,
}

/// Normalize `{values: {...}, meta: {...}}` into ordered entries.
pub fn config_entries(data: &Value) -> Vec<ConfigEntry> {
    let Some(values) = data.get("values").and_then(Value::as_object) else {
        return Vec::new();
    };
    let meta = data.get("meta").and_then(Value::as_object);
    values
        .iter()
        .map(|(key, value)| ConfigEntry {
            key: key.clone(),
            description: meta
                .and_then(|m| m.get(key))
                .and_then(value_to_string)
                .unwrap_or_default(),
            value: value_to_string(value).unwrap_or_default(),
        })
        .collect()
}

/// Issued token from a login response, wherever the deployment put it.
pub fn extract_login_token(data: &Value) -> Option<String> {
    if let Some(token) = pick_string(data, &["access_token", "token", "jwt"]) {
        if !token.is_empty() {
            return Some(token);
        }
    }
    data.get("data")
        .and_then(|inner| pick_string(inner, &["access_token"]))
        .filter(|token| !token.is_empty())
}

/// Identity from a login response body, with the submitted username as the
/// fallback when the server omits a user object.
pub fn login_identity(data: &Value, fallback_username: &str) -> Identity {
    let user = data.get("user").filter(|v| v.is_object());
    Identity {
        username: user
            .and_then(|u| pick_string(u, &["username", "TenDangNhap"]))
            .unwrap_or_else(|| fallback_username.to_owned()),
        role: user.and_then(|u| pick_string(u, &["role", "TenVaiTro"])),
    }
}

/// Identity from the `/api/auth/me` response (`{user: {...}}` or flat).
pub fn me_identity(data: &Value) -> Identity {
    let user = data.get("user").filter(|v| v.is_object()).unwrap_or(data);
    Identity {
        username: pick_string(user, &["username", "TenDangNhap"]).unwrap_or_else(|| "—".to_owned()),
        role: pick_string(user, &["role", "TenVaiTro"]).or_else(|| pick_string(data, &["role"])),
    }
}
