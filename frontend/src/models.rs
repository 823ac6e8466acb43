use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Numbers arrive as JSON numbers, numeric strings, `null` or not at all.
/// Anything that is not a usable number reads as zero.
fn number_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionId {
    Number(i64),
    Text(String),
}

impl Default for TransactionId {
    fn default() -> Self {
        TransactionId::Text(String::new())
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionId::Number(n) => write!(f, "{}", n),
            TransactionId::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: TransactionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub amount: f64,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub date: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Transaction {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.description.as_deref())
            .or(self.merchant.as_deref())
            .unwrap_or("Transaction")
    }

    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("Miscellaneous")
    }

    pub fn is_payment(&self) -> bool {
        self.amount > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAnalyticsEntry {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopCategory {
    #[serde(deserialize_with = "text_or_empty")]
    pub name: String,
    #[serde(deserialize_with = "number_or_zero")]
    pub amount: f64,
    #[serde(deserialize_with = "number_or_zero")]
    pub percent: f64,
}

impl Default for TopCategory {
    fn default() -> Self {
        TopCategory {
            name: "N/A".to_string(),
            amount: 0.0,
            percent: 0.0,
        }
    }
}

/// Any field the backend leaves out reads as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlySummary {
    #[serde(deserialize_with = "number_or_zero")]
    pub total_spending: f64,
    #[serde(deserialize_with = "number_or_zero")]
    pub last_month_total: f64,
    #[serde(deserialize_with = "number_or_zero")]
    pub difference_amount: f64,
    #[serde(deserialize_with = "number_or_zero")]
    pub difference_percent: f64,
    #[serde(deserialize_with = "number_or_zero")]
    pub daily_average: f64,
    #[serde(deserialize_with = "number_or_zero")]
    pub daily_average_change: f64,
    pub top_category: TopCategory,
}

/// One month of the spending trend. Category amounts live in an open map so
/// the backend can add categories without a client release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub month: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub total: f64,
    #[serde(flatten)]
    pub categories: BTreeMap<String, Value>,
}

impl MonthlyTrendPoint {
    pub fn new(month: &str, total: f64, amounts: &[(&str, f64)]) -> Self {
        MonthlyTrendPoint {
            month: month.to_string(),
            total,
            categories: amounts
                .iter()
                .map(|(key, amount)| (key.to_string(), Value::from(*amount)))
                .collect(),
        }
    }

    /// Missing and non-numeric keys read as zero.
    pub fn amount(&self, key: &str) -> f64 {
        self.categories
            .get(key)
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeVsExpensesPoint {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub month: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub income: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub expenses: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdownEntry {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub amount: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_class: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAnalyticsResponse {
    #[serde(default)]
    pub summary: Option<MonthlySummary>,
    #[serde(default)]
    pub trend: Option<Vec<MonthlyTrendPoint>>,
    #[serde(default)]
    pub income_vs_expenses: Option<Vec<IncomeVsExpensesPoint>>,
    #[serde(default)]
    pub category_breakdown: Option<Vec<CategoryBreakdownEntry>>,
}

/// Shape shared by `/upload` and `/chat` replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub conversation_history: Vec<ChatMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_in_order() {
        let mut tx: Transaction = serde_json::from_str(r#"{"id": 7, "amount": -12.5, "date": "2025-10-01"}"#).unwrap();
        assert_eq!(tx.display_name(), "Transaction");
        assert_eq!(tx.category_label(), "Miscellaneous");

        tx.merchant = Some("Corner Shop".to_string());
        assert_eq!(tx.display_name(), "Corner Shop");
        tx.description = Some("POS 1234".to_string());
        assert_eq!(tx.display_name(), "POS 1234");
        tx.name = Some("Groceries run".to_string());
        assert_eq!(tx.display_name(), "Groceries run");
    }

    #[test]
    fn transaction_accepts_string_ids_and_type_tag() {
        let tx: Transaction = serde_json::from_str(
            r#"{"id": "abc-1", "name": "Salary", "amount": 3200, "date": "2025-10-01", "type": "income"}"#,
        )
        .unwrap();
        assert_eq!(tx.id, TransactionId::Text("abc-1".to_string()));
        assert_eq!(tx.kind.as_deref(), Some("income"));
        assert!(tx.is_payment());
    }

    #[test]
    fn monthly_response_reads_camel_case_payload() {
        let raw = r##"{
            "summary": {
                "totalSpending": 5360, "lastMonthTotal": 4956, "differenceAmount": 404,
                "differencePercent": 8.2, "dailyAverage": 172.9, "dailyAverageChange": 5.1,
                "topCategory": {"name": "Housing", "amount": 1850, "percent": 34.5}
            },
            "trend": [{"month": "Oct", "total": 5360, "housing": 1850, "label": "x"}],
            "categoryBreakdown": [{"category": "Food", "amount": 892, "percent": 0.17, "recommendedAmount": 804}]
        }"##;
        let parsed: MonthlyAnalyticsResponse = serde_json::from_str(raw).unwrap();

        let summary = parsed.summary.unwrap();
        assert_eq!(summary.top_category.name, "Housing");
        assert_eq!(summary.last_month_total, 4956.0);

        let trend = parsed.trend.unwrap();
        assert_eq!(trend[0].amount("housing"), 1850.0);
        assert_eq!(trend[0].amount("label"), 0.0);
        assert_eq!(trend[0].amount("food"), 0.0);

        let breakdown = parsed.category_breakdown.unwrap();
        assert_eq!(breakdown[0].recommended_amount, Some(804.0));
        assert_eq!(breakdown[0].recommended, None);
        assert!(parsed.income_vs_expenses.is_none());
    }

    #[test]
    fn partial_summary_fills_missing_figures_with_zero() {
        let raw = r#"{
            "summary": {"totalSpending": 5360, "lastMonthTotal": null, "dailyAverage": "172.5"},
            "incomeVsExpenses": [{"month": "Oct", "income": null}]
        }"#;
        let parsed: MonthlyAnalyticsResponse = serde_json::from_str(raw).unwrap();

        let summary = parsed.summary.unwrap();
        assert_eq!(summary.total_spending, 5360.0);
        assert_eq!(summary.last_month_total, 0.0);
        assert_eq!(summary.daily_average, 172.5);
        assert_eq!(summary.daily_average_change, 0.0);
        assert_eq!(summary.top_category, TopCategory::default());
        assert_eq!(summary.top_category.name, "N/A");

        let points = parsed.income_vs_expenses.unwrap();
        assert_eq!(points[0].income, 0.0);
        assert_eq!(points[0].expenses, 0.0);
    }

    #[test]
    fn transactions_tolerate_null_and_missing_fields() {
        let raw = r#"[
            {"id": 1, "name": "Coffee", "amount": null, "date": "2025-10-01"},
            {"name": "Refund", "amount": "12.50", "date": null},
            {"id": "x-3", "category": "Food"}
        ]"#;
        let parsed: Vec<Transaction> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].amount, 0.0);
        assert_eq!(parsed[1].id, TransactionId::default());
        assert_eq!(parsed[1].amount, 12.5);
        assert_eq!(parsed[1].date, "");
        assert_eq!(parsed[2].amount, 0.0);
        assert_eq!(parsed[2].display_name(), "Transaction");
    }

    #[test]
    fn daily_and_trend_entries_tolerate_nulls() {
        let daily: Vec<DailyAnalyticsEntry> =
            serde_json::from_str(r#"[{"date": "2025-10-01", "total": null}, {"total": 42}]"#).unwrap();
        assert_eq!(daily[0].total, 0.0);
        assert_eq!(daily[1].date, "");

        let trend: Vec<MonthlyTrendPoint> =
            serde_json::from_str(r#"[{"month": "Oct", "total": null, "food": 120}]"#).unwrap();
        assert_eq!(trend[0].total, 0.0);
        assert_eq!(trend[0].amount("food"), 120.0);
    }

    #[test]
    fn chat_request_uses_snake_case_history_field() {
        let body = ChatRequest {
            message: "How much on food?".to_string(),
            conversation_history: vec![ChatMessage {
                role: ChatRole::Assistant,
                content: "Hi".to_string(),
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["conversation_history"][0]["role"], "assistant");
    }
}
