//! Placeholder data rendered before the first successful load and whenever the
//! backend is unreachable.

use crate::categories::{palette_at, TrendCategory};
use crate::models::{
    CategoryBreakdownEntry, IncomeVsExpensesPoint, MonthlyTrendPoint, Transaction, TransactionId,
};

const TREND: [(&str, f64, [f64; 9]); 7] = [
    ("Apr", 4850.0, [1800.0, 820.0, 490.0, 400.0, 650.0, 260.0, 310.0, 250.0, 120.0]),
    ("May", 5120.0, [1850.0, 910.0, 520.0, 410.0, 650.0, 180.0, 380.0, 310.0, 110.0]),
    ("Jun", 4680.0, [1850.0, 760.0, 480.0, 390.0, 650.0, 220.0, 290.0, 180.0, 60.0]),
    ("Jul", 5340.0, [1850.0, 980.0, 610.0, 450.0, 650.0, 340.0, 290.0, 280.0, 90.0]),
    ("Aug", 4920.0, [1850.0, 840.0, 510.0, 420.0, 650.0, 190.0, 330.0, 220.0, 110.0]),
    ("Sep", 4956.0, [1850.0, 850.0, 530.0, 415.0, 650.0, 240.0, 295.0, 218.0, 108.0]),
    ("Oct", 5360.0, [1850.0, 892.0, 534.0, 425.0, 650.0, 285.0, 340.0, 278.0, 106.0]),
];

pub fn trend() -> Vec<MonthlyTrendPoint> {
    TREND
        .iter()
        .map(|(month, total, amounts)| {
            let pairs: Vec<(&str, f64)> = TrendCategory::all()
                .iter()
                .zip(amounts.iter())
                .map(|(category, amount)| (category.key(), *amount))
                .collect();
            MonthlyTrendPoint::new(month, *total, &pairs)
        })
        .collect()
}

pub fn income_vs_expenses() -> Vec<IncomeVsExpensesPoint> {
    trend()
        .into_iter()
        .map(|point| IncomeVsExpensesPoint {
            month: point.month,
            income: 6500.0,
            expenses: point.total,
        })
        .collect()
}

/// October's split with recommended shares.
pub fn category_breakdown() -> Vec<CategoryBreakdownEntry> {
    let rows: [(&str, f64, f64, f64, f64); 9] = [
        ("Housing", 1850.0, 35.0, 30.0, 1608.0),
        ("Food", 892.0, 17.0, 15.0, 804.0),
        ("Transportation", 534.0, 10.0, 15.0, 804.0),
        ("Utilities", 425.0, 8.0, 10.0, 536.0),
        ("Insurance", 650.0, 12.0, 10.0, 536.0),
        ("Medical & Healthcare", 285.0, 5.0, 5.0, 268.0),
        ("Personal", 340.0, 6.0, 5.0, 268.0),
        ("Recreation and Entertainment", 278.0, 5.0, 5.0, 268.0),
        ("Miscellaneous", 106.0, 2.0, 5.0, 268.0),
    ];
    rows.iter()
        .enumerate()
        .map(|(index, (category, amount, percent, recommended, recommended_amount))| {
            let (color, accent) = palette_at(index);
            CategoryBreakdownEntry {
                category: category.to_string(),
                amount: *amount,
                percent: *percent,
                recommended: Some(*recommended),
                recommended_amount: Some(*recommended_amount),
                color: Some(color.to_string()),
                accent_class: Some(accent.to_string()),
            }
        })
        .collect()
}

/// Even split used by the pie chart when there is nothing to show.
pub fn placeholder_breakdown() -> Vec<CategoryBreakdownEntry> {
    TrendCategory::all()
        .iter()
        .enumerate()
        .map(|(index, category)| CategoryBreakdownEntry {
            category: category.label().to_string(),
            amount: 0.0,
            percent: 100.0 / 9.0,
            recommended: None,
            recommended_amount: None,
            color: Some(palette_at(index).0.to_string()),
            accent_class: None,
        })
        .collect()
}

pub fn transactions() -> Vec<Transaction> {
    let rows: [(&str, &str, &str, f64); 14] = [
        ("Rent Payment", "Housing", "2025-10-26", -1850.0),
        ("Grocery Store", "Food", "2025-10-25", -156.42),
        ("Auto Insurance", "Insurance", "2025-10-25", -325.0),
        ("Gas Station", "Transportation", "2025-10-24", -45.8),
        ("Electric Bill", "Utilities", "2025-10-23", -125.0),
        ("Restaurant", "Food", "2025-10-23", -68.5),
        ("Gym Membership", "Personal", "2025-10-22", -59.99),
        ("Concert Tickets", "Recreation and Entertainment", "2025-10-22", -150.0),
        ("Doctor Visit Copay", "Medical & Healthcare", "2025-10-21", -35.0),
        ("Internet Bill", "Utilities", "2025-10-20", -89.99),
        ("Haircut", "Personal", "2025-10-20", -45.0),
        ("Uber Ride", "Transportation", "2025-10-19", -28.5),
        ("Streaming Services", "Recreation and Entertainment", "2025-10-18", -24.99),
        ("Coffee Shop", "Food", "2025-10-18", -12.8),
    ];
    rows.iter()
        .enumerate()
        .map(|(index, (name, category, date, amount))| Transaction {
            id: TransactionId::Number(index as i64 + 1),
            name: Some(name.to_string()),
            description: None,
            merchant: None,
            category: Some(category.to_string()),
            amount: *amount,
            date: date.to_string(),
            kind: Some("expense".to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_covers_seven_months() {
        let trend = trend();
        assert_eq!(trend.len(), 7);
        let oct = trend.last().unwrap();
        assert_eq!(oct.month, "Oct");
        assert_eq!(oct.total, 5360.0);
        assert_eq!(oct.amount("housing"), 1850.0);
    }

    #[test]
    fn placeholder_covers_every_canonical_category() {
        let placeholder = placeholder_breakdown();
        assert_eq!(placeholder.len(), TrendCategory::all().len());
        assert!(placeholder.iter().all(|entry| entry.amount == 0.0));
    }
}
