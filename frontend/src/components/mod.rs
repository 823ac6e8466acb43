mod category_breakdown;
mod category_pie;
mod chat_bot;
mod dashboard_page;
mod icons;
mod income_vs_expenses;
mod login;
mod monthly_overview;
mod needs_wants;
mod notice;
mod spending_chart;
mod transaction_list;
mod upload_button;

pub use dashboard_page::DashboardPage;
pub use login::LoginScreen;
