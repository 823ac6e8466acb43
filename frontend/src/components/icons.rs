use yew::prelude::*;

use crate::categories::CategoryIcon;

fn icon_base(path: &'static str, class: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class={class}>
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_bell() -> Html {
    icon_base("M18 8a6 6 0 10-12 0c0 7-3 7-3 7h18s-3 0-3-7", "text-foreground")
}
pub fn icon_moon() -> Html {
    icon_base("M21 12.79A9 9 0 1111.21 3a7 7 0 109.79 9.79z", "w-4 h-4 text-muted-foreground")
}
pub fn icon_sun() -> Html {
    icon_base("M12 3v2M12 19v2M5.6 5.6l1.4 1.4M17 17l1.4 1.4M3 12h2M19 12h2M5.6 18.4L7 17M17 7l1.4-1.4M12 8a4 4 0 100 8 4 4 0 000-8z", "w-4 h-4 text-muted-foreground")
}
pub fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9", "w-4 h-4 mr-2")
}
pub fn icon_upload() -> Html {
    icon_base("M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M17 8l-5-5-5 5M12 3v12", "w-4 h-4 mr-2")
}
pub fn icon_alert() -> Html {
    icon_base("M12 8v4M12 16h.01M12 2a10 10 0 100 20 10 10 0 000-20z", "w-4 h-4")
}
pub fn icon_lock() -> Html {
    icon_base("M5 11h14v10H5zM8 11V7a4 4 0 018 0v4", "w-8 h-8 text-white")
}
pub fn icon_bot() -> Html {
    icon_base("M12 8V4H8M4 8h16v12H4zM2 14h2M20 14h2M9 13v2M15 13v2", "w-5 h-5")
}
pub fn icon_user() -> Html {
    icon_base("M20 21v-2a4 4 0 00-4-4H8a4 4 0 00-4 4v2M12 3a4 4 0 100 8 4 4 0 000-8z", "w-5 h-5 text-white")
}
pub fn icon_send() -> Html {
    icon_base("M22 2L11 13M22 2l-7 20-4-9-9-4 20-7z", "w-4 h-4")
}
pub fn icon_chevron_left() -> Html {
    icon_base("M15 18l-6-6 6-6", "w-4 h-4")
}
pub fn icon_chevron_right() -> Html {
    icon_base("M9 18l6-6-6-6", "w-4 h-4")
}
pub fn icon_trending_down() -> Html {
    icon_base("M23 18l-9.5-9.5-5 5L1 6M17 18h6v-6", "w-5 h-5 text-red-600")
}
pub fn icon_dollar() -> Html {
    icon_base("M12 1v22M17 5H9.5a3.5 3.5 0 000 7h5a3.5 3.5 0 010 7H6", "w-5 h-5 text-red-600")
}
pub fn icon_calendar() -> Html {
    icon_base("M3 4h18v18H3zM16 2v4M8 2v4M3 10h18", "w-5 h-5 text-red-600")
}

pub fn category_icon(icon: CategoryIcon) -> Html {
    let path = match icon {
        CategoryIcon::Home => "M3 9l9-7 9 7v11a2 2 0 01-2 2H5a2 2 0 01-2-2zM9 22V12h6v10",
        CategoryIcon::Car => "M5 17h14M5 17a2 2 0 104 0M15 17a2 2 0 104 0M3 13l2-6h14l2 6v4H3z",
        CategoryIcon::Utensils => "M3 2v7a2 2 0 002 2h2a2 2 0 002-2V2M6 2v20M21 15V2a5 5 0 00-5 5v6h5zM21 15v7",
        CategoryIcon::Cart => "M1 1h4l2.7 13.4a2 2 0 002 1.6h9.7a2 2 0 002-1.6L23 6H6M9 21h.01M20 21h.01",
        CategoryIcon::Coffee => "M18 8h1a4 4 0 010 8h-1M2 8h16v9a4 4 0 01-4 4H6a4 4 0 01-4-4zM6 1v3M10 1v3M14 1v3",
        CategoryIcon::Zap => "M13 2L3 14h9l-1 8 10-12h-9l1-8z",
        CategoryIcon::Shield => "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
        CategoryIcon::Heart => "M20.8 4.6a5.5 5.5 0 00-7.8 0L12 5.7l-1-1.1a5.5 5.5 0 00-7.8 7.8l1 1.1L12 21l7.8-7.5 1-1.1a5.5 5.5 0 000-7.8z",
        CategoryIcon::Stethoscope => "M4.8 2H3v6a6 6 0 0012 0V2h-1.8M9 14v2a6 6 0 0012 0v-3M20 10a2 2 0 100 4 2 2 0 000-4z",
        CategoryIcon::Scissors => "M6 3a3 3 0 100 6 3 3 0 000-6zM6 15a3 3 0 100 6 3 3 0 000-6zM20 4L8.1 15.9M14.5 14.5L20 20M8.1 8.1L12 12",
        CategoryIcon::Music => "M9 18V5l12-2v13M6 15a3 3 0 100 6 3 3 0 000-6zM18 13a3 3 0 100 6 3 3 0 000-6z",
        CategoryIcon::Bag => "M6 2L3 6v14a2 2 0 002 2h14a2 2 0 002-2V6l-3-4zM3 6h18M16 10a4 4 0 01-8 0",
        CategoryIcon::Shirt => "M20.4 3.5L16 2a4 4 0 01-8 0L3.6 3.5 2 9l4 1v12h12V10l4-1z",
        CategoryIcon::Laptop => "M4 4h16v12H4zM2 20h20",
        CategoryIcon::Smartphone => "M7 2h10a2 2 0 012 2v16a2 2 0 01-2 2H7a2 2 0 01-2-2V4a2 2 0 012-2zM12 18h.01",
        CategoryIcon::Fuel => "M3 22V4a2 2 0 012-2h8a2 2 0 012 2v18M3 22h12M15 10h2a2 2 0 012 2v5a2 2 0 004 0V9l-4-4",
        CategoryIcon::Plane => "M17.8 19.2L16 11l3.5-3.5a2.1 2.1 0 00-3-3L13 8 4.8 6.2 3 8l7 4-3 3H4l-1 1 4 2 2 4 1-1v-3l3-3 4 7z",
        CategoryIcon::Hotel => "M3 21V7a2 2 0 012-2h14a2 2 0 012 2v14M3 21h18M7 9h2M11 9h2M15 9h2M7 13h2M11 13h2M15 13h2M10 21v-4h4v4",
        CategoryIcon::Gift => "M20 12v10H4V12M2 7h20v5H2zM12 22V7M12 7H7.5a2.5 2.5 0 010-5C11 2 12 7 12 7zM12 7h4.5a2.5 2.5 0 000-5C13 2 12 7 12 7z",
        CategoryIcon::Briefcase => "M2 7h20v14H2zM16 21V5a2 2 0 00-2-2h-4a2 2 0 00-2 2v16",
        CategoryIcon::Dollar => "M12 1v22M17 5H9.5a3.5 3.5 0 000 7h5a3.5 3.5 0 010 7H6",
        CategoryIcon::Building => "M4 2h16v20H4zM9 22v-4h6v4M8 6h.01M16 6h.01M12 6h.01M8 10h.01M16 10h.01M12 10h.01",
        CategoryIcon::GraduationCap => "M22 10L12 5 2 10l10 5 10-5zM6 12v5c3 3 9 3 12 0v-5",
        CategoryIcon::Dumbbell => "M6.5 6.5l11 11M21 21l-1-1M3 3l1 1M18 22l4-4M2 6l4-4M3 10l7-7M14 21l7-7",
        CategoryIcon::More => "M12 12h.01M19 12h.01M5 12h.01",
    };
    icon_base(path, "w-5 h-5")
}
