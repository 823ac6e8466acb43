/// Fallback chart colors, indexed by position and wrapped.
pub const PALETTE: [(&str, &str); 9] = [
    ("#dc2626", "bg-red-600"),
    ("#10b981", "bg-green-500"),
    ("#f97316", "bg-orange-500"),
    ("#eab308", "bg-yellow-500"),
    ("#a855f7", "bg-purple-500"),
    ("#ef4444", "bg-red-500"),
    ("#ec4899", "bg-pink-500"),
    ("#6366f1", "bg-indigo-500"),
    ("#6b7280", "bg-gray-500"),
];

pub fn palette_at(index: usize) -> (&'static str, &'static str) {
    PALETTE[index % PALETTE.len()]
}

/// The canonical spending categories shown in the trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendCategory {
    Housing,
    Food,
    Transportation,
    Utilities,
    Insurance,
    Medical,
    Personal,
    Recreation,
    Miscellaneous,
}

impl TrendCategory {
    pub fn all() -> &'static [TrendCategory] {
        &[
            TrendCategory::Housing,
            TrendCategory::Food,
            TrendCategory::Transportation,
            TrendCategory::Utilities,
            TrendCategory::Insurance,
            TrendCategory::Medical,
            TrendCategory::Personal,
            TrendCategory::Recreation,
            TrendCategory::Miscellaneous,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            TrendCategory::Housing => "housing",
            TrendCategory::Food => "food",
            TrendCategory::Transportation => "transportation",
            TrendCategory::Utilities => "utilities",
            TrendCategory::Insurance => "insurance",
            TrendCategory::Medical => "medical",
            TrendCategory::Personal => "personal",
            TrendCategory::Recreation => "recreation",
            TrendCategory::Miscellaneous => "miscellaneous",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendCategory::Housing => "Housing",
            TrendCategory::Food => "Food",
            TrendCategory::Transportation => "Transportation",
            TrendCategory::Utilities => "Utilities",
            TrendCategory::Insurance => "Insurance",
            TrendCategory::Medical => "Medical & Healthcare",
            TrendCategory::Personal => "Personal",
            TrendCategory::Recreation => "Recreation",
            TrendCategory::Miscellaneous => "Miscellaneous",
        }
    }

    pub fn color(&self) -> &'static str {
        let index = TrendCategory::all()
            .iter()
            .position(|c| c == self)
            .unwrap_or(PALETTE.len() - 1);
        palette_at(index).0
    }

    pub fn from_key(key: &str) -> Option<TrendCategory> {
        TrendCategory::all().iter().copied().find(|c| c.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Home,
    Car,
    Utensils,
    Cart,
    Coffee,
    Zap,
    Shield,
    Heart,
    Stethoscope,
    Scissors,
    Music,
    Bag,
    Shirt,
    Laptop,
    Smartphone,
    Fuel,
    Plane,
    Hotel,
    Gift,
    Briefcase,
    Dollar,
    Building,
    GraduationCap,
    Dumbbell,
    More,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub icon: CategoryIcon,
}

const PAYMENT: CategoryStyle = CategoryStyle {
    label: "Payment",
    color: "bg-green-100 text-green-600",
    icon: CategoryIcon::Dollar,
};

const MISCELLANEOUS: CategoryStyle = CategoryStyle {
    label: "Miscellaneous",
    color: "bg-gray-100 text-gray-600",
    icon: CategoryIcon::More,
};

/// Looks up the badge style for a stated category label. Aliases share a
/// bucket; anything unlisted lands in Miscellaneous.
pub fn style_for_label(label: &str) -> CategoryStyle {
    let (label, color, icon) = match label {
        "Housing" | "Home" => ("Housing", "bg-blue-100 text-blue-600", CategoryIcon::Home),
        "Transportation" => ("Transportation", "bg-orange-100 text-orange-600", CategoryIcon::Car),
        "Food" | "Food & Dining" => ("Food", "bg-green-100 text-green-600", CategoryIcon::Utensils),
        "Food & Drink" => ("Food & Drink", "bg-red-100 text-red-600", CategoryIcon::Utensils),
        "Groceries" => ("Groceries", "bg-emerald-100 text-emerald-600", CategoryIcon::Cart),
        "Restaurants" => ("Restaurants", "bg-lime-100 text-lime-600", CategoryIcon::Coffee),
        "Utilities" => ("Utilities", "bg-yellow-100 text-yellow-600", CategoryIcon::Zap),
        "Insurance" => ("Insurance", "bg-purple-100 text-purple-600", CategoryIcon::Shield),
        "Medical & Healthcare" => ("Medical & Healthcare", "bg-red-100 text-red-600", CategoryIcon::Heart),
        "Healthcare" => ("Healthcare", "bg-red-100 text-red-600", CategoryIcon::Stethoscope),
        "Personal" | "Personal Care" => ("Personal", "bg-pink-100 text-pink-600", CategoryIcon::Scissors),
        "Recreation and Entertainment" | "Entertainment" => {
            ("Entertainment", "bg-indigo-100 text-indigo-600", CategoryIcon::Music)
        }
        "Shopping" | "General Merchandise" => ("Shopping", "bg-violet-100 text-violet-600", CategoryIcon::Bag),
        "Clothing" => ("Clothing", "bg-fuchsia-100 text-fuchsia-600", CategoryIcon::Shirt),
        "Electronics" => ("Electronics", "bg-slate-100 text-slate-600", CategoryIcon::Laptop),
        "Technology" => ("Technology", "bg-slate-100 text-slate-600", CategoryIcon::Smartphone),
        "Gas" | "Gas & Fuel" => ("Gas", "bg-amber-100 text-amber-600", CategoryIcon::Fuel),
        "Travel" => ("Travel", "bg-sky-100 text-sky-600", CategoryIcon::Plane),
        "Vacation" => ("Vacation", "bg-cyan-100 text-cyan-600", CategoryIcon::Hotel),
        "Gifts" | "Gifts & Donations" => ("Gifts", "bg-rose-100 text-rose-600", CategoryIcon::Gift),
        "Business" => ("Business", "bg-neutral-100 text-neutral-600", CategoryIcon::Briefcase),
        "Income" => ("Income", "bg-green-200 text-green-700", CategoryIcon::Dollar),
        "Payment" | "Credit Card Payment" => return PAYMENT,
        "Bills" | "Bills & Utilities" => ("Bills", "bg-yellow-200 text-yellow-700", CategoryIcon::Building),
        "Education" => ("Education", "bg-teal-100 text-teal-600", CategoryIcon::GraduationCap),
        "Fitness" | "Health & Fitness" => ("Fitness", "bg-orange-200 text-orange-700", CategoryIcon::Dumbbell),
        _ => return MISCELLANEOUS,
    };
    CategoryStyle { label, color, icon }
}

/// Positive amounts always render as a payment, whatever the stated category.
pub fn style_for_transaction(amount: f64, category: &str) -> CategoryStyle {
    if amount > 0.0 {
        PAYMENT
    } else {
        style_for_label(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_amount_is_always_a_payment() {
        let style = style_for_transaction(2500.0, "Housing");
        assert_eq!(style.label, "Payment");
        assert_eq!(style.icon, CategoryIcon::Dollar);
    }

    #[test]
    fn expense_uses_stated_category() {
        let style = style_for_transaction(-45.8, "Gas & Fuel");
        assert_eq!(style.label, "Gas");
        assert_eq!(style.icon, CategoryIcon::Fuel);
    }

    #[test]
    fn technology_and_vacation_keep_their_own_badges() {
        let tech = style_for_label("Technology");
        assert_eq!(tech.icon, CategoryIcon::Smartphone);
        assert_eq!(tech.color, "bg-slate-100 text-slate-600");

        let vacation = style_for_label("Vacation");
        assert_eq!(vacation.icon, CategoryIcon::Hotel);
        assert_eq!(vacation.color, "bg-cyan-100 text-cyan-600");
        assert_ne!(vacation, style_for_label("Travel"));
    }

    #[test]
    fn unknown_category_falls_back_to_miscellaneous() {
        let style = style_for_transaction(-10.0, "Crypto Mining");
        assert_eq!(style, MISCELLANEOUS);
        assert_eq!(style_for_transaction(0.0, "").label, "Miscellaneous");
    }

    #[test]
    fn palette_wraps_by_position() {
        assert_eq!(palette_at(0), palette_at(PALETTE.len()));
        assert_eq!(TrendCategory::Miscellaneous.color(), "#6b7280");
        assert_eq!(TrendCategory::from_key("medical"), Some(TrendCategory::Medical));
        assert_eq!(TrendCategory::from_key("dining"), None);
    }
}
