use std::sync::LazyLock;

use crate::types::{Category, MenuItem};

/// Category labels shown to the user, in display order.
pub const CATEGORY_LABELS: [&str; 3] = ["Tất Cả", "Đồ Uống", "Đồ Nướng"];

fn entry(
    id: &str,
    name: &str,
    price: u64,
    category: Category,
    image: &str,
    description: &str,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        category,
        image: image.to_string(),
        description: Some(description.to_string()),
    }
}

/// The fixed menu. Loaded once per process, never mutated.
pub static MENU_ITEMS: LazyLock<Vec<MenuItem>> = LazyLock::new(|| {
    vec![
        // Drinks
        entry(
            "cacao",
            "Cacao",
            25_000,
            Category::Drink,
            "🍫",
            "Cacao nóng/đá thơm ngon",
        ),
        entry(
            "quat-em-di",
            "Quất Em Đi",
            15_000,
            Category::Drink,
            "🍋",
            "Nước quất tươi mát",
        ),
        entry(
            "phong-xa",
            "Phóng Xạ",
            20_000,
            Category::Drink,
            "☢️",
            "Thức uống phóng xạ đặc biệt",
        ),
        entry(
            "bi-dao",
            "Bí Đao",
            15_000,
            Category::Drink,
            "🥒",
            "Nước bí đao thanh mát",
        ),
        entry(
            "hong-tra-sua",
            "Hồng Trà Sữa",
            20_000,
            Category::Drink,
            "🥛",
            "Hồng trà sữa thơm béo",
        ),
        entry(
            "khoai-mon-bong-benh",
            "Khoai Môn Bồng Bềnh",
            20_000,
            Category::Drink,
            "🍠",
            "Thức uống khoai môn béo ngậy",
        ),
        // Skewers
        entry("xien-thit", "Xiên Thịt", 5_000, Category::Snack, "🍢", "Xiên thịt"),
        entry(
            "xien-xuc-xich",
            "XXX",
            10_000,
            Category::Snack,
            "🌭",
            "Xiên xúc xích",
        ),
        entry(
            "xien-cha-muc",
            "Xiên Chả Mực",
            5_000,
            Category::Snack,
            "🦑",
            "Xiên chả mực",
        ),
    ]
});

pub fn find(id: &str) -> Option<&'static MenuItem> {
    MENU_ITEMS.iter().find(|item| item.id == id)
}

/// Filter by display label. "Tất Cả" returns everything; an unknown label
/// matches nothing.
pub fn by_category(label: &str) -> Vec<&'static MenuItem> {
    if label == "Tất Cả" {
        return MENU_ITEMS.iter().collect();
    }

    let category = match label {
        "Đồ Uống" => Category::Drink,
        "Đồ Nướng" => Category::Snack,
        _ => return Vec::new(),
    };

    MENU_ITEMS
        .iter()
        .filter(|item| item.category == category)
        .collect()
}

/// Render a VND amount with vi-VN thousands grouping, e.g. `45.000đ`.
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    grouped.push('đ');
    grouped
}
