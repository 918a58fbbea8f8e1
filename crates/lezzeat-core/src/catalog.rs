//! Menu catalog
//!
//! The menu is a fixed mapping from display section to items. It is built
//! once and never changes while the storefront runs.

use crate::types::{Category, ItemId, MenuItem};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display section of the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuSection {
    /// Horizontal carousel at the top
    TodaysSpecials,
    /// Horizontal carousel of everyday items
    AllItems,
    /// Drinks
    Beverages,
    /// Sweets
    Desserts,
    /// Full meals
    Meals,
    /// Snacks
    Snacks,
}

impl MenuSection {
    /// Sections in display order
    pub const ALL: [Self; 6] = [
        Self::TodaysSpecials,
        Self::AllItems,
        Self::Beverages,
        Self::Desserts,
        Self::Meals,
        Self::Snacks,
    ];

    /// Section heading
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::TodaysSpecials => "Today's Specials",
            Self::AllItems => "All Items",
            Self::Beverages => "Beverages",
            Self::Desserts => "Desserts",
            Self::Meals => "Meals",
            Self::Snacks => "Snacks",
        }
    }

    /// Short key used on the command line
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::TodaysSpecials => "specials",
            Self::AllItems => "all",
            Self::Beverages => "beverages",
            Self::Desserts => "desserts",
            Self::Meals => "meals",
            Self::Snacks => "snacks",
        }
    }

    /// Parse a [`Self::key`]
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Whether the section scrolls sideways
    #[inline]
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::TodaysSpecials | Self::AllItems)
    }
}

impl fmt::Display for MenuSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Menu grouped by section
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    sections: IndexMap<MenuSection, Vec<MenuItem>>,
}

static BUILTIN: Lazy<Catalog> = Lazy::new(Catalog::canteen_menu);

impl Catalog {
    /// Create catalog from sections
    #[must_use]
    pub fn new(sections: impl IntoIterator<Item = (MenuSection, Vec<MenuItem>)>) -> Self {
        Self {
            sections: sections.into_iter().collect(),
        }
    }

    /// The canteen's built-in menu
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Sections in display order
    pub fn sections(&self) -> impl Iterator<Item = (MenuSection, &[MenuItem])> {
        self.sections.iter().map(|(s, items)| (*s, items.as_slice()))
    }

    /// Items of one section
    #[must_use]
    pub fn section(&self, section: MenuSection) -> &[MenuItem] {
        self.sections.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All items in display order
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.sections.values().flatten()
    }

    /// Look up an item by ID
    #[must_use]
    pub fn find(&self, id: ItemId) -> Option<&MenuItem> {
        self.items().find(|item| item.id == id)
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// Whether the catalog has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn canteen_menu() -> Self {
        const PHOTO: &str = "https://images.pexels.com/photos";
        let item = |id: u32, name: &str, price: i64, category: Category, photo: &str| {
            MenuItem::new(id, name, price, category)
                .with_image(format!("{PHOTO}/{photo}/pexels-photo-{photo}.jpeg"))
        };

        Self::new([
            (
                MenuSection::TodaysSpecials,
                vec![
                    item(1, "Special Thali", 85, Category::Special, "1099680"),
                    item(2, "Butter Chicken", 120, Category::Special, "2474661"),
                    item(3, "Paneer Masala", 110, Category::Special, "2474658"),
                ],
            ),
            (
                MenuSection::AllItems,
                vec![
                    item(4, "Samosa", 15, Category::Snacks, "14477798"),
                    item(5, "Masala Chai", 10, Category::Beverages, "1252835"),
                    item(6, "Dosa", 45, Category::Meals, "5560763"),
                    item(7, "Gulab Jamun", 25, Category::Desserts, "8104342"),
                    item(8, "Chole Bhature", 60, Category::Meals, "5560748"),
                ],
            ),
            (
                MenuSection::Beverages,
                vec![
                    item(9, "Cold Coffee", 30, Category::Beverages, "302899"),
                    item(10, "Fresh Lime Soda", 20, Category::Beverages, "1099680"),
                ],
            ),
            (
                MenuSection::Desserts,
                vec![
                    item(11, "Rasgulla", 30, Category::Desserts, "8104342"),
                    item(12, "Ice Cream", 35, Category::Desserts, "1362534"),
                ],
            ),
            (
                MenuSection::Meals,
                vec![
                    item(13, "Rajma Rice", 70, Category::Meals, "2474661"),
                    item(14, "Biryani", 95, Category::Meals, "1633525"),
                ],
            ),
            (
                MenuSection::Snacks,
                vec![
                    item(15, "Pakora", 25, Category::Snacks, "14477798"),
                    item(16, "Sandwich", 40, Category::Snacks, "1603901"),
                ],
            ),
        ])
    }
}

/// Label of an item's add button given its quantity in the cart
#[must_use]
pub fn add_button_label(quantity: u32) -> String {
    if quantity > 0 {
        format!("Added (x{quantity})")
    } else {
        "Add".to_string()
    }
}
