pub struct SeedUser {
    pub email: &'static str,
    pub full_name: &'static str,
    pub password: &'static str,
    pub roles: &'static [&'static str],
}

pub struct SeedItem {
    pub name: &'static str,
    pub quantity_units: Option<&'static str>,
}

/// The first user owns every seeded item and list.
pub const SEED_USERS: &[SeedUser] = &[
    SeedUser {
        email: "admin@shoplist.dev",
        full_name: "Ada Admin",
        password: "123456",
        roles: &["admin", "superUser", "user"],
    },
    SeedUser {
        email: "melissa@shoplist.dev",
        full_name: "Melissa Flores",
        password: "123456",
        roles: &["user"],
    },
    SeedUser {
        email: "hernando@shoplist.dev",
        full_name: "Hernando Vallejo",
        password: "123456",
        roles: &["user"],
    },
];

pub const SEED_ITEMS: &[SeedItem] = &[
    SeedItem {
        name: "Chicken breast (skinless, boneless)",
        quantity_units: Some("lb"),
    },
    SeedItem {
        name: "Tomato sauce",
        quantity_units: Some("can"),
    },
    SeedItem {
        name: "Spaghetti",
        quantity_units: Some("box"),
    },
    SeedItem {
        name: "Parmesan cheese",
        quantity_units: Some("g"),
    },
    SeedItem {
        name: "Olive oil",
        quantity_units: Some("bottle"),
    },
    SeedItem {
        name: "Garlic",
        quantity_units: None,
    },
    SeedItem {
        name: "Onion",
        quantity_units: None,
    },
    SeedItem {
        name: "Red apple",
        quantity_units: Some("kg"),
    },
    SeedItem {
        name: "Banana",
        quantity_units: None,
    },
    SeedItem {
        name: "Whole milk",
        quantity_units: Some("l"),
    },
    SeedItem {
        name: "Eggs",
        quantity_units: Some("dozen"),
    },
    SeedItem {
        name: "Butter",
        quantity_units: Some("g"),
    },
    SeedItem {
        name: "Brown rice",
        quantity_units: Some("kg"),
    },
    SeedItem {
        name: "Black beans",
        quantity_units: Some("can"),
    },
    SeedItem {
        name: "Coffee beans",
        quantity_units: Some("g"),
    },
    SeedItem {
        name: "Green tea",
        quantity_units: Some("box"),
    },
    SeedItem {
        name: "Toilet paper",
        quantity_units: Some("pack"),
    },
    SeedItem {
        name: "Dish soap",
        quantity_units: Some("bottle"),
    },
    SeedItem {
        name: "Sparkling water",
        quantity_units: Some("bottle"),
    },
    SeedItem {
        name: "Dark chocolate",
        quantity_units: Some("bar"),
    },
];

pub const SEED_LISTS: &[&str] = &["Groceries", "Weekend barbecue", "Pantry restock"];

/// How many of the first user's items go on the first list.
pub const SEED_LIST_ITEMS: i64 = 15;
