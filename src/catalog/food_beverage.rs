//! Food & Beverage family tables.

use super::{BusinessFamily, FamilyCatalog};
use crate::templates::{TemplateComponent, TemplateConfig, TemplateTab};

pub(super) fn catalog() -> FamilyCatalog {
    FamilyCatalog {
        family: BusinessFamily::FoodBeverage,
        aliases: vec![
            ("restaurant", "restaurant"),
            ("diner", "restaurant"),
            ("bistro", "restaurant"),
            ("eatery", "restaurant"),
            ("steakhouse", "restaurant"),
            ("cafe", "cafe"),
            ("coffee shop", "coffee_shop"),
            ("coffee", "coffee_shop"),
            ("espresso bar", "coffee_shop"),
            ("bakery", "bakery"),
            ("bakeshop", "bakery"),
            ("pastry shop", "bakery"),
            ("food truck", "food_truck"),
            ("food trailer", "food_truck"),
            ("pizzeria", "pizzeria"),
            ("pizza shop", "pizzeria"),
            ("pizza", "pizzeria"),
            ("cocktail bar", "bar"),
            ("taproom", "bar"),
            ("pub", "bar"),
            ("bar", "bar"),
            ("juice bar", "juice_bar"),
            ("smoothie", "juice_bar"),
            ("catering", "catering"),
            ("caterer", "catering"),
            ("ice cream", "ice_cream_shop"),
            ("gelato", "ice_cream_shop"),
            ("deli", "deli"),
            ("delicatessen", "deli"),
        ],
        templates: vec![
            ("restaurant", restaurant()),
            ("cafe", cafe()),
            ("bakery", bakery()),
            ("food_truck", food_truck()),
        ],
        generic_aliases: vec![
            ("pizzeria", "restaurant"),
            ("bar", "restaurant"),
            ("coffee_shop", "cafe"),
            ("juice_bar", "cafe"),
            ("ice_cream_shop", "cafe"),
            ("deli", "cafe"),
            ("catering", "food_truck"),
        ],
    }
}

fn restaurant() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![
                    TemplateComponent {
                        id: "overview".into(),
                        label: "Service Overview".into(),
                        view: "overview_cards".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "covers_today".into(),
                        label: "Covers Today".into(),
                        view: "today_schedule".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "reservations".into(),
                label: "Reservations".into(),
                icon: "calendar".into(),
                components: vec![
                    TemplateComponent {
                        id: "book".into(),
                        label: "Reservation Book".into(),
                        view: "reservation_book".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "floor_plan".into(),
                        label: "Floor Plan".into(),
                        view: "table_map".into(),
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "waitlist".into(),
                        label: "Waitlist".into(),
                        view: "waitlist".into(),
                        removable: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "menu".into(),
                label: "Menu".into(),
                icon: "utensils".into(),
                components: vec![
                    TemplateComponent {
                        id: "menu_editor".into(),
                        label: "Menu Editor".into(),
                        view: "menu_editor".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "specials".into(),
                        label: "Daily Specials".into(),
                        view: "note_cards".into(),
                        removable: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "orders".into(),
                label: "Orders".into(),
                icon: "receipt".into(),
                components: vec![TemplateComponent {
                    id: "ticket_rail".into(),
                    label: "Ticket Rail".into(),
                    view: "order_queue".into(),
                    locked: true,
                    auto_progress: true,
                    stages: vec![
                        "Placed".into(),
                        "In Kitchen".into(),
                        "Plated".into(),
                        "Served".into(),
                        "Paid".into(),
                    ],
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "staff".into(),
                label: "Staff".into(),
                icon: "id-badge".into(),
                removable: true,
                components: vec![TemplateComponent {
                    id: "rota".into(),
                    label: "Shift Rota".into(),
                    view: "staff_roster".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn cafe() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Counter Overview".into(),
                    view: "overview_cards".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "orders".into(),
                label: "Orders".into(),
                icon: "receipt".into(),
                components: vec![
                    TemplateComponent {
                        id: "queue".into(),
                        label: "Order Queue".into(),
                        view: "order_queue".into(),
                        locked: true,
                        auto_progress: true,
                        stages: vec!["Placed".into(), "Making".into(), "Ready".into()],
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "register".into(),
                        label: "Register".into(),
                        view: "pos_register".into(),
                        locked: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "menu".into(),
                label: "Menu".into(),
                icon: "utensils".into(),
                components: vec![TemplateComponent {
                    id: "menu_editor".into(),
                    label: "Menu Board".into(),
                    view: "menu_editor".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "loyalty".into(),
                label: "Regulars".into(),
                icon: "users".into(),
                removable: true,
                components: vec![
                    TemplateComponent {
                        id: "punch_cards".into(),
                        label: "Punch Cards".into(),
                        view: "loyalty_card".into(),
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "reviews".into(),
                        label: "Reviews".into(),
                        view: "review_feed".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
        ],
    }
}

fn bakery() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![
                    TemplateComponent {
                        id: "overview".into(),
                        label: "Bakery Overview".into(),
                        view: "overview_cards".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "bake_sheet".into(),
                        label: "Today's Bake Sheet".into(),
                        view: "checklist".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "orders".into(),
                label: "Custom Orders".into(),
                icon: "cake".into(),
                components: vec![TemplateComponent {
                    id: "cake_orders".into(),
                    label: "Cake Orders".into(),
                    view: "pipeline_board".into(),
                    locked: true,
                    stages: vec![
                        "Quoted".into(),
                        "Deposit".into(),
                        "Baking".into(),
                        "Decorating".into(),
                        "Pickup".into(),
                    ],
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "counter".into(),
                label: "Counter".into(),
                icon: "credit-card".into(),
                components: vec![
                    TemplateComponent {
                        id: "register".into(),
                        label: "Register".into(),
                        view: "pos_register".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "case_stock".into(),
                        label: "Case Stock".into(),
                        view: "inventory_table".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "wholesale".into(),
                label: "Wholesale".into(),
                icon: "truck".into(),
                removable: true,
                components: vec![TemplateComponent {
                    id: "standing_orders".into(),
                    label: "Standing Orders".into(),
                    view: "order_table".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn food_truck() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Truck Overview".into(),
                    view: "overview_cards".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "schedule".into(),
                label: "Schedule".into(),
                icon: "map-pin".into(),
                components: vec![
                    TemplateComponent {
                        id: "stops".into(),
                        label: "Stops & Events".into(),
                        view: "route_map".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "bookings".into(),
                        label: "Event Bookings".into(),
                        view: "pipeline_board".into(),
                        stages: vec![
                            "Inquiry".into(),
                            "Quoted".into(),
                            "Booked".into(),
                            "Served".into(),
                            "Invoiced".into(),
                        ],
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "menu".into(),
                label: "Menu".into(),
                icon: "utensils".into(),
                components: vec![TemplateComponent {
                    id: "menu_editor".into(),
                    label: "Menu Board".into(),
                    view: "menu_editor".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "supplies".into(),
                label: "Supplies".into(),
                icon: "box".into(),
                removable: true,
                components: vec![TemplateComponent {
                    id: "prep_stock".into(),
                    label: "Prep & Stock".into(),
                    view: "inventory_table".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}
