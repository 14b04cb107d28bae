//! Retail family tables.

use super::{BusinessFamily, FamilyCatalog};
use crate::templates::{TemplateComponent, TemplateConfig, TemplateTab};

pub(super) fn catalog() -> FamilyCatalog {
    FamilyCatalog {
        family: BusinessFamily::Retail,
        aliases: vec![
            ("boutique", "boutique"),
            ("clothing store", "boutique"),
            ("apparel", "boutique"),
            ("fashion store", "boutique"),
            ("bookstore", "bookstore"),
            ("book shop", "bookstore"),
            ("bookshop", "bookstore"),
            ("florist", "florist"),
            ("flower shop", "florist"),
            ("flowers", "florist"),
            ("grocery store", "grocery_store"),
            ("grocery", "grocery_store"),
            ("supermarket", "grocery_store"),
            ("market", "grocery_store"),
            ("thrift store", "thrift_store"),
            ("thrift", "thrift_store"),
            ("secondhand", "thrift_store"),
            ("consignment", "thrift_store"),
            ("jewelry store", "jewelry_store"),
            ("jewelry", "jewelry_store"),
            ("jeweler", "jewelry_store"),
            ("convenience store", "convenience_store"),
            ("corner store", "convenience_store"),
            ("bodega", "convenience_store"),
            ("gift shop", "gift_shop"),
            ("gifts", "gift_shop"),
            ("toy store", "toy_store"),
            ("record store", "record_store"),
            ("vinyl", "record_store"),
            ("garden center", "garden_center"),
            ("plant shop", "garden_center"),
            ("plant nursery", "garden_center"),
        ],
        templates: vec![
            ("boutique", boutique()),
            ("bookstore", bookstore()),
            ("florist", florist()),
            ("grocery_store", grocery_store()),
        ],
        generic_aliases: vec![
            ("thrift_store", "boutique"),
            ("jewelry_store", "boutique"),
            ("gift_shop", "boutique"),
            ("toy_store", "boutique"),
            ("record_store", "bookstore"),
            ("convenience_store", "grocery_store"),
            ("garden_center", "florist"),
        ],
    }
}

fn boutique() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![
                    TemplateComponent {
                        id: "overview".into(),
                        label: "Store Overview".into(),
                        view: "overview_cards".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "bestsellers".into(),
                        label: "Bestsellers".into(),
                        view: "rank_list".into(),
                        removable: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "inventory".into(),
                label: "Inventory".into(),
                icon: "box".into(),
                components: vec![
                    TemplateComponent {
                        id: "stock".into(),
                        label: "Stock on Hand".into(),
                        view: "inventory_table".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "receiving".into(),
                        label: "Receiving".into(),
                        view: "order_table".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "sales".into(),
                label: "Sales".into(),
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
                        id: "online_orders".into(),
                        label: "Online Orders".into(),
                        view: "order_queue".into(),
                        stages: vec![
                            "Placed".into(),
                            "Picked".into(),
                            "Packed".into(),
                            "Shipped".into(),
                        ],
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "customers".into(),
                label: "Customers".into(),
                icon: "users".into(),
                removable: true,
                components: vec![TemplateComponent {
                    id: "customer_list".into(),
                    label: "Customer List".into(),
                    view: "client_table".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn bookstore() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Shop Overview".into(),
                    view: "overview_cards".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "inventory".into(),
                label: "Catalog".into(),
                icon: "book".into(),
                components: vec![
                    TemplateComponent {
                        id: "stock".into(),
                        label: "Title Inventory".into(),
                        view: "inventory_table".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "special_orders".into(),
                        label: "Special Orders".into(),
                        view: "order_table".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "sales".into(),
                label: "Sales".into(),
                icon: "credit-card".into(),
                components: vec![TemplateComponent {
                    id: "register".into(),
                    label: "Register".into(),
                    view: "pos_register".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "events".into(),
                label: "Events".into(),
                icon: "calendar".into(),
                removable: true,
                components: vec![
                    TemplateComponent {
                        id: "readings".into(),
                        label: "Readings & Signings".into(),
                        view: "event_calendar".into(),
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "book_club".into(),
                        label: "Book Club".into(),
                        view: "member_list".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
        ],
    }
}

fn florist() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Shop Overview".into(),
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
                        id: "arrangements".into(),
                        label: "Arrangement Orders".into(),
                        view: "pipeline_board".into(),
                        locked: true,
                        auto_progress: true,
                        stages: vec![
                            "Ordered".into(),
                            "Designing".into(),
                            "Arranged".into(),
                            "Out for Delivery".into(),
                            "Delivered".into(),
                        ],
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "delivery_routes".into(),
                        label: "Delivery Routes".into(),
                        view: "route_map".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "stock".into(),
                label: "Stock".into(),
                icon: "box".into(),
                components: vec![TemplateComponent {
                    id: "cooler_stock".into(),
                    label: "Cooler Stock".into(),
                    view: "inventory_table".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "weddings".into(),
                label: "Weddings".into(),
                icon: "heart".into(),
                removable: true,
                components: vec![TemplateComponent {
                    id: "consultations".into(),
                    label: "Consultations".into(),
                    view: "appointment_calendar".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn grocery_store() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Store Overview".into(),
                    view: "overview_cards".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "inventory".into(),
                label: "Inventory".into(),
                icon: "box".into(),
                components: vec![
                    TemplateComponent {
                        id: "stock".into(),
                        label: "Shelf Stock".into(),
                        view: "inventory_table".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "suppliers".into(),
                        label: "Supplier Orders".into(),
                        view: "order_table".into(),
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "expiry".into(),
                        label: "Expiry Watch".into(),
                        view: "reminder_list".into(),
                        removable: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "checkout".into(),
                label: "Checkout".into(),
                icon: "credit-card".into(),
                components: vec![TemplateComponent {
                    id: "register".into(),
                    label: "Lanes".into(),
                    view: "pos_register".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "reports".into(),
                label: "Reports".into(),
                icon: "chart-bar".into(),
                removable: true,
                components: vec![TemplateComponent {
                    id: "sales_report".into(),
                    label: "Sales Reports".into(),
                    view: "report_charts".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}
