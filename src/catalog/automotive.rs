//! Automotive family tables.
//!
//! A body shop's repair pipeline differs structurally from a tire shop's
//! fitment flow, so both get bespoke trees. `mechanic` is the canonical
//! example of a generic alias: same workflow as `auto_repair`, different
//! sign out front.

use super::{BusinessFamily, FamilyCatalog};
use crate::templates::{TemplateComponent, TemplateConfig, TemplateTab};

pub(super) fn catalog() -> FamilyCatalog {
    FamilyCatalog {
        family: BusinessFamily::Automotive,
        aliases: vec![
            ("auto repair", "auto_repair"),
            ("car repair", "auto_repair"),
            ("auto shop", "auto_repair"),
            ("garage", "auto_repair"),
            ("mechanic", "mechanic"),
            ("body shop", "body_shop"),
            ("collision repair", "body_shop"),
            ("auto body", "body_shop"),
            ("tire shop", "tire_shop"),
            ("tire service", "tire_shop"),
            ("tires", "tire_shop"),
            ("car wash", "car_wash"),
            ("carwash", "car_wash"),
            ("auto detailing", "auto_detailing"),
            ("car detailing", "auto_detailing"),
            ("detailing", "auto_detailing"),
            ("oil change", "oil_change"),
            ("lube shop", "oil_change"),
            ("towing", "towing"),
            ("tow truck", "towing"),
            ("transmission shop", "transmission_shop"),
            ("transmission", "transmission_shop"),
        ],
        templates: vec![
            ("auto_repair", auto_repair()),
            ("body_shop", body_shop()),
            ("tire_shop", tire_shop()),
            ("car_wash", car_wash()),
        ],
        generic_aliases: vec![
            ("mechanic", "auto_repair"),
            ("oil_change", "auto_repair"),
            ("towing", "auto_repair"),
            ("transmission_shop", "auto_repair"),
            ("auto_detailing", "car_wash"),
        ],
    }
}

fn auto_repair() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![
                    TemplateComponent {
                        id: "overview".into(),
                        label: "Shop Overview".into(),
                        view: "overview_cards".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "bay_status".into(),
                        label: "Bay Status".into(),
                        view: "room_schedule".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "work_orders".into(),
                label: "Work Orders".into(),
                icon: "wrench".into(),
                components: vec![
                    TemplateComponent {
                        id: "job_board".into(),
                        label: "Repair Orders".into(),
                        view: "pipeline_board".into(),
                        locked: true,
                        auto_progress: true,
                        stages: vec![
                            "Checked In".into(),
                            "Diagnosing".into(),
                            "Awaiting Approval".into(),
                            "Parts Ordered".into(),
                            "In Repair".into(),
                            "Ready for Pickup".into(),
                        ],
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "estimates".into(),
                        label: "Estimates".into(),
                        view: "quote_builder".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "customers".into(),
                label: "Customers".into(),
                icon: "users".into(),
                components: vec![
                    TemplateComponent {
                        id: "customer_list".into(),
                        label: "Customer List".into(),
                        view: "client_table".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "vehicles".into(),
                        label: "Vehicle History".into(),
                        view: "vehicle_records".into(),
                        locked: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "parts".into(),
                label: "Parts".into(),
                icon: "box".into(),
                removable: true,
                components: vec![TemplateComponent {
                    id: "parts_stock".into(),
                    label: "Parts Inventory".into(),
                    view: "inventory_table".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "invoices".into(),
                label: "Invoices".into(),
                icon: "receipt".into(),
                components: vec![TemplateComponent {
                    id: "invoice_list".into(),
                    label: "Invoices".into(),
                    view: "invoice_list".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn body_shop() -> TemplateConfig {
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
                id: "repairs".into(),
                label: "Repairs".into(),
                icon: "car".into(),
                components: vec![
                    TemplateComponent {
                        id: "repair_pipeline".into(),
                        label: "Repair Pipeline".into(),
                        view: "pipeline_board".into(),
                        locked: true,
                        auto_progress: true,
                        stages: vec![
                            "Estimate".into(),
                            "Insurance Approval".into(),
                            "Teardown".into(),
                            "Parts".into(),
                            "Body Work".into(),
                            "Paint".into(),
                            "Reassembly".into(),
                            "Quality Check".into(),
                            "Ready".into(),
                        ],
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "photo_log".into(),
                        label: "Damage Photo Log".into(),
                        view: "gallery_grid".into(),
                        locked: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "insurance".into(),
                label: "Insurance".into(),
                icon: "shield".into(),
                components: vec![
                    TemplateComponent {
                        id: "claims".into(),
                        label: "Claims".into(),
                        view: "claim_table".into(),
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "supplements".into(),
                        label: "Supplements".into(),
                        view: "quote_builder".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "customers".into(),
                label: "Customers".into(),
                icon: "users".into(),
                components: vec![TemplateComponent {
                    id: "customer_list".into(),
                    label: "Customer List".into(),
                    view: "client_table".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn tire_shop() -> TemplateConfig {
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
                id: "service".into(),
                label: "Service".into(),
                icon: "wrench".into(),
                components: vec![
                    TemplateComponent {
                        id: "appointments".into(),
                        label: "Fitment Schedule".into(),
                        view: "appointment_calendar".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "service_queue".into(),
                        label: "Service Queue".into(),
                        view: "order_queue".into(),
                        auto_progress: true,
                        stages: vec![
                            "Waiting".into(),
                            "On Lift".into(),
                            "Balancing".into(),
                            "Done".into(),
                        ],
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "inventory".into(),
                label: "Tires".into(),
                icon: "box".into(),
                components: vec![
                    TemplateComponent {
                        id: "tire_stock".into(),
                        label: "Tire Inventory".into(),
                        view: "inventory_table".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "seasonal_storage".into(),
                        label: "Seasonal Storage".into(),
                        view: "storage_rack".into(),
                        removable: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "customers".into(),
                label: "Customers".into(),
                icon: "users".into(),
                components: vec![TemplateComponent {
                    id: "customer_list".into(),
                    label: "Customer List".into(),
                    view: "client_table".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn car_wash() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Wash Overview".into(),
                    view: "overview_cards".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "lane".into(),
                label: "Lane".into(),
                icon: "car".into(),
                components: vec![TemplateComponent {
                    id: "wash_queue".into(),
                    label: "Wash Queue".into(),
                    view: "order_queue".into(),
                    locked: true,
                    auto_progress: true,
                    stages: vec!["Queued".into(), "Washing".into(), "Drying".into(), "Done".into()],
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "memberships".into(),
                label: "Memberships".into(),
                icon: "users".into(),
                components: vec![TemplateComponent {
                    id: "unlimited_club".into(),
                    label: "Unlimited Club".into(),
                    view: "membership_table".into(),
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
                    id: "volume_report".into(),
                    label: "Wash Volume".into(),
                    view: "report_charts".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}
