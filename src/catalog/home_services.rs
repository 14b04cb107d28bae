//! Home Services family tables.
//!
//! Field-service trades share a quote → dispatch → invoice shape; the
//! bespoke trees differ in what sits beside the job board (crew routes for
//! cleaners, seasonal contracts for landscapers, permits for plumbers,
//! maintenance agreements for HVAC).

use super::{BusinessFamily, FamilyCatalog};
use crate::templates::{TemplateComponent, TemplateConfig, TemplateTab};

pub(super) fn catalog() -> FamilyCatalog {
    FamilyCatalog {
        family: BusinessFamily::HomeServices,
        aliases: vec![
            ("cleaning service", "cleaning_service"),
            ("house cleaning", "cleaning_service"),
            ("maid service", "cleaning_service"),
            ("janitorial", "cleaning_service"),
            ("cleaning", "cleaning_service"),
            ("landscaping", "landscaping"),
            ("landscaper", "landscaping"),
            ("lawn care", "landscaping"),
            ("lawn mowing", "landscaping"),
            ("plumbing", "plumbing"),
            ("plumber", "plumbing"),
            ("hvac", "hvac"),
            ("heating and cooling", "hvac"),
            ("air conditioning", "hvac"),
            ("furnace repair", "hvac"),
            ("electrician", "electrical"),
            ("electrical", "electrical"),
            ("house painting", "painting"),
            ("painting", "painting"),
            ("painter", "painting"),
            ("roofing", "roofing"),
            ("roofer", "roofing"),
            ("pest control", "pest_control"),
            ("exterminator", "pest_control"),
            ("pressure washing", "pressure_washing"),
            ("power washing", "pressure_washing"),
            ("pool service", "pool_service"),
            ("pool cleaning", "pool_service"),
            ("handyman", "handyman"),
        ],
        templates: vec![
            ("cleaning_service", cleaning_service()),
            ("landscaping", landscaping()),
            ("plumbing", plumbing()),
            ("hvac", hvac()),
        ],
        generic_aliases: vec![
            ("electrical", "plumbing"),
            ("handyman", "plumbing"),
            ("painting", "landscaping"),
            ("roofing", "landscaping"),
            ("pest_control", "cleaning_service"),
            ("pressure_washing", "cleaning_service"),
            ("pool_service", "cleaning_service"),
        ],
    }
}

fn cleaning_service() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Business Overview".into(),
                    view: "overview_cards".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "jobs".into(),
                label: "Jobs".into(),
                icon: "calendar".into(),
                components: vec![
                    TemplateComponent {
                        id: "job_schedule".into(),
                        label: "Job Schedule".into(),
                        view: "appointment_calendar".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "crew_routes".into(),
                        label: "Crew Routes".into(),
                        view: "route_map".into(),
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "checklists".into(),
                        label: "Room Checklists".into(),
                        view: "checklist".into(),
                        removable: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "clients".into(),
                label: "Clients".into(),
                icon: "users".into(),
                components: vec![
                    TemplateComponent {
                        id: "client_list".into(),
                        label: "Client List".into(),
                        view: "client_table".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "recurring_plans".into(),
                        label: "Recurring Plans".into(),
                        view: "membership_table".into(),
                        ..Default::default()
                    },
                ],
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

fn landscaping() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Business Overview".into(),
                    view: "overview_cards".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "jobs".into(),
                label: "Jobs".into(),
                icon: "tree".into(),
                components: vec![
                    TemplateComponent {
                        id: "job_pipeline".into(),
                        label: "Job Pipeline".into(),
                        view: "pipeline_board".into(),
                        locked: true,
                        auto_progress: true,
                        stages: vec![
                            "Estimate".into(),
                            "Scheduled".into(),
                            "On Site".into(),
                            "Walkthrough".into(),
                            "Invoiced".into(),
                        ],
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "crew_routes".into(),
                        label: "Crew Routes".into(),
                        view: "route_map".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "contracts".into(),
                label: "Contracts".into(),
                icon: "file-text".into(),
                components: vec![TemplateComponent {
                    id: "seasonal".into(),
                    label: "Seasonal Contracts".into(),
                    view: "contract_table".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "clients".into(),
                label: "Clients".into(),
                icon: "users".into(),
                components: vec![TemplateComponent {
                    id: "client_list".into(),
                    label: "Client List".into(),
                    view: "client_table".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "gallery".into(),
                label: "Gallery".into(),
                icon: "image".into(),
                removable: true,
                components: vec![TemplateComponent {
                    id: "before_after".into(),
                    label: "Before & After".into(),
                    view: "gallery_grid".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn plumbing() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![
                    TemplateComponent {
                        id: "overview".into(),
                        label: "Business Overview".into(),
                        view: "overview_cards".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "on_call".into(),
                        label: "On-Call Board".into(),
                        view: "staff_roster".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "dispatch".into(),
                label: "Dispatch".into(),
                icon: "truck".into(),
                components: vec![
                    TemplateComponent {
                        id: "job_dispatch".into(),
                        label: "Job Dispatch".into(),
                        view: "job_dispatch".into(),
                        locked: true,
                        auto_progress: true,
                        stages: vec![
                            "Requested".into(),
                            "Dispatched".into(),
                            "En Route".into(),
                            "On Site".into(),
                            "Complete".into(),
                        ],
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "quotes".into(),
                        label: "Quotes".into(),
                        view: "quote_builder".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "clients".into(),
                label: "Clients".into(),
                icon: "users".into(),
                components: vec![TemplateComponent {
                    id: "client_list".into(),
                    label: "Client List".into(),
                    view: "client_table".into(),
                    locked: true,
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

fn hvac() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Business Overview".into(),
                    view: "overview_cards".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "dispatch".into(),
                label: "Dispatch".into(),
                icon: "truck".into(),
                components: vec![TemplateComponent {
                    id: "job_dispatch".into(),
                    label: "Service Calls".into(),
                    view: "job_dispatch".into(),
                    locked: true,
                    auto_progress: true,
                    stages: vec![
                        "Requested".into(),
                        "Dispatched".into(),
                        "Diagnosing".into(),
                        "Repairing".into(),
                        "Complete".into(),
                    ],
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "maintenance".into(),
                label: "Maintenance".into(),
                icon: "file-text".into(),
                components: vec![
                    TemplateComponent {
                        id: "agreements".into(),
                        label: "Maintenance Agreements".into(),
                        view: "contract_table".into(),
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "tune_up_reminders".into(),
                        label: "Tune-up Reminders".into(),
                        view: "reminder_list".into(),
                        removable: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "clients".into(),
                label: "Clients".into(),
                icon: "users".into(),
                components: vec![
                    TemplateComponent {
                        id: "client_list".into(),
                        label: "Client List".into(),
                        view: "client_table".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "equipment".into(),
                        label: "Installed Equipment".into(),
                        view: "equipment_records".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
        ],
    }
}
