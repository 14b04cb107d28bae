//! Professional Services family tables.

use super::{BusinessFamily, FamilyCatalog};
use crate::templates::{TemplateComponent, TemplateConfig, TemplateTab};

pub(super) fn catalog() -> FamilyCatalog {
    FamilyCatalog {
        family: BusinessFamily::ProfessionalServices,
        aliases: vec![
            ("accounting", "accounting"),
            ("accountant", "accounting"),
            ("cpa firm", "accounting"),
            ("cpa", "accounting"),
            ("bookkeeping", "bookkeeping"),
            ("bookkeeper", "bookkeeping"),
            ("tax preparation", "tax_prep"),
            ("tax prep", "tax_prep"),
            ("tax service", "tax_prep"),
            ("law firm", "law_firm"),
            ("lawyer", "law_firm"),
            ("attorney", "law_firm"),
            ("legal practice", "law_firm"),
            ("notary", "notary"),
            ("marketing agency", "marketing_agency"),
            ("digital agency", "marketing_agency"),
            ("ad agency", "marketing_agency"),
            ("marketing", "marketing_agency"),
            ("consulting", "consulting"),
            ("consultant", "consulting"),
            ("real estate agent", "real_estate"),
            ("real estate", "real_estate"),
            ("realtor", "real_estate"),
            ("property management", "real_estate"),
            ("insurance agency", "insurance_agency"),
            ("insurance broker", "insurance_agency"),
            ("insurance", "insurance_agency"),
            ("photography", "photography"),
            ("photographer", "photography"),
            ("photo studio", "photography"),
            ("videography", "videography"),
            ("videographer", "videography"),
            ("web design", "web_design"),
            ("web agency", "web_design"),
        ],
        templates: vec![
            ("accounting", accounting()),
            ("law_firm", law_firm()),
            ("marketing_agency", marketing_agency()),
            ("real_estate", real_estate()),
            ("photography", photography()),
        ],
        generic_aliases: vec![
            ("bookkeeping", "accounting"),
            ("tax_prep", "accounting"),
            ("insurance_agency", "accounting"),
            ("notary", "law_firm"),
            ("consulting", "marketing_agency"),
            ("web_design", "marketing_agency"),
            ("videography", "photography"),
        ],
    }
}

fn accounting() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![
                    TemplateComponent {
                        id: "overview".into(),
                        label: "Practice Overview".into(),
                        view: "overview_cards".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "deadlines".into(),
                        label: "Filing Deadlines".into(),
                        view: "reminder_list".into(),
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
                        id: "documents".into(),
                        label: "Document Vault".into(),
                        view: "document_vault".into(),
                        locked: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "engagements".into(),
                label: "Engagements".into(),
                icon: "briefcase".into(),
                components: vec![TemplateComponent {
                    id: "engagement_board".into(),
                    label: "Engagements".into(),
                    view: "pipeline_board".into(),
                    stages: vec![
                        "Proposal".into(),
                        "Engaged".into(),
                        "Fieldwork".into(),
                        "Review".into(),
                        "Filed".into(),
                    ],
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "billing".into(),
                label: "Billing".into(),
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

fn law_firm() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Firm Overview".into(),
                    view: "overview_cards".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "matters".into(),
                label: "Matters".into(),
                icon: "scale".into(),
                components: vec![
                    TemplateComponent {
                        id: "case_board".into(),
                        label: "Active Matters".into(),
                        view: "pipeline_board".into(),
                        locked: true,
                        stages: vec![
                            "Intake".into(),
                            "Retained".into(),
                            "Discovery".into(),
                            "Negotiation".into(),
                            "Resolution".into(),
                            "Closed".into(),
                        ],
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "court_dates".into(),
                        label: "Court Dates".into(),
                        view: "event_calendar".into(),
                        locked: true,
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
                        id: "conflict_checks".into(),
                        label: "Conflict Checks".into(),
                        view: "checklist".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "billing".into(),
                label: "Billing".into(),
                icon: "receipt".into(),
                components: vec![
                    TemplateComponent {
                        id: "time_entries".into(),
                        label: "Time Entries".into(),
                        view: "ledger_table".into(),
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "trust_ledger".into(),
                        label: "Trust Ledger".into(),
                        view: "ledger_table".into(),
                        locked: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
        ],
    }
}

fn marketing_agency() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Agency Overview".into(),
                    view: "overview_cards".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "projects".into(),
                label: "Projects".into(),
                icon: "briefcase".into(),
                components: vec![
                    TemplateComponent {
                        id: "project_board".into(),
                        label: "Project Board".into(),
                        view: "pipeline_board".into(),
                        locked: true,
                        stages: vec![
                            "Pitch".into(),
                            "Scoped".into(),
                            "In Production".into(),
                            "Client Review".into(),
                            "Delivered".into(),
                        ],
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "deliverables".into(),
                        label: "Deliverables".into(),
                        view: "checklist".into(),
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
                        id: "retainers".into(),
                        label: "Retainers".into(),
                        view: "contract_table".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "reports".into(),
                label: "Reports".into(),
                icon: "chart-bar".into(),
                removable: true,
                components: vec![TemplateComponent {
                    id: "campaign_reports".into(),
                    label: "Campaign Reports".into(),
                    view: "report_charts".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn real_estate() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Desk Overview".into(),
                    view: "overview_cards".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "listings".into(),
                label: "Listings".into(),
                icon: "building".into(),
                components: vec![
                    TemplateComponent {
                        id: "listing_grid".into(),
                        label: "Active Listings".into(),
                        view: "listing_grid".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "showings".into(),
                        label: "Showings".into(),
                        view: "appointment_calendar".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "deals".into(),
                label: "Deals".into(),
                icon: "handshake".into(),
                components: vec![TemplateComponent {
                    id: "deal_pipeline".into(),
                    label: "Deal Pipeline".into(),
                    view: "pipeline_board".into(),
                    locked: true,
                    auto_progress: true,
                    stages: vec![
                        "Lead".into(),
                        "Showing".into(),
                        "Offer".into(),
                        "Under Contract".into(),
                        "Inspection".into(),
                        "Closing".into(),
                    ],
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "contacts".into(),
                label: "Contacts".into(),
                icon: "users".into(),
                components: vec![TemplateComponent {
                    id: "contact_list".into(),
                    label: "Buyers & Sellers".into(),
                    view: "client_table".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn photography() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Studio Overview".into(),
                    view: "overview_cards".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "shoots".into(),
                label: "Shoots".into(),
                icon: "camera".into(),
                components: vec![
                    TemplateComponent {
                        id: "shoot_pipeline".into(),
                        label: "Bookings".into(),
                        view: "pipeline_board".into(),
                        locked: true,
                        stages: vec![
                            "Inquiry".into(),
                            "Booked".into(),
                            "Shot".into(),
                            "Editing".into(),
                            "Gallery Delivered".into(),
                        ],
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "session_calendar".into(),
                        label: "Session Calendar".into(),
                        view: "appointment_calendar".into(),
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
                        id: "contracts".into(),
                        label: "Contracts & Releases".into(),
                        view: "form_builder".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "portfolio".into(),
                label: "Portfolio".into(),
                icon: "image".into(),
                removable: true,
                components: vec![TemplateComponent {
                    id: "portfolio_grid".into(),
                    label: "Portfolio".into(),
                    view: "gallery_grid".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}
