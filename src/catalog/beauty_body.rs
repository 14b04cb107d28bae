//! Beauty & Body family tables.
//!
//! Bespoke trees for the high-traffic types (nail salon, hair salon, tattoo
//! studio, day spa, lash studio); the narrower trades share a sibling's
//! structure via generic aliases.

use super::{BusinessFamily, FamilyCatalog};
use crate::templates::{TemplateComponent, TemplateConfig, TemplateTab};

pub(super) fn catalog() -> FamilyCatalog {
    FamilyCatalog {
        family: BusinessFamily::BeautyBody,
        aliases: vec![
            ("nail salon", "nail_salon"),
            ("nails", "nail_salon"),
            ("nail tech", "nail_salon"),
            ("manicure", "nail_salon"),
            ("pedicure", "nail_salon"),
            ("hair salon", "hair_salon"),
            // Deliberately generic: the longer phrases above win first.
            ("salon", "hair_salon"),
            ("hairdresser", "hair_salon"),
            ("hair stylist", "hair_salon"),
            ("barbershop", "barbershop"),
            ("barber shop", "barbershop"),
            ("barber", "barbershop"),
            ("tattoo studio", "tattoo_studio"),
            ("tattoo parlor", "tattoo_studio"),
            ("tattoo", "tattoo_studio"),
            ("piercing studio", "piercing_studio"),
            ("piercing", "piercing_studio"),
            ("day spa", "day_spa"),
            ("wellness spa", "day_spa"),
            ("spa", "day_spa"),
            ("massage therapist", "massage_therapy"),
            ("massage", "massage_therapy"),
            ("lash tech", "lash_studio"),
            ("eyelash extensions", "lash_studio"),
            ("lashes", "lash_studio"),
            ("lash", "lash_studio"),
            ("brow tech", "brow_tech"),
            ("eyebrow threading", "brow_tech"),
            ("microblading", "brow_tech"),
            ("brow", "brow_tech"),
            ("waxing", "waxing_studio"),
            ("wax studio", "waxing_studio"),
            ("tanning", "tanning_salon"),
            ("spray tan", "tanning_salon"),
            ("makeup artist", "makeup_artist"),
            ("mua", "makeup_artist"),
        ],
        templates: vec![
            ("nail_salon", nail_salon()),
            ("hair_salon", hair_salon()),
            ("tattoo_studio", tattoo_studio()),
            ("day_spa", day_spa()),
            ("lash_studio", lash_studio()),
        ],
        generic_aliases: vec![
            ("barbershop", "hair_salon"),
            ("brow_tech", "lash_studio"),
            ("waxing_studio", "day_spa"),
            ("massage_therapy", "day_spa"),
            ("tanning_salon", "day_spa"),
            ("piercing_studio", "tattoo_studio"),
            ("makeup_artist", "lash_studio"),
        ],
    }
}

fn nail_salon() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![
                    TemplateComponent {
                        id: "overview".into(),
                        label: "Today at a Glance".into(),
                        view: "overview_cards".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "upcoming".into(),
                        label: "Upcoming Appointments".into(),
                        view: "today_schedule".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "appointments".into(),
                label: "Appointments".into(),
                icon: "calendar".into(),
                components: vec![
                    TemplateComponent {
                        id: "calendar".into(),
                        label: "Booking Calendar".into(),
                        view: "appointment_calendar".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "waitlist".into(),
                        label: "Walk-in Waitlist".into(),
                        view: "waitlist".into(),
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
                        id: "loyalty".into(),
                        label: "Loyalty Punch Cards".into(),
                        view: "loyalty_card".into(),
                        removable: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "services".into(),
                label: "Services".into(),
                icon: "sparkles".into(),
                components: vec![
                    TemplateComponent {
                        id: "menu".into(),
                        label: "Service Menu".into(),
                        view: "service_menu".into(),
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "polish_wall".into(),
                        label: "Polish Wall".into(),
                        view: "gallery_grid".into(),
                        removable: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "payments".into(),
                label: "Payments".into(),
                icon: "credit-card".into(),
                components: vec![TemplateComponent {
                    id: "register".into(),
                    label: "Checkout".into(),
                    view: "pos_register".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn hair_salon() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![
                    TemplateComponent {
                        id: "overview".into(),
                        label: "Salon Overview".into(),
                        view: "overview_cards".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "chair_schedule".into(),
                        label: "Chair Schedule".into(),
                        view: "today_schedule".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "appointments".into(),
                label: "Appointments".into(),
                icon: "calendar".into(),
                components: vec![TemplateComponent {
                    id: "calendar".into(),
                    label: "Booking Calendar".into(),
                    view: "appointment_calendar".into(),
                    locked: true,
                    ..Default::default()
                }],
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
                        id: "color_formulas".into(),
                        label: "Color Formula Notes".into(),
                        view: "note_cards".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "staff".into(),
                label: "Stylists".into(),
                icon: "id-badge".into(),
                components: vec![
                    TemplateComponent {
                        id: "roster".into(),
                        label: "Stylist Roster".into(),
                        view: "staff_roster".into(),
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "chair_rent".into(),
                        label: "Chair Rental Ledger".into(),
                        view: "ledger_table".into(),
                        removable: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "marketing".into(),
                label: "Marketing".into(),
                icon: "megaphone".into(),
                removable: true,
                components: vec![
                    TemplateComponent {
                        id: "campaigns".into(),
                        label: "Campaigns".into(),
                        view: "campaign_list".into(),
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

fn tattoo_studio() -> TemplateConfig {
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
                id: "requests".into(),
                label: "Requests".into(),
                icon: "inbox".into(),
                components: vec![TemplateComponent {
                    id: "request_pipeline".into(),
                    label: "Tattoo Requests".into(),
                    view: "pipeline_board".into(),
                    locked: true,
                    auto_progress: true,
                    stages: vec![
                        "Inquiry".into(),
                        "Consult".into(),
                        "Deposit".into(),
                        "Drawing".into(),
                        "Session".into(),
                        "Healed Check-in".into(),
                    ],
                    ..Default::default()
                }],
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
                        id: "consent_forms".into(),
                        label: "Consent & Release Forms".into(),
                        view: "form_builder".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "aftercare".into(),
                        label: "Aftercare Instructions".into(),
                        view: "document_vault".into(),
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
                components: vec![
                    TemplateComponent {
                        id: "flash".into(),
                        label: "Flash Sheets".into(),
                        view: "gallery_grid".into(),
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "healed_work".into(),
                        label: "Healed Work".into(),
                        view: "gallery_grid".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
        ],
    }
}

fn day_spa() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![
                    TemplateComponent {
                        id: "overview".into(),
                        label: "Spa Overview".into(),
                        view: "overview_cards".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "room_board".into(),
                        label: "Treatment Rooms".into(),
                        view: "room_schedule".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "appointments".into(),
                label: "Bookings".into(),
                icon: "calendar".into(),
                components: vec![TemplateComponent {
                    id: "calendar".into(),
                    label: "Booking Calendar".into(),
                    view: "appointment_calendar".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "clients".into(),
                label: "Guests".into(),
                icon: "users".into(),
                components: vec![
                    TemplateComponent {
                        id: "client_list".into(),
                        label: "Guest List".into(),
                        view: "client_table".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "memberships".into(),
                        label: "Memberships".into(),
                        view: "membership_table".into(),
                        removable: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "services".into(),
                label: "Treatments".into(),
                icon: "sparkles".into(),
                components: vec![
                    TemplateComponent {
                        id: "menu".into(),
                        label: "Treatment Menu".into(),
                        view: "service_menu".into(),
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "packages".into(),
                        label: "Packages & Gift Cards".into(),
                        view: "gift_card_list".into(),
                        removable: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
        ],
    }
}

fn lash_studio() -> TemplateConfig {
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
                id: "appointments".into(),
                label: "Appointments".into(),
                icon: "calendar".into(),
                components: vec![
                    TemplateComponent {
                        id: "calendar".into(),
                        label: "Booking Calendar".into(),
                        view: "appointment_calendar".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "fill_tracker".into(),
                        label: "Fill Reminders".into(),
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
                        id: "patch_tests".into(),
                        label: "Patch Test Records".into(),
                        view: "intake_form".into(),
                        locked: true,
                        ..Default::default()
                    },
                ],
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
