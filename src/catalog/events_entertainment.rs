//! Events & Entertainment family tables.

use super::{BusinessFamily, FamilyCatalog};
use crate::templates::{TemplateComponent, TemplateConfig, TemplateTab};

pub(super) fn catalog() -> FamilyCatalog {
    FamilyCatalog {
        family: BusinessFamily::EventsEntertainment,
        aliases: vec![
            ("event planner", "event_planning"),
            ("event planning", "event_planning"),
            ("events", "event_planning"),
            ("wedding planner", "wedding_planning"),
            ("wedding planning", "wedding_planning"),
            ("dj services", "dj_services"),
            ("disc jockey", "dj_services"),
            ("dj", "dj_services"),
            ("event venue", "venue_rental"),
            ("event space", "venue_rental"),
            ("banquet hall", "venue_rental"),
            ("venue", "venue_rental"),
            ("party rentals", "party_rentals"),
            ("party rental", "party_rentals"),
            ("bounce house", "party_rentals"),
            ("escape room", "escape_room"),
            ("photo booth", "photo_booth"),
        ],
        templates: vec![
            ("event_planning", event_planning()),
            ("venue_rental", venue_rental()),
            ("escape_room", escape_room()),
        ],
        generic_aliases: vec![
            ("wedding_planning", "event_planning"),
            ("dj_services", "event_planning"),
            ("party_rentals", "venue_rental"),
            ("photo_booth", "venue_rental"),
        ],
    }
}

fn event_planning() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Events Overview".into(),
                    view: "overview_cards".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "events".into(),
                label: "Events".into(),
                icon: "calendar".into(),
                components: vec![
                    TemplateComponent {
                        id: "event_pipeline".into(),
                        label: "Event Pipeline".into(),
                        view: "pipeline_board".into(),
                        locked: true,
                        auto_progress: true,
                        stages: vec![
                            "Inquiry".into(),
                            "Proposal".into(),
                            "Booked".into(),
                            "Planning".into(),
                            "Event Day".into(),
                            "Wrapped".into(),
                        ],
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "run_sheets".into(),
                        label: "Run Sheets".into(),
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
                id: "vendors".into(),
                label: "Vendors".into(),
                icon: "truck".into(),
                removable: true,
                components: vec![TemplateComponent {
                    id: "vendor_list".into(),
                    label: "Vendor Directory".into(),
                    view: "vendor_directory".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn venue_rental() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Venue Overview".into(),
                    view: "overview_cards".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "bookings".into(),
                label: "Bookings".into(),
                icon: "calendar".into(),
                components: vec![
                    TemplateComponent {
                        id: "availability".into(),
                        label: "Availability Calendar".into(),
                        view: "event_calendar".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "holds".into(),
                        label: "Holds & Deposits".into(),
                        view: "ledger_table".into(),
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
                        id: "rental_agreements".into(),
                        label: "Rental Agreements".into(),
                        view: "contract_table".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "spaces".into(),
                label: "Spaces".into(),
                icon: "building".into(),
                removable: true,
                components: vec![TemplateComponent {
                    id: "floor_plans".into(),
                    label: "Floor Plans".into(),
                    view: "gallery_grid".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn escape_room() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Venue Overview".into(),
                    view: "overview_cards".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "bookings".into(),
                label: "Bookings".into(),
                icon: "calendar".into(),
                components: vec![
                    TemplateComponent {
                        id: "slot_grid".into(),
                        label: "Room Slots".into(),
                        view: "class_schedule".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "waivers".into(),
                        label: "Waivers".into(),
                        view: "intake_form".into(),
                        locked: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "rooms".into(),
                label: "Rooms".into(),
                icon: "puzzle".into(),
                components: vec![
                    TemplateComponent {
                        id: "room_list".into(),
                        label: "Rooms & Themes".into(),
                        view: "room_schedule".into(),
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "leaderboard".into(),
                        label: "Leaderboard".into(),
                        view: "rank_list".into(),
                        removable: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
        ],
    }
}
