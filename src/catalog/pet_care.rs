//! Pet Care family tables.

use super::{BusinessFamily, FamilyCatalog};
use crate::templates::{TemplateComponent, TemplateConfig, TemplateTab};

pub(super) fn catalog() -> FamilyCatalog {
    FamilyCatalog {
        family: BusinessFamily::PetCare,
        aliases: vec![
            ("pet grooming", "pet_grooming"),
            ("dog grooming", "pet_grooming"),
            ("groomer", "pet_grooming"),
            ("grooming", "pet_grooming"),
            ("veterinary", "veterinary_clinic"),
            ("veterinarian", "veterinary_clinic"),
            ("animal hospital", "veterinary_clinic"),
            ("vet clinic", "veterinary_clinic"),
            ("vet", "veterinary_clinic"),
            ("dog boarding", "dog_boarding"),
            ("boarding", "dog_boarding"),
            ("kennel", "dog_boarding"),
            ("dog walking", "dog_walking"),
            ("dog walker", "dog_walking"),
            ("pet sitting", "pet_sitting"),
            ("pet sitter", "pet_sitting"),
            ("dog training", "dog_training"),
            ("dog trainer", "dog_training"),
            ("obedience", "dog_training"),
            ("pet daycare", "pet_daycare"),
            ("doggy daycare", "pet_daycare"),
        ],
        templates: vec![
            ("pet_grooming", pet_grooming()),
            ("veterinary_clinic", veterinary_clinic()),
            ("dog_boarding", dog_boarding()),
        ],
        generic_aliases: vec![
            ("dog_walking", "dog_boarding"),
            ("pet_sitting", "dog_boarding"),
            ("dog_training", "dog_boarding"),
            ("pet_daycare", "dog_boarding"),
        ],
    }
}

fn pet_grooming() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Salon Overview".into(),
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
                        label: "Grooming Calendar".into(),
                        view: "appointment_calendar".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "groom_queue".into(),
                        label: "Today's Grooms".into(),
                        view: "order_queue".into(),
                        auto_progress: true,
                        stages: vec![
                            "Checked In".into(),
                            "Bathing".into(),
                            "Drying".into(),
                            "Trimming".into(),
                            "Ready for Pickup".into(),
                        ],
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "pets".into(),
                label: "Pets".into(),
                icon: "paw".into(),
                components: vec![
                    TemplateComponent {
                        id: "pet_profiles".into(),
                        label: "Pet Profiles".into(),
                        view: "pet_profiles".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "vaccine_records".into(),
                        label: "Vaccine Records".into(),
                        view: "vaccine_records".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "groom_notes".into(),
                        label: "Groom Notes".into(),
                        view: "note_cards".into(),
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

fn veterinary_clinic() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Clinic Overview".into(),
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
                        label: "Exam Schedule".into(),
                        view: "appointment_calendar".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "triage".into(),
                        label: "Triage Queue".into(),
                        view: "order_queue".into(),
                        stages: vec![
                            "Waiting".into(),
                            "In Exam".into(),
                            "Treatment".into(),
                            "Discharged".into(),
                        ],
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "patients".into(),
                label: "Patients".into(),
                icon: "paw".into(),
                components: vec![
                    TemplateComponent {
                        id: "pet_profiles".into(),
                        label: "Patient Records".into(),
                        view: "pet_profiles".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "vaccine_records".into(),
                        label: "Vaccination Schedule".into(),
                        view: "vaccine_records".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "lab_results".into(),
                        label: "Lab Results".into(),
                        view: "document_vault".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "billing".into(),
                label: "Billing".into(),
                icon: "credit-card".into(),
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

fn dog_boarding() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![
                    TemplateComponent {
                        id: "overview".into(),
                        label: "Facility Overview".into(),
                        view: "overview_cards".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "kennel_board".into(),
                        label: "Kennel Occupancy".into(),
                        view: "room_schedule".into(),
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
                        id: "stay_calendar".into(),
                        label: "Stay Calendar".into(),
                        view: "event_calendar".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "checkins".into(),
                        label: "Check-ins / Check-outs".into(),
                        view: "attendance_sheet".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "pets".into(),
                label: "Pets".into(),
                icon: "paw".into(),
                components: vec![
                    TemplateComponent {
                        id: "pet_profiles".into(),
                        label: "Pet Profiles".into(),
                        view: "pet_profiles".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "vaccine_records".into(),
                        label: "Vaccine Records".into(),
                        view: "vaccine_records".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "feeding_notes".into(),
                        label: "Feeding & Meds Notes".into(),
                        view: "note_cards".into(),
                        removable: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
        ],
    }
}
