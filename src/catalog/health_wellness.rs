//! Health & Wellness family tables.

use super::{BusinessFamily, FamilyCatalog};
use crate::templates::{TemplateComponent, TemplateConfig, TemplateTab};

pub(super) fn catalog() -> FamilyCatalog {
    FamilyCatalog {
        family: BusinessFamily::HealthWellness,
        aliases: vec![
            ("gym", "gym"),
            ("fitness center", "gym"),
            ("fitness studio", "gym"),
            ("health club", "gym"),
            ("yoga studio", "yoga_studio"),
            ("yoga", "yoga_studio"),
            ("pilates", "pilates_studio"),
            ("crossfit", "crossfit_box"),
            ("personal trainer", "personal_training"),
            ("personal training", "personal_training"),
            ("dental clinic", "dental_clinic"),
            ("dentist", "dental_clinic"),
            ("dental", "dental_clinic"),
            ("orthodontist", "dental_clinic"),
            ("physical therapy", "physical_therapy"),
            ("physiotherapy", "physical_therapy"),
            ("physio", "physical_therapy"),
            ("rehab clinic", "physical_therapy"),
            ("chiropractor", "chiropractic"),
            ("chiropractic", "chiropractic"),
            ("acupuncture", "acupuncture"),
            ("nutritionist", "nutrition_coaching"),
            ("dietitian", "nutrition_coaching"),
            ("nutrition coach", "nutrition_coaching"),
        ],
        templates: vec![
            ("gym", gym()),
            ("yoga_studio", yoga_studio()),
            ("dental_clinic", dental_clinic()),
            ("physical_therapy", physical_therapy()),
        ],
        generic_aliases: vec![
            ("personal_training", "gym"),
            ("crossfit_box", "gym"),
            ("nutrition_coaching", "gym"),
            ("pilates_studio", "yoga_studio"),
            ("chiropractic", "physical_therapy"),
            ("acupuncture", "physical_therapy"),
        ],
    }
}

fn gym() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![
                    TemplateComponent {
                        id: "overview".into(),
                        label: "Gym Overview".into(),
                        view: "overview_cards".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "checkins_today".into(),
                        label: "Check-ins Today".into(),
                        view: "attendance_sheet".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "members".into(),
                label: "Members".into(),
                icon: "users".into(),
                components: vec![
                    TemplateComponent {
                        id: "member_list".into(),
                        label: "Member List".into(),
                        view: "client_table".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "memberships".into(),
                        label: "Membership Plans".into(),
                        view: "membership_table".into(),
                        locked: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "classes".into(),
                label: "Classes".into(),
                icon: "calendar".into(),
                components: vec![
                    TemplateComponent {
                        id: "class_schedule".into(),
                        label: "Class Schedule".into(),
                        view: "class_schedule".into(),
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "trainer_sessions".into(),
                        label: "PT Sessions".into(),
                        view: "appointment_calendar".into(),
                        removable: true,
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
                    id: "dues".into(),
                    label: "Dues & Invoices".into(),
                    view: "invoice_list".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn yoga_studio() -> TemplateConfig {
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
                id: "classes".into(),
                label: "Classes".into(),
                icon: "calendar".into(),
                components: vec![
                    TemplateComponent {
                        id: "class_schedule".into(),
                        label: "Class Schedule".into(),
                        view: "class_schedule".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "attendance".into(),
                        label: "Attendance".into(),
                        view: "attendance_sheet".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "students".into(),
                label: "Students".into(),
                icon: "users".into(),
                components: vec![
                    TemplateComponent {
                        id: "student_list".into(),
                        label: "Student List".into(),
                        view: "client_table".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "class_packs".into(),
                        label: "Class Packs".into(),
                        view: "membership_table".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "workshops".into(),
                label: "Workshops".into(),
                icon: "sparkles".into(),
                removable: true,
                components: vec![TemplateComponent {
                    id: "workshop_list".into(),
                    label: "Workshops & Retreats".into(),
                    view: "event_calendar".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn dental_clinic() -> TemplateConfig {
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
                        label: "Chair Schedule".into(),
                        view: "appointment_calendar".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "recalls".into(),
                        label: "Recall Reminders".into(),
                        view: "reminder_list".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "patients".into(),
                label: "Patients".into(),
                icon: "users".into(),
                components: vec![
                    TemplateComponent {
                        id: "patient_list".into(),
                        label: "Patient List".into(),
                        view: "client_table".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "treatment_plans".into(),
                        label: "Treatment Plans".into(),
                        view: "pipeline_board".into(),
                        locked: true,
                        stages: vec![
                            "Proposed".into(),
                            "Accepted".into(),
                            "In Progress".into(),
                            "Complete".into(),
                        ],
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "intake".into(),
                        label: "Intake Forms".into(),
                        view: "intake_form".into(),
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
                    id: "claims".into(),
                    label: "Insurance Claims".into(),
                    view: "claim_table".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn physical_therapy() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Practice Overview".into(),
                    view: "overview_cards".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "appointments".into(),
                label: "Sessions".into(),
                icon: "calendar".into(),
                components: vec![TemplateComponent {
                    id: "calendar".into(),
                    label: "Session Calendar".into(),
                    view: "appointment_calendar".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "patients".into(),
                label: "Patients".into(),
                icon: "users".into(),
                components: vec![
                    TemplateComponent {
                        id: "patient_list".into(),
                        label: "Patient List".into(),
                        view: "client_table".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "care_plans".into(),
                        label: "Care Plans".into(),
                        view: "pipeline_board".into(),
                        stages: vec![
                            "Evaluation".into(),
                            "Active Treatment".into(),
                            "Re-evaluation".into(),
                            "Discharged".into(),
                        ],
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "home_exercises".into(),
                        label: "Home Exercise Plans".into(),
                        view: "document_vault".into(),
                        removable: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
        ],
    }
}
