//! Education family tables.

use super::{BusinessFamily, FamilyCatalog};
use crate::templates::{TemplateComponent, TemplateConfig, TemplateTab};

pub(super) fn catalog() -> FamilyCatalog {
    FamilyCatalog {
        family: BusinessFamily::Education,
        aliases: vec![
            ("tutoring", "tutoring"),
            ("tutor", "tutoring"),
            ("test prep", "test_prep"),
            ("sat prep", "test_prep"),
            ("music school", "music_school"),
            ("music lessons", "music_school"),
            ("piano lessons", "music_school"),
            ("guitar lessons", "music_school"),
            ("dance studio", "dance_studio"),
            ("dance school", "dance_studio"),
            ("ballet", "dance_studio"),
            ("daycare", "daycare"),
            ("childcare", "daycare"),
            ("child care", "daycare"),
            ("preschool", "preschool"),
            ("driving school", "driving_school"),
            ("driving lessons", "driving_school"),
            ("language school", "language_school"),
            ("language classes", "language_school"),
            ("martial arts", "martial_arts"),
            ("karate", "martial_arts"),
            ("taekwondo", "martial_arts"),
            ("jiu jitsu", "martial_arts"),
            ("dojo", "martial_arts"),
            ("art school", "art_school"),
            ("art classes", "art_school"),
            ("swim school", "swim_school"),
            ("swim lessons", "swim_school"),
        ],
        templates: vec![
            ("tutoring", tutoring()),
            ("music_school", music_school()),
            ("dance_studio", dance_studio()),
            ("daycare", daycare()),
        ],
        generic_aliases: vec![
            ("test_prep", "tutoring"),
            ("driving_school", "tutoring"),
            ("language_school", "tutoring"),
            ("martial_arts", "dance_studio"),
            ("swim_school", "dance_studio"),
            ("art_school", "music_school"),
            ("preschool", "daycare"),
        ],
    }
}

fn tutoring() -> TemplateConfig {
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
                id: "sessions".into(),
                label: "Sessions".into(),
                icon: "calendar".into(),
                components: vec![
                    TemplateComponent {
                        id: "calendar".into(),
                        label: "Session Calendar".into(),
                        view: "appointment_calendar".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "lesson_plans".into(),
                        label: "Lesson Plans".into(),
                        view: "lesson_planner".into(),
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
                        id: "progress".into(),
                        label: "Progress Tracking".into(),
                        view: "report_charts".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "billing".into(),
                label: "Billing".into(),
                icon: "receipt".into(),
                removable: true,
                components: vec![TemplateComponent {
                    id: "invoice_list".into(),
                    label: "Invoices".into(),
                    view: "invoice_list".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn music_school() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "School Overview".into(),
                    view: "overview_cards".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
            TemplateTab {
                id: "lessons".into(),
                label: "Lessons".into(),
                icon: "music".into(),
                components: vec![
                    TemplateComponent {
                        id: "lesson_calendar".into(),
                        label: "Lesson Calendar".into(),
                        view: "appointment_calendar".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "practice_rooms".into(),
                        label: "Practice Rooms".into(),
                        view: "room_schedule".into(),
                        removable: true,
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
                        id: "instructors".into(),
                        label: "Instructors".into(),
                        view: "staff_roster".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "recitals".into(),
                label: "Recitals".into(),
                icon: "sparkles".into(),
                removable: true,
                components: vec![TemplateComponent {
                    id: "recital_calendar".into(),
                    label: "Recitals & Showcases".into(),
                    view: "event_calendar".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}

fn dance_studio() -> TemplateConfig {
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
                        id: "tuition".into(),
                        label: "Tuition Plans".into(),
                        view: "membership_table".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "showcase".into(),
                label: "Showcase".into(),
                icon: "sparkles".into(),
                removable: true,
                components: vec![
                    TemplateComponent {
                        id: "recital_calendar".into(),
                        label: "Recitals".into(),
                        view: "event_calendar".into(),
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "costume_tracker".into(),
                        label: "Costume Tracker".into(),
                        view: "inventory_table".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
        ],
    }
}

fn daycare() -> TemplateConfig {
    TemplateConfig {
        tabs: vec![
            TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![
                    TemplateComponent {
                        id: "overview".into(),
                        label: "Center Overview".into(),
                        view: "overview_cards".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "ratios".into(),
                        label: "Room Ratios".into(),
                        view: "room_schedule".into(),
                        locked: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "children".into(),
                label: "Children".into(),
                icon: "users".into(),
                components: vec![
                    TemplateComponent {
                        id: "enrollment".into(),
                        label: "Enrollment".into(),
                        view: "client_table".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "attendance".into(),
                        label: "Sign In / Sign Out".into(),
                        view: "attendance_sheet".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "allergy_notes".into(),
                        label: "Allergy & Care Notes".into(),
                        view: "note_cards".into(),
                        locked: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "parents".into(),
                label: "Parents".into(),
                icon: "message-circle".into(),
                components: vec![
                    TemplateComponent {
                        id: "daily_reports".into(),
                        label: "Daily Reports".into(),
                        view: "note_cards".into(),
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "photo_updates".into(),
                        label: "Photo Updates".into(),
                        view: "gallery_grid".into(),
                        removable: true,
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            TemplateTab {
                id: "billing".into(),
                label: "Billing".into(),
                icon: "receipt".into(),
                components: vec![TemplateComponent {
                    id: "tuition_invoices".into(),
                    label: "Tuition Invoices".into(),
                    view: "invoice_list".into(),
                    locked: true,
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    }
}
