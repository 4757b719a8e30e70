use coursesched_core::engine::{
    conflicts, find_conflict, generate_schedules, has_conflict_with_existing,
};
use coursesched_core::models::{course::Course, day::Day, section::Section};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn section(day: Day, start: &str, end: &str) -> Section {
    Section::parse(day, start, end).expect("valid section")
}

fn course(name: &str, sections: Vec<Section>) -> Course {
    Course::new(name, sections).expect("valid course")
}

#[rstest]
#[case(section(Day::Monday, "09:00", "10:00"), section(Day::Monday, "10:00", "11:00"), false)]
#[case(section(Day::Monday, "09:00", "10:30"), section(Day::Monday, "10:00", "11:00"), true)]
#[case(section(Day::Monday, "09:00", "10:00"), section(Day::Tuesday, "09:00", "10:00"), false)]
#[case(section(Day::Wednesday, "08:00", "17:00"), section(Day::Wednesday, "12:00", "12:30"), true)]
#[case(section(Day::Sunday, "23:00", "23:59"), section(Day::Sunday, "00:00", "01:00"), false)]
fn test_conflicts(#[case] a: Section, #[case] b: Section, #[case] expected: bool) {
    assert_eq!(conflicts(&a, &b), expected);
    assert_eq!(conflicts(&b, &a), expected, "conflict check must be symmetric");
}

#[rstest]
#[case(section(Day::Monday, "09:00", "10:00"))]
#[case(section(Day::Thursday, "00:00", "00:01"))]
#[case(section(Day::Saturday, "12:00", "23:59"))]
fn test_section_conflicts_with_itself(#[case] a: Section) {
    assert!(conflicts(&a, &a));
}

#[test]
fn test_has_conflict_with_existing_ignores_own_course() {
    let math = course(
        "Math",
        vec![section(Day::Monday, "09:00", "10:00")],
    );
    let art = course("Art", vec![section(Day::Tuesday, "09:00", "10:00")]);
    let all = vec![math.clone(), art.clone()];

    // An alternative Math section at the same time is allowed.
    assert!(!has_conflict_with_existing(
        &section(Day::Monday, "09:00", "10:00"),
        &math,
        &all
    ));
    assert!(has_conflict_with_existing(
        &section(Day::Tuesday, "09:30", "10:30"),
        &math,
        &all
    ));
    assert!(!has_conflict_with_existing(
        &section(Day::Tuesday, "10:00", "11:00"),
        &math,
        &all
    ));
}

#[test]
fn test_find_conflict_reports_first_offender() {
    let editing = course("New", vec![]);
    let all = vec![
        course("Math", vec![section(Day::Friday, "09:00", "10:00")]),
        course("Art", vec![section(Day::Friday, "09:30", "11:00")]),
    ];

    let (offender, existing) =
        find_conflict(&section(Day::Friday, "09:45", "10:15"), &editing, &all).unwrap();

    assert_eq!(offender.name, "Math");
    assert_eq!(*existing, section(Day::Friday, "09:00", "10:00"));
}

#[test]
fn test_generate_full_product_without_conflicts() {
    let courses = vec![
        course(
            "A",
            vec![
                section(Day::Monday, "09:00", "10:00"),
                section(Day::Tuesday, "09:00", "10:00"),
            ],
        ),
        course(
            "B",
            vec![
                section(Day::Wednesday, "09:00", "10:00"),
                section(Day::Thursday, "09:00", "10:00"),
            ],
        ),
    ];

    let schedules = generate_schedules(&courses);

    assert_eq!(schedules.len(), 4);
}

#[test]
fn test_generate_drops_conflicting_pair() {
    let a1 = section(Day::Monday, "09:00", "10:00");
    let a2 = section(Day::Tuesday, "09:00", "10:00");
    let b1 = section(Day::Monday, "09:30", "10:30");
    let b2 = section(Day::Wednesday, "09:00", "10:00");
    let courses = vec![course("A", vec![a1, a2]), course("B", vec![b1, b2])];

    let schedules = generate_schedules(&courses);

    let picked: Vec<(Section, Section)> = schedules
        .iter()
        .map(|s| (s.choices()[0].section, s.choices()[1].section))
        .collect();
    assert_eq!(picked, vec![(a1, b2), (a2, b1), (a2, b2)]);
}

#[test]
fn test_generated_schedules_are_sound() {
    let courses = vec![
        course(
            "Math",
            vec![
                section(Day::Monday, "09:00", "10:30"),
                section(Day::Monday, "13:00", "14:30"),
                section(Day::Tuesday, "09:00", "10:30"),
            ],
        ),
        course(
            "Physics",
            vec![
                section(Day::Monday, "10:00", "11:00"),
                section(Day::Tuesday, "10:30", "12:00"),
            ],
        ),
        course(
            "Art",
            vec![
                section(Day::Monday, "10:30", "13:30"),
                section(Day::Tuesday, "08:00", "09:30"),
            ],
        ),
    ];

    let schedules = generate_schedules(&courses);

    assert!(!schedules.is_empty());
    for schedule in &schedules {
        assert_eq!(schedule.choices().len(), 3);
        let sections: Vec<&Section> = schedule.choices().iter().map(|c| &c.section).collect();
        for (i, a) in sections.iter().enumerate() {
            for b in &sections[i + 1..] {
                assert!(!conflicts(a, b));
            }
        }
        assert!(schedule.is_conflict_free());
    }
}

#[test]
fn test_generate_matches_filtered_product_order() {
    let courses = vec![
        course(
            "A",
            vec![
                section(Day::Monday, "09:00", "10:00"),
                section(Day::Monday, "11:00", "12:00"),
                section(Day::Friday, "09:00", "10:00"),
            ],
        ),
        course(
            "B",
            vec![
                section(Day::Monday, "09:30", "11:30"),
                section(Day::Friday, "09:00", "10:00"),
            ],
        ),
        course("C", vec![section(Day::Monday, "11:30", "12:30")]),
    ];

    let mut expected = Vec::new();
    for a in &courses[0].sections {
        for b in &courses[1].sections {
            for c in &courses[2].sections {
                if !conflicts(a, b) && !conflicts(a, c) && !conflicts(b, c) {
                    expected.push(vec![*a, *b, *c]);
                }
            }
        }
    }

    let generated: Vec<Vec<Section>> = generate_schedules(&courses)
        .iter()
        .map(|s| s.choices().iter().map(|c| c.section).collect())
        .collect();

    assert_eq!(generated, expected);
}

#[test_log::test]
fn test_generate_skips_courses_without_sections() {
    let courses = vec![
        course("Empty", vec![]),
        course("A", vec![section(Day::Monday, "09:00", "10:00")]),
    ];

    let schedules = generate_schedules(&courses);

    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0].choices().len(), 1);
    assert_eq!(schedules[0].choices()[0].course, "A");
}

#[test]
fn test_generate_without_courses_is_empty() {
    assert!(generate_schedules(&[]).is_empty());
    assert!(generate_schedules(&[course("Empty", vec![])]).is_empty());
}

#[test]
fn test_chronological_orders_by_day_then_time() {
    let courses = vec![
        course("Late", vec![section(Day::Friday, "08:00", "09:00")]),
        course("Afternoon", vec![section(Day::Monday, "14:00", "15:00")]),
        course("Morning", vec![section(Day::Monday, "08:00", "09:00")]),
    ];

    let schedules = generate_schedules(&courses);
    let names: Vec<&str> = schedules[0]
        .chronological()
        .iter()
        .map(|choice| choice.course.as_str())
        .collect();

    assert_eq!(names, vec!["Morning", "Afternoon", "Late"]);
}
