use course_subscription::course::{Course, HybridCourse, OfflineCourse, OnlineCourse};
use course_subscription::model::{CourseInfo, Student};
use course_subscription::subscription::mock::{CallJournal, MockSubscription};
use course_subscription::subscription::{
    CourseSubscription, OfflineSubscription, OnlineSubscription, SubscriptionError,
};
use std::sync::Arc;

fn eric() -> Student {
    Student::new(1, "Eric Jimenez")
}

fn render(course: &dyn Course, student: &Student, times: usize) -> String {
    let mut out = Vec::new();
    for _ in 0..times {
        course.subscribe(student, &mut out).expect("Subscription failed");
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn test_online_course_is_silent() {
    for (id, title) in [(111, "C# basico"), (112, "Go desde cero"), (113, "")] {
        let course = OnlineCourse::new(id, title);
        assert_eq!(render(&course, &eric(), 1), "");
        assert_eq!(render(&course, &Student::new(2, "Ana"), 3), "");
    }
}

#[test]
fn test_offline_course_reports_fixed_title() {
    let course = OfflineCourse::new(222, "C# intermedio");
    assert_eq!(course.title(), "C# intermedio");
    assert_eq!(
        render(&course, &eric(), 1),
        "Student Eric Jimenez subscribed to hybrid course C# basico\n"
    );
}

#[test]
fn test_offline_course_has_no_duplicate_guard() {
    let course = OfflineCourse::new(222, "C# intermedio");
    let output = render(&course, &Student::new(9, "Lucia"), 2);
    assert_eq!(output.lines().count(), 2);
    assert!(output.lines().all(|l| l == "Student Lucia subscribed to hybrid course C# basico"));
}

#[test]
fn test_hybrid_course_with_real_strategies() {
    let course = HybridCourse::new(
        CourseInfo::new(333, "C# Avanzado"),
        Arc::new(OnlineSubscription),
        Arc::new(OfflineSubscription),
    );
    assert_eq!(
        render(&course, &eric(), 2),
        "Student Eric Jimenez subscribed to hybrid course C# basico\n\
         Student Eric Jimenez subscribed to hybrid course C# basico\n"
    );
}

/// One pair of strategies can back several hybrid courses.
#[test]
fn test_hybrid_courses_share_strategies() {
    let journal = CallJournal::default();
    let online = MockSubscription::with_journal("online", journal.clone());
    let offline = MockSubscription::with_journal("offline", journal.clone());
    let online_shared: Arc<dyn CourseSubscription> = Arc::new(online.clone());
    let offline_shared: Arc<dyn CourseSubscription> = Arc::new(offline.clone());

    let first = HybridCourse::new(
        CourseInfo::new(333, "C# Avanzado"),
        online_shared.clone(),
        offline_shared.clone(),
    );
    let second = HybridCourse::new(
        CourseInfo::new(444, "Rust Avanzado"),
        online_shared,
        offline_shared,
    );

    online.expect_subscribe(1, 333).return_ok();
    offline.expect_subscribe(1, 333).return_ok();
    online.expect_subscribe(1, 444).return_ok();
    offline.expect_subscribe(1, 444).return_ok();

    first.subscribe(&eric(), &mut Vec::new()).unwrap();
    second.subscribe(&eric(), &mut Vec::new()).unwrap();

    let order: Vec<(String, u32)> = online
        .calls()
        .into_iter()
        .map(|c| (c.strategy, c.course_id))
        .collect();
    assert_eq!(
        order,
        vec![
            ("online".to_string(), 333),
            ("offline".to_string(), 333),
            ("online".to_string(), 444),
            ("offline".to_string(), 444),
        ]
    );
    online.verify();
    offline.verify();
}

#[test]
fn test_hybrid_course_propagates_offline_failure() {
    let online = MockSubscription::new("online");
    let offline = MockSubscription::new("offline");
    online.expect_subscribe(1, 333).return_ok();
    offline.expect_subscribe(1, 333).return_err("no seats left");

    let course = HybridCourse::new(
        CourseInfo::new(333, "C# Avanzado"),
        Arc::new(online.clone()),
        Arc::new(offline.clone()),
    );
    let err = course.subscribe(&eric(), &mut Vec::new()).unwrap_err();

    assert!(matches!(err, SubscriptionError::Rejected(_)));
    assert_eq!(err.to_string(), "Subscription rejected: no seats left");
    online.verify();
    offline.verify();
}

#[test]
#[should_panic(expected = "Not all expectations were met")]
fn test_mock_verify_reports_missed_calls() {
    let mock = MockSubscription::new("offline");
    mock.expect_subscribe(1, 222).return_ok();
    mock.verify();
}
