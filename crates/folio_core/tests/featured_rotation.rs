use folio_core::{
    load_records_from_str, select_featured, FeaturedCarousel, FeaturedRotation, ProjectRecord,
    ScheduledTick, TickControl,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn featured(slug: &str, order: Option<i64>) -> ProjectRecord {
    let mut record = ProjectRecord::new(slug, slug, 2024);
    record.featured = true;
    record.featured_order = order;
    record
}

fn three_slide_rotation() -> FeaturedRotation {
    FeaturedRotation::from_records(&[
        featured("a", Some(1)),
        featured("b", Some(2)),
        featured("c", Some(3)),
    ])
}

fn wait_until(deadline: Duration, mut done: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if done() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    done()
}

#[test]
fn selection_orders_by_featured_order_with_unordered_last() {
    let mut plain = ProjectRecord::new("plain", "plain", 2025);
    plain.featured_order = Some(0);
    let records = vec![
        featured("unordered", None),
        featured("second", Some(2)),
        plain,
        featured("first", Some(1)),
    ];

    let slugs = select_featured(&records)
        .into_iter()
        .map(|record| record.slug.as_str())
        .collect::<Vec<_>>();
    assert_eq!(slugs, vec!["first", "second", "unordered"]);
}

#[test]
fn only_numeric_one_is_featured_in_source_data() {
    let records = load_records_from_str(
        r#"[
            { "slug": "bool", "featured": true, "featuredOrder": 1 },
            { "slug": "one", "featured": 1, "featuredOrder": 2 },
            { "slug": "text", "featured": "1" }
        ]"#,
    );
    let slugs = select_featured(&records)
        .into_iter()
        .map(|record| record.slug.as_str())
        .collect::<Vec<_>>();
    assert_eq!(slugs, vec!["one"]);
}

#[test]
fn next_wraps_from_last_to_first() {
    let mut rotation = three_slide_rotation();
    rotation.go_to(2);
    assert_eq!(rotation.next(), Some(0));
    assert_eq!(rotation.active().unwrap().slug, "a");
}

#[test]
fn empty_rotation_ignores_navigation() {
    let mut rotation = FeaturedRotation::from_records(&[ProjectRecord::new("x", "x", 2020)]);
    assert!(rotation.is_empty());
    assert_eq!(rotation.next(), None);
    assert_eq!(rotation.previous(), None);
    assert_eq!(rotation.go_to(3), None);
    assert_eq!(rotation.position(), None);
    assert!(!rotation.tick());
    assert!(!rotation.wants_timer());
}

#[test]
fn paused_rotation_does_not_tick() {
    let mut rotation = three_slide_rotation();
    rotation.set_paused(true);
    assert!(!rotation.tick());
    assert_eq!(rotation.index(), 0);

    rotation.set_paused(false);
    assert!(rotation.tick());
    assert_eq!(rotation.index(), 1);
}

#[test]
fn scheduled_tick_stops_on_cancel() {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let mut tick = ScheduledTick::every(Duration::from_millis(10), move || {
        seen.fetch_add(1, Ordering::SeqCst);
        TickControl::Continue
    })
    .unwrap();

    assert!(wait_until(Duration::from_secs(2), || count.load(Ordering::SeqCst) >= 2));
    tick.cancel();
    assert!(!tick.is_active());

    let after_cancel = count.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(50));
    assert_eq!(count.load(Ordering::SeqCst), after_cancel);
}

#[test]
fn carousel_advances_on_its_own() {
    let carousel = FeaturedCarousel::start(three_slide_rotation(), Duration::from_millis(20));
    assert!(carousel.is_scheduled());
    assert!(wait_until(Duration::from_secs(2), || carousel.snapshot().index() != 0));
    assert!(carousel.snapshot().is_transitioning());
}

#[test]
fn paused_carousel_holds_its_slide() {
    let mut carousel = FeaturedCarousel::start(three_slide_rotation(), Duration::from_millis(10));
    carousel.set_paused(true);
    assert!(!carousel.is_scheduled());

    let held = carousel.snapshot().index();
    thread::sleep(Duration::from_millis(60));
    assert_eq!(carousel.snapshot().index(), held);

    carousel.set_paused(false);
    assert!(carousel.is_scheduled());
}

#[test]
fn manual_navigation_restarts_the_interval() {
    let mut carousel = FeaturedCarousel::start(three_slide_rotation(), Duration::from_secs(30));
    assert_eq!(carousel.go_to(2), Some(2));
    assert_eq!(carousel.next(), Some(0));
    assert_eq!(carousel.previous(), Some(2));
    assert!(carousel.is_scheduled());

    carousel.settle_transition();
    assert!(!carousel.snapshot().is_transitioning());

    carousel.stop();
    assert!(!carousel.is_scheduled());
    assert_eq!(carousel.snapshot().index(), 2);
}

#[test]
fn carousel_without_slides_never_schedules() {
    let mut carousel = FeaturedCarousel::start(FeaturedRotation::default(), Duration::from_millis(5));
    assert!(!carousel.is_scheduled());
    assert_eq!(carousel.next(), None);
    carousel.set_paused(false);
    assert!(!carousel.is_scheduled());
}
