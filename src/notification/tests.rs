use super::*;

fn context() -> DelayContext {
    DelayContext {
        task_name: "Medication Delivery".to_string(),
        robot: "Robot A".to_string(),
        room: "Room 101".to_string(),
    }
}

#[test]
fn test_add_appends_in_insertion_order() {
    let mut log = NotificationLog::new();

    log.add("first", None, None);
    log.add("second", None, None);
    log.add("third", None, None);

    let messages: Vec<&str> = log.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
    assert_eq!(log.last().unwrap().message, "third");
}

#[test]
fn test_ids_unique_within_same_millisecond() {
    let mut log = NotificationLog::new();

    for i in 0..500 {
        log.add(format!("burst {}", i), None, None);
    }

    let mut ids: Vec<Uuid> = log.iter().map(|n| n.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 500);
}

#[test]
fn test_add_never_deduplicates() {
    let mut log = NotificationLog::new();

    log.add("same", None, None);
    log.add("same", None, None);

    assert_eq!(log.len(), 2);
}

#[test]
fn test_context_kept_only_for_delay() {
    let mut log = NotificationLog::new();

    let delay = log.add("late", Some(NotificationKind::Delay), Some(context()));
    let plain = log.add("hello", None, Some(context()));
    let refusal = log.add("refused", Some(NotificationKind::Refusal), Some(context()));

    assert_eq!(delay.context, Some(context()));
    assert!(delay.is_delay());
    assert_eq!(plain.context, None);
    assert_eq!(refusal.context, None);
}

#[test]
fn test_clear_empties_log() {
    let mut log = NotificationLog::new();
    log.add("a", None, None);
    log.add("b", None, None);

    assert_eq!(log.clear(), 2);
    assert!(log.is_empty());

    // Log remains usable after clear
    log.add("c", None, None);
    assert_eq!(log.len(), 1);
}

#[test]
fn test_unbounded_by_default() {
    let mut log = NotificationLog::with_capacity_limit(0);

    for i in 0..2_000 {
        log.add(format!("n{}", i), None, None);
    }

    assert_eq!(log.len(), 2_000);
}

#[test]
fn test_capacity_evicts_oldest() {
    let mut log = NotificationLog::with_capacity_limit(3);

    for i in 0..5 {
        log.add(format!("n{}", i), None, None);
    }

    let messages: Vec<&str> = log.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, vec!["n2", "n3", "n4"]);
}

#[test]
fn test_companion_feed_hides_clinical_alerts() {
    let mut log = NotificationLog::new();

    log.add("New task assigned", None, None);
    log.add("late", Some(NotificationKind::Delay), Some(context()));
    log.add("refused", Some(NotificationKind::Refusal), None);
    log.add("failed", Some(NotificationKind::Failed), None);
    log.add("Delivered", None, None);

    let feed: Vec<&str> = log
        .companion_feed()
        .into_iter()
        .map(|n| n.message.as_str())
        .collect();
    assert_eq!(feed, vec!["New task assigned", "Delivered"]);
    assert_eq!(log.delay_alerts().len(), 1);
}

#[test]
fn test_append_draft() {
    let mut log = NotificationLog::new();

    let n = log.append(NotificationDraft::delay("late", context()));
    assert_eq!(n.kind, Some(NotificationKind::Delay));

    let n = log.append(NotificationDraft::info("hello"));
    assert_eq!(n.kind, None);
    assert_eq!(log.len(), 2);
}

#[test]
fn test_notification_serializes_camel_case() {
    let mut log = NotificationLog::new();
    let n = log.add("late", Some(NotificationKind::Delay), Some(context()));

    let json = serde_json::to_value(&n).unwrap();
    assert_eq!(json["kind"], "delay");
    assert_eq!(json["context"]["taskName"], "Medication Delivery");
    assert!(json.get("createdAt").is_some());

    let plain = log.add("hi", None, None);
    let json = serde_json::to_value(&plain).unwrap();
    assert!(json.get("kind").is_none());
    assert!(json.get("context").is_none());
}
