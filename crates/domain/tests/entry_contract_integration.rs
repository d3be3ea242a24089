//! Integration tests for the persisted entry contract
//!
//! The JSON shape of a history entry is shared with every store, so these
//! tests pin it field by field.

use duosync_domain::schema::{parse_json, parse_summaries};
use duosync_domain::{
    DatabaseEntry, Experience, Progression, SessionInformation, StreakInformation,
};
use serde_json::json;

fn sample_entry() -> DatabaseEntry {
    DatabaseEntry {
        date: "2024/04/23".to_string(),
        progression: Progression {
            experience: Experience { xp_goal: 20, xp_today: 15 },
            session_information: SessionInformation { number_of_sessions: 2, session_time: 300 },
        },
        streak_information: StreakInformation { site_streak: 5 },
        time: "08:00:00".to_string(),
    }
}

#[test]
fn test_entry_serializes_to_persisted_shape() {
    let value = serde_json::to_value(sample_entry()).unwrap();

    assert_eq!(
        value,
        json!({
            "date": "2024/04/23",
            "progression": {
                "experience": { "xp_goal": 20, "xp_today": 15 },
                "session_information": { "number_of_sessions": 2, "session_time": 300 }
            },
            "streak_information": { "site_streak": 5 },
            "time": "08:00:00"
        })
    );
}

#[test]
fn test_stored_history_file_reads_back_unchanged() {
    // Reverse-chronological, as stores keep it
    let stored = r#"[
        {"date": "2024/04/24", "progression": {"experience": {"xp_goal": 20, "xp_today": 40},
         "session_information": {"number_of_sessions": 3, "session_time": 600}},
         "streak_information": {"site_streak": 6}, "time": "21:15:09"},
        {"date": "2024/04/23", "progression": {"experience": {"xp_goal": 20, "xp_today": 15},
         "session_information": {"number_of_sessions": 2, "session_time": 300}},
         "streak_information": {"site_streak": 5}, "time": "08:00:00"}
    ]"#;

    let history: Vec<DatabaseEntry> = serde_json::from_str(stored).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1], sample_entry());
    assert_eq!(history[0].time, "21:15:09");

    let rewritten: serde_json::Value = serde_json::to_value(&history).unwrap();
    let original: serde_json::Value = serde_json::from_str(stored).unwrap();
    assert_eq!(rewritten, original);
}

#[test]
fn test_entry_with_missing_time_is_rejected() {
    let result = serde_json::from_value::<DatabaseEntry>(json!({
        "date": "2024/04/23",
        "progression": {
            "experience": { "xp_goal": 20, "xp_today": 15 },
            "session_information": { "number_of_sessions": 2, "session_time": 300 }
        },
        "streak_information": { "site_streak": 5 }
    }));
    assert!(result.is_err());
}

#[test]
fn test_raw_response_text_to_progressions() {
    let body = r#"{"summaries": [
        {"date": 1713830400, "dailyGoalXp": 20, "gainedXp": 60, "numSessions": 4, "totalSessionTime": 0}
    ]}"#;

    let summaries = parse_summaries(&parse_json(body).unwrap()).unwrap();
    let progression = Progression::from(&summaries[0]);

    assert_eq!(progression.experience.xp_today, 60);
    assert_eq!(progression.session_information.number_of_sessions, 4);
}
