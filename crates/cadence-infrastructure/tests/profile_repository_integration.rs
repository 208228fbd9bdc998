use chrono::{NaiveTime, Utc};
use std::sync::Arc;

use cadence_domain::profile::{Profile, ProfileRepository, ProfileSettings, StreakChange, WorkHours};
use cadence_domain::shared::UserId;
use cadence_infrastructure::persistence::repositories::SqliteProfileRepository;

mod test_helpers;

#[tokio::test]
async fn profile_repo_save_and_find_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteProfileRepository::new(Arc::new(pool.clone()));

    let user_id = UserId::new();
    let profile = Profile::new(user_id.clone(), "Ada".to_string());

    repo.save(&profile).await.expect("Save profile");

    let found = repo
        .find_by_user_id(&user_id)
        .await
        .expect("Find profile")
        .expect("Profile should be found");

    assert_eq!(found.display_name(), "Ada");
    assert_eq!(found.current_streak(), 0);
    assert_eq!(found.last_check_in_date(), None);
    assert_eq!(found.work_hours(), WorkHours::default());
}

#[tokio::test]
async fn profile_repo_persists_streak_state() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteProfileRepository::new(Arc::new(pool.clone()));

    let user_id = UserId::new();
    let mut profile = Profile::new(user_id.clone(), "Ada".to_string());

    let change = profile.apply_check_in(Utc::now());
    assert!(matches!(change, StreakChange::Restarted { current: 1, .. }));

    repo.save(&profile).await.expect("Save profile");

    let found = repo
        .find_by_user_id(&user_id)
        .await
        .expect("Find profile")
        .expect("Profile should exist");

    assert_eq!(found.current_streak(), 1);
    assert_eq!(found.longest_streak(), 1);
    assert!(found.last_check_in_date().is_some());
}

#[tokio::test]
async fn profile_repo_upsert_is_last_write_wins() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteProfileRepository::new(Arc::new(pool.clone()));

    let user_id = UserId::new();
    let mut profile = Profile::new(user_id.clone(), "Ada".to_string());
    repo.save(&profile).await.expect("Save profile");

    profile
        .update_settings(ProfileSettings {
            display_name: "Ada L.".to_string(),
            work_hours: WorkHours::new(
                NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
            ),
            check_in_frequency: 6,
            utc_offset_minutes: 60,
            reminders_enabled: true,
        })
        .expect("Update settings");
    repo.save(&profile).await.expect("Save updated profile");

    let found = repo
        .find_by_user_id(&user_id)
        .await
        .expect("Find profile")
        .expect("Profile should exist");

    assert_eq!(found.display_name(), "Ada L.");
    assert_eq!(found.check_in_frequency(), 6);
    assert_eq!(found.utc_offset_minutes(), 60);
    assert!(found.reminders_enabled());
}

#[tokio::test]
async fn profile_repo_lists_only_reminder_enabled_profiles() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteProfileRepository::new(Arc::new(pool.clone()));

    let mut with_reminders = Profile::new(UserId::new(), "Ada".to_string());
    with_reminders
        .update_settings(ProfileSettings {
            display_name: "Ada".to_string(),
            work_hours: WorkHours::default(),
            check_in_frequency: 4,
            utc_offset_minutes: 0,
            reminders_enabled: true,
        })
        .expect("Enable reminders");

    let without_reminders = Profile::new(UserId::new(), "Grace".to_string());

    repo.save(&with_reminders).await.expect("Save first");
    repo.save(&without_reminders).await.expect("Save second");

    let enabled = repo
        .find_reminder_enabled()
        .await
        .expect("List reminder-enabled");

    assert_eq!(enabled.len(), 1);
    assert_eq!(enabled[0].user_id(), with_reminders.user_id());
}
