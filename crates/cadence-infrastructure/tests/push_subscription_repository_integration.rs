use std::sync::Arc;

use cadence_domain::notification::{PushSubscription, PushSubscriptionRepository};
use cadence_domain::shared::UserId;
use cadence_infrastructure::persistence::repositories::SqlitePushSubscriptionRepository;

mod test_helpers;

#[tokio::test]
async fn push_subscription_repo_save_and_list_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqlitePushSubscriptionRepository::new(Arc::new(pool.clone()));

    let user_id = UserId::new();
    let subscription = PushSubscription::new(
        user_id.clone(),
        "https://hooks.example.com/push/abc".to_string(),
        Some("Phone".to_string()),
    )
    .expect("Create subscription");

    repo.save(&subscription).await.expect("Save subscription");

    let listed = repo
        .find_by_user_id(&user_id)
        .await
        .expect("List subscriptions");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].endpoint(), "https://hooks.example.com/push/abc");
    assert_eq!(listed[0].label(), Some("Phone"));
    assert!(listed[0].is_enabled());
}

#[tokio::test]
async fn push_subscription_repo_enabled_filter() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqlitePushSubscriptionRepository::new(Arc::new(pool.clone()));

    let user_id = UserId::new();
    let enabled = PushSubscription::new(
        user_id.clone(),
        "https://hooks.example.com/push/on".to_string(),
        None,
    )
    .expect("Create subscription");
    repo.save(&enabled).await.expect("Save enabled");

    let mut disabled = PushSubscription::new(
        user_id.clone(),
        "https://hooks.example.com/push/off".to_string(),
        None,
    )
    .expect("Create subscription");
    disabled.set_enabled(false);
    repo.save(&disabled).await.expect("Save disabled");

    let only_enabled = repo
        .find_enabled_by_user_id(&user_id)
        .await
        .expect("List enabled subscriptions");

    assert_eq!(only_enabled.len(), 1);
    assert_eq!(only_enabled[0].endpoint(), "https://hooks.example.com/push/on");
}

#[tokio::test]
async fn push_subscription_repo_delete() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqlitePushSubscriptionRepository::new(Arc::new(pool.clone()));

    let user_id = UserId::new();
    let subscription = PushSubscription::new(
        user_id.clone(),
        "https://hooks.example.com/push/abc".to_string(),
        None,
    )
    .expect("Create subscription");
    repo.save(&subscription).await.expect("Save subscription");

    let removed = repo
        .delete(&user_id, subscription.id())
        .await
        .expect("Delete subscription");
    assert_eq!(removed, 1);

    let listed = repo
        .find_by_user_id(&user_id)
        .await
        .expect("List subscriptions");
    assert!(listed.is_empty());
}
