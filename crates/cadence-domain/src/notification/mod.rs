mod repository;
mod sender;
mod subscription;

pub use repository::PushSubscriptionRepository;
pub use sender::{NotificationMessage, NotificationSender};
pub use subscription::PushSubscription;
