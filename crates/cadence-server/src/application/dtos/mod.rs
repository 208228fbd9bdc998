mod check_in_dto;
mod notification_dto;
mod profile_dto;
mod recommendation_dto;
mod task_dto;
mod work_session_dto;

pub use check_in_dto::{
    CheckInCalendarDto, CheckInDayDto, CheckInDto, CheckInHeatmapDto, CheckInScheduleDto,
    HeatmapDayDto, MonthStatsDto, StreakOutcomeDto, SubmitCheckInRequest,
};
pub use notification_dto::{PushSubscriptionDto, RegisterSubscriptionRequest};
pub use profile_dto::{ProfileDto, StreakDto, UpdateProfileRequest};
pub use recommendation_dto::{AcceptRecommendationRequest, RecommendationSetDto, RecommendedTaskDto};
pub use task_dto::{
    ChangeTaskStatusRequest, CreateTaskRequest, TaskDto, TaskHistoryEntryDto, UpdateTaskRequest,
};
pub use work_session_dto::{StartWorkSessionRequest, WorkSessionDto};
