pub mod client;

pub use crate::domain::model::{
    ApiEnvelope, AssessmentSubmission, HistoryEntry, LoginData, RegisterData, StatusMessage,
    SubmitReceipt, UserKind, UserProfile,
};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
