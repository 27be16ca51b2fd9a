pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::ClientConfig;
pub use core::client::ApiClient;
pub use domain::model::{
    ApiEnvelope, AssessmentSubmission, HistoryEntry, LoginData, RegisterData, StatusMessage,
    SubmitReceipt, UserKind, UserProfile,
};
pub use domain::ports::ConfigProvider;
pub use utils::error::{ClientError, Result};
