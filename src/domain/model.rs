use serde::{Deserialize, Serialize};

/// 疼痛評估表單的本地欄位
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub owner_name: String,
    pub owner_email: String,
    pub pet_name: String,
    pub pet_species: String,
    pub pet_breed: String,
    pub pet_age: String,
    pub pain_level: String,
    pub clinical_signs: String,
    pub observations: String,
}

impl AssessmentSubmission {
    /// 疼痛等級以前綴方式解析成整數（parseInt 語意），失敗時回傳 None
    pub fn parsed_pain_level(&self) -> Option<i64> {
        let trimmed = self.pain_level.trim();
        let (sign, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (-1i64, &trimmed[1..]),
            Some(b'+') => (1, &trimmed[1..]),
            _ => (1, trimmed),
        };

        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let digits = &rest[..end];

        if digits.is_empty() {
            return None;
        }

        digits.parse::<i64>().ok().map(|n| sign * n)
    }
}

/// 使用者類型，序列化為後端的小寫字串
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    Tutor,
    Clinica,
    Veterinario,
}

/// 後端回應的統一信封
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub pdf_url: String,
    pub assessment_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub nome: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterData {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub pet_nome: String,
    pub data: String,
    pub nivel_dor: i64,
}

// 以下為 wire 格式的請求 body，欄位名稱即後端期望的名稱（靜態轉換表）

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentBody<'a> {
    pub tutor_nome: &'a str,
    pub tutor_email: &'a str,
    pub pet_nome: &'a str,
    pub pet_especie: &'a str,
    pub pet_raca: &'a str,
    pub pet_idade: &'a str,
    pub nivel_dor: Option<i64>,
    pub sinais_clinicos: &'a str,
    pub observacoes: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginBody<'a> {
    pub email: &'a str,
    pub senha: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterBody<'a> {
    pub nome: &'a str,
    pub email: &'a str,
    pub senha: &'a str,
    pub tipo: UserKind,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResetRequestBody<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResetConfirmBody<'a> {
    pub token: &'a str,
    pub nova_senha: &'a str,
}
