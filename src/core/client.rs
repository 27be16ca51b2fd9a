use crate::config::ClientConfig;
use crate::core::{
    ApiEnvelope, AssessmentSubmission, ConfigProvider, HistoryEntry, LoginData, RegisterData,
    Result, StatusMessage, SubmitReceipt, UserKind,
};
use crate::domain::model::{
    AssessmentBody, LoginBody, RegisterBody, ResetConfirmBody, ResetRequestBody,
};
use crate::utils::error::ClientError;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// PETdor 後端的 API 客戶端
///
/// 每個操作都是獨立的一次請求往返，結果一律收斂成 `ApiEnvelope<T>`，
/// 不會向呼叫端拋出錯誤。
pub struct ApiClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl ApiClient<ClientConfig> {
    /// 以環境變數組態建立客戶端
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }
}

impl<C: ConfigProvider> ApiClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// 送出疼痛評估（需要 bearer token）
    pub async fn submit_assessment(
        &self,
        assessment: &AssessmentSubmission,
        token: &str,
    ) -> ApiEnvelope<SubmitReceipt> {
        let body = AssessmentBody {
            tutor_nome: &assessment.owner_name,
            tutor_email: &assessment.owner_email,
            pet_nome: &assessment.pet_name,
            pet_especie: &assessment.pet_species,
            pet_raca: &assessment.pet_breed,
            pet_idade: &assessment.pet_age,
            nivel_dor: assessment.parsed_pain_level(),
            sinais_clinicos: &assessment.clinical_signs,
            observacoes: &assessment.observations,
        };

        settle(
            "submit_assessment",
            self.execute(Method::POST, "/assessment/submit", Some(token), Some(&body))
                .await,
        )
    }

    /// 使用者登入
    pub async fn login(&self, email: &str, password: &str) -> ApiEnvelope<LoginData> {
        let body = LoginBody {
            email,
            senha: password,
        };

        settle(
            "login",
            self.execute(Method::POST, "/auth/login", None, Some(&body))
                .await,
        )
    }

    /// 註冊新使用者
    pub async fn register(
        &self,
        nome: &str,
        email: &str,
        password: &str,
        tipo: UserKind,
    ) -> ApiEnvelope<RegisterData> {
        let body = RegisterBody {
            nome,
            email,
            senha: password,
            tipo,
        };

        settle(
            "register",
            self.execute(Method::POST, "/auth/register", None, Some(&body))
                .await,
        )
    }

    /// 申請密碼重設
    pub async fn request_password_reset(&self, email: &str) -> ApiEnvelope<StatusMessage> {
        let body = ResetRequestBody { email };

        settle(
            "request_password_reset",
            self.execute(
                Method::POST,
                "/auth/password-reset/request",
                None,
                Some(&body),
            )
            .await,
        )
    }

    /// 以重設 token 更換密碼
    pub async fn reset_password(&self, token: &str, new_password: &str) -> ApiEnvelope<StatusMessage> {
        let body = ResetConfirmBody {
            token,
            nova_senha: new_password,
        };

        settle(
            "reset_password",
            self.execute(
                Method::POST,
                "/auth/password-reset/confirm",
                None,
                Some(&body),
            )
            .await,
        )
    }

    /// 取得使用者的評估歷史（需要 bearer token）
    pub async fn get_assessment_history(&self, token: &str) -> ApiEnvelope<Vec<HistoryEntry>> {
        settle(
            "get_assessment_history",
            self.execute::<_, ()>(Method::GET, "/assessment/history", Some(token), None)
                .await,
        )
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.config.api_base_url().trim_end_matches('/'),
            path
        )
    }

    /// 共用的請求執行器：組 URL、掛 header、送出並解析回應信封
    async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<ApiEnvelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        let mut request = self.client.request(method, &url);

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        if let Some(timeout) = self.config.timeout_seconds() {
            request = request.timeout(std::time::Duration::from_secs(timeout));
        }

        tracing::debug!("📡 Making API request to: {}", url);
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("📡 API response status: {}", status);

        if !status.is_success() {
            return Err(ClientError::HttpStatusError {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.as_u16().to_string()),
            });
        }

        // 成功回應直接信任後端的信封形狀
        let envelope = response.json::<ApiEnvelope<T>>().await?;
        Ok(envelope)
    }
}

/// 失敗一律轉成 failure envelope，錯誤不跨出操作邊界
fn settle<T>(operation: &str, result: Result<ApiEnvelope<T>>) -> ApiEnvelope<T> {
    match result {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::error!("❌ {} failed: {}", operation, e);
            ApiEnvelope::failure(e.to_string())
        }
    }
}
