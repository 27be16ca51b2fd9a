use anyhow::Result;
use httpmock::prelude::*;
use petdor_client::{ApiClient, AssessmentSubmission, ClientConfig};

fn client_for(server: &MockServer) -> ApiClient<ClientConfig> {
    ApiClient::new(ClientConfig::new(server.base_url()))
}

fn sample_submission(pain_level: &str) -> AssessmentSubmission {
    AssessmentSubmission {
        owner_name: "Maria Silva".to_string(),
        owner_email: "maria@example.com".to_string(),
        pet_name: "Rex".to_string(),
        pet_species: "cao".to_string(),
        pet_breed: "labrador".to_string(),
        pet_age: "4".to_string(),
        pain_level: pain_level.to_string(),
        clinical_signs: "claudicando, sem apetite".to_string(),
        observations: "piora ao subir escadas".to_string(),
    }
}

/// 評估送出時欄位需轉成後端名稱，並附上 bearer token
#[tokio::test]
async fn test_submit_assessment_maps_fields_and_sends_bearer_token() -> Result<()> {
    let server = MockServer::start();

    let submit_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/assessment/submit")
            .header("authorization", "Bearer token_abc_123")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "tutor_nome": "Maria Silva",
                "tutor_email": "maria@example.com",
                "pet_nome": "Rex",
                "pet_especie": "cao",
                "pet_raca": "labrador",
                "pet_idade": "4",
                "nivel_dor": 7,
                "sinais_clinicos": "claudicando, sem apetite",
                "observacoes": "piora ao subir escadas"
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "success": true,
                "data": {
                    "pdf_url": "https://petdor.app/reports/42.pdf",
                    "assessment_id": "42"
                }
            }));
    });

    let client = client_for(&server);
    let envelope = client
        .submit_assessment(&sample_submission("7"), "token_abc_123")
        .await;

    submit_mock.assert();
    assert!(envelope.success);
    let data = envelope.data.expect("success envelope should carry data");
    assert_eq!(data.pdf_url, "https://petdor.app/reports/42.pdf");
    assert_eq!(data.assessment_id, "42");
    Ok(())
}

/// 無法解析的疼痛等級不在本地擋下，wire 上以 null 送出
#[tokio::test]
async fn test_submit_assessment_unparsable_pain_level_sends_null() -> Result<()> {
    let server = MockServer::start();

    let submit_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/assessment/submit")
            .header("authorization", "Bearer token_abc_123")
            .json_body(serde_json::json!({
                "tutor_nome": "Maria Silva",
                "tutor_email": "maria@example.com",
                "pet_nome": "Rex",
                "pet_especie": "cao",
                "pet_raca": "labrador",
                "pet_idade": "4",
                "nivel_dor": null,
                "sinais_clinicos": "claudicando, sem apetite",
                "observacoes": "piora ao subir escadas"
            }));
        then.status(200).json_body(serde_json::json!({
            "success": true,
            "data": {
                "pdf_url": "https://petdor.app/reports/43.pdf",
                "assessment_id": "43"
            }
        }));
    });

    let client = client_for(&server);
    let envelope = client
        .submit_assessment(&sample_submission("abc"), "token_abc_123")
        .await;

    submit_mock.assert();
    assert!(envelope.success);
    Ok(())
}

#[tokio::test]
async fn test_submit_assessment_server_error_becomes_failure_envelope() -> Result<()> {
    let server = MockServer::start();

    let submit_mock = server.mock(|when, then| {
        when.method(POST).path("/assessment/submit");
        then.status(500);
    });

    let client = client_for(&server);
    let envelope = client
        .submit_assessment(&sample_submission("7"), "token_abc_123")
        .await;

    submit_mock.assert();
    assert!(!envelope.success);
    assert_eq!(envelope.error.as_deref(), Some("Internal Server Error"));
    assert!(envelope.data.is_none());
    Ok(())
}

/// 歷史查詢是 GET，只帶 Authorization header，回應列表原樣通過
#[tokio::test]
async fn test_get_assessment_history_passes_list_through() -> Result<()> {
    let server = MockServer::start();

    let history_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/assessment/history")
            .header("authorization", "Bearer token_abc_123");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "success": true,
                "data": [
                    {"id": "42", "pet_nome": "Rex", "data": "2026-08-01", "nivel_dor": 7},
                    {"id": "43", "pet_nome": "Mimi", "data": "2026-08-03", "nivel_dor": 2}
                ]
            }));
    });

    let client = client_for(&server);
    let envelope = client.get_assessment_history("token_abc_123").await;

    history_mock.assert();
    assert!(envelope.success);
    let entries = envelope.data.expect("success envelope should carry data");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "42");
    assert_eq!(entries[0].pet_nome, "Rex");
    assert_eq!(entries[0].nivel_dor, 7);
    assert_eq!(entries[1].data, "2026-08-03");
    Ok(())
}

/// GET 請求不得攜帶 JSON body 的 content-type
#[tokio::test]
async fn test_get_assessment_history_sends_no_json_content_type() -> Result<()> {
    let server = MockServer::start();

    let content_type_sniffer = server.mock(|when, then| {
        when.method(GET)
            .path("/assessment/history")
            .header_exists("content-type");
        then.status(500);
    });

    let history_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/assessment/history")
            .header("authorization", "Bearer token_abc_123");
        then.status(200).json_body(serde_json::json!({
            "success": true,
            "data": []
        }));
    });

    let client = client_for(&server);
    let envelope = client.get_assessment_history("token_abc_123").await;

    history_mock.assert();
    content_type_sniffer.assert_hits(0);
    assert!(envelope.success);
    assert_eq!(envelope.data.expect("data").len(), 0);
    Ok(())
}

#[tokio::test]
async fn test_get_assessment_history_not_found_becomes_failure_envelope() -> Result<()> {
    let server = MockServer::start();

    let history_mock = server.mock(|when, then| {
        when.method(GET).path("/assessment/history");
        then.status(404);
    });

    let client = client_for(&server);
    let envelope = client.get_assessment_history("token_abc_123").await;

    history_mock.assert();
    assert!(!envelope.success);
    assert_eq!(envelope.error.as_deref(), Some("Not Found"));
    Ok(())
}
