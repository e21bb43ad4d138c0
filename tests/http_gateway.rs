//! Wire-level tests for the HTTP gateway: endpoint shapes, singleton-array
//! unwrapping, the ambiguous empty next-task outcome, empty completion
//! bodies, and transport-failure mapping.

use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use formflow_core::client::types::{CompleteTaskRequest, MessageCorrelationRequest};
use formflow_core::client::{HttpWorkflowEngine, WorkflowEngine};
use formflow_core::config::EngineConfig;
use formflow_core::error::FormFlowError;
use formflow_core::models::VariableValue;

async fn gateway(server: &MockServer) -> HttpWorkflowEngine {
    let config = EngineConfig {
        base_url: server.uri(),
        ..EngineConfig::default()
    };
    HttpWorkflowEngine::new(&config).unwrap()
}

#[tokio::test]
async fn empty_task_array_is_the_ambiguous_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/task"))
        .and(query_param("processInstanceId", "p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let next = gateway(&server).await.fetch_next_task("p1").await.unwrap();
    assert_eq!(next, None);
}

#[tokio::test]
async fn singleton_task_array_is_unwrapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/task"))
        .and(query_param("processInstanceId", "p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "t7",
            "name": "Review",
            "processInstanceId": "p1",
            "created": "2024-03-01T12:30:00.000+0000"
        }])))
        .mount(&server)
        .await;

    let task = gateway(&server)
        .await
        .fetch_next_task("p1")
        .await
        .unwrap()
        .expect("task should be present");
    assert_eq!(task.id, "t7");
    assert_eq!(task.name.as_deref(), Some("Review"));
    assert!(task.created.is_some());
}

#[tokio::test]
async fn non_success_status_maps_to_engine_transport() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/task"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .await
        .fetch_next_task("p1")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        FormFlowError::EngineTransport { operation, .. } if operation == "fetch_next_task"
    ));
}

#[tokio::test]
async fn complete_task_posts_variables_and_tolerates_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/task/t1/complete"))
        .and(body_json(json!({
            "withVariablesInReturn": true,
            "variables": {
                "componentsList[0].properties.submitRequiredFields[0]": {
                    "value": "Alice",
                    "type": "String"
                }
            }
        })))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut request = CompleteTaskRequest {
        with_variables_in_return: true,
        ..CompleteTaskRequest::default()
    };
    request.variables.insert(
        "componentsList[0].properties.submitRequiredFields[0]".to_string(),
        VariableValue::string("Alice"),
    );

    let response = gateway(&server)
        .await
        .complete_task("t1", &request)
        .await
        .unwrap();
    assert_eq!(response, Value::Null);
}

#[tokio::test]
async fn complete_task_returns_engine_body_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/task/t1/complete"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "state": "completed" })),
        )
        .mount(&server)
        .await;

    let response = gateway(&server)
        .await
        .complete_task("t1", &CompleteTaskRequest::default())
        .await
        .unwrap();
    assert_eq!(response["state"], json!("completed"));
}

#[tokio::test]
async fn form_variables_arrive_as_envelope_map() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/task/t1/form-variables"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "viewJson": { "value": "{\"componentsList\":[]}", "type": "String" },
            "attempts": { "value": 2, "type": "Integer" }
        })))
        .mount(&server)
        .await;

    let variables = gateway(&server)
        .await
        .fetch_form_variables("t1")
        .await
        .unwrap();
    assert_eq!(
        variables.get("viewJson").and_then(VariableValue::as_str),
        Some("{\"componentsList\":[]}")
    );
    assert_eq!(variables["attempts"].value, json!(2));
}

#[tokio::test]
async fn correlation_results_arrive_as_singleton_array() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "variables": { "token": { "value": "abc", "type": "String" } }
        }])))
        .mount(&server)
        .await;

    let request = MessageCorrelationRequest {
        message_name: "getToken".to_string(),
        result_enabled: true,
        variables_in_result_enabled: true,
        ..MessageCorrelationRequest::default()
    };
    let result = gateway(&server)
        .await
        .correlate_message(&request)
        .await
        .unwrap();
    assert_eq!(
        result.variables.get("token").and_then(VariableValue::as_str),
        Some("abc")
    );
}

#[tokio::test]
async fn assignee_query_lists_every_task() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/task"))
        .and(query_param("assignee", "reviewer-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "t1" },
            { "id": "t2" }
        ])))
        .mount(&server)
        .await;

    let tasks = gateway(&server)
        .await
        .tasks_for_assignee("reviewer-1")
        .await
        .unwrap();
    let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2"]);
}
