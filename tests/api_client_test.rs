//! End-to-end tests of the public client API against mocked Cartola responses

use cartola::{ApiClient, CartolaError, MarketInfo, Outcome, Round, Table};
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Market payload shaped like the live `atletas/mercado/` response.
fn create_market_response() -> Value {
    json!({
        "atletas": [
            {
                "atleta_id": 68952,
                "apelido": "Pedro",
                "clube_id": 262,
                "posicao_id": 5,
                "status_id": 7,
                "pontos_num": 8.1,
                "preco_num": 17.45,
                "scout": {"G": 2, "FS": 1},
                "gato_mestre": {"minutos_jogados": 90}
            },
            {
                "atleta_id": 71123,
                "apelido": "Cano",
                "clube_id": 264,
                "posicao_id": 5,
                "status_id": 2,
                "pontos_num": 0.0,
                "preco_num": 9.3,
                "scout": {}
            }
        ],
        "clubes": {
            "262": {"id": 262, "nome": "Flamengo", "abreviacao": "FLA"},
            "264": {"id": 264, "nome": "Fluminense", "abreviacao": "FLU"}
        },
        "posicoes": {
            "1": {"id": 1, "nome": "Goleiro", "abreviacao": "gol"},
            "5": {"id": 5, "nome": "Atacante", "abreviacao": "ata"}
        },
        "status": {
            "2": {"id": 2, "nome": "Dúvida"},
            "7": {"id": 7, "nome": "Provável"}
        }
    })
}

fn create_matches_response() -> Value {
    json!({
        "partidas": [
            {
                "partida_id": 1,
                "clube_casa_id": 262,
                "clube_visitante_id": 264,
                "placar_oficial_mandante": null,
                "local": "Maracanã",
                "transmissao": {"label": "Premiere", "url": ""}
            },
            {
                "partida_id": 2,
                "clube_casa_id": 275,
                "clube_visitante_id": 276,
                "placar_oficial_mandante": 1,
                "local": "Allianz Parque"
            }
        ],
        "rodada": 10
    })
}

async fn mock_get(route: &str, response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

fn text_column(table: &Table, name: &str) -> Vec<String> {
    table
        .column(name)
        .into_iter()
        .map(|v| v.and_then(Value::as_str).unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn test_market_athletes_flatten_nested_fields() {
    let server = mock_get(
        "/atletas/mercado/",
        ResponseTemplate::new(200).set_body_json(create_market_response()),
    )
    .await;
    let client = ApiClient::with_base_url(server.uri()).unwrap();

    let Outcome::Data(table) = client.get_market(MarketInfo::Atletas).await else {
        panic!("expected athletes table");
    };

    assert_eq!(table.len(), 2);
    let columns = table.columns();
    assert!(columns.contains(&"scout.G".to_string()));
    assert!(columns.contains(&"gato_mestre.minutos_jogados".to_string()));
    assert!(!columns.contains(&"scout".to_string()));
    assert_eq!(text_column(&table, "apelido"), vec!["Pedro", "Cano"]);
    assert_eq!(table.get(1, "scout.G"), None);
}

#[tokio::test]
async fn test_market_keyed_collections() {
    let server = mock_get(
        "/atletas/mercado/",
        ResponseTemplate::new(200).set_body_json(create_market_response()),
    )
    .await;
    let client = ApiClient::with_base_url(server.uri()).unwrap();

    for info in [MarketInfo::Clubes, MarketInfo::Posicoes, MarketInfo::Status] {
        let table = client
            .get_market(info)
            .await
            .into_option()
            .unwrap_or_else(|| panic!("expected {info} table"));

        assert_eq!(table.len(), 2, "{info}");
        assert_eq!(table.columns()[..2], ["id".to_string(), "nome".to_string()]);
    }
}

#[tokio::test]
async fn test_matches_keep_null_cells() {
    let server = mock_get(
        "/partidas/",
        ResponseTemplate::new(200).set_body_json(create_matches_response()),
    )
    .await;
    let client = ApiClient::with_base_url(server.uri()).unwrap();

    let table = client.get_matches().await.into_option().unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get(0, "placar_oficial_mandante"), Some(&Value::Null));
    assert_eq!(table.get(0, "transmissao.label"), Some(&json!("Premiere")));
    assert_eq!(table.get(1, "transmissao.label"), None);
    assert_eq!(text_column(&table, "local"), vec!["Maracanã", "Allianz Parque"]);
}

#[tokio::test]
async fn test_scores_round_in_path() {
    let server = mock_get(
        "/atletas/pontuados/38",
        ResponseTemplate::new(200).set_body_json(json!({
            "atletas": {
                "68952": {"apelido": "Pedro", "pontuacao": 15.2, "clube_id": 262},
                "71123": {"apelido": "Cano", "pontuacao": -1.5, "clube_id": 264}
            },
            "rodada": 38,
            "total_atletas": 2
        })),
    )
    .await;
    let client = ApiClient::with_base_url(server.uri()).unwrap();

    let table = client.get_scores(&Round::from(38u16)).await.into_option().unwrap();

    assert_eq!(table.columns(), vec!["apelido", "pontuacao", "clube_id"]);
    assert_eq!(table.column("pontuacao"), vec![Some(&json!(15.2)), Some(&json!(-1.5))]);
}

#[tokio::test]
async fn test_every_operation_is_fail_soft() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let client = ApiClient::with_base_url(server.uri()).unwrap();

    assert!(client.fetch("partidas/").await.is_no_data());
    assert!(client.get_scores(&Round::from(1u16)).await.is_no_data());
    assert!(client.get_market("clubes").await.is_no_data());
    assert!(client.get_matches().await.is_no_data());
}

#[tokio::test]
async fn test_missing_keys_are_shape_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"mensagem": "Mercado fechado"})))
        .mount(&server)
        .await;
    let client = ApiClient::with_base_url(server.uri()).unwrap();

    let outcomes = [
        client.get_scores(&Round::from(1u16)).await,
        client.get_market(MarketInfo::Atletas).await,
        client.get_market("clubes").await,
        client.get_matches().await,
    ];

    for outcome in outcomes {
        match outcome.reason() {
            Some(e) if matches!(e, CartolaError::MissingKey { .. }) => assert!(e.is_shape()),
            other => panic!("Expected MissingKey, got {:?}", other),
        }
    }
}
