use httpmock::prelude::*;
use trade_desk::adapters::sample;
use trade_desk::core::{Provenance, QueryKind, QueryRequest, Rows, Session};
use trade_desk::domain::model::Flow;
use trade_desk::{ComtradeClient, FirmCatalog, QueryResolver};

fn resolver(endpoint: String) -> QueryResolver<ComtradeClient, FirmCatalog> {
    QueryResolver::new(
        ComtradeClient::new(endpoint, 5),
        FirmCatalog::bundled(),
        sample::bundled_trade_rows(),
    )
}

fn session() -> Session {
    Session::Authenticated {
        user: "guleroglu".to_string(),
    }
}

fn commodity_request(use_live: bool) -> QueryRequest {
    QueryRequest {
        country: Some("Sırbistan".to_string()),
        year: 2023,
        flow: Flow::Import,
        query: QueryKind::Commodity("0805".to_string()),
        use_live,
    }
}

#[tokio::test]
async fn live_query_returns_normalized_rows_from_the_api() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/preview")
            .query_param("reporterCode", "688")
            .query_param("period", "2023")
            .query_param("cmdCode", "0805")
            .query_param("flowCode", "M")
            .query_param("customsCode", "C00");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "data": [
                    {"partnerDesc": "Türkiye", "cmdCode": "0805", "primaryValue": "123.4"},
                    {"partnerDesc": "Greece", "cmdCode": "0805", "primaryValue": 555}
                ]
            }));
    });

    let rs = resolver(server.url("/preview"))
        .resolve(&session(), &commodity_request(true))
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(rs.provenance, Provenance::Live);
    match &rs.rows {
        Rows::Trade(rows) => {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].primary_value, 123.4);
            assert_eq!(rows[1].primary_value, 555.0);
        }
        Rows::Firms(_) => panic!("expected trade rows"),
    }
}

#[tokio::test]
async fn server_error_degrades_to_bundled_sample() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/preview");
        then.status(500);
    });

    let rs = resolver(server.url("/preview"))
        .resolve(&session(), &commodity_request(true))
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(rs.provenance, Provenance::Sample);
    assert_eq!(rs.len(), sample::bundled_trade_rows().len());
}

#[tokio::test]
async fn offline_query_never_calls_the_api() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/preview");
        then.status(200).json_body(serde_json::json!({"data": []}));
    });

    let rs = resolver(server.url("/preview"))
        .resolve(&session(), &commodity_request(false))
        .await
        .unwrap();

    api_mock.assert_hits(0);
    assert_eq!(rs.provenance, Provenance::Sample);
}

#[tokio::test]
async fn all_countries_query_uses_the_fallback_reporter() {
    let server = MockServer::start();
    // The mock only answers when the fallback reporter code is sent.
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/preview")
            .query_param("reporterCode", "688");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "data": [{"partnerDesc": "Greece", "primaryValue": 1}]
            }));
    });

    let mut request = commodity_request(true);
    request.country = None;
    let rs = resolver(server.url("/preview"))
        .resolve(&session(), &request)
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(rs.provenance, Provenance::Live);
}

#[tokio::test]
async fn firm_query_searches_the_local_catalog_only() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/preview");
        then.status(200).json_body(serde_json::json!({"data": []}));
    });

    let request = QueryRequest {
        country: None,
        year: 2023,
        flow: Flow::Import,
        query: QueryKind::Firm("MPM Fruit".to_string()),
        use_live: true,
    };
    let rs = resolver(server.url("/preview"))
        .resolve(&session(), &request)
        .await
        .unwrap();

    api_mock.assert_hits(0);
    assert_eq!(rs.provenance, Provenance::Sample);
    match &rs.rows {
        Rows::Firms(rows) => assert_eq!(rows[0].firm_name, "MPM Fruit DOO"),
        Rows::Trade(_) => panic!("expected firm rows"),
    }
}

#[tokio::test]
async fn unknown_firm_yields_empty_provenance() {
    let server = MockServer::start();
    let request = QueryRequest {
        country: None,
        year: 2023,
        flow: Flow::Import,
        query: QueryKind::Firm("zzz-nonexistent".to_string()),
        use_live: false,
    };

    let rs = resolver(server.url("/preview"))
        .resolve(&session(), &request)
        .await
        .unwrap();

    assert_eq!(rs.provenance, Provenance::Empty);
    assert_eq!(rs.len(), 0);
}
