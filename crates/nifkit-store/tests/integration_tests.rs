//! Integration tests for the SPARQL store client against a mock backend

use mockito::{Matcher, Server};
use nifkit_domain::vocabulary as voc;
use nifkit_domain::{AnnotationGraph, GraphBuilder, Iri, Literal};
use nifkit_store::{GraphStore, SparqlStore, StoreConfig, StoreError, StoreProtocol};

const GRAPH: &str = "http://localhost:8080/graph/0190a7d2-1c3e-7000-8000-000000000001";
const DOC: &str = "http://localhost:8080/resource/0190a7d2-1c3e-7000-8000-000000000002";

fn sample_graph() -> (AnnotationGraph, Iri) {
    let graph_iri = Iri::new(GRAPH).unwrap();
    let doc = Iri::new(DOC).unwrap();

    let mut builder = GraphBuilder::new();
    builder
        .add(&doc, &voc::rdf_type(), voc::nif_context())
        .add(&doc, &voc::nif_is_string(), Literal::string("Hello world."))
        .add(&doc, &voc::nif_begin_index(), Literal::int(0))
        .add(&doc, &voc::nif_end_index(), Literal::int(12))
        .add(&doc, &voc::rdfs_is_defined_by(), graph_iri.clone());
    (builder.build(), graph_iri)
}

#[tokio::test]
async fn test_sparql_update_single_request() {
    let mut server = Server::new_async().await;
    let (graph, graph_iri) = sample_graph();

    let mock = server
        .mock("POST", "/sparql-auth")
        .match_header("content-type", "application/sparql-update")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(format!(r"INSERT DATA \{{\s+GRAPH <{}> \{{", GRAPH)),
            Matcher::Regex(r#""Hello world\.""#.to_string()),
            Matcher::Regex(r#""12"\^\^<http://www\.w3\.org/2001/XMLSchema#int>"#.to_string()),
        ]))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let store = SparqlStore::new(StoreConfig::with_endpoint(server.url())).unwrap();
    store.store(&graph, &graph_iri).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_basic_auth_header() {
    let mut server = Server::new_async().await;
    let (graph, graph_iri) = sample_graph();

    let mock = server
        .mock("POST", "/sparql-auth")
        .match_header("authorization", "Basic ZGJhOmRiYQ==")
        .with_status(200)
        .create_async()
        .await;

    let mut config = StoreConfig::with_endpoint(server.url());
    config.username = Some("dba".to_string());
    config.password = Some("dba".to_string());

    let store = SparqlStore::new(config).unwrap();
    store.store(&graph, &graph_iri).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_no_auth_header_without_credentials() {
    let mut server = Server::new_async().await;
    let (graph, graph_iri) = sample_graph();

    let mock = server
        .mock("POST", "/sparql-auth")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .create_async()
        .await;

    let store = SparqlStore::new(StoreConfig::with_endpoint(server.url())).unwrap();
    store.store(&graph, &graph_iri).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_failure_status_is_reported() {
    let mut server = Server::new_async().await;
    let (graph, graph_iri) = sample_graph();

    let mock = server
        .mock("POST", "/sparql-auth")
        .with_status(500)
        .with_body("SR171: Transaction timed out")
        .expect(1)
        .create_async()
        .await;

    let store = SparqlStore::new(StoreConfig::with_endpoint(server.url())).unwrap();
    let result = store.store(&graph, &graph_iri).await;

    match result {
        Err(StoreError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("SR171"));
        }
        other => panic!("expected status error, got {:?}", other),
    }

    // No retry inside the client
    mock.assert_async().await;
}

#[tokio::test]
async fn test_client_error_status_is_reported() {
    let mut server = Server::new_async().await;
    let (graph, graph_iri) = sample_graph();

    let _mock = server
        .mock("POST", "/sparql-auth")
        .with_status(401)
        .create_async()
        .await;

    let store = SparqlStore::new(StoreConfig::with_endpoint(server.url())).unwrap();
    let result = store.store(&graph, &graph_iri).await;
    assert!(matches!(result, Err(StoreError::Status { status: 401, .. })));
}

#[tokio::test]
async fn test_graph_store_protocol() {
    let mut server = Server::new_async().await;
    let (graph, graph_iri) = sample_graph();

    let mock = server
        .mock("POST", "/sparql-graph-crud-auth")
        .match_query(Matcher::UrlEncoded("graph".to_string(), GRAPH.to_string()))
        .match_header("content-type", "application/n-triples")
        .match_body(graph.to_ntriples().as_str())
        .with_status(201)
        .expect(1)
        .create_async()
        .await;

    let mut config = StoreConfig::with_endpoint(server.url());
    config.protocol = StoreProtocol::GraphStore;

    let store = SparqlStore::new(config).unwrap();
    store.store(&graph, &graph_iri).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_refused() {
    // Reserve a port, then free it so nothing is listening
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let (graph, graph_iri) = sample_graph();

    let store =
        SparqlStore::new(StoreConfig::with_endpoint(format!("http://127.0.0.1:{}", port))).unwrap();
    let result = store.store(&graph, &graph_iri).await;

    assert!(matches!(result, Err(StoreError::Connection(_))));
}

#[tokio::test]
async fn test_timeout_is_bounded() {
    // Accepts connections but never answers
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let mut config = StoreConfig::with_endpoint(format!("http://{}", addr));
    config.timeout_secs = 1;
    let (graph, graph_iri) = sample_graph();

    let store = SparqlStore::new(config).unwrap();
    let result = store.store(&graph, &graph_iri).await;

    assert!(matches!(result, Err(StoreError::Timeout(_))));
    server.abort();
}

#[test]
fn test_invalid_config_rejected() {
    let result = SparqlStore::new(StoreConfig::with_endpoint("not a url"));
    assert!(matches!(result, Err(StoreError::Config(_))));
}
