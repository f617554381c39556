use async_trait::async_trait;
use cachedns_application::ports::UpstreamGateway;
use cachedns_application::ResolveQueryUseCase;
use cachedns_domain::dns_message::wire;
use cachedns_domain::{DomainError, Message, QueryClass, QueryType, Question, RCode, Record};
use cachedns_infrastructure::{DnsRequestHandler, InMemoryCacheStore, JsonSnapshotStore};
use std::sync::Arc;

struct ScriptedGateway {
    reply: Option<Vec<u8>>,
}

#[async_trait]
impl UpstreamGateway for ScriptedGateway {
    async fn forward(&self, _raw_query: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.reply.clone().ok_or(DomainError::UpstreamTimeout)
    }
}

fn handler_with(
    data_dir: &std::path::Path,
    reply: Option<Vec<u8>>,
) -> DnsRequestHandler {
    let cache = Arc::new(InMemoryCacheStore::new());
    let snapshots = Arc::new(JsonSnapshotStore::new(data_dir));
    let upstream = Arc::new(ScriptedGateway { reply });
    let use_case = Arc::new(ResolveQueryUseCase::new(cache, upstream, snapshots));
    DnsRequestHandler::new(use_case)
}

fn query_bytes(id: u16, name: &str) -> Vec<u8> {
    wire::encode(&Message::query(
        id,
        vec![Question::new(name, QueryType::A, QueryClass::Internet)],
    ))
}

#[tokio::test]
async fn test_undecodable_datagram_yields_no_reply() {
    let dir = tempfile::tempdir().unwrap();
    let handler = handler_with(dir.path(), None);

    assert!(handler.handle_datagram(&[0u8; 5]).await.is_none());
    assert!(handler.handle_datagram(&[0xff; 11]).await.is_none());
}

#[tokio::test]
async fn test_unreachable_upstream_yields_refused_reply() {
    let dir = tempfile::tempdir().unwrap();
    let handler = handler_with(dir.path(), None);

    let reply = handler
        .handle_datagram(&query_bytes(900, "nowhere.test"))
        .await
        .unwrap();
    let decoded = wire::decode(&reply).unwrap();

    assert_eq!(decoded.id, 900);
    assert!(decoded.is_response);
    assert_eq!(decoded.r_code, RCode::Refused);
    assert!(decoded.answers.is_empty());
}

#[tokio::test]
async fn test_learned_answer_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let query = Message::query(
        77,
        vec![Question::new("example.com", QueryType::A, QueryClass::Internet)],
    );
    let record = Record::new(
        "example.com",
        QueryType::A,
        QueryClass::Internet,
        300,
        vec![93, 184, 216, 34],
    );
    let upstream_reply = wire::encode(&Message::response(
        &query,
        RCode::NoError,
        vec![record.clone()],
    ));

    // First process: learn from upstream, snapshots flushed on the way.
    {
        let handler = handler_with(dir.path(), Some(upstream_reply));
        handler.hydrate();
        let reply = handler
            .handle_datagram(&wire::encode(&query))
            .await
            .unwrap();
        assert_eq!(wire::decode(&reply).unwrap().answers, vec![record.clone()]);
        handler.flush();
    }

    // Second process: no upstream, answer must come from the snapshot.
    {
        let handler = handler_with(dir.path(), None);
        handler.hydrate();
        let reply = handler
            .handle_datagram(&wire::encode(&query))
            .await
            .unwrap();
        let decoded = wire::decode(&reply).unwrap();
        assert_eq!(decoded.r_code, RCode::NoError);
        assert_eq!(decoded.answers, vec![record]);
    }
}
