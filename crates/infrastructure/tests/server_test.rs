mod helpers;

use ferrous_synth_application::ports::QueryHandler;
use ferrous_synth_domain::{ChainMode, DomainError};
use ferrous_synth_infrastructure::dns::SynthRequestHandler;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, RecordType};
use hickory_server::ServerFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};

async fn start_udp_server(handler: Arc<dyn QueryHandler>) -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    serve_udp(socket, handler)
}

fn serve_udp(socket: UdpSocket, handler: Arc<dyn QueryHandler>) -> SocketAddr {
    let addr = socket.local_addr().unwrap();

    let mut server = ServerFuture::new(SynthRequestHandler::new(handler));
    server.register_socket(socket);
    tokio::spawn(async move {
        let _ = server.block_until_done().await;
    });

    addr
}

async fn start_tcp_server(handler: Arc<dyn QueryHandler>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut server = ServerFuture::new(SynthRequestHandler::new(handler));
    server.register_listener(listener, Duration::from_secs(5));
    tokio::spawn(async move {
        let _ = server.block_until_done().await;
    });

    addr
}

async fn udp_exchange(server: SocketAddr, request: &Message) -> (Message, u16) {
    let bind = if server.is_ipv6() { "[::1]:0" } else { "127.0.0.1:0" };
    let client = UdpSocket::bind(bind).await.unwrap();
    let client_port = client.local_addr().unwrap().port();
    client
        .send_to(&request.to_vec().unwrap(), server)
        .await
        .unwrap();

    let mut buf = [0u8; 4096];
    let (n, _) = tokio::time::timeout(Duration::from_secs(5), client.recv_from(&mut buf))
        .await
        .expect("timed out waiting for response")
        .unwrap();

    (Message::from_vec(&buf[..n]).unwrap(), client_port)
}

#[tokio::test]
async fn test_udp_query_gets_synthesized_reply() {
    let handler = helpers::responder(helpers::settings(
        &["192.168.1.1", "192.168.2.1", "192.168.2.2", "192.168.3.2"],
        &[],
    ));
    let server = start_udp_server(handler).await;
    let request = helpers::query_message(1001, "foo.example.org.", RecordType::A);

    let (response, client_port) = udp_exchange(server, &request).await;

    assert_eq!(response.id(), 1001);
    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert!(response.authoritative());
    assert_eq!(response.answers().len(), 4);
    assert!(response
        .answers()
        .iter()
        .all(|rr| rr.record_type() == RecordType::A));

    let srv = response
        .additionals()
        .iter()
        .find(|rr| rr.record_type() == RecordType::SRV)
        .expect("SRV record in additional section");
    assert_eq!(srv.name().to_ascii(), "_udp.foo.example.org.");
    match srv.data() {
        RData::SRV(srv) => assert_eq!(srv.port(), client_port),
        other => panic!("expected SRV, got {:?}", other),
    }
}

#[tokio::test]
async fn test_udp_ipv6_query_gets_aaaa_reply() {
    let socket = match UdpSocket::bind("[::1]:0").await {
        Ok(socket) => socket,
        Err(e) => {
            eprintln!("skipping: IPv6 loopback unavailable: {}", e);
            return;
        }
    };
    let handler = helpers::responder(helpers::settings(
        &["192.168.1.1"],
        &["2001:db8::1", "2001:db8::2"],
    ));
    let server = serve_udp(socket, handler);
    let request = helpers::query_message(1005, "foo.example.org.", RecordType::AAAA);

    let (response, client_port) = udp_exchange(server, &request).await;

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert!(response.authoritative());
    assert_eq!(response.answers().len(), 2);
    assert!(response
        .answers()
        .iter()
        .all(|rr| rr.record_type() == RecordType::AAAA));
    assert!(response
        .additionals()
        .iter()
        .all(|rr| rr.record_type() != RecordType::A));

    let srv = response
        .additionals()
        .iter()
        .find(|rr| rr.record_type() == RecordType::SRV)
        .expect("SRV record in additional section");
    assert_eq!(srv.name().to_ascii(), "_udp.foo.example.org.");
    match srv.data() {
        RData::SRV(srv) => assert_eq!(srv.port(), client_port),
        other => panic!("expected SRV, got {:?}", other),
    }
}

#[tokio::test]
async fn test_overlong_service_name_is_servfail() {
    let handler = helpers::responder(helpers::settings(&["10.0.0.1"], &[]));
    let server = start_udp_server(handler).await;
    let name = format!(
        "{}.{}.{}.{}.",
        "a".repeat(63),
        "a".repeat(63),
        "a".repeat(63),
        "b".repeat(58)
    );
    let request = helpers::query_message(1006, &name, RecordType::A);

    let (response, _) = udp_exchange(server, &request).await;

    assert_eq!(response.response_code(), ResponseCode::ServFail);
    assert!(response.answers().is_empty());
}

#[tokio::test]
async fn test_ipv4_client_with_ipv6_only_pool_is_refused() {
    let handler = helpers::responder(helpers::settings(&[], &["2001:db8::1"]));
    let server = start_udp_server(handler).await;
    let request = helpers::query_message(1002, "foo.example.org.", RecordType::A);

    let (response, _) = udp_exchange(server, &request).await;

    assert_eq!(response.response_code(), ResponseCode::Refused);
    assert!(response.answers().is_empty());
    assert!(response.additionals().is_empty());
}

#[tokio::test]
async fn test_forward_without_next_is_servfail() {
    let handler = helpers::responder(
        helpers::settings(&["10.0.0.1"], &[]).with_chain(ChainMode::Forward),
    );
    let server = start_udp_server(handler).await;
    let request = helpers::query_message(1003, "foo.example.org.", RecordType::A);

    let (response, _) = udp_exchange(server, &request).await;

    assert_eq!(response.response_code(), ResponseCode::ServFail);
}

#[tokio::test]
async fn test_tcp_query_reports_tcp_service() {
    let handler = helpers::responder(helpers::settings(&["10.0.0.1"], &[]));
    let server = start_tcp_server(handler).await;
    let request = helpers::query_message(1004, "bar.example.org.", RecordType::A);
    let bytes = request.to_vec().unwrap();

    let mut stream = TcpStream::connect(server).await.unwrap();
    let client_port = stream.local_addr().unwrap().port();
    stream
        .write_all(&(bytes.len() as u16).to_be_bytes())
        .await
        .unwrap();
    stream.write_all(&bytes).await.unwrap();

    let mut len = [0u8; 2];
    tokio::time::timeout(Duration::from_secs(5), stream.read_exact(&mut len))
        .await
        .expect("timed out waiting for response")
        .unwrap();
    let mut buf = vec![0u8; u16::from_be_bytes(len) as usize];
    stream.read_exact(&mut buf).await.unwrap();
    let response = Message::from_vec(&buf).unwrap();

    assert_eq!(response.id(), 1004);
    assert_eq!(response.answers().len(), 1);
    let srv = response.additionals().last().unwrap();
    assert_eq!(srv.name().to_ascii(), "_tcp.bar.example.org.");
    match srv.data() {
        RData::SRV(srv) => assert_eq!(srv.port(), client_port),
        other => panic!("expected SRV, got {:?}", other),
    }
}

#[test]
fn test_error_codes() {
    assert_eq!(
        SynthRequestHandler::response_code_for(&DomainError::UnsupportedFamily("x".into())),
        ResponseCode::Refused
    );
    assert_eq!(
        SynthRequestHandler::response_code_for(&DomainError::NoNextHandler),
        ResponseCode::ServFail
    );
    assert_eq!(
        SynthRequestHandler::response_code_for(&DomainError::InvalidAddress("x".into())),
        ResponseCode::ServFail
    );
    assert_eq!(
        SynthRequestHandler::response_code_for(&DomainError::ServiceNameTooLong("x".into())),
        ResponseCode::ServFail
    );
    assert_eq!(
        SynthRequestHandler::response_code_for(&DomainError::InvalidDomainName("x".into())),
        ResponseCode::FormErr
    );
}
