use srp_client::{ClientPhase, SrpClient};
use srp_core::environment::SrpEnvironment;
use srp_core::hash::HashAlgorithm;
use srp_core::types::SrpError;
use srp_core::verifier::Verifier;
use srp_server::{parse_client_hello, SrpServer};

const IDENTITY: &[u8] = b"alice";
const PASSWORD: &[u8] = b"correct horse battery staple";

fn exchange(env: &SrpEnvironment, identity: &[u8], password: &[u8]) -> (SrpClient, SrpServer) {
    let verifier = env.verifier(identity, password);
    let (_key, record) = verifier.encode();

    let mut client = SrpClient::new(env, identity, password);
    let hello = client.credentials().unwrap();
    let (_i, a_pub) = parse_client_hello(&hello).unwrap();

    let (record_env, record_verifier) = Verifier::decode(&record).unwrap();
    let mut server = SrpServer::new(&record_env, &record_verifier, &a_pub).unwrap();

    let proof = client.generate(&server.credentials().unwrap()).unwrap();
    let (reply, ok) = server.client_ok(&proof);
    assert!(ok, "client proof should verify");
    assert!(client.server_ok(&reply), "server proof should verify");

    (client, server)
}

#[test]
fn full_exchange_2048_default_hash() {
    let env = SrpEnvironment::new(2048).unwrap();
    let (client, server) = exchange(&env, IDENTITY, PASSWORD);

    assert_eq!(client.raw_key().unwrap(), server.raw_key().unwrap());
    assert_eq!(client.phase(), ClientPhase::Verified);
}

#[test]
fn record_survives_transport_unchanged() {
    let env = SrpEnvironment::new(2048).unwrap();
    let verifier = env.verifier(IDENTITY, PASSWORD);
    let (_, record) = verifier.encode();

    let (_, decoded) = Verifier::decode(&record).unwrap();
    let (_, reencoded) = decoded.encode();
    assert_eq!(reencoded, record);
}

#[test]
fn full_exchange_3072_unicode_password() {
    let env = SrpEnvironment::new(3072).unwrap();
    let password = "pässwörd🔒".as_bytes();
    let (client, server) = exchange(&env, IDENTITY, password);

    assert_eq!(client.raw_key().unwrap(), server.raw_key().unwrap());
    assert_eq!(client.raw_key().unwrap().len(), 32);
}

#[test]
fn full_exchange_1024_sha512_from_record_alone() {
    let env = SrpEnvironment::with_hash(HashAlgorithm::Sha512, 1024).unwrap();
    let verifier = env.verifier(IDENTITY, PASSWORD);
    let (_, record) = verifier.encode();

    let mut client = SrpClient::new(&env, IDENTITY, PASSWORD);
    let hello = client.credentials().unwrap();
    let (_, a_pub) = parse_client_hello(&hello).unwrap();

    // the second environment comes purely from parsing the record
    let (record_env, record_verifier) = Verifier::decode(&record).unwrap();
    assert_eq!(record_env.hash(), HashAlgorithm::Sha512);
    assert_eq!(record_env.field_size(), 1024);

    let mut server = SrpServer::new(&record_env, &record_verifier, &a_pub).unwrap();
    let proof = client.generate(&server.credentials().unwrap()).unwrap();
    let (reply, ok) = server.client_ok(&proof);
    assert!(ok);
    assert!(client.server_ok(&reply));
    assert_eq!(client.raw_key().unwrap(), server.raw_key().unwrap());
    assert_eq!(client.raw_key().unwrap().len(), 64);
}

#[test]
fn hello_identity_matches_stored_record() {
    let env = SrpEnvironment::new(1024).unwrap();
    let verifier = env.verifier(IDENTITY, PASSWORD);

    let mut client = SrpClient::new(&env, IDENTITY, PASSWORD);
    let hello = client.credentials().unwrap();
    let (identity, _) = parse_client_hello(&hello).unwrap();
    assert_eq!(identity, verifier.identity());
}

#[test]
fn proof_length_matches_digest() {
    let env = SrpEnvironment::new(1024).unwrap();
    let verifier = env.verifier(IDENTITY, PASSWORD);

    let mut client = SrpClient::new(&env, IDENTITY, PASSWORD);
    let hello = client.credentials().unwrap();
    let (_, a_pub) = parse_client_hello(&hello).unwrap();
    let mut server = SrpServer::new(&env, &verifier, &a_pub).unwrap();

    let proof = client.generate(&server.credentials().unwrap()).unwrap();
    assert_eq!(proof.len(), 2 * env.hash().output_len());
    let (reply, ok) = server.client_ok(&proof);
    assert!(ok);
    assert_eq!(reply.len(), 2 * env.hash().output_len());
}

#[test]
fn client_operations_enforce_ordering() {
    let env = SrpEnvironment::new(1024).unwrap();
    let mut client = SrpClient::new(&env, IDENTITY, PASSWORD);

    assert_eq!(client.raw_key().unwrap_err(), SrpError::InvalidState);
    assert_eq!(
        client.generate("00:01").unwrap_err(),
        SrpError::InvalidState
    );

    client.credentials().unwrap();
    assert_eq!(client.credentials().unwrap_err(), SrpError::InvalidState);
}

#[test]
fn server_credentials_are_single_shot() {
    let env = SrpEnvironment::new(1024).unwrap();
    let verifier = env.verifier(IDENTITY, PASSWORD);

    let mut client = SrpClient::new(&env, IDENTITY, PASSWORD);
    let hello = client.credentials().unwrap();
    let (_, a_pub) = parse_client_hello(&hello).unwrap();
    let mut server = SrpServer::new(&env, &verifier, &a_pub).unwrap();

    server.credentials().unwrap();
    assert_eq!(server.credentials().unwrap_err(), SrpError::InvalidState);
}
