use num_bigint::BigUint;
use num_traits::Zero;
use srp_core::crypto::random_biguint;
use srp_core::environment::SrpEnvironment;
use srp_core::types::SrpError;
use srp_server::{parse_client_hello, ServerPhase, SrpServer};

const IDENTITY: &[u8] = b"alice";
const PASSWORD: &[u8] = b"correct horse battery staple";

fn valid_a_pub(env: &SrpEnvironment) -> BigUint {
    let field = env.field();
    let a = random_biguint(field.bytes * 8);
    field.g.modpow(&a, &field.n)
}

#[test]
fn construction_derives_session_up_front() {
    let env = SrpEnvironment::new(1024).unwrap();
    let verifier = env.verifier(IDENTITY, PASSWORD);
    let server = SrpServer::new(&env, &verifier, &valid_a_pub(&env)).unwrap();

    assert_eq!(server.phase(), ServerPhase::Ready);
    assert_eq!(server.raw_key().unwrap().len(), 32);
}

#[test]
fn construction_rejects_degenerate_a() {
    let env = SrpEnvironment::new(1024).unwrap();
    let verifier = env.verifier(IDENTITY, PASSWORD);
    let n = &env.field().n;

    for a_pub in [BigUint::zero(), n.clone(), n * 5u32] {
        assert_eq!(
            SrpServer::new(&env, &verifier, &a_pub).unwrap_err(),
            SrpError::InvalidClientPublicKey
        );
    }
}

#[test]
fn credentials_carry_fixed_width_salt() {
    let env = SrpEnvironment::new(1024).unwrap();
    let verifier = env.verifier(IDENTITY, PASSWORD);
    let mut server = SrpServer::new(&env, &verifier, &valid_a_pub(&env)).unwrap();

    let hello = server.credentials().unwrap();
    let fields: Vec<&str> = hello.split(':').collect();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].len(), 2 * 128);
    assert_eq!(fields[0], hex::encode(verifier.salt()));
    assert!(fields[1].len() <= 2 * 128);
    assert_eq!(server.phase(), ServerPhase::AwaitingProof);
}

#[test]
fn wrong_proof_fails_closed_and_destroys_key_material() {
    let env = SrpEnvironment::new(1024).unwrap();
    let verifier = env.verifier(IDENTITY, PASSWORD);
    let mut server = SrpServer::new(&env, &verifier, &valid_a_pub(&env)).unwrap();
    server.credentials().unwrap();

    let (reply, ok) = server.client_ok(&"ab".repeat(32));
    assert!(!ok);
    assert!(reply.is_empty());
    assert_eq!(server.phase(), ServerPhase::Failed);
    assert_eq!(server.raw_key().unwrap_err(), SrpError::InvalidState);

    // re-invoking never yields the proof
    let (reply, ok) = server.client_ok(&"ab".repeat(32));
    assert!(!ok && reply.is_empty());
}

#[test]
fn proof_check_before_credentials_fails_closed() {
    let env = SrpEnvironment::new(1024).unwrap();
    let verifier = env.verifier(IDENTITY, PASSWORD);
    let mut server = SrpServer::new(&env, &verifier, &valid_a_pub(&env)).unwrap();

    let (reply, ok) = server.client_ok("00");
    assert!(!ok && reply.is_empty());
}

#[test]
fn display_reports_public_parameters_only() {
    let env = SrpEnvironment::new(1024).unwrap();
    let verifier = env.verifier(IDENTITY, PASSWORD);
    let server = SrpServer::new(&env, &verifier, &valid_a_pub(&env)).unwrap();

    let shown = server.to_string();
    assert!(shown.contains("<server>"));
    assert!(shown.contains(&hex::encode(verifier.identity())));
    assert!(!shown.contains(&hex::encode(server.raw_key().unwrap())));
}

#[test]
fn parse_client_hello_reexport_round_trips() {
    let identity = vec![0xab, 0xcd];
    let a_pub = BigUint::from(0x1234u32);
    let hello = format!("{}:{}", hex::encode(&identity), "1234");
    let (i, a) = parse_client_hello(&hello).unwrap();
    assert_eq!(i, identity);
    assert_eq!(a, a_pub);
}

#[test]
fn fresh_sessions_use_fresh_ephemerals() {
    let env = SrpEnvironment::new(1024).unwrap();
    let verifier = env.verifier(IDENTITY, PASSWORD);
    let a_pub = valid_a_pub(&env);

    let mut first = SrpServer::new(&env, &verifier, &a_pub).unwrap();
    let mut second = SrpServer::new(&env, &verifier, &a_pub).unwrap();
    assert_ne!(first.credentials().unwrap(), second.credentials().unwrap());
}
