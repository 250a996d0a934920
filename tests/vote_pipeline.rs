//! End-to-end pipeline tests with a scripted prover and an in-memory ledger.
//!
//! The mock ledger enforces the nullifier-spent rule the way the real
//! contract does: equality on the published nullifier, rejection with a
//! revert reason, no knowledge of which voter it belongs to.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ballot_witness::field::{decimal_to_field, field_to_decimal};
use ballot_witness::{
    derive_nullifier, BallotError, ElectionParameters, ElectionSession, EncodedProof,
    LedgerClient, MembershipTree, ProofPoints, ProverInput, ProverOutput, Result,
    SubmissionReceipt, VoteProver, VoterIdentity,
};
use halo2curves::bn256::Fr;

/// Prover stand-in: emits a structured proof whose public signals carry the
/// merkle root and the nullifier, the two values the ledger checks.
struct ScriptedProver;

#[async_trait]
impl VoteProver for ScriptedProver {
    async fn prove(&self, input: &ProverInput) -> Result<ProverOutput> {
        let trapdoor = decimal_to_field(&input.nullifier_trapdoor)?;
        let election_id = decimal_to_field(&input.election_id)?;
        let nullifier = derive_nullifier(trapdoor, election_id);

        Ok(ProverOutput::Structured {
            proof: ProofPoints {
                pi_a: vec!["11".into(), "12".into(), "1".into()],
                pi_b: vec![
                    vec!["21".into(), "22".into()],
                    vec!["23".into(), "24".into()],
                    vec!["1".into(), "0".into()],
                ],
                pi_c: vec!["31".into(), "32".into(), "1".into()],
            },
            public_signals: vec![
                input.merkle_root.clone(),
                field_to_decimal(nullifier),
                input.commitment.clone(),
            ],
        })
    }
}

/// Prover stand-in that emits the pre-serialized calldata variant
struct CalldataProver;

#[async_trait]
impl VoteProver for CalldataProver {
    async fn prove(&self, input: &ProverInput) -> Result<ProverOutput> {
        let trapdoor = decimal_to_field(&input.nullifier_trapdoor)?;
        let election_id = decimal_to_field(&input.election_id)?;
        let nullifier = derive_nullifier(trapdoor, election_id);

        Ok(ProverOutput::Calldata(format!(
            r#"["0x1","0x2"],[["0x3","0x4"],["0x5","0x6"]],["0x7","0x8"],["{}","{}"]"#,
            input.merkle_root,
            field_to_decimal(nullifier),
        )))
    }
}

/// Prover stand-in that always fails
struct BrokenProver;

#[async_trait]
impl VoteProver for BrokenProver {
    async fn prove(&self, _input: &ProverInput) -> Result<ProverOutput> {
        Err(BallotError::proof_generation(
            "constraint system unsatisfied",
        ))
    }
}

/// In-memory ledger with a nullifier-spent set
struct MockLedger {
    params: ElectionParameters,
    spent: Mutex<HashSet<String>>,
    submissions: Mutex<Vec<EncodedProof>>,
}

impl MockLedger {
    fn new(params: ElectionParameters) -> Self {
        Self {
            params,
            spent: Mutex::new(HashSet::new()),
            submissions: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LedgerClient for &MockLedger {
    async fn election_parameters(&self) -> Result<ElectionParameters> {
        Ok(self.params)
    }

    async fn submit_vote(&self, proof: &EncodedProof) -> Result<SubmissionReceipt> {
        // Signal layout per the scripted provers: [root, nullifier, ...]
        let nullifier = proof
            .public_signals
            .get(1)
            .ok_or_else(|| BallotError::submission("missing nullifier signal"))?
            .to_string();

        let mut spent = self.spent.lock().unwrap();
        if !spent.insert(nullifier) {
            return Err(BallotError::submission(
                "execution reverted: nullifier already spent",
            ));
        }

        let mut submissions = self.submissions.lock().unwrap();
        submissions.push(proof.clone());
        Ok(SubmissionReceipt {
            transaction_id: format!("0xtx{:04}", submissions.len()),
            gas_used: 231_417,
            confirmed: true,
        })
    }
}

fn enrollment(n: u64) -> (Vec<VoterIdentity>, Arc<MembershipTree>) {
    let identities: Vec<VoterIdentity> = (1..=n)
        .map(|i| VoterIdentity::new(Fr::from(1000 + i), Fr::from(2000 + i)))
        .collect();
    let secrets: Vec<Fr> = identities.iter().map(|id| id.secret).collect();
    let tree = Arc::new(MembershipTree::build(&secrets, 2).unwrap());
    (identities, tree)
}

fn params_for(tree: &MembershipTree) -> ElectionParameters {
    ElectionParameters {
        election_id: 42,
        merkle_root: tree.root(),
        num_candidates: 4,
    }
}

#[tokio::test]
async fn cast_vote_end_to_end() {
    let (identities, tree) = enrollment(4);
    let ledger = MockLedger::new(params_for(&tree));

    let session = ElectionSession::new(
        ScriptedProver,
        &ledger,
        identities[1].clone(),
        Arc::clone(&tree),
    );
    let receipt = session.cast_vote(1, 3).await.unwrap();

    assert!(receipt.confirmed);
    assert_eq!(receipt.transaction_id, "0xtx0001");

    let submissions = ledger.submissions.lock().unwrap();
    assert_eq!(submissions.len(), 1);
    let proof = &submissions[0];
    // Structured pi_b pairs arrive swapped into contract order
    assert_eq!(proof.b[0][0].to_string(), "22");
    assert_eq!(proof.b[0][1].to_string(), "21");
    assert_eq!(proof.commitment.len(), 66);
    assert!(proof.commitment.starts_with("0x"));
    // First public signal is the root the tree published
    assert_eq!(
        proof.public_signals[0],
        field_to_decimal(tree.root()).parse().unwrap()
    );
}

#[tokio::test]
async fn calldata_prover_variant_also_submits() {
    let (identities, tree) = enrollment(4);
    let ledger = MockLedger::new(params_for(&tree));

    let session = ElectionSession::new(
        CalldataProver,
        &ledger,
        identities[0].clone(),
        Arc::clone(&tree),
    );
    let receipt = session.cast_vote(0, 1).await.unwrap();
    assert!(receipt.confirmed);

    let submissions = ledger.submissions.lock().unwrap();
    assert_eq!(submissions[0].a[0].to_string(), "1");
    assert_eq!(submissions[0].public_signals.len(), 2);
}

#[tokio::test]
async fn second_submission_with_same_nullifier_is_rejected() {
    let (identities, tree) = enrollment(4);
    let ledger = MockLedger::new(params_for(&tree));

    let session = ElectionSession::new(
        ScriptedProver,
        &ledger,
        identities[2].clone(),
        Arc::clone(&tree),
    );
    session.cast_vote(2, 1).await.unwrap();

    // Same voter, same election: the nullifier repeats and the ledger
    // refuses it, revert reason intact
    let err = session.cast_vote(2, 2).await.unwrap_err();
    match err {
        BallotError::Submission(reason) => assert!(reason.contains("nullifier already spent")),
        other => panic!("expected Submission error, got {:?}", other),
    }
}

#[tokio::test]
async fn distinct_voters_share_the_ledger() {
    let (identities, tree) = enrollment(4);
    let ledger = MockLedger::new(params_for(&tree));

    for (index, identity) in identities.iter().enumerate() {
        let session =
            ElectionSession::new(ScriptedProver, &ledger, identity.clone(), Arc::clone(&tree));
        session.cast_vote(index, 1).await.unwrap();
    }
    assert_eq!(ledger.submissions.lock().unwrap().len(), 4);
}

#[tokio::test]
async fn stale_snapshot_root_is_rejected_before_proving() {
    let (identities, tree) = enrollment(4);
    let mut params = params_for(&tree);
    params.merkle_root = Fr::from(999u64); // ledger published a newer root
    let ledger = MockLedger::new(params);

    let session = ElectionSession::new(
        ScriptedProver,
        &ledger,
        identities[0].clone(),
        Arc::clone(&tree),
    );
    let err = session.cast_vote(0, 1).await.unwrap_err();
    assert!(matches!(err, BallotError::Configuration(_)));
    assert!(ledger.submissions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn wrong_leaf_index_is_rejected() {
    let (identities, tree) = enrollment(4);
    let ledger = MockLedger::new(params_for(&tree));

    // Voter 0 claiming voter 3's slot
    let session = ElectionSession::new(
        ScriptedProver,
        &ledger,
        identities[0].clone(),
        Arc::clone(&tree),
    );
    let err = session.cast_vote(3, 1).await.unwrap_err();
    assert!(matches!(err, BallotError::Configuration(_)));
}

#[tokio::test]
async fn prover_failure_propagates_without_submission() {
    let (identities, tree) = enrollment(4);
    let ledger = MockLedger::new(params_for(&tree));

    let session = ElectionSession::new(
        BrokenProver,
        &ledger,
        identities[0].clone(),
        Arc::clone(&tree),
    );
    let err = session.cast_vote(0, 1).await.unwrap_err();
    match err {
        BallotError::ProofGeneration(reason) => {
            assert!(reason.contains("constraint system unsatisfied"))
        }
        other => panic!("expected ProofGeneration error, got {:?}", other),
    }
    assert!(ledger.submissions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn out_of_range_candidate_is_rejected() {
    let (identities, tree) = enrollment(4);
    let ledger = MockLedger::new(params_for(&tree));

    let session = ElectionSession::new(
        ScriptedProver,
        &ledger,
        identities[0].clone(),
        Arc::clone(&tree),
    );
    assert!(session.cast_vote(0, 5).await.is_err());
    assert!(session.cast_vote(0, 0).await.is_err());
}
