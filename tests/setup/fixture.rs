use litesvm::LiteSVM;
use solana_sdk::{
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use todo_client::TODO_ID;
use utils::Utils;

use crate::setup::test_data::*;
use crate::setup::Accounts;
use crate::setup::Instructions;

pub struct TestFixture {
    pub svm: LiteSVM,
    pub program_id: Pubkey,

    // Keypairs for testing
    pub owner: Keypair,
    pub intruder: Keypair,
}

impl TestFixture {
    pub fn new() -> Self {
        let mut svm = LiteSVM::new();

        let program_id = svm.deploy_program_from_id(TODO_ID, TODO_SO_PATH);

        let owner = Keypair::new();
        svm.airdrop(&owner.pubkey(), 10 * LAMPORTS_PER_SOL)
            .expect("Failed to fund owner");

        let intruder = Keypair::new();
        svm.airdrop(&intruder.pubkey(), 10 * LAMPORTS_PER_SOL)
            .expect("Failed to fund intruder");

        Self {
            svm,
            program_id,
            owner,
            intruder,
        }
    }

    pub fn create_keypair(&mut self) -> Keypair {
        let keypair = Keypair::new();
        self.svm
            .airdrop(&keypair.pubkey(), LAMPORTS_PER_SOL * 10)
            .expect("Failed to fund keypair");
        keypair
    }

    pub fn with_initialize_profile(mut self) -> Self {
        let owner = self.owner.insecure_clone();
        let result = self.initialize_profile(&owner);
        assert!(result.is_ok(), "Failed to initialize profile");
        self
    }

    pub fn with_add_task(mut self) -> Self {
        let owner = self.owner.insecure_clone();
        let result = self.add_task(&owner, DEFAULT_TASK_CONTENT);
        assert!(result.is_ok(), "Failed to add task");
        self
    }

    pub fn with_tasks(mut self, count: u64) -> Self {
        let owner = self.owner.insecure_clone();
        for i in 0..count {
            let result = self.add_task(&owner, &format!("task {i}"));
            assert!(result.is_ok(), "Failed to add task {i}");
        }
        self
    }

    pub fn with_mark_task(mut self, sequence: u64) -> Self {
        let owner = self.owner.insecure_clone();
        let result = self.mark_task(&owner, &owner.pubkey(), sequence);
        assert!(result.is_ok(), "Failed to mark task {sequence}");
        self
    }

    /// Next sequence the owner's profile will hand out.
    pub fn next_sequence(&self) -> u64 {
        self.get_profile(&self.owner.pubkey()).next_sequence
    }
}
