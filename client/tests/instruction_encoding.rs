use client::context::PortalContext;
use gif_portal_interface::{
    discriminator::DISCRIMINATOR_LEN,
    instructions::PortalInstruction,
    program,
};
use solana_address::Address;
use solana_instruction::Instruction;
use solana_sdk::signature::Keypair;

fn assert_matches_specs(instruction: &Instruction, portal_instruction: PortalInstruction) {
    let specs = portal_instruction.account_specs();
    assert_eq!(instruction.accounts.len(), specs.len());

    for (meta, spec) in instruction.accounts.iter().zip(specs) {
        assert_eq!(meta.is_writable, spec.is_mut, "{}", spec.name);
        assert_eq!(meta.is_signer, spec.is_signer, "{}", spec.name);
    }

    assert_eq!(
        &instruction.data[..DISCRIMINATOR_LEN],
        &portal_instruction.discriminator(),
    );
}

#[test]
fn initialize_instruction_matches_interface() {
    let context = PortalContext::new(program::ID, Keypair::new());
    let user = Address::new_unique();

    let instruction = context.initialize(&user);

    assert_eq!(instruction.program_id, program::ID);
    assert_matches_specs(&instruction, PortalInstruction::Initialize);

    // Account order: base account, user, system program.
    assert_eq!(instruction.accounts[0].pubkey, context.base_address());
    assert_eq!(instruction.accounts[1].pubkey, user);
    assert_eq!(
        instruction.accounts[2].pubkey,
        solana_system_interface::program::ID
    );
    // No arguments beyond the discriminator.
    assert_eq!(instruction.data.len(), DISCRIMINATOR_LEN);
}

#[test]
fn add_gif_instruction_matches_interface() {
    let context = PortalContext::new(program::ID, Keypair::new());
    let user = Address::new_unique();
    let link = "https://media.giphy.com/media/abc/giphy.gif";

    let instruction = context.add_gif(&user, link);

    assert_eq!(instruction.program_id, program::ID);
    assert_matches_specs(&instruction, PortalInstruction::AddGif);

    assert_eq!(instruction.accounts[0].pubkey, context.base_address());
    assert_eq!(instruction.accounts[1].pubkey, user);

    // The argument is the Borsh-encoded link: u32 LE length then the bytes.
    let args = &instruction.data[DISCRIMINATOR_LEN..];
    assert_eq!(&args[..4], &(link.len() as u32).to_le_bytes());
    assert_eq!(&args[4..], link.as_bytes());
}

#[test]
fn submitted_text_is_passed_through_verbatim() {
    let context = PortalContext::new(program::ID, Keypair::new());
    let user = Address::new_unique();
    // Whatever the user typed goes on the wire untouched, trailing spaces included.
    let link = "http://example.com/a.gif ";

    let instruction = context.add_gif(&user, link);
    let args = &instruction.data[DISCRIMINATOR_LEN..];
    assert_eq!(&args[4..], link.as_bytes());
}
