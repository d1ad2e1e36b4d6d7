use solana_pubkey::Pubkey;

/// `3bYNLyZxCGWm1rkfN6U3UZB516axRSfxLG4BsTBxcwjt`
pub const TODO_ID: Pubkey = Pubkey::new_from_array([
    38, 144, 150, 219, 9, 233, 5, 163, 188, 152, 215, 174, 125, 243, 22, 214, 89, 250, 191, 109,
    181, 60, 216, 191, 254, 226, 125, 147, 255, 147, 52, 247,
]);

pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::new_from_array([0; 32]);
