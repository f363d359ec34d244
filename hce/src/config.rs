use evaluation::scores::DEFAULT_GRAIN;

#[derive(Debug, Clone, Copy)]
pub struct HCEConfig {
    // Low bits cleared from the final score
    pub grain: u32,

    // Pawn structure
    pub doubled_pawn_penalty: i16,
    pub isolated_pawn_penalty: i16,
    pub full_pawn_set_penalty: i16, // all eight pawns still on the board
    pub pawn_ram_penalty: i16,

    // Bishops
    pub bad_bishop_penalty: i16, // per own pawn on the bishop's square color

    // Development
    pub center_pawn_unmoved_penalty: i16,
    pub undeveloped_minor_penalty: i16,
    pub early_queen_penalty: i16, // per piece still at home after the queen left
    pub castled_bonus: i16,
    pub castle_both_wings_penalty: i16,
    pub castle_kingside_only_penalty: i16,
    pub castle_queenside_only_penalty: i16,
    pub castle_lost_penalty: i16,

    // Rooks
    pub rook_seventh_rank_bonus: i16,
    pub rook_open_file_bonus: i16,
    pub rook_semi_open_file_bonus: i16,
    pub rook_behind_passer_bonus: i16,

    // King tropism
    pub tropism_knight_reach: i16,
    pub tropism_rook_factor: i16,
    pub tropism_queen_factor: i16,
}

impl Default for HCEConfig {
    fn default() -> Self {
        Self {
            grain: DEFAULT_GRAIN,

            doubled_pawn_penalty: 8,
            isolated_pawn_penalty: 15,
            full_pawn_set_penalty: 10,
            pawn_ram_penalty: 8,

            bad_bishop_penalty: 8,

            center_pawn_unmoved_penalty: 15,
            undeveloped_minor_penalty: 10,
            early_queen_penalty: 8,
            castled_bonus: 10,
            castle_both_wings_penalty: 24,
            castle_kingside_only_penalty: 40,
            castle_queenside_only_penalty: 80,
            castle_lost_penalty: 120,

            rook_seventh_rank_bonus: 22,
            rook_open_file_bonus: 10,
            rook_semi_open_file_bonus: 4,
            rook_behind_passer_bonus: 25,

            tropism_knight_reach: 5,
            tropism_rook_factor: 2,
            tropism_queen_factor: 1,
        }
    }
}
