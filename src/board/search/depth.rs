use super::super::{Board, Color};
use super::constants::{MAX_DEPTH, MIN_DEPTH};

impl Board {
    /// Adaptive search depth: shallower when both sides have many legal
    /// moves, deeper in sparse endgames. Always within 3..=10.
    pub fn search_depth(&mut self) -> u32 {
        let white_points = f64::from(self.material_points(Color::White));
        let black_points = f64::from(self.material_points(Color::Black));
        let floor = (white_points * black_points).sqrt().min(10.0);

        let white_moves = self.legal_moves(Color::White).len() as f64;
        let black_moves = self.legal_moves(Color::Black).len() as f64;
        let branching = (floor.max(white_moves) * floor.max(black_moves)).sqrt();

        let depth = (10.0 - 7.0 / 20.0 * branching).round();
        depth.clamp(f64::from(MIN_DEPTH), f64::from(MAX_DEPTH)) as u32
    }
}
