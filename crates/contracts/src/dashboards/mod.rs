pub mod d100_revenue;
