pub mod projection;
pub mod game_vis2d;
