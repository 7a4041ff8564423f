//! Garden Snake — a terminal snake game.
//!
//! Pure game logic lives in [`compute`]; [`entities`] holds the data types,
//! [`grid`] the board geometry, [`scores`] the persisted score board.
//! Rendering ([`display`]) and key mapping ([`input`]) are thin layers over
//! crossterm and never touch game rules.

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod grid;
pub mod input;
pub mod scores;
