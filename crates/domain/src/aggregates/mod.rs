//! Guarded aggregates - value objects that own one piece of numeric state
//!
//! Each aggregate:
//! - Validates every constructor argument, or returns no value at all
//! - Keeps its fields private and exposes read-only accessors
//! - Mutates exactly one field per operation, after all checks have passed
//!
//! # Guarded mutation
//!
//! | Aggregate | Operation | Sign check | Bound check |
//! |-----------|-----------|------------|-------------|
//! | `Car` | `drive` | `>= 0` | - |
//! | `BankAccount` | `deposit` | `> 0` | - |
//! | `BankAccount` | `withdraw` | `> 0` | `amount <= balance` |
//! | `MusicPlayer` | `play_music` | `> 0` | `duration <= current_battery` |
//! | `MusicPlayer` | `recharge` | `> 0` | `current_battery + hours <= battery_life` |

pub mod bank_account;
pub mod car;
pub mod music_player;

pub use bank_account::BankAccount;
pub use car::Car;
pub use music_player::MusicPlayer;
